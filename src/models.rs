//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// OMDb検索レスポンス用データ構造
// ============================================

/// 検索結果1件（OMDbの `?s=` レスポンスの要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
}

/// `?s=` レスポンスのエンベロープ
///
/// OMDbはヒットなし・APIキー不正なども `Response: "False"` と
/// `Error` 文字列で返す
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    #[allow(dead_code)]
    pub total_results: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// 検索結果の解釈
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// ヒットあり
    Hits(Vec<MovieSummary>),
    /// ヒットなし（APIからの理由つき）
    Empty(Option<String>),
}

impl SearchResponse {
    pub fn into_outcome(self) -> SearchOutcome {
        if self.response == "True" && !self.search.is_empty() {
            SearchOutcome::Hits(self.search)
        } else {
            SearchOutcome::Empty(self.error)
        }
    }
}

// ============================================
// OMDb詳細レスポンス用データ構造
// ============================================

/// 詳細1件（OMDbの `?i=` レスポンス）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MovieDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl MovieDetail {
    /// エンベロープを剥がす（`Response: "False"` ならErr）
    pub fn into_result(self) -> Result<MovieDetail, String> {
        if self.response == "False" {
            Err(self.error.unwrap_or_else(|| "不明なAPIエラー".to_string()))
        } else {
            Ok(self)
        }
    }
}

// ============================================
// 表示用ヘルパー
// ============================================

/// ポスターURLの正規化（OMDbは欠損を "N/A" で返す）
pub fn poster_url(poster: &str) -> Option<&str> {
    if poster.is_empty() || poster == "N/A" {
        None
    } else {
        Some(poster)
    }
}

/// "N/A" で返る任意項目の正規化
pub fn api_field(value: &Option<String>) -> Option<&str> {
    match value {
        Some(v) if !v.is_empty() && v != "N/A" => Some(v.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_hits() {
        let json = r#"{
            "Search": [
                {"Title": "The Shawshank Redemption", "Year": "1994",
                 "imdbID": "tt0111161", "Type": "movie",
                 "Poster": "https://example.com/p.jpg"}
            ],
            "totalResults": "1",
            "Response": "True"
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        match parsed.into_outcome() {
            SearchOutcome::Hits(movies) => {
                assert_eq!(movies.len(), 1);
                assert_eq!(movies[0].imdb_id, "tt0111161");
                assert_eq!(movies[0].title, "The Shawshank Redemption");
                assert_eq!(movies[0].year, "1994");
            }
            other => panic!("想定外の結果: {:?}", other),
        }
    }

    #[test]
    fn no_match_becomes_empty() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.into_outcome(),
            SearchOutcome::Empty(Some("Movie not found!".to_string()))
        );
    }

    #[test]
    fn true_without_hits_becomes_empty() {
        let json = r#"{"Response": "True", "Search": []}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_outcome(), SearchOutcome::Empty(None));
    }

    #[test]
    fn detail_envelope_ok() {
        let json = r#"{
            "Title": "The Godfather", "Year": "1972", "Genre": "Crime, Drama",
            "Runtime": "175 min", "imdbRating": "9.2", "Plot": "N/A",
            "Poster": "N/A", "imdbID": "tt0068646", "Response": "True"
        }"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        let detail = detail.into_result().unwrap();
        assert_eq!(detail.title, "The Godfather");
        assert!(poster_url(&detail.poster).is_none());
        assert_eq!(api_field(&detail.runtime), Some("175 min"));
        assert_eq!(api_field(&detail.plot), None);
    }

    #[test]
    fn detail_envelope_error() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.into_result().unwrap_err(), "Incorrect IMDb ID.");
    }

    #[test]
    fn poster_and_field_normalization() {
        assert_eq!(
            poster_url("https://example.com/p.jpg"),
            Some("https://example.com/p.jpg")
        );
        assert!(poster_url("N/A").is_none());
        assert!(poster_url("").is_none());
        assert_eq!(api_field(&Some("Crime, Drama".to_string())), Some("Crime, Drama"));
        assert_eq!(api_field(&Some("N/A".to_string())), None);
        assert_eq!(api_field(&None), None);
    }
}
