//! ウォッチリスト集合モジュール
//!
//! IMDb IDの重複しない集合。挿入順を保持し、localStorageには
//! ID配列のJSONとしてそのまま保存できる。

/// 映画IDの集合
///
/// 同じIDは1件しか持たない。保存形式を決定的にするため挿入順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    ids: Vec<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID列から復元。重複は最初の1件だけ残す
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Watchlist::default();
        for id in ids {
            list.add(&id);
        }
        list
    }

    /// 登録済みか
    pub fn contains(&self, imdb_id: &str) -> bool {
        self.ids.iter().any(|id| id == imdb_id)
    }

    /// 追加。すでに登録済みならfalseを返し、何も変更しない
    pub fn add(&mut self, imdb_id: &str) -> bool {
        if self.contains(imdb_id) {
            return false;
        }
        self.ids.push(imdb_id.to_string());
        true
    }

    /// 削除。未登録ならfalseを返し、何も変更しない
    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != imdb_id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 挿入順のID一覧
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// 保存用JSON（ID配列）
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// 保存済みJSONから復元
    pub fn from_json(json: &str) -> Option<Self> {
        let ids: Vec<String> = serde_json::from_str(json).ok()?;
        Some(Self::from_ids(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate() {
        let mut list = Watchlist::new();
        assert!(list.add("tt0111161"));
        assert!(!list.add("tt0111161"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list = Watchlist::new();
        list.add("tt0111161");
        assert!(!list.remove("tt9999999"));
        assert_eq!(list.len(), 1);
        assert!(list.remove("tt0111161"));
        assert!(list.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_contents() {
        let mut list = Watchlist::new();
        list.add("tt0111161");
        list.add("tt0068646");
        let restored = Watchlist::from_json(&list.to_json()).unwrap();
        assert_eq!(restored, list);
        assert_eq!(restored.ids(), ["tt0111161", "tt0068646"]);
    }

    #[test]
    fn restores_saved_id_pair() {
        let restored = Watchlist::from_json(r#"["tt0111161","tt0068646"]"#).unwrap();
        assert_eq!(restored.len(), 2);
        assert!(restored.contains("tt0111161"));
        assert!(restored.contains("tt0068646"));
    }

    #[test]
    fn from_ids_dedups() {
        let list = Watchlist::from_ids(vec![
            "tt0111161".to_string(),
            "tt0068646".to_string(),
            "tt0111161".to_string(),
        ]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(Watchlist::from_json("not json").is_none());
        assert!(Watchlist::from_json(r#"{"oops":1}"#).is_none());
    }
}
