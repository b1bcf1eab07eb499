//! OMDb API連携

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{MovieDetail, SearchOutcome, SearchResponse};

const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
const API_KEY_STORAGE_KEY: &str = "eiga_watchlist_api_key";

/// APIキーを保存
pub fn save_api_key(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_KEY_STORAGE_KEY, key);
        }
    }
}

fn stored_api_key() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let key = storage.get_item(API_KEY_STORAGE_KEY).ok()??;
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// APIキーを取得（localStorage→ビルド時埋め込みの順）
pub fn get_api_key() -> Option<String> {
    stored_api_key().or_else(|| option_env!("OMDB_API_KEY").map(str::to_string))
}

/// 保存済みAPIキーをクリア
pub fn clear_api_key() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(API_KEY_STORAGE_KEY);
        }
    }
}

/// URLパラメータからAPIキーを読み込む (?apikey=xxx)
pub fn init_api_key_from_url_params() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if !search.starts_with("?apikey=") {
        return None;
    }
    let encoded = &search["?apikey=".len()..];
    let decoded = js_sys::decode_uri_component(encoded).ok()?.as_string()?;
    if decoded.is_empty() {
        return None;
    }
    save_api_key(&decoded);
    // アドレスバーからキーを消す
    let pathname = window.location().pathname().ok()?;
    let hash = window.location().hash().ok().unwrap_or_default();
    let _ = window.history().ok()?.replace_state_with_url(
        &JsValue::NULL,
        "",
        Some(&format!("{}{}", pathname, hash)),
    );
    Some(decoded)
}

fn search_url(query: &str, api_key: &str) -> String {
    let encoded = js_sys::encode_uri_component(query);
    format!("{}?s={}&apikey={}", OMDB_BASE_URL, encoded, api_key)
}

fn detail_url(imdb_id: &str, api_key: &str) -> String {
    let encoded = js_sys::encode_uri_component(imdb_id);
    format!("{}?i={}&apikey={}", OMDB_BASE_URL, encoded, api_key)
}

/// GETリクエストを投げてJSONを取得する共通処理
async fn fetch_json(url: &str) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Request作成失敗: {:?}", e))?;

    let window = web_sys::window().ok_or("windowがありません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch失敗: {:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Responseへの変換失敗")?;

    if !resp.ok() {
        return Err(format!("APIエラー: {}", resp.status()));
    }

    JsFuture::from(resp.json().map_err(|e| format!("json()失敗: {:?}", e))?)
        .await
        .map_err(|e| format!("JSON解析失敗: {:?}", e))
}

/// タイトルで映画を検索
pub async fn search_movies(query: &str) -> Result<SearchOutcome, String> {
    let api_key = get_api_key().ok_or("APIキーが設定されていません")?;
    let json = fetch_json(&search_url(query, &api_key)).await?;
    let parsed: SearchResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| format!("デシリアライズ失敗: {:?}", e))?;
    Ok(parsed.into_outcome())
}

/// IMDb IDで詳細を取得
pub async fn fetch_movie_detail(imdb_id: &str) -> Result<MovieDetail, String> {
    let api_key = get_api_key().ok_or("APIキーが設定されていません")?;
    let json = fetch_json(&detail_url(imdb_id, &api_key)).await?;
    let detail: MovieDetail =
        serde_wasm_bindgen::from_value(json).map_err(|e| format!("デシリアライズ失敗: {:?}", e))?;
    detail.into_result()
}
