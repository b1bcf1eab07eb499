//! LocalStorageウォッチリスト永続化

use crate::watchlist::Watchlist;

const WATCHLIST_KEY: &str = "eiga_watchlist";

/// ウォッチリストを保存
pub fn save_watchlist(list: &Watchlist) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(WATCHLIST_KEY, &list.to_json());
        }
    }
}

/// 保存済みウォッチリストを読み込み
pub fn load_watchlist() -> Option<Watchlist> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(WATCHLIST_KEY).ok()??;
    Watchlist::from_json(&json)
}
