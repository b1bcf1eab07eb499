//! 映画ウォッチリストウィジェット
//!
//! OMDb APIで映画を検索し、選んだ作品をlocalStorageのウォッチリストに保存する

mod components;
mod models;
mod utils;
mod watchlist;

use leptos::*;

use components::{SearchView, WatchlistPanel};
use utils::cache;
use utils::log_trace::{self, log_error, log_info};
use utils::omdb;
use watchlist::Watchlist;

// ============================================
// アプリ状態
// ============================================

/// アプリ全体で共有するウォッチリスト状態
///
/// 追加・削除は必ずここを経由する。変更のたびに保存と
/// 更新世代のインクリメントを行う
#[derive(Clone, Copy)]
pub struct WatchlistContext {
    pub watchlist: ReadSignal<Watchlist>,
    set_watchlist: WriteSignal<Watchlist>,
    /// 更新世代。進行中の詳細取得タスクの古い結果を破棄する判定に使う
    pub refresh_epoch: ReadSignal<u32>,
    set_refresh_epoch: WriteSignal<u32>,
}

impl WatchlistContext {
    fn new(initial: Watchlist) -> Self {
        let (watchlist, set_watchlist) = create_signal(initial);
        let (refresh_epoch, set_refresh_epoch) = create_signal(0u32);
        WatchlistContext {
            watchlist,
            set_watchlist,
            refresh_epoch,
            set_refresh_epoch,
        }
    }

    /// ウォッチリストに追加（登録済みIDなら何もしない）
    pub fn add(&self, imdb_id: &str) {
        if self.watchlist.with_untracked(|w| w.contains(imdb_id)) {
            return;
        }
        let id = imdb_id.to_string();
        self.mutate(|w| {
            w.add(&id);
        });
        log_info("watchlist", &format!("{} を追加", imdb_id));
    }

    /// ウォッチリストから削除（未登録IDなら何もしない）
    pub fn remove(&self, imdb_id: &str) {
        if !self.watchlist.with_untracked(|w| w.contains(imdb_id)) {
            return;
        }
        let id = imdb_id.to_string();
        self.mutate(|w| {
            w.remove(&id);
        });
        log_info("watchlist", &format!("{} を削除", imdb_id));
    }

    /// 共有ハッシュのIDを取り込み（未登録分のみ）
    fn import_ids(&self, ids: Vec<String>) {
        let fresh: Vec<String> = self
            .watchlist
            .with_untracked(|w| ids.into_iter().filter(|id| !w.contains(id)).collect());
        if fresh.is_empty() {
            return;
        }
        self.mutate(|w| {
            for id in &fresh {
                w.add(id);
            }
        });
        log_info("watchlist", &format!("共有URLから{}件を取り込み", fresh.len()));
    }

    /// 変更を適用し、即座に保存する。
    /// 更新世代はリスト変更の通知より先に進める（通知で再生成される
    /// 取得タスクは新しい世代を拾う必要がある）
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Watchlist),
    {
        self.set_refresh_epoch.update(|e| *e = e.wrapping_add(1));
        self.set_watchlist.update(f);
        self.watchlist.with_untracked(cache::save_watchlist);
    }
}

// ============================================
// 共有URL
// ============================================

// URLハッシュから共有ウォッチリストを取得
fn get_hash_ids() -> Option<Vec<String>> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    if hash.starts_with("#watchlist=") {
        utils::decode_id_list(&hash["#watchlist=".len()..])
    } else {
        None
    }
}

// 現在のウォッチリストから共有URLを組み立て
fn make_share_url(list: &Watchlist) -> Option<String> {
    let encoded = utils::encode_id_list(list.ids())?;
    let window = web_sys::window()?;
    let location = window.location();
    let base_url = format!(
        "{}//{}{}",
        location.protocol().ok()?,
        location.host().ok()?,
        location.pathname().ok()?
    );
    Some(format!("{}#watchlist={}", base_url, encoded))
}

// ============================================
// 画面部品
// ============================================

/// APIキー設定パネル（ヘッダー内の折りたたみ）
#[component]
fn SettingsPanel() -> impl IntoView {
    let (key_input, set_key_input) = create_signal(String::new());
    let (saved_notice, set_saved_notice) = create_signal(false);
    let (has_key, set_has_key) = create_signal(omdb::get_api_key().is_some());

    let on_save = move |_| {
        let key = key_input.get().trim().to_string();
        if key.is_empty() {
            return;
        }
        omdb::save_api_key(&key);
        set_key_input.set(String::new());
        set_has_key.set(true);
        set_saved_notice.set(true);
        log_info("ui", "APIキーを保存");
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(2000).await;
            set_saved_notice.set(false);
        });
    };

    let on_clear = move |_| {
        omdb::clear_api_key();
        set_has_key.set(omdb::get_api_key().is_some());
        log_info("ui", "APIキーをクリア");
    };

    view! {
        <details class="settings">
            <summary>
                {move || if has_key.get() { "設定（APIキー登録済み）" } else { "設定（APIキー未登録）" }}
            </summary>
            <div class="settings-body">
                <label>"OMDb APIキー"</label>
                <div class="input-group">
                    <input
                        type="password"
                        placeholder="APIキーを入力"
                        prop:value=move || key_input.get()
                        on:input=move |ev| set_key_input.set(event_target_value(&ev))
                    />
                    <button on:click=on_save>
                        {move || if saved_notice.get() { "保存しました!" } else { "保存" }}
                    </button>
                    <button class="btn-secondary" on:click=on_clear>"クリア"</button>
                </div>
            </div>
        </details>
    }
}

/// 共有URL生成ボタン
#[component]
fn ShareButton() -> impl IntoView {
    let ctx = use_context::<WatchlistContext>().expect("WatchlistContext not found");
    let (copy_success, set_copy_success) = create_signal(false);
    let (share_url, set_share_url) = create_signal(None::<String>);

    let on_share = move |_| {
        match ctx.watchlist.with_untracked(make_share_url) {
            Some(url) => {
                set_share_url.set(Some(url.clone()));
                // クリップボードにコピー
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let _ = clipboard.write_text(&url);
                    set_copy_success.set(true);
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(2000).await;
                        set_copy_success.set(false);
                    });
                }
            }
            None => log_error("ui", "共有URLの生成に失敗"),
        }
    };

    view! {
        <div class="share-section">
            <button class="share-btn" on:click=on_share>
                {move || if copy_success.get() { "コピーしました!" } else { "共有URLを生成" }}
            </button>
            {move || share_url.get().map(|url| view! {
                <input type="text" class="share-url" readonly value=url />
            })}
        </div>
    }
}

/// トレースログ操作（コピー／クリア）
#[component]
fn LogButtons() -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let on_copy = move |_| {
        spawn_local(async move {
            if log_trace::copy_logs_to_clipboard_async().await.is_ok() {
                set_copied.set(true);
                gloo::timers::future::TimeoutFuture::new(2000).await;
                set_copied.set(false);
            }
        });
    };

    let on_clear = move |_| log_trace::clear_logs();

    view! {
        <div class="log-section">
            <button class="btn-secondary" on:click=on_copy>
                {move || if copied.get() { "コピーしました!" } else { "ログをコピー" }}
            </button>
            <button class="btn-secondary" on:click=on_clear>"ログをクリア"</button>
        </div>
    }
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    // URLパラメータのAPIキーを先に取り込む
    if omdb::init_api_key_from_url_params().is_some() {
        log_info("ui", "URLパラメータからAPIキーを登録");
    }

    // 保存済みウォッチリストの復元と共有ハッシュの取り込み。
    // どちらもネットワークアクセスより前に完了する
    let stored = cache::load_watchlist().unwrap_or_default();
    let ctx = WatchlistContext::new(stored);
    provide_context(ctx);
    if let Some(ids) = get_hash_ids() {
        ctx.import_ids(ids);
    }

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"映画ウォッチリスト"</h1>
                <SettingsPanel />
            </header>

            <main class="container">
                <SearchView />
                <WatchlistPanel />
            </main>

            <footer class="app-footer">
                <ShareButton />
                <LogButtons />
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
