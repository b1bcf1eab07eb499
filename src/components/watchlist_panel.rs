//! ウォッチリストパネルコンポーネント

use leptos::*;

use crate::components::Poster;
use crate::models::{api_field, MovieDetail};
use crate::utils::log_trace::{log_error, log_warn};
use crate::utils::omdb;
use crate::WatchlistContext;

/// 詳細取得の進行状態
#[derive(Clone)]
enum DetailState {
    Loading,
    Loaded(MovieDetail),
    Failed(String),
}

/// ウォッチリスト全体の表示
/// リスト変更のたびに全カードを作り直し、各カードが独立に詳細を取得する
#[component]
pub fn WatchlistPanel() -> impl IntoView {
    let ctx = use_context::<WatchlistContext>().expect("WatchlistContext not found");

    view! {
        <div class="watchlist-view">
            <h2>
                "ウォッチリスト"
                <span class="count">{move || ctx.watchlist.with(|w| w.len())}</span>
            </h2>
            <div class="watchlist">
                {move || {
                    let list = ctx.watchlist.get();
                    if list.is_empty() {
                        view! {
                            <p class="watchlist-empty">
                                "ウォッチリストは空です。映画を検索して追加してください。"
                            </p>
                        }
                        .into_view()
                    } else {
                        list.ids()
                            .iter()
                            .cloned()
                            .map(|id| view! { <WatchlistCard imdb_id=id /> })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

/// ウォッチリスト1件分のカード
/// 生成時に詳細取得タスクを起動する。解決時点でリストが変わっていれば
/// 結果を破棄する（更新世代とmembershipの二重チェック）
#[component]
fn WatchlistCard(imdb_id: String) -> impl IntoView {
    let ctx = use_context::<WatchlistContext>().expect("WatchlistContext not found");
    let (state, set_state) = create_signal(DetailState::Loading);

    let id_fetch = imdb_id.clone();
    let epoch = ctx.refresh_epoch.get_untracked();
    spawn_local(async move {
        let result = omdb::fetch_movie_detail(&id_fetch).await;

        if ctx.refresh_epoch.get_untracked() != epoch
            || !ctx.watchlist.with_untracked(|w| w.contains(&id_fetch))
        {
            log_warn(
                "watchlist",
                &format!("{} の取得結果を破棄（リスト変更済み）", id_fetch),
            );
            return;
        }

        match result {
            Ok(detail) => set_state.set(DetailState::Loaded(detail)),
            Err(e) => {
                log_error("watchlist", &format!("{} の詳細取得失敗: {}", id_fetch, e));
                set_state.set(DetailState::Failed(
                    "詳細情報を取得できませんでした。しばらくしてからもう一度お試しください。"
                        .to_string(),
                ));
            }
        }
    });

    let id_remove = imdb_id.clone();
    let on_remove = move |_| ctx.remove(&id_remove);

    view! {
        <div class="movie-card">
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="movie-info">
                        <p class="loading">"読み込み中..."</p>
                    </div>
                }
                .into_view(),
                DetailState::Failed(msg) => view! {
                    <div class="movie-info">
                        <p class="no-results">{msg}</p>
                    </div>
                }
                .into_view(),
                DetailState::Loaded(detail) => {
                    let mut meta = Vec::new();
                    if let Some(runtime) = api_field(&detail.runtime) {
                        meta.push(runtime.to_string());
                    }
                    if let Some(genre) = api_field(&detail.genre) {
                        meta.push(genre.to_string());
                    }
                    if let Some(rating) = api_field(&detail.imdb_rating) {
                        meta.push(format!("IMDb {}", rating));
                    }
                    let meta_line = (!meta.is_empty()).then(|| meta.join(" / "));
                    let plot = api_field(&detail.plot).map(str::to_string);

                    view! {
                        <Poster poster=detail.poster.clone() title=detail.title.clone() />
                        <div class="movie-info">
                            <h3 class="movie-title">{detail.title.clone()}</h3>
                            <p class="movie-year">{detail.year.clone()}</p>
                            {meta_line.map(|m| view! { <p class="movie-meta">{m}</p> })}
                            {plot.map(|p| view! { <p class="movie-plot">{p}</p> })}
                        </div>
                    }
                    .into_view()
                }
            }}
            <button class="btn btn-remove" on:click=on_remove>"削除"</button>
        </div>
    }
}
