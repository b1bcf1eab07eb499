//! 検索ビューコンポーネント

use leptos::*;

use crate::components::MovieCard;
use crate::models::{MovieSummary, SearchOutcome};
use crate::utils::log_trace::{log_error, log_info, log_warn};
use crate::utils::omdb;

/// 検索フォームと結果一覧
///
/// 1回の検索は「カード一覧」「結果なし通知」「エラー通知」の
/// いずれかちょうど1つを表示する
#[component]
pub fn SearchView() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (results, set_results) = create_signal(Vec::<MovieSummary>::new());
    let (searching, set_searching) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<String>);
    let (error_msg, set_error_msg) = create_signal(None::<String>);

    let run_search = move |raw: String| {
        let q = raw.trim().to_string();
        if q.is_empty() {
            return;
        }
        // 検索欄は即クリア
        set_query.set(String::new());
        spawn_local(async move {
            set_searching.set(true);
            set_notice.set(None);
            set_error_msg.set(None);
            match omdb::search_movies(&q).await {
                Ok(SearchOutcome::Hits(movies)) => {
                    log_info("search", &format!("「{}」: {}件ヒット", q, movies.len()));
                    set_results.set(movies);
                }
                Ok(SearchOutcome::Empty(reason)) => {
                    match reason {
                        Some(reason) => {
                            log_warn("search", &format!("「{}」: ヒットなし ({})", q, reason))
                        }
                        None => log_warn("search", &format!("「{}」: ヒットなし", q)),
                    }
                    set_results.set(Vec::new());
                    set_notice.set(Some(
                        "検索結果がありませんでした。別のキーワードをお試しください。".to_string(),
                    ));
                }
                Err(e) => {
                    log_error("search", &format!("「{}」: {}", q, e));
                    set_results.set(Vec::new());
                    set_error_msg.set(Some(
                        "検索に失敗しました。しばらくしてからもう一度お試しください。".to_string(),
                    ));
                }
            }
            set_searching.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search(query.get());
    };

    view! {
        <div class="search-view">
            <h2>"映画検索"</h2>

            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="映画タイトルで検索"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || searching.get()>
                    {move || if searching.get() { "検索中..." } else { "検索" }}
                </button>
            </form>

            {move || error_msg.get().map(|e| view! { <p class="status error">{e}</p> })}
            {move || notice.get().map(|n| view! { <p class="no-results">{n}</p> })}

            <div class="movie-results">
                {move || results.get().into_iter().map(|movie| view! {
                    <MovieCard movie=movie />
                }).collect_view()}
            </div>
        </div>
    }
}
