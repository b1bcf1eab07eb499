//! 映画カードコンポーネント

use leptos::*;

use crate::models::{poster_url, MovieSummary};
use crate::WatchlistContext;

/// ポスター画像（OMDbの "N/A" はプレースホルダ表示）
#[component]
pub fn Poster(poster: String, title: String) -> impl IntoView {
    match poster_url(&poster).map(str::to_string) {
        Some(src) => view! {
            <img class="movie-poster" src=src alt=title />
        }
        .into_view(),
        None => view! {
            <div class="movie-poster placeholder">"ポスターなし"</div>
        }
        .into_view(),
    }
}

/// 検索結果1件分のカード
/// ポスター・タイトル・年を表示し、ウォッチリストへの追加ボタンを持つ
#[component]
pub fn MovieCard(movie: MovieSummary) -> impl IntoView {
    let ctx = use_context::<WatchlistContext>().expect("WatchlistContext not found");

    let imdb_id_state = movie.imdb_id.clone();
    let imdb_id_label = movie.imdb_id.clone();
    let imdb_id_click = movie.imdb_id.clone();
    let on_add = move |_| ctx.add(&imdb_id_click);

    view! {
        <div class="movie-card">
            <Poster poster=movie.poster.clone() title=movie.title.clone() />
            <div class="movie-info">
                <h3 class="movie-title">{movie.title.clone()}</h3>
                <p class="movie-year">{movie.year.clone()}</p>
                <button
                    class="btn"
                    disabled=move || ctx.watchlist.with(|w| w.contains(&imdb_id_state))
                    on:click=on_add
                >
                    {move || if ctx.watchlist.with(|w| w.contains(&imdb_id_label)) {
                        "追加済み"
                    } else {
                        "ウォッチリストに追加"
                    }}
                </button>
            </div>
        </div>
    }
}
