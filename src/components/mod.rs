//! UIコンポーネントモジュール

pub mod movie_card;
pub mod search_view;
pub mod watchlist_panel;

pub use movie_card::{MovieCard, Poster};
pub use search_view::SearchView;
pub use watchlist_panel::WatchlistPanel;
