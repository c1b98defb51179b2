use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handler::get_genres))
        .route("/search", get(handler::search_movies))
        .route("/detail", get(handler::detail_movie))
        .route("/edit", get(handler::edit_movie))
        .route("/delete", get(handler::delete_movie))
}
