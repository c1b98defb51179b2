use super::dto::{IdQuery, MovieQuery};
use super::model::Movie;
use super::service::MovieService;
use crate::common::error::AppError;
use crate::common::pagination::PaginatedList;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Distinct genres across the catalogue
#[utoipa::path(
    get,
    path = "/api/movies/genres",
    responses(
        (status = 200, description = "Ordered list of distinct genres", body = ApiResponse<Vec<String>>)
    ),
    tag = "Movies"
)]
pub async fn get_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let genres = MovieService::genres(&state.db).await?;
    Ok(ApiSuccess(
        ApiResponse::success(genres, "Genres retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Filter, sort, and paginate the catalogue
#[utoipa::path(
    get,
    path = "/api/movies/search",
    params(MovieQuery),
    responses(
        (status = 200, description = "One page of matching movies", body = ApiResponse<PaginatedList<Movie>>)
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Result<impl IntoResponse, AppError> {
    let movies = MovieService::search(&state.db, query).await?;
    Ok(ApiSuccess(
        ApiResponse::success(movies, "Movies retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Movie detail lookup
#[utoipa::path(
    get,
    path = "/api/movies/detail",
    params(IdQuery),
    responses(
        (status = 200, description = "Movie detail", body = ApiResponse<Movie>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn detail_movie(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let movie = MovieService::find(&state.db, query.id).await?;
    Ok(ApiSuccess(
        ApiResponse::success(movie, "Movie retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Read-only fetch used to populate the edit form
#[utoipa::path(
    get,
    path = "/api/movies/edit",
    params(IdQuery),
    responses(
        (status = 200, description = "Movie to edit", body = ApiResponse<Movie>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn edit_movie(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let movie = MovieService::find(&state.db, query.id).await?;
    Ok(ApiSuccess(
        ApiResponse::success(movie, "Movie retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Read-only fetch used to populate the delete confirmation
#[utoipa::path(
    get,
    path = "/api/movies/delete",
    params(IdQuery),
    responses(
        (status = 200, description = "Movie pending deletion", body = ApiResponse<Movie>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let movie = MovieService::find(&state.db, query.id).await?;
    Ok(ApiSuccess(
        ApiResponse::success(movie, "Movie retrieved successfully"),
        StatusCode::OK,
    ))
}
