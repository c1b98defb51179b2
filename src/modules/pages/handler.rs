use super::dto::{IndexQuery, MovieGenreView};
use crate::common::error::AppError;
use crate::modules::movie::dto::{CreateMovieRequest, MovieQuery, UpdateMovieRequest};
use crate::modules::movie::model::Movie;
use crate::modules::movie::service::{DEFAULT_PAGE_SIZE, MovieService, SORT_NAME_DESC};
use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};

/// Movie listing page. The page size is fixed at five here no matter
/// what the caller sends; a fresh search resets to the first page, while
/// plain page navigation re-applies the carried-over filter.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<MovieGenreView>, AppError> {
    let name_sort_param = match query.sort_order.as_deref() {
        None | Some("") => SORT_NAME_DESC.to_string(),
        Some(_) => String::new(),
    };

    let (page_number, search_string) = if query.search_string.is_some() {
        (Some(1), query.search_string)
    } else {
        (query.page_number, query.current_filter)
    };

    let movies = MovieService::search(
        &state.db,
        MovieQuery {
            sort_order: query.sort_order.clone(),
            page_number,
            page_size: Some(DEFAULT_PAGE_SIZE),
            movie_genre: query.movie_genre,
            search_string: search_string.clone(),
        },
    )
    .await?;
    let genres = MovieService::genres(&state.db).await?;

    Ok(Json(MovieGenreView {
        genres,
        movies,
        current_sort: query.sort_order,
        name_sort_param,
        current_filter: search_string,
    }))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::find(&state.db, Some(id)).await?;
    Ok(Json(movie))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateMovieRequest>,
) -> Result<Redirect, AppError> {
    MovieService::create(&state.db, form).await?;
    Ok(Redirect::to("/movies"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::find(&state.db, Some(id)).await?;
    Ok(Json(movie))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateMovieRequest>,
) -> Result<Redirect, AppError> {
    MovieService::update(&state.db, id, form).await?;
    Ok(Redirect::to("/movies"))
}

/// First step of the two-step delete: fetch for confirmation only.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::find(&state.db, Some(id)).await?;
    Ok(Json(movie))
}

pub async fn delete_confirmed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    MovieService::delete(&state.db, id).await?;
    Ok(Redirect::to("/movies"))
}
