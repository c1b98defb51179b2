use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query string for the search endpoint. Parameter names mirror what the
/// listing page sends.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    /// `"name_desc"` sorts by title descending; anything else is ascending.
    pub sort_order: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<u32>,
    /// Exact-match genre filter.
    pub movie_genre: Option<String>,
    /// Substring match against the title.
    pub search_string: Option<String>,
}

/// Identifier carried as a query parameter by the lookup endpoints.
/// Absent id means not-found, not a routing error.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub release_date: Date,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    pub id: i64,
    pub row_version: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub release_date: Date,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}
