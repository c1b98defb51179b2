use crate::common::pagination::PaginatedList;
use crate::modules::movie::model::Movie;
use serde::{Deserialize, Serialize};

/// Query string accepted by the movie listing page. `current_filter`
/// carries the previous search term across page navigation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuery {
    pub sort_order: Option<String>,
    pub current_filter: Option<String>,
    pub page_number: Option<i64>,
    pub movie_genre: Option<String>,
    pub search_string: Option<String>,
}

/// View model for the listing page: the genre dropdown options, one page
/// of movies, and the echo fields the renderer needs to build sort links
/// and keep the search box populated.
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieGenreView {
    pub genres: Vec<String>,
    pub movies: PaginatedList<Movie>,
    pub current_sort: Option<String>,
    pub name_sort_param: String,
    pub current_filter: Option<String>,
}
