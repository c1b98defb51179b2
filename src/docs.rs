use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::get_genres,
        crate::modules::movie::handler::search_movies,
        crate::modules::movie::handler::detail_movie,
        crate::modules::movie::handler::edit_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::movie::model::Movie,
            crate::modules::movie::dto::CreateMovieRequest,
            crate::modules::movie::dto::UpdateMovieRequest,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalogue queries")
    )
)]
pub struct ApiDoc;
