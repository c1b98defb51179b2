use super::dto::{CreateMovieRequest, MovieQuery, UpdateMovieRequest};
use super::model::Movie;
use super::repository::{MovieFilter, MovieRepository, TitleSort};
use crate::common::error::AppError;
use crate::common::pagination::PaginatedList;
use crate::infrastructure::db::pool::DbPool;
use validator::Validate;

/// Sort token recognized by the search endpoint. Any other value (or no
/// value) means ascending by title.
pub const SORT_NAME_DESC: &str = "name_desc";

pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Single read/write surface shared by the JSON API and the page
/// handlers. Neither layer talks to the store on its own.
pub struct MovieService;

impl MovieService {
    pub async fn genres(db: &DbPool) -> Result<Vec<String>, AppError> {
        Ok(MovieRepository::list_genres(db).await?)
    }

    pub async fn search(db: &DbPool, query: MovieQuery) -> Result<PaginatedList<Movie>, AppError> {
        let filter = MovieFilter {
            search: query.search_string,
            genre: query.movie_genre,
        };
        let sort = if query.sort_order.as_deref() == Some(SORT_NAME_DESC) {
            TitleSort::Descending
        } else {
            TitleSort::Ascending
        };
        let page_size = match query.page_size {
            Some(size) if size >= 1 => size,
            _ => DEFAULT_PAGE_SIZE,
        };

        let total_count = MovieRepository::count(db, &filter).await? as u64;
        let total_pages = PaginatedList::<Movie>::total_pages_for(total_count, page_size);
        let page_index = PaginatedList::<Movie>::clamp_page(query.page_number, total_pages);
        let offset = u64::from(page_index - 1) * u64::from(page_size);

        let items = MovieRepository::page(db, &filter, sort, page_size, offset).await?;
        Ok(PaginatedList {
            items,
            page_index,
            total_pages,
            total_count,
        })
    }

    /// Lookup shared by the detail, edit-fetch, and delete-fetch
    /// endpoints. A missing id and an unknown id are the same outcome.
    pub async fn find(db: &DbPool, id: Option<i64>) -> Result<Movie, AppError> {
        let id = id.ok_or(AppError::NotFound)?;
        MovieRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(db: &DbPool, req: CreateMovieRequest) -> Result<Movie, AppError> {
        req.validate()?;
        let price = round_to_cents(req.price);
        let movie =
            MovieRepository::insert(db, &req.title, req.release_date, &req.genre, price).await?;
        Ok(movie)
    }

    pub async fn update(db: &DbPool, id: i64, req: UpdateMovieRequest) -> Result<Movie, AppError> {
        if id != req.id {
            return Err(AppError::NotFound);
        }
        req.validate()?;
        let price = round_to_cents(req.price);

        let updated = MovieRepository::update(
            db,
            req.id,
            req.row_version,
            &req.title,
            req.release_date,
            &req.genre,
            price,
        )
        .await?;

        match updated {
            Some(movie) => Ok(movie),
            // Zero rows matched: either the row is gone or another
            // writer bumped the version first.
            None => {
                if MovieRepository::exists(db, req.id).await? {
                    Err(AppError::Conflict)
                } else {
                    Err(AppError::NotFound)
                }
            }
        }
    }

    /// Deleting an id that no longer exists is a no-op, not an error.
    pub async fn delete(db: &DbPool, id: i64) -> Result<(), AppError> {
        MovieRepository::delete(db, id).await?;
        Ok(())
    }
}

fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
