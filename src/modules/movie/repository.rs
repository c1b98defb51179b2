use super::model::Movie;
use crate::infrastructure::db::pool::DbPool;
use sqlx::{QueryBuilder, Sqlite};
use time::Date;

const MOVIE_COLUMNS: &str = "id, title, release_date, genre, price, row_version";

#[derive(Debug, Default, Clone)]
pub struct MovieFilter {
    pub search: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSort {
    Ascending,
    Descending,
}

pub struct MovieRepository;

impl MovieRepository {
    /// Distinct genre values across the whole table, ascending.
    pub async fn list_genres(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT genre FROM movies ORDER BY genre ASC")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool, filter: &MovieFilter) -> Result<i64, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM movies WHERE 1 = 1");
        push_filters(&mut query, filter);
        query.build_query_scalar().fetch_one(pool).await
    }

    pub async fn page(
        pool: &DbPool,
        filter: &MovieFilter,
        sort: TitleSort,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE 1 = 1"
        ));
        push_filters(&mut query, filter);
        query.push(match sort {
            TitleSort::Ascending => " ORDER BY title ASC",
            TitleSort::Descending => " ORDER BY title DESC",
        });
        query
            .push(" LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(offset as i64);

        query.build_query_as().fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(found != 0)
    }

    pub async fn insert(
        pool: &DbPool,
        title: &str,
        release_date: Date,
        genre: &str,
        price: f64,
    ) -> Result<Movie, sqlx::Error> {
        sqlx::query_as(&format!(
            "INSERT INTO movies (title, release_date, genre, price) \
             VALUES (?, ?, ?, ?) \
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(title)
        .bind(release_date)
        .bind(genre)
        .bind(price)
        .fetch_one(pool)
        .await
    }

    /// Optimistic update: matches on both id and row version, so a stale
    /// caller updates zero rows. `None` means no row matched.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        row_version: i64,
        title: &str,
        release_date: Date,
        genre: &str,
        price: f64,
    ) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as(&format!(
            "UPDATE movies \
             SET title = ?, release_date = ?, genre = ?, price = ?, \
                 row_version = row_version + 1 \
             WHERE id = ? AND row_version = ? \
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(title)
        .bind(release_date)
        .bind(genre)
        .bind(price)
        .bind(id)
        .bind(row_version)
        .fetch_optional(pool)
        .await
    }

    /// Returns the number of rows removed. Zero is not an error.
    pub async fn delete(pool: &DbPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn push_filters(query: &mut QueryBuilder<'_, Sqlite>, filter: &MovieFilter) {
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        query
            .push(" AND title LIKE ")
            .push_bind(like_pattern(search))
            .push(" ESCAPE '\\'");
    }
    if let Some(genre) = filter.genre.as_deref().filter(|g| !g.is_empty()) {
        query.push(" AND genre = ").push_bind(genre.to_owned());
    }
}

/// Substring pattern with LIKE metacharacters escaped, so a search for
/// "100%" does not turn into a wildcard.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
