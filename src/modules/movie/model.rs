use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: Date,
    pub genre: String,
    pub price: f64,
    /// Optimistic-concurrency token, bumped on every update. Edit forms
    /// round-trip it so stale writes are rejected.
    pub row_version: i64,
}
