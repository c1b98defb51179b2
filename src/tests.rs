//! End-to-end tests driving the router over in-memory SQLite.

use crate::app::create_app;
use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::{DbPool, connect_to_db, init_schema};
use crate::modules::movie::repository::MovieRepository;
use crate::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use time::macros::date;
use tower::ServiceExt;

async fn test_app() -> (Router, DbPool) {
    let config = AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
    };
    let db = connect_to_db(&config.database_url).await.unwrap();
    init_schema(&db).await.unwrap();
    let app = create_app(AppState::new(config, db.clone())).await;
    (app, db)
}

async fn seed_catalogue(db: &DbPool) {
    MovieRepository::insert(db, "Ghostbusters", date!(1984 - 06 - 08), "Comedy", 6.50)
        .await
        .unwrap();
    MovieRepository::insert(db, "Alien", date!(1979 - 05 - 25), "SciFi", 9.00)
        .await
        .unwrap();
    MovieRepository::insert(db, "Ghost", date!(1990 - 07 - 13), "Drama", 4.00)
        .await
        .unwrap();
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (status, location)
}

fn item_titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn genre_endpoint_returns_distinct_sorted_genres() {
    let (app, db) = test_app().await;
    seed_catalogue(&db).await;
    MovieRepository::insert(&db, "Spaceballs", date!(1987 - 06 - 24), "Comedy", 5.00)
        .await
        .unwrap();

    let (status, body) = get(&app, "/api/movies/genres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], serde_json::json!(["Comedy", "Drama", "SciFi"]));
}

#[tokio::test]
async fn search_endpoint_filters_and_sorts() {
    let (app, db) = test_app().await;
    seed_catalogue(&db).await;

    let (status, body) = get(&app, "/api/movies/search?searchString=Ghost").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(item_titles(&data["items"]), vec!["Ghost", "Ghostbusters"]);
    assert_eq!(data["page_index"], 1);
    assert_eq!(data["total_pages"], 1);
    assert_eq!(data["total_count"], 2);

    let (_, body) = get(&app, "/api/movies/search?sortOrder=name_desc").await;
    assert_eq!(
        item_titles(&body["data"]["items"]),
        vec!["Ghostbusters", "Ghost", "Alien"]
    );
}

#[tokio::test]
async fn lookup_endpoints_agree_and_missing_ids_are_404() {
    let (app, db) = test_app().await;
    let movie = MovieRepository::insert(&db, "Alien", date!(1979 - 05 - 25), "SciFi", 9.00)
        .await
        .unwrap();

    for route in ["detail", "edit", "delete"] {
        let (status, body) = get(&app, &format!("/api/movies/{route}?id={}", movie.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Alien");

        let (status, _) = get(&app, &format!("/api/movies/{route}?id=999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(&app, &format!("/api/movies/{route}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn listing_page_forces_page_size_and_carries_filter() {
    let (app, db) = test_app().await;
    for i in 0..12 {
        MovieRepository::insert(&db, &format!("Movie {i:02}"), date!(2000 - 01 - 01), "Drama", 1.0)
            .await
            .unwrap();
    }

    // pageSize is not even accepted by the page: five per page, always.
    let (status, body) = get(&app, "/movies?pageNumber=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"]["total_pages"], 3);
    assert_eq!(body["movies"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["genres"], serde_json::json!(["Drama"]));
    assert_eq!(body["name_sort_param"], "name_desc");

    // A fresh search resets to page one and echoes the filter back.
    let (_, body) = get(&app, "/movies?pageNumber=3&searchString=Movie%200").await;
    assert_eq!(body["movies"]["page_index"], 1);
    assert_eq!(body["current_filter"], "Movie 0");

    // Page navigation without a new search re-applies the carried filter.
    let (_, body) = get(&app, "/movies?pageNumber=2&currentFilter=Movie%200").await;
    assert_eq!(body["movies"]["page_index"], 2);
    assert_eq!(body["movies"]["total_count"], 10);
}

#[tokio::test]
async fn create_form_inserts_and_redirects_to_listing() {
    let (app, _db) = test_app().await;

    let (status, location) = post_form(
        &app,
        "/movies",
        "title=Alien&release_date=1979-05-25&genre=SciFi&price=9.00",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/movies"));

    let (_, body) = get(&app, "/api/movies/search").await;
    assert_eq!(item_titles(&body["data"]["items"]), vec!["Alien"]);
}

#[tokio::test]
async fn create_with_empty_title_is_rejected_and_nothing_is_written() {
    let (app, _db) = test_app().await;

    let (status, _) = post_form(
        &app,
        "/movies",
        "title=&release_date=2001-01-01&genre=Drama&price=3.00",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = get(&app, "/api/movies/search").await;
    assert_eq!(body["data"]["total_count"], 0);
}

#[tokio::test]
async fn edit_flow_round_trips_the_row_version() {
    let (app, db) = test_app().await;
    let movie = MovieRepository::insert(&db, "Alien", date!(1979 - 05 - 25), "SciFi", 9.00)
        .await
        .unwrap();

    let (_, fetched) = get(&app, &format!("/api/movies/edit?id={}", movie.id)).await;
    let version = fetched["data"]["row_version"].as_i64().unwrap();

    let form = format!(
        "id={}&row_version={version}&title=Aliens&release_date=1986-07-18&genre=SciFi&price=11.00",
        movie.id
    );
    let (status, location) = post_form(&app, &format!("/movies/{}/edit", movie.id), &form).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/movies"));

    // Replaying the same form with the now-stale version conflicts.
    let (status, _) = post_form(&app, &format!("/movies/{}/edit", movie.id), &form).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get(&app, &format!("/movies/{}", movie.id)).await;
    assert_eq!(body["title"], "Aliens");
    assert_eq!(body["row_version"], version + 1);
}

#[tokio::test]
async fn edit_with_mismatched_ids_is_404() {
    let (app, db) = test_app().await;
    let movie = MovieRepository::insert(&db, "Alien", date!(1979 - 05 - 25), "SciFi", 9.00)
        .await
        .unwrap();

    let form = format!(
        "id={}&row_version=1&title=Aliens&release_date=1986-07-18&genre=SciFi&price=11.00",
        movie.id
    );
    let (status, _) = post_form(&app, &format!("/movies/{}/edit", movie.id + 1), &form).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_flow_confirms_then_removes() {
    let (app, db) = test_app().await;
    seed_catalogue(&db).await;
    let alien_id = MovieRepository::page(
        &db,
        &Default::default(),
        crate::modules::movie::repository::TitleSort::Ascending,
        5,
        0,
    )
    .await
    .unwrap()[0]
        .id;

    let (status, body) = get(&app, &format!("/movies/{alien_id}/delete")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Alien");

    let (status, location) = post_form(&app, &format!("/movies/{alien_id}/delete"), "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/movies"));

    // Deleting the same id again is a no-op, and the listing is unchanged.
    let (status, _) = post_form(&app, &format!("/movies/{alien_id}/delete"), "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/api/movies/search").await;
    assert_eq!(item_titles(&body["data"]["items"]), vec!["Ghost", "Ghostbusters"]);
}
