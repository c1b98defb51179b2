use dotenvy::dotenv;
use tracing::info;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("movielist=debug,tower_http=info")
            }),
        )
        .init();

    info!("Starting server...");

    let config = config::settings::AppConfig::new()?;
    let db = infrastructure::db::pool::connect_to_db(&config.database_url).await?;
    infrastructure::db::pool::init_schema(&db).await?;

    let port = config.server_port;
    let state = state::AppState::new(config, db);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
