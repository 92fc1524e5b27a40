//! Axum demo for utm-tracker-seaorm
//!
//! Records a lead source for a user from the `utm_*` query parameters of a
//! landing request, using the current `tower-sessions` session key.
//!
//! # Running the demo
//!
//! 1. Point `DATABASE_URL` at a database that has a `users` table, or use a
//!    throwaway SQLite file (the demo creates `users` if it is missing):
//!    ```bash
//!    export DATABASE_URL="sqlite://demo.db?mode=rwc"
//!    ```
//! 2. Run it:
//!    ```bash
//!    cargo run --example lead_source_demo --features sqlite
//!    ```
//!
//! # Trying it out
//!
//! ```bash
//! curl -c cookies.txt "http://127.0.0.1:3000/users/1/landing?utm_medium=cpc&utm_source=google"
//! curl -b cookies.txt "http://127.0.0.1:3000/users/1/landing?utm_source=google"   # 422
//! curl "http://127.0.0.1:3000/users/1/latest"
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use dotenvy::dotenv;
use sea_orm::{ConnectOptions, ConnectionTrait, Database};
use std::{env, net::SocketAddr, time::Duration};
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utm_tracker_seaorm::migration::{Migrator, MigratorTrait};
use utm_tracker_seaorm::{Error, LeadSourceStore, UtmQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://demo.db?mode=rwc".to_string());
    info!("Connecting to database: {}", database_url);

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(5)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10));
    let db = Database::connect(opt).await?;

    db.execute_unprepared(
        "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, email TEXT NOT NULL)",
    )
    .await?;
    db.execute_unprepared(
        "INSERT INTO users (id, email) VALUES (1, 'demo@example.com') ON CONFLICT DO NOTHING",
    )
    .await?;

    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    let store = LeadSourceStore::new(db);
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let app = Router::new()
        .route("/users/{user_id}/landing", get(landing))
        .route("/users/{user_id}/latest", get(latest))
        .with_state(store)
        .layer(session_layer);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn landing(
    State(store): State<LeadSourceStore>,
    Path(user_id): Path<i64>,
    session: Session,
    Query(query): Query<UtmQuery>,
) -> Response {
    // Touch the session so later requests carry a key.
    let _ = session.insert("seen_landing", true).await;

    let params = match query.validate() {
        Ok(params) => params,
        Err(e) => return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    };

    match store.create_from_utm_params(user_id, &session, &params).await {
        Ok(lead) => (StatusCode::CREATED, lead.to_string()).into_response(),
        Err(Error::Database(e)) => {
            error!("Failed to record lead source: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

async fn latest(State(store): State<LeadSourceStore>, Path(user_id): Path<i64>) -> Response {
    match store.latest_for_user(user_id).await {
        Ok(Some(lead)) => lead.to_string().into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("Failed to load lead source: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
