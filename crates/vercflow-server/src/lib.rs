pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Records
        .route("/api/records", get(routes::records::list_records))
        .route("/api/records", post(routes::records::create_record))
        .route("/api/records/{id}", get(routes::records::get_record))
        .route("/api/records/{id}", patch(routes::records::move_record))
        .route(
            "/api/records/{id}/classify",
            post(routes::records::classify_record),
        )
        .route(
            "/api/records/{id}/priority",
            post(routes::records::prioritize_record),
        )
        .route(
            "/api/records/{id}/advance",
            post(routes::records::advance_record),
        )
        // Activities (conversion)
        .route("/api/activities", get(routes::activities::list_activities))
        .route("/api/activities", post(routes::activities::convert_record))
        // Board
        .route("/api/board", get(routes::board::get_board))
        // Reference data
        .route("/api/projects", get(routes::projects::list_projects))
        .route("/api/projects", post(routes::projects::create_project))
        .route(
            "/api/professionals",
            get(routes::professionals::list_professionals),
        )
        .route(
            "/api/professionals",
            post(routes::professionals::create_professional),
        )
        // Config
        .route("/api/config", get(routes::config::get_config))
        // Init
        .route("/api/init", post(routes::init::init_workspace))
        .layer(cors)
        .with_state(app_state)
}

/// Start the vercflow API server.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = build_router(root);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("vercflow API server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the vercflow API server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(root: PathBuf, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("vercflow API server listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
