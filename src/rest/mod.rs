// rest/mod.rs — HTTP server and router.
//
// Axum server binding 127.0.0.1:<port>. CORS is wide open — the API carries
// no credentials and the browser client may be served from elsewhere during
// development.
//
// Endpoints:
//   GET    /                  liveness
//   POST   /api/tasks         create
//   GET    /api/tasks         list (optional ?status= filter)
//   GET    /api/tasks/{id}    fetch one
//   PUT    /api/tasks/{id}    partial update
//   DELETE /api/tasks/{id}    delete
//   GET    /ui                embedded browser client

pub mod routes;
pub mod ui;

use anyhow::Result;
use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("127.0.0.1:{}", ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("Task API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::health::liveness))
        .route(
            "/api/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/ui", get(ui::index))
        .route("/ui/app.js", get(ui::app_js))
        .route("/ui/style.css", get(ui::style_css))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
