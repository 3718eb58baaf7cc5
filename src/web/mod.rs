pub mod activities;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::Catalog;

pub(crate) const LANDING_PAGE: &str = "/static/index.html";

/// Shared server state. Every registration runs under the single catalog
/// lock, which keeps the capacity and uniqueness checks atomic with the
/// mutation they guard.
#[derive(Clone)]
pub(crate) struct AppState {
    catalog: Arc<Mutex<Catalog>>,
}

impl AppState {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    pub(crate) fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub(crate) fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/activities", get(activities::list_handler))
        .route(
            "/activities/{activity_name}/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(activities::unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(catalog: Catalog, addr: &str, static_dir: &Path) -> Result<()> {
    let app = router(AppState::new(catalog), static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Activities API listening on http://{}", addr);
    info!("Serving static files from {}", static_dir.display());
    axum::serve(listener, app).await?;
    Ok(())
}
