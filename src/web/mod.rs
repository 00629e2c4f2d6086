//! HTTP surface: public pages, the contact endpoint and the admin API.

pub mod error;
pub mod filters;
pub mod handlers;
pub mod media;

pub use error::AppError;

use crate::config::Settings;
use crate::contact::Mailer;
use axum::{
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: Arc<dyn Mailer>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>, settings: Settings) -> Self {
        Self {
            db,
            mailer,
            settings: Arc::new(settings),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))

        // Public pages
        .route("/", get(handlers::pages::index))
        .route("/contact/", get(handlers::pages::contact_page))
        .route("/email-sent/", get(handlers::pages::email_sent))

        // Contact intake; GET shows the form
        .route(
            "/send-mail/",
            get(handlers::pages::contact_page).post(handlers::contact::send_mail),
        )

        // Files
        .nest_service("/static", ServeDir::new(&state.settings.static_dir))
        .nest_service("/media", ServeDir::new(&state.settings.media_dir));

    if state.settings.admin_token.is_some() {
        router = router.merge(handlers::admin::router(state.clone()));
    } else {
        tracing::info!("ADMIN_TOKEN not set, admin routes are disabled");
    }

    router
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
