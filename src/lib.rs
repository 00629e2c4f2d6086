//! LIVE i TECH marketing site
//!
//! One homepage rendered from admin-editable content sections, a contact form
//! that mails submissions, and offline tools for migrating the legacy PHP
//! templates.
//!
//! - `content/`: SeaORM entities and generic repository for every section type
//! - `composer`: homepage context from the active content
//! - `contact/`: submission formatting and outbound mail
//! - `web/`: axum router, askama pages and the admin API
//! - `storage/`: connection, migrations and initial content
//! - `migrate/`: template conversion and reorganization tools

pub mod composer;
pub mod config;
pub mod contact;
pub mod content;
pub mod migrate;
pub mod storage;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use composer::{compose, PageContext};
pub use config::Settings;
pub use web::{create_router, AppState};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default log filter: info for this crate, request tracing from tower-http.
pub const DEFAULT_LOG_FILTER: &str = "lit_site=info,tower_http=debug,axum=debug,warn";

/// Install the global tracing subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
