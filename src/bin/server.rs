// Site server binary
//
// Usage: cargo run --bin server
// Configuration comes from the environment, see `lit_site::config`.

use lit_site::contact::mailer_from_settings;
use lit_site::{create_router, storage, AppState, Settings};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lit_site::init_tracing();

    tracing::info!("Starting site server...");

    let settings = Settings::from_env()?;
    settings.log_summary();

    let db = storage::init_db(&settings.database_url).await?;
    let mailer = mailer_from_settings(&settings.mail)?;

    let port = settings.port;
    let state = AppState::new(db, mailer, settings);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
