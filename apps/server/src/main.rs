//! Shepherd Server binary.

use std::net::SocketAddr;

use consult_store::{ConsultStore, MemoryStore};
use entities::{Role, User};
use shepherd_server::{config::Config, create_app, create_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(
        summarizer = config.summarizer_configured(),
        "Starting Shepherd Server"
    );

    // Create the document store
    let store = MemoryStore::new();

    // Seed the bootstrap admin account, if configured
    if let Some(email) = &config.admin_email {
        if store.get_user_by_email(email).await?.is_none() {
            let admin = User::new("Administrator", email.clone()).with_role(Role::Admin);
            tracing::info!(admin_id = %admin.id, "Seeded admin account");
            store.create_user(admin).await?;
        }
    }

    // Create application state and router
    let state = create_state(config.clone(), store);
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
