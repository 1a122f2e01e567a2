use std::net::SocketAddr;
use sipudes::books::factory::create_book_store;
use sipudes::catalog::controller::build_router;
use sipudes::core::controller::AppState;
use sipudes::core::domain::Configuration;
use sipudes::utils::logs::setup_tracing;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env();
    let store = create_book_store(&config)?;
    let addr: SocketAddr = std::env::var("SIPUDES_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    tracing::info!(branch = %config.branch_id, seeded = config.seed_sample_books, %addr, "catalog listening");
    let app = build_router(AppState::new(config, store));

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
