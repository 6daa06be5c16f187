use store_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env overrides, then process env)
    dotenv::dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Logging (file output in production, stdout otherwise)
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir).ok();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production().then(|| log_dir.to_str()).flatten(),
    );

    tracing::info!("Storefront server starting...");

    // 4. Initialize state (database, catalog seed)
    let state = ServerState::initialize(&config)?;

    // 5. Run the HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
