use tracing::info;

use warren::{Config, Store, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = warren::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        warren::logging::init_console_only(&config.logging.level);
    }

    info!("Warren - Anonymous Message Board Backend");

    // Connect to the document store
    let store = match Store::connect(&config.database.url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {e}");
            std::process::exit(1);
        }
    };

    // Run the web server
    let server = WebServer::new(&config.server, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
