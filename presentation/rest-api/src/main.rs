use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod wishlist {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod contact {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod notifications {
        pub mod dto;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod cors_config;
    pub mod emailjs_config;
    pub mod error;
    pub mod notification_config;
    pub mod server_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads both catalogs, wires the session cart and wishlist, and starts the HTTP server.
///
/// - config/: environment configuration (server, CORS, catalogs, notifications, EmailJS)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
