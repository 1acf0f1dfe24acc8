use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leave_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("LEAVE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("LEAVE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading leave configuration from {}", config_dir))?;
    tracing::info!(
        config_dir = %config_dir,
        organisation = %config.organisation().name,
        leave_types = config.config().leave_types().len(),
        holidays = config.config().holidays().len(),
        "Loaded leave configuration"
    );

    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid LEAVE_BIND_ADDR {}", bind_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Leave engine listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
