use tracing_subscriber::EnvFilter;
use wordspy::{ServerConfig, ServerError, WordspyServer};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let server = WordspyServer::bind(config).await?;
    tracing::info!(addr = %server.local_addr()?, "wordspy listening");

    server.run().await
}
