use anyhow::Result;
use ponto::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logs are opt-in; without PONTO_DEBUG or RUST_LOG the user
    // only sees the report and the msg_* output.
    if std::env::var("PONTO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ponto=debug")))
            .init();
    }

    Cli::menu().await
}
