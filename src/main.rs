//! stockgate entry point: load config, init logging, serve.

use stockgate::config::AppConfig;
use stockgate::gateway;
use stockgate::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config);

    gateway::serve(config).await
}
