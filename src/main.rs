use eta_gateway::config::Config;
use eta_gateway::engine::Engine;
use eta_gateway::error::Error;
use eta_gateway::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let engine = Engine::new(&config)?;

    serve(engine, config.bind_addr).await
}
