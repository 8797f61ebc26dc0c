use kv_shortener::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = config::load_from_env()?;
    telemetry::init(&config)?;
    config.print_summary();

    server::run(config).await
}
