use junction::config::Config;
use junction::console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let table = cfg.table();
    tracing::info!(routes = table.len(), "Route table loaded");

    tokio::select! {
        res = console::run(&table) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
