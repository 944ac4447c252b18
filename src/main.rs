use log::{error, info};

use covid_chart::config::AppConfig;
use covid_chart::services::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting covid chart run...");

    let config = AppConfig::from_env()?;

    match pipeline::run(&config).await {
        Ok(summary) => {
            info!(
                "Wrote {} rows to {} and a {} byte chart to {}",
                summary.record_count, summary.csv_path, summary.image_bytes, summary.image_path
            );
            Ok(())
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            Err(e)
        }
    }
}
