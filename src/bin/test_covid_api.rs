use covid_chart::config::AppConfig;
use covid_chart::services::covid_api::{fetch_daily_records, http_client};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = AppConfig::from_env()?;

    info!("Testing case-count API fetching...");

    let client = http_client()?;
    match fetch_daily_records(&client, &config.api_url).await {
        Ok(records) => {
            info!("SUCCESS: {} daily records", records.len());
            if let (Some(first), Some(last)) = (records.first(), records.last()) {
                info!("  First: {:?}", first);
                info!("  Last:  {:?}", last);
            }
        }
        Err(e) => {
            error!("ERROR: Failed to fetch daily records: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
