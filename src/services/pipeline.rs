// src/services/pipeline.rs
use anyhow::{Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::models::RunSummary;
use crate::services::{chart, covid_api, csv_store, quickchart};

/// Fetch, persist, and chart one country's series, each stage in turn.
pub async fn run(config: &AppConfig) -> Result<RunSummary> {
    let client = covid_api::http_client().context("Failed to build HTTP client")?;

    let staged = covid_api::fetch_daily_records(&client, &config.api_url)
        .await
        .context("Failed to fetch daily case counts")?;
    let record_count = staged.len();

    csv_store::write_records(&config.csv_path, &staged)
        .with_context(|| format!("Failed to write {}", config.csv_path))?;
    let records = csv_store::parse_dates(staged).context("Failed to parse record dates")?;

    let spec = chart::confirmed_vs_recovered(&records, config.sample_stride, &config.chart_title)
        .context("Failed to build chart config")?;
    let sampled_points = spec.data.labels.len();

    let content = quickchart::render_chart(&client, &config.chart_base_url, &spec)
        .await
        .context("Failed to render chart")?;
    quickchart::save_image(&config.image_path, &content)
        .with_context(|| format!("Failed to save {}", config.image_path))?;
    quickchart::display_image(&config.image_path, config.display_image)
        .with_context(|| format!("Failed to display {}", config.image_path))?;

    info!("Run complete: {} records, {} chart points", record_count, sampled_points);

    Ok(RunSummary {
        record_count,
        sampled_points,
        csv_path: config.csv_path.clone(),
        image_path: config.image_path.clone(),
        image_bytes: content.len(),
    })
}
