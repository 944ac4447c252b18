// src/services/covid_api.rs
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::RawDailyRecord;

pub type Result<T> = std::result::Result<T, FetchError>;

const DATE_PREFIX_LEN: usize = 10;

/// Build the client shared by both remote calls of a run.
pub fn http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("covid_chart/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Fetch the day-one time series and project each element to a staged record.
pub async fn fetch_daily_records(client: &Client, url: &str) -> Result<Vec<RawDailyRecord>> {
    info!("Fetching daily case counts from URL: {}", url);

    let body = client.get(url).send().await?.text().await?;
    let parsed: Value = serde_json::from_str(&body)?;
    let items = parsed.as_array().ok_or(FetchError::NotAnArray)?;

    if let Some(first) = items.first() {
        debug!("First raw record: {}", first);
    }

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect::<Result<Vec<_>>>()?;

    info!("Decoded {} daily records", records.len());
    Ok(records)
}

/// Decode one API element. Keys are looked up by their exact API names.
pub fn decode_record(index: usize, item: &Value) -> Result<RawDailyRecord> {
    Ok(RawDailyRecord {
        confirmed: count_field(index, item, "Confirmed")?,
        deaths: count_field(index, item, "Deaths")?,
        recovered: count_field(index, item, "Recovered")?,
        active: count_field(index, item, "Active")?,
        date: truncate_date(str_field(index, item, "Date")?),
    })
}

/// Keep only the `YYYY-MM-DD` prefix, dropping time of day and timezone.
pub fn truncate_date(raw: &str) -> String {
    raw.chars().take(DATE_PREFIX_LEN).collect()
}

fn field<'a>(index: usize, item: &'a Value, field: &'static str) -> Result<&'a Value> {
    item.get(field)
        .ok_or(FetchError::MissingField { index, field })
}

fn count_field(index: usize, item: &Value, name: &'static str) -> Result<u64> {
    field(index, item, name)?
        .as_u64()
        .ok_or(FetchError::InvalidField { index, field: name })
}

fn str_field<'a>(index: usize, item: &'a Value, name: &'static str) -> Result<&'a str> {
    field(index, item, name)?
        .as_str()
        .ok_or(FetchError::InvalidField { index, field: name })
}
