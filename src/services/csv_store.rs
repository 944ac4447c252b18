// src/services/csv_store.rs
use std::path::Path;

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use log::{info, warn};

use crate::error::PersistError;
use crate::models::{DailyRecord, RawDailyRecord};

pub type Result<T> = std::result::Result<T, PersistError>;

/// Header row of the staged file. It names four columns while every data row
/// carries five fields (confirmed, deaths, recovered, active, date); readers
/// must be flexible.
pub const CSV_HEADER: [&str; 4] = ["confirmados", "óbitos", "ativos", "data"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write the header plus one row per record, replacing any existing file.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[RawDailyRecord]) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {} records to {}", records.len(), path.display());

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.confirmed.to_string(),
            record.deaths.to_string(),
            record.recovered.to_string(),
            record.active.to_string(),
            record.date.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Turn the staged `YYYY-MM-DD` strings into calendar days. Runs after
/// `write_records`, so the file on disk keeps the string form.
pub fn parse_dates(records: Vec<RawDailyRecord>) -> Result<Vec<DailyRecord>> {
    records
        .into_iter()
        .map(|record| -> Result<DailyRecord> {
            let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT).map_err(|source| {
                warn!("Could not parse date '{}'", record.date);
                PersistError::Date {
                    value: record.date.clone(),
                    source,
                }
            })?;
            Ok(DailyRecord {
                confirmed: record.confirmed,
                deaths: record.deaths,
                recovered: record.recovered,
                active: record.active,
                date,
            })
        })
        .collect()
}
