// src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of case counts as staged for the CSV file. `date` is the API date
/// cut down to `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDailyRecord {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    pub date: NaiveDate,
}

/// Y values handed to the dataset builder. The caller decides the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    Single(Vec<u64>),
    Multi(Vec<Vec<u64>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub title: String,
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Chart configuration in the shape QuickChart expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: TitleOptions,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub record_count: usize,
    pub sampled_points: usize,
    pub csv_path: String,
    pub image_path: String,
    pub image_bytes: usize,
}
