// src/config.rs
use std::env;

use dotenv::dotenv;
use log::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.covid19api.com/dayone/country/brazil";
pub const DEFAULT_CHART_BASE_URL: &str = "https://quickchart.io/chart";
pub const DEFAULT_CSV_PATH: &str = "brasil-covid.csv";
pub const DEFAULT_IMAGE_PATH: &str = "meu-primeiro-grafico.png";
pub const DEFAULT_CHART_TITLE: &str = "Gráfico confirmados vs recuperados";
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub chart_base_url: String,
    pub csv_path: String,
    pub image_path: String,
    pub chart_title: String,
    pub sample_stride: usize,
    pub display_image: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            chart_base_url: DEFAULT_CHART_BASE_URL.to_string(),
            csv_path: DEFAULT_CSV_PATH.to_string(),
            image_path: DEFAULT_IMAGE_PATH.to_string(),
            chart_title: DEFAULT_CHART_TITLE.to_string(),
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            display_image: true,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            "Config: api={} chart={} csv={} image={}",
            config.api_url, config.chart_base_url, config.csv_path, config.image_path
        );
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(url) = lookup("COVID_API_URL") {
            config.api_url = url;
        }
        if let Some(url) = lookup("CHART_BASE_URL") {
            config.chart_base_url = url;
        }
        if let Some(path) = lookup("CSV_PATH") {
            config.csv_path = path;
        }
        if let Some(path) = lookup("IMAGE_PATH") {
            config.image_path = path;
        }
        if let Some(title) = lookup("CHART_TITLE") {
            config.chart_title = title;
        }

        if let Some(raw) = lookup("SAMPLE_STRIDE") {
            config.sample_stride = match raw.trim().parse::<usize>() {
                Ok(stride) if stride >= 1 => stride,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SAMPLE_STRIDE",
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup("DISPLAY_IMAGE") {
            config.display_image = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    warn!("Unrecognized DISPLAY_IMAGE value '{}'", raw);
                    return Err(ConfigError::Invalid {
                        key: "DISPLAY_IMAGE",
                        value: raw,
                    });
                }
            };
        }

        Ok(config)
    }
}
