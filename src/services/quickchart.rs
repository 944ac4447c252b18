// src/services/quickchart.rs
use std::path::Path;
use std::process::Command;

use log::{debug, info, warn};
use reqwest::Client;

use crate::error::RenderError;
use crate::models::ChartSpec;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Ask the chart service to draw `spec`. The body comes back as-is, whatever
/// the status code or content type.
pub async fn render_chart(client: &Client, base_url: &str, spec: &ChartSpec) -> Result<Vec<u8>> {
    let config_text = serde_json::to_string(spec)?;
    info!("Requesting chart image from {}", base_url);
    debug!("Chart config: {}", config_text);

    let response = client
        .get(base_url)
        .query(&[("c", config_text.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("Chart service answered with status {}", status);
    }

    let bytes = response.bytes().await?;
    info!("Received {} bytes from chart service", bytes.len());
    Ok(bytes.to_vec())
}

/// Write the image bytes, replacing any existing file.
pub fn save_image<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content)?;
    info!("Saved chart image to {}", path.display());
    Ok(())
}

/// Decode the saved image and, when asked, hand it to the desktop viewer.
pub fn display_image<P: AsRef<Path>>(path: P, launch_viewer: bool) -> Result<()> {
    let path = path.as_ref();
    let img = image::open(path)?;
    info!(
        "Chart image {} is {}x{}",
        path.display(),
        img.width(),
        img.height()
    );

    if launch_viewer {
        viewer_command(path).spawn()?;
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
