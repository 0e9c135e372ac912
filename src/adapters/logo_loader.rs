use anyhow::{Context, Result};

use crate::infrastructure::LogHandle;

pub async fn fetch_logo_bytes(logo_url: &str, log: &LogHandle) -> Result<Vec<u8>> {
    log.info("Fetching header logo");
    log.debug(format!("Logo URL: {}", logo_url));

    let response = reqwest::get(logo_url)
        .await
        .context("Failed to request logo")?
        .error_for_status()
        .context("Logo request was rejected")?;

    let bytes = response.bytes().await.context("Failed to read logo body")?;

    log.debug(format!("Received {} bytes", bytes.len()));
    Ok(bytes.to_vec())
}
