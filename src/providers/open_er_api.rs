//! Fallback rate source backed by the open.er-api.com API.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::currency::CurrencyCode;
use crate::providers::rate_from_table;
use crate::rate_source::{REQUEST_TIMEOUT, RateSource};

pub struct OpenErApiSource {
    base_url: String,
}

impl OpenErApiSource {
    pub fn new(base_url: &str) -> Self {
        OpenErApiSource {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErApiResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateSource for OpenErApiSource {
    #[instrument(
        name = "OpenErApiFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64> {
        let url = format!("{}/v6/latest/{}", self.base_url, from);
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base: {} URL: {}", e, from, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base: {}",
                response.status(),
                from
            ));
        }

        let text = response.text().await?;
        let data: ErApiResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for base {}: {}", from, e))?;

        rate_from_table(&data.rates, from, to)
    }
}
