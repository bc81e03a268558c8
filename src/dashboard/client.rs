//! HTTP client for the relay's read endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::DashboardConfig,
    dashboard::snapshot::DashboardSnapshot,
    shared::error::{AppError, AppResult},
};

/// Source of dashboard snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> AppResult<DashboardSnapshot>;
}

/// Polls the three relay endpoints the dashboard shows
pub struct RelayClient {
    http: Client,
    base_url: String,
    min_conf: u32,
}

impl RelayClient {
    pub fn new(config: &DashboardConfig) -> AppResult<Self> {
        // A poll never outlives its interval
        let http = Client::builder()
            .timeout(config.poll_interval())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.relay_url.trim_end_matches('/').to_string(),
            min_conf: config.min_conf,
        })
    }

    pub async fn latest_utxo(&self) -> AppResult<Value> {
        Self::unwrap_result(self.get_json("/api/latest-utxo").await?)
    }

    /// Served without the `result` envelope
    pub async fn address_balances(&self) -> AppResult<Value> {
        self.get_json(&format!("/address-balances?minConf={}", self.min_conf))
            .await
    }

    pub async fn total_balances(&self) -> AppResult<Value> {
        Self::unwrap_result(self.get_json("/api/total-balances").await?)
    }

    async fn get_json(&self, path: &str) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Transport(format!("relay did not answer {} in time", path))
                } else {
                    AppError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|_| AppError::InvalidResponse)
    }

    fn unwrap_result(body: Value) -> AppResult<Value> {
        match body {
            Value::Object(mut fields) => fields.remove("result").ok_or(AppError::InvalidResponse),
            _ => Err(AppError::InvalidResponse),
        }
    }
}

#[async_trait]
impl SnapshotSource for RelayClient {
    /// All three reads must succeed for the snapshot to count
    async fn fetch_snapshot(&self) -> AppResult<DashboardSnapshot> {
        let (latest_utxo, address_balances, total_balances) = futures::future::try_join3(
            self.latest_utxo(),
            self.address_balances(),
            self.total_balances(),
        )
        .await?;

        Ok(DashboardSnapshot::from_parts(latest_utxo, address_balances, total_balances))
    }
}
