//! Fetch gateway: resolves raw payloads from mock fixtures or the live backend.
//!
//! The gateway is stateless per call. Mode and base URL come from the
//! injected [`Config`] and never change after construction.

use std::collections::HashMap;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Config, DataMode};
use crate::error::{GatewayError, GatewayResult};
use crate::mock;
use crate::models::ResourceKind;

// ---

#[derive(Debug, Clone)]
pub enum Gateway {
    /// Static fixtures keyed by path.
    Mock(HashMap<String, Value>),
    /// HTTP backend. No timeout is set; requests inherit the client default.
    Live { client: Client, base_url: String },
}

impl Gateway {
    // ---
    pub fn from_config(config: &Config) -> Self {
        // ---
        match config.data_mode {
            DataMode::Mock => Gateway::mock(),
            DataMode::Live => Gateway::live(&config.api_base_url),
        }
    }

    /// Gateway over the built-in fixtures.
    pub fn mock() -> Self {
        Gateway::Mock(mock::fixtures())
    }

    pub fn live(base_url: &str) -> Self {
        // ---
        Gateway::Live {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn mode(&self) -> DataMode {
        // ---
        match self {
            Gateway::Mock(_) => DataMode::Mock,
            Gateway::Live { .. } => DataMode::Live,
        }
    }

    /// Fetch the unwrapped payload for one resource of one user.
    pub async fn fetch(&self, kind: ResourceKind, user_id: u32) -> GatewayResult<Value> {
        self.fetch_path(&kind.path(user_id)).await
    }

    /// Fetch the unwrapped payload for an arbitrary backend path.
    ///
    /// In live mode a 2xx body without a `data` envelope yields `Value::Null`,
    /// which the normalizer absorbs as missing input.
    pub async fn fetch_path(&self, path: &str) -> GatewayResult<Value> {
        // ---
        match self {
            Gateway::Mock(table) => {
                debug!("Mock fetch {}", path);
                table
                    .get(path)
                    .cloned()
                    .ok_or_else(|| GatewayError::NotFound {
                        path: path.to_string(),
                    })
            }
            Gateway::Live { client, base_url } => {
                let url = format!("{}{}", base_url, path);
                debug!("Live fetch {}", url);

                let response = client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| GatewayError::Network(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(GatewayError::Http {
                        status: status.as_u16(),
                    });
                }

                let mut body: Value = response.json().await?;
                match body.get_mut("data") {
                    Some(data) => Ok(data.take()),
                    None => {
                        warn!("Response from {} has no 'data' envelope", url);
                        Ok(Value::Null)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test]
    async fn test_mock_fetch_known_user() {
        // ---
        let gw = Gateway::mock();
        let profile = gw.fetch(ResourceKind::Profile, 18).await.unwrap();
        assert_eq!(profile["todayScore"], 0.3);
        assert_eq!(profile["keyData"]["calorieCount"], 2103);
    }

    #[tokio::test]
    async fn test_mock_fetch_unknown_user_is_not_found() {
        // ---
        let gw = Gateway::mock();
        let err = gw.fetch(ResourceKind::Activity, 99).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::NotFound {
                path: "/user/99/activity".to_string()
            }
        );
    }

    #[test]
    fn test_mode_follows_config() {
        // ---
        let mut cfg = Config::default();
        assert_eq!(Gateway::from_config(&cfg).mode(), DataMode::Mock);

        cfg.data_mode = DataMode::Live;
        cfg.api_base_url = "http://example.invalid/".to_string();
        let gw = Gateway::from_config(&cfg);
        assert_eq!(gw.mode(), DataMode::Live);
        match gw {
            Gateway::Live { base_url, .. } => assert_eq!(base_url, "http://example.invalid"),
            Gateway::Mock(_) => panic!("expected live gateway"),
        }
    }

    #[test]
    fn test_mock_fetch_blocking() {
        // ---
        let gw = Gateway::mock();
        let raw = tokio_test::block_on(gw.fetch(ResourceKind::Performance, 12)).unwrap();
        assert_eq!(raw["data"].as_array().map(Vec::len), Some(6));
    }
}
