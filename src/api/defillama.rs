use crate::config::Config;
use crate::error::StatsError;
use crate::models::stats::ProtocolStatistics;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Source of live protocol statistics, keyed by provider slug.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_protocol(&self, slug: &str) -> Result<ProtocolStatistics, StatsError>;
}

pub struct DefiLlamaApi {
    client: Client,
    base_url: String,
}

impl DefiLlamaApi {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    pub fn protocol_url(&self, slug: &str) -> String {
        format!("{}/protocol/{}", self.base_url, slug)
    }
}

#[async_trait]
impl StatsProvider for DefiLlamaApi {
    async fn fetch_protocol(&self, slug: &str) -> Result<ProtocolStatistics, StatsError> {
        let url = self.protocol_url(slug);

        debug!("Sending request to {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", url, status);
            return Err(StatsError::Status(status));
        }

        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;

        Ok(ProtocolStatistics::from_response(&json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_protocol_url_from_config() {
        let api = DefiLlamaApi::new(&Config {
            base_url: "http://localhost:9000".to_string(),
        });
        assert_eq!(
            api.protocol_url("jupiter-aggregator"),
            "http://localhost:9000/protocol/jupiter-aggregator"
        );
    }

    #[test]
    fn default_config_targets_llama_api() {
        let api = DefiLlamaApi::new(&Config::default());
        assert_eq!(api.protocol_url("aave"), "https://api.llama.fi/protocol/aave");
    }
}
