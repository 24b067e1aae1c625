use crate::config::TokensConfig;
use crate::domain::model::{FileNodesResponse, Node};
use crate::domain::ports::DocumentFetcher;
use crate::utils::error::{Result, TokenError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const TOKEN_HEADER: &str = "X-Figma-Token";

/// Figma REST client limited to the file-nodes endpoint.
pub struct FigmaClient {
    client: Client,
    api_base: String,
    access_token: String,
    timeout: Duration,
}

impl FigmaClient {
    pub fn new(api_base: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn from_config(config: &TokensConfig) -> Self {
        Self::new(config.api_base.clone(), config.access_token.clone())
            .with_timeout(Duration::from_secs(config.timeout_seconds))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn nodes_url(&self, file_key: &str) -> String {
        format!(
            "{}/v1/files/{}/nodes",
            self.api_base.trim_end_matches('/'),
            file_key
        )
    }
}

#[async_trait]
impl DocumentFetcher for FigmaClient {
    async fn fetch_node(&self, file_key: &str, node_id: &str) -> Result<Node> {
        let url = self.nodes_url(file_key);
        tracing::debug!("Making API request to: {} (ids={})", url, node_id);

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.access_token)
            .query(&[("ids", node_id)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let mut parsed: FileNodesResponse = serde_json::from_slice(&bytes)?;

        parsed
            .nodes
            .remove(node_id)
            .flatten()
            .map(|entry| entry.document)
            .ok_or_else(|| TokenError::NodeNotFound {
                node_id: node_id.to_string(),
            })
    }
}
