use crate::config::TokensConfig;
use crate::core::extract::extract_tokens;
use crate::core::transform::PlatformEmitter;
use crate::core::{DocumentFetcher, Pipeline, Platform, Storage, Token, TokenSet};
use crate::utils::error::Result;

pub struct TokenPipeline<F: DocumentFetcher, S: Storage> {
    fetcher: F,
    storage: S,
    config: TokensConfig,
    emitter: PlatformEmitter,
}

impl<F: DocumentFetcher, S: Storage> TokenPipeline<F, S> {
    pub fn new(fetcher: F, storage: S, config: TokensConfig) -> Self {
        Self {
            fetcher,
            storage,
            config,
            emitter: PlatformEmitter::new(),
        }
    }
}

#[async_trait::async_trait]
impl<F: DocumentFetcher, S: Storage> Pipeline for TokenPipeline<F, S> {
    async fn extract(&self) -> Result<Vec<Token>> {
        tracing::info!(
            "Fetching artboard {} from file {}",
            self.config.node_id,
            self.config.file_key
        );
        let artboard = self
            .fetcher
            .fetch_node(&self.config.file_key, &self.config.node_id)
            .await?;

        tracing::debug!(
            "Artboard '{}' has {} rows (including header)",
            artboard.node_type,
            artboard.children.len()
        );
        extract_tokens(&artboard)
    }

    async fn transform(&self, tokens: Vec<Token>) -> Result<TokenSet> {
        Ok(self.emitter.emit(&tokens))
    }

    /// Serializes every mapping before the first write so a bad mapping leaves no files behind.
    async fn load(&self, tokens: TokenSet) -> Result<Vec<String>> {
        let rendered = Platform::ALL
            .iter()
            .map(|platform| {
                serde_json::to_string_pretty(tokens.mapping(*platform))
                    .map(|json| (*platform, json))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut written = Vec::with_capacity(rendered.len());
        for (platform, json) in rendered {
            let file_name = platform.file_name();
            self.storage.write_file(file_name, json.as_bytes()).await?;
            tracing::debug!("Saved {} tokens to {}", platform, file_name);
            written.push(file_name.to_string());
        }

        Ok(written)
    }
}
