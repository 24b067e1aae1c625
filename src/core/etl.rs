use crate::config::TokensConfig;
use crate::core::pipeline::TokenPipeline;
use crate::core::{DocumentFetcher, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub tokens_extracted: usize,
    pub files_written: Vec<String>,
}

pub struct TokenEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TokenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform, load. The first error aborts the run.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting token extraction");

        let tokens = self.pipeline.extract().await?;
        let tokens_extracted = tokens.len();
        tracing::info!("Extracted {} tokens", tokens_extracted);

        let token_set = self.pipeline.transform(tokens).await?;
        tracing::info!(
            "Built platform mappings ({} web keys, {} native keys)",
            token_set.web.len(),
            token_set.ios.len()
        );

        let files_written = self.pipeline.load(token_set).await?;
        tracing::info!("Wrote {}", files_written.join(", "));

        Ok(RunReport {
            tokens_extracted,
            files_written,
        })
    }
}

/// Resolves configuration through `lookup` and runs the whole job.
///
/// `make_fetcher` is only invoked once configuration is complete and valid, so
/// a missing variable never reaches the network.
pub async fn run_with<L, M, F, S>(
    lookup: L,
    configure: impl FnOnce(TokensConfig) -> TokensConfig,
    make_fetcher: M,
    storage: S,
) -> Result<RunReport>
where
    L: Fn(&str) -> Option<String>,
    M: FnOnce(&TokensConfig) -> F,
    F: DocumentFetcher,
    S: Storage,
{
    let config = configure(TokensConfig::from_lookup(lookup)?);
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let fetcher = make_fetcher(&config);
    let pipeline = TokenPipeline::new(fetcher, storage, config);
    TokenEngine::new(pipeline).run().await
}
