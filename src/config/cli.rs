#[cfg(feature = "cli")]
use super::{TokensConfig, DEFAULT_API_BASE, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECONDS};
#[cfg(feature = "cli")]
use clap::Parser;

/// Run options. The credential and document ids come from the environment instead.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "figma-tokens")]
#[command(
    about = "Extract design tokens from a Figma artboard into web, iOS and Android JSON files",
    after_help = "Required environment: FIGMA_TOKEN, FILE_KEY, ARTBOARD_NODE_ID"
)]
pub struct CliArgs {
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    pub fn apply(&self, config: TokensConfig) -> TokensConfig {
        config
            .with_api_base(self.api_base.clone())
            .with_output_dir(self.output_dir.clone())
            .with_timeout_seconds(self.timeout_seconds)
    }
}
