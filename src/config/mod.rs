pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliArgs;

use crate::utils::error::{Result, TokenError};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use std::fmt;

pub const FIGMA_TOKEN_VAR: &str = "FIGMA_TOKEN";
pub const FILE_KEY_VAR: &str = "FILE_KEY";
pub const ARTBOARD_NODE_ID_VAR: &str = "ARTBOARD_NODE_ID";

pub const DEFAULT_API_BASE: &str = "https://api.figma.com";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Everything one run needs, resolved once at startup and handed to each stage.
#[derive(Clone, PartialEq)]
pub struct TokensConfig {
    pub access_token: String,
    pub file_key: String,
    pub node_id: String,
    pub api_base: String,
    pub output_dir: String,
    pub timeout_seconds: u64,
}

impl TokensConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the three required values through `lookup`. Blank values count as
    /// missing; anything else is kept exactly as given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name.to_string());
                String::new()
            }
        };

        let access_token = required(FIGMA_TOKEN_VAR);
        let file_key = required(FILE_KEY_VAR);
        let node_id = required(ARTBOARD_NODE_ID_VAR);

        if !missing.is_empty() {
            return Err(TokenError::MissingConfigError { fields: missing });
        }

        Ok(Self {
            access_token,
            file_key,
            node_id,
            api_base: DEFAULT_API_BASE.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

impl fmt::Debug for TokensConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokensConfig")
            .field("access_token", &"<redacted>")
            .field("file_key", &self.file_key)
            .field("node_id", &self.node_id)
            .field("api_base", &self.api_base)
            .field("output_dir", &self.output_dir)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for TokensConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
