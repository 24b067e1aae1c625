use thiserror::Error;

/// Which stage of the run an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Fetch,
    Extraction,
    FileWrite,
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error(
        "Missing required configuration: {} (FIGMA_TOKEN, FILE_KEY and ARTBOARD_NODE_ID must all be set)",
        .fields.join(", ")
    )]
    MissingConfigError { fields: Vec<String> },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Node {node_id} not found in document response")]
    NodeNotFound { node_id: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Row {row} has {found} text node(s), expected at least 2")]
    RowMissingTextNodes { row: usize, found: usize },

    #[error("Row {row} has a text node without a bounding box")]
    MissingBoundingBox { row: usize },

    #[error("Row {row} has a text node without characters")]
    MissingCharacters { row: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TokenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TokenError::MissingConfigError { .. } | TokenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TokenError::ApiError(_)
            | TokenError::ApiStatusError { .. }
            | TokenError::NodeNotFound { .. }
            | TokenError::SerializationError(_) => ErrorCategory::Fetch,
            TokenError::RowMissingTextNodes { .. }
            | TokenError::MissingBoundingBox { .. }
            | TokenError::MissingCharacters { .. } => ErrorCategory::Extraction,
            TokenError::IoError(_) => ErrorCategory::FileWrite,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration error: {}", self),
            ErrorCategory::Fetch => format!("Could not fetch the artboard: {}", self),
            ErrorCategory::Extraction => format!("Could not read the token table: {}", self),
            ErrorCategory::FileWrite => format!("Could not write token files: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TokenError::MissingConfigError { .. } => {
                "Export FIGMA_TOKEN, FILE_KEY and ARTBOARD_NODE_ID before running"
            }
            TokenError::InvalidConfigValueError { .. } => "Check the command line flags",
            TokenError::ApiStatusError { status: 403, .. } => {
                "Check that FIGMA_TOKEN is valid and has access to the file"
            }
            TokenError::ApiStatusError { status: 404, .. } | TokenError::NodeNotFound { .. } => {
                "Check FILE_KEY and ARTBOARD_NODE_ID"
            }
            TokenError::ApiError(_) | TokenError::ApiStatusError { .. } => {
                "Check network connectivity and try again"
            }
            TokenError::SerializationError(_) => "The API response was not in the expected format",
            TokenError::RowMissingTextNodes { .. }
            | TokenError::MissingBoundingBox { .. }
            | TokenError::MissingCharacters { .. } => {
                "Every row after the header needs an alias text and a value text"
            }
            TokenError::IoError(_) => "Check permissions and free space in the output directory",
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
