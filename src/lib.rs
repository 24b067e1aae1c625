pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{FigmaClient, LocalStorage};
pub use config::TokensConfig;
pub use crate::core::{
    etl::{run_with, RunReport, TokenEngine},
    pipeline::TokenPipeline,
    transform::{convert_units, to_camel, PlatformEmitter},
};
pub use utils::error::{Result, TokenError};
