pub mod etl;
pub mod extract;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Node, Platform, PlatformMapping, Token, TokenSet};
pub use crate::domain::ports::{DocumentFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
