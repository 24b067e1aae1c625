use crate::domain::model::{Node, Token, TokenSet};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for the generated token files.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote document service boundary.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Returns the subtree rooted at `node_id` inside document `file_key`.
    async fn fetch_node(&self, file_key: &str, node_id: &str) -> Result<Node>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Token>>;
    async fn transform(&self, tokens: Vec<Token>) -> Result<TokenSet>;
    async fn load(&self, tokens: TokenSet) -> Result<Vec<String>>;
}
