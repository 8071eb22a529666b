use async_trait::async_trait;

use crate::error::StoreError;

/// Answers free-form questions about the documentation.
///
/// Served by the same backend as the posts; failures use the store error
/// vocabulary so transport problems read the same everywhere.
#[async_trait]
pub trait DocsAssistant: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, StoreError>;
}
