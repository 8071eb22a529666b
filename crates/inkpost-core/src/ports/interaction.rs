use async_trait::async_trait;

/// User interaction capability used by the views.
///
/// A terminal implementation blocks on stdin; test harnesses answer from canned
/// responses.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question.
    async fn confirm(&self, message: &str) -> bool;

    /// Ask for a line of text. `None` means the user dismissed the prompt.
    async fn prompt(&self, message: &str) -> Option<String>;

    /// Show a message the user has to acknowledge.
    async fn alert(&self, message: &str);
}
