//! Docs assistant served by the backend's `POST /answer-docs`.

use async_trait::async_trait;

use inkpost_core::error::StoreError;
use inkpost_core::ports::DocsAssistant;
use inkpost_shared::{AskRequest, AskResponse};

use crate::http::HttpClient;

pub struct RemoteDocsAssistant {
    http: HttpClient,
}

impl RemoteDocsAssistant {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DocsAssistant for RemoteDocsAssistant {
    async fn answer(&self, question: &str) -> Result<String, StoreError> {
        let request = AskRequest {
            question: question.to_string(),
        };
        let response: AskResponse = self.http.post_json("/answer-docs", &request).await?;
        tracing::debug!(answer_len = response.answer.len(), "Answer received");
        Ok(response.answer)
    }
}
