use std::sync::Arc;

use crate::error::StoreError;
use crate::ports::DocsAssistant;

use super::messages;

/// Result of asking a question.
#[derive(Debug)]
pub enum AskOutcome {
    Answered(String),
    /// Nothing to ask; the assistant was not called.
    BlankQuestion,
    /// The assistant call failed. The shown answer is the generic failure message.
    Failed(StoreError),
}

/// "Ask the AI" - one question box and the last answer.
pub struct AskView {
    assistant: Arc<dyn DocsAssistant>,
    question: String,
    answer: Option<String>,
}

impl AskView {
    pub fn new(assistant: Arc<dyn DocsAssistant>) -> Self {
        Self {
            assistant,
            question: String::new(),
            answer: None,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Whether `ask` would reach the assistant.
    pub fn is_ready(&self) -> bool {
        !self.question.trim().is_empty()
    }

    /// The answer currently shown, if any.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub async fn ask(&mut self) -> AskOutcome {
        if !self.is_ready() {
            return AskOutcome::BlankQuestion;
        }

        self.answer = None;
        match self.assistant.answer(&self.question).await {
            Ok(answer) => {
                tracing::info!(answer_len = answer.len(), "Question answered");
                self.answer = Some(answer.clone());
                AskOutcome::Answered(answer)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch answer");
                self.answer = Some(messages::ASK_FAILED.to_string());
                AskOutcome::Failed(e)
            }
        }
    }
}
