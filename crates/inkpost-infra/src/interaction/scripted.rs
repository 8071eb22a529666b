//! Deterministic interaction driven by canned answers.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use inkpost_core::ports::Interaction;

/// Answers confirmations and prompts from queues and records every alert.
///
/// When a queue runs dry, confirmations fall back to `default_confirm` and
/// prompts are treated as dismissed.
#[derive(Default)]
pub struct ScriptedInteraction {
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
    alerts: Mutex<Vec<String>>,
    default_confirm: bool,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm everything that is not explicitly scripted.
    pub fn confirming_by_default(mut self) -> Self {
        self.default_confirm = true;
        self
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.get_mut().push_back(answer);
        self
    }

    pub fn with_prompt(mut self, answer: Option<&str>) -> Self {
        self.prompts.get_mut().push_back(answer.map(str::to_string));
        self
    }

    /// Alerts shown so far, oldest first.
    pub async fn alerts(&self) -> Vec<String> {
        self.alerts.lock().await.clone()
    }
}

#[async_trait]
impl Interaction for ScriptedInteraction {
    async fn confirm(&self, message: &str) -> bool {
        let answer = self
            .confirms
            .lock()
            .await
            .pop_front()
            .unwrap_or(self.default_confirm);
        tracing::debug!(message = %message, answer, "Scripted confirmation");
        answer
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        let answer = self.prompts.lock().await.pop_front().flatten();
        tracing::debug!(message = %message, answered = answer.is_some(), "Scripted prompt");
        answer
    }

    async fn alert(&self, message: &str) {
        tracing::debug!(message = %message, "Scripted alert");
        self.alerts.lock().await.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_answers_in_order_then_falls_back() {
        let ui = ScriptedInteraction::new()
            .with_confirm(false)
            .with_prompt(Some("Hello"))
            .with_prompt(None);

        assert!(!ui.confirm("delete?").await);
        assert!(!ui.confirm("delete?").await);
        assert_eq!(ui.prompt("title?").await, Some("Hello".to_string()));
        assert_eq!(ui.prompt("title?").await, None);
        assert_eq!(ui.prompt("title?").await, None);
    }

    #[tokio::test]
    async fn test_confirming_by_default() {
        let ui = ScriptedInteraction::new().confirming_by_default();
        assert!(ui.confirm("delete?").await);
    }

    #[tokio::test]
    async fn test_records_alerts() {
        let ui = ScriptedInteraction::new();
        ui.alert("one").await;
        ui.alert("two").await;
        assert_eq!(ui.alerts().await, vec!["one", "two"]);
    }
}
