//! Terminal interaction - prompts on stderr, answers from stdin.

use std::io::{BufRead, Write};

use async_trait::async_trait;

use inkpost_core::ports::Interaction;

/// Interactive terminal. Answers given on the command line skip the question.
#[derive(Debug, Default)]
pub struct TerminalInteraction {
    assume_yes: bool,
    prompt_answer: Option<String>,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every confirmation with "yes".
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Answer the next text prompts with `answer` instead of reading stdin.
    pub fn answer_prompts_with(mut self, answer: Option<String>) -> Self {
        self.prompt_answer = answer;
        self
    }
}

/// Ask on stderr and read one line from stdin. `None` on EOF or read failure.
async fn ask(question: String) -> Option<String> {
    let answer = tokio::task::spawn_blocking(move || {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{} ", question);
        let _ = stderr.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    })
    .await;

    match answer {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!(error = %e, "Terminal input task failed");
            None
        }
    }
}

#[async_trait]
impl Interaction for TerminalInteraction {
    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let answer = ask(format!("{} [y/N]", message)).await.unwrap_or_default();
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        if let Some(answer) = &self.prompt_answer {
            return Some(answer.clone());
        }
        ask(message.to_string()).await
    }

    async fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
