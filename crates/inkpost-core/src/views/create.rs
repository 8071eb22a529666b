use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::StoreError;
use crate::ports::{EditingSurface, Interaction, PostStore};
use crate::render::sanitize_html;

use super::messages;

/// How the create view starts out.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Content loaded into the editor when not starting fresh.
    pub initial_content: String,
    /// Reset the editor to empty, whatever it currently holds.
    pub start_fresh: bool,
}

impl ComposeOptions {
    pub fn fresh() -> Self {
        Self {
            initial_content: String::new(),
            start_fresh: true,
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            initial_content: content.into(),
            start_fresh: false,
        }
    }
}

/// Result of a save attempt.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(Post),
    /// Nothing to save; no write attempted.
    EmptyContent,
    /// The title prompt was dismissed or left blank; no write attempted.
    Cancelled,
    /// The store rejected the write. Editor content is left intact.
    Failed(StoreError),
}

/// "Write your content" - composes one new post.
pub struct CreateView<E: EditingSurface> {
    store: Arc<dyn PostStore>,
    interaction: Arc<dyn Interaction>,
    editor: E,
}

impl<E: EditingSurface> CreateView<E> {
    pub fn new(
        store: Arc<dyn PostStore>,
        interaction: Arc<dyn Interaction>,
        mut editor: E,
        options: ComposeOptions,
    ) -> Self {
        if options.start_fresh {
            editor.clear();
        } else if !options.initial_content.is_empty() {
            editor.load(&options.initial_content);
        }

        Self {
            store,
            interaction,
            editor,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// Sanitized live preview of the editor content.
    pub fn preview(&self) -> String {
        sanitize_html(&self.editor.value())
    }

    pub async fn save(&mut self) -> SaveOutcome {
        let content = self.editor.value();
        if content.trim().is_empty() {
            self.interaction.alert(messages::EMPTY_CONTENT).await;
            return SaveOutcome::EmptyContent;
        }

        let Some(title) = self.interaction.prompt(messages::TITLE_PROMPT).await else {
            tracing::debug!("Title prompt dismissed");
            return SaveOutcome::Cancelled;
        };

        // Content is already known to be non-empty, so only a blank title lands here.
        let draft = match NewPost::new(title, content) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(reason = %e, "Post not saved");
                return SaveOutcome::Cancelled;
            }
        };

        match self.store.create(draft).await {
            Ok(post) => {
                tracing::info!(post_id = post.id, title = %post.title, "Post created");
                self.editor.clear();
                self.interaction.alert(messages::POST_SAVED).await;
                SaveOutcome::Saved(post)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save post");
                self.interaction.alert(messages::SAVE_FAILED).await;
                SaveOutcome::Failed(e)
            }
        }
    }
}
