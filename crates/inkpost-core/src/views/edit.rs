use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::error::StoreError;
use crate::ports::{EditingSurface, Interaction, PostStore};

use super::{Route, ViewState, messages, resolve_post};

/// Result of saving an edit.
#[derive(Debug)]
pub enum EditOutcome {
    /// Saved; `next` is where the user should be taken.
    Saved { post: Post, next: Route },
    /// The post has not been resolved (still loading, or not found).
    NotReady,
    Failed(StoreError),
}

/// Edits the content of an existing post.
pub struct EditView<E: EditingSurface> {
    store: Arc<dyn PostStore>,
    interaction: Arc<dyn Interaction>,
    editor: E,
    id: PostId,
    state: ViewState<Post>,
}

impl<E: EditingSurface> EditView<E> {
    pub fn new(
        store: Arc<dyn PostStore>,
        interaction: Arc<dyn Interaction>,
        editor: E,
        id: PostId,
    ) -> Self {
        Self {
            store,
            interaction,
            editor,
            id,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Post> {
        &self.state
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// Resolve the post and feed its content into the editor.
    pub async fn load(&mut self) -> &ViewState<Post> {
        if let Some(state) = resolve_post(&*self.store, &*self.interaction, self.id).await {
            if let ViewState::Ready(post) = &state {
                self.editor.load(&post.content);
            }
            self.state = state;
        }
        &self.state
    }

    pub async fn save(&mut self) -> EditOutcome {
        let Some(post) = self.state.ready().cloned() else {
            return EditOutcome::NotReady;
        };

        let updated = post.with_content(self.editor.value());

        match self.store.update(updated).await {
            Ok(saved) => {
                tracing::info!(post_id = saved.id, "Post updated");
                self.state = ViewState::Ready(saved.clone());
                self.interaction.alert(messages::POST_UPDATED).await;
                EditOutcome::Saved {
                    next: Route::Detail(saved.id),
                    post: saved,
                }
            }
            Err(e) => {
                tracing::error!(post_id = self.id, error = %e, "Failed to update post");
                self.interaction.alert(messages::UPDATE_FAILED).await;
                EditOutcome::Failed(e)
            }
        }
    }
}
