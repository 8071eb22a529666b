//! Views - the create, edit, detail and list screens, plus the docs question
//! box, as plain state machines.
//!
//! Each view talks to a `PostStore` and reports to the user through an
//! `Interaction`. Store failures are logged, alerted, and leave the view state
//! as it was so the user can retry.

mod ask;
mod create;
mod detail;
mod edit;
mod list;
mod state;


pub use ask::{AskOutcome, AskView};
pub use create::{ComposeOptions, CreateView, SaveOutcome};
pub use detail::{DetailView, RenderedPost};
pub use edit::{EditOutcome, EditView};
pub use list::{DeleteOutcome, ListView, PostSummary};
pub use state::{Route, ViewState};

/// User-facing messages.
pub mod messages {
    pub const EMPTY_CONTENT: &str = "Editor is empty. Please write something before saving.";
    pub const TITLE_PROMPT: &str = "Enter a title for your post:";
    pub const POST_SAVED: &str = "Post saved!";
    pub const SAVE_FAILED: &str = "Error saving post.";
    pub const POST_UPDATED: &str = "Post updated!";
    pub const UPDATE_FAILED: &str = "Error updating post.";
    pub const LOAD_FAILED: &str = "Error loading post.";
    pub const LIST_FAILED: &str = "Error loading posts.";
    pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";
    pub const DELETE_FAILED: &str = "Error deleting post.";
    pub const NO_POSTS: &str = "No posts saved yet.";
    pub const NOT_FOUND: &str = "Post not found.";
    pub const LOADING: &str = "Loading...";
    pub const THINKING: &str = "Thinking...";
    pub const ANSWER_HEADING: &str = "AI Answer:";
    pub const ASK_FAILED: &str = "Something went wrong. Please try again.";
}

use crate::domain::{Post, PostId};
use crate::ports::{Interaction, PostStore};

/// Resolve one post for a detail or edit view.
///
/// Returns `None` when the store call failed; the caller keeps its current state.
async fn resolve_post(
    store: &dyn PostStore,
    interaction: &dyn Interaction,
    id: PostId,
) -> Option<ViewState<Post>> {
    match store.get(id).await {
        Ok(Some(post)) => Some(ViewState::Ready(post)),
        Ok(None) => {
            tracing::debug!(post_id = id, "Post not found");
            Some(ViewState::NotFound)
        }
        Err(e) => {
            tracing::error!(post_id = id, error = %e, "Failed to load post");
            interaction.alert(messages::LOAD_FAILED).await;
            None
        }
    }
}
