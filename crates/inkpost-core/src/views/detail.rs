use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::ports::{Interaction, PostStore};
use crate::render::{format_timestamp, sanitize_html};

use super::{ViewState, resolve_post};

/// A post ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPost {
    pub id: PostId,
    pub title: String,
    pub published: String,
    /// Sanitized HTML content.
    pub html: String,
}

impl From<&Post> for RenderedPost {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            published: format_timestamp(&post.created_at),
            html: sanitize_html(&post.content),
        }
    }
}

/// Read-only view of a single post.
pub struct DetailView {
    store: Arc<dyn PostStore>,
    interaction: Arc<dyn Interaction>,
    id: PostId,
    state: ViewState<Post>,
}

impl DetailView {
    pub fn new(store: Arc<dyn PostStore>, interaction: Arc<dyn Interaction>, id: PostId) -> Self {
        Self {
            store,
            interaction,
            id,
            state: ViewState::Loading,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn state(&self) -> &ViewState<Post> {
        &self.state
    }

    pub async fn load(&mut self) -> &ViewState<Post> {
        if let Some(state) = resolve_post(&*self.store, &*self.interaction, self.id).await {
            self.state = state;
        }
        &self.state
    }

    /// `None` while loading or when the post does not exist.
    pub fn render(&self) -> Option<RenderedPost> {
        self.state.ready().map(RenderedPost::from)
    }
}
