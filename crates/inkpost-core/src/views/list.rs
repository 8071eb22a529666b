use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::error::StoreError;
use crate::listing::{SortOrder, arrange};
use crate::ports::{Interaction, PostStore};
use crate::render::format_timestamp;

use super::{Route, messages};

/// One row of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub saved_on: String,
    pub view: Route,
    pub edit: Route,
}

/// Result of a delete action.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user did not confirm; nothing was touched.
    Declined,
    Deleted,
    /// The store refused; the list is unchanged.
    Failed(StoreError),
}

/// All posts, sorted and searchable.
pub struct ListView {
    store: Arc<dyn PostStore>,
    interaction: Arc<dyn Interaction>,
    posts: Vec<Post>,
    sort: SortOrder,
    query: String,
}

impl ListView {
    pub fn new(store: Arc<dyn PostStore>, interaction: Arc<dyn Interaction>) -> Self {
        Self {
            store,
            interaction,
            posts: Vec::new(),
            sort: SortOrder::default(),
            query: String::new(),
        }
    }

    /// Fetch the collection. Returns `false` if the store failed.
    pub async fn load(&mut self) -> bool {
        match self.store.list().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts loaded");
                self.posts = posts;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load posts");
                self.interaction.alert(messages::LIST_FAILED).await;
                false
            }
        }
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Posts to display: sorted by the current order, then filtered by the query.
    pub fn visible(&self) -> Vec<&Post> {
        arrange(&self.posts, self.sort, &self.query)
    }

    pub fn summaries(&self) -> Vec<PostSummary> {
        self.visible()
            .into_iter()
            .map(|post| PostSummary {
                id: post.id,
                title: post.title.clone(),
                saved_on: format_timestamp(&post.created_at),
                view: Route::Detail(post.id),
                edit: Route::Edit(post.id),
            })
            .collect()
    }

    pub async fn delete(&mut self, id: PostId) -> DeleteOutcome {
        if !self.interaction.confirm(messages::DELETE_CONFIRMATION).await {
            return DeleteOutcome::Declined;
        }

        // Remote first; local state only changes once the store has agreed.
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                self.posts.retain(|post| post.id != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(post_id = id, error = %e, "Failed to delete post");
                self.interaction.alert(messages::DELETE_FAILED).await;
                DeleteOutcome::Failed(e)
            }
        }
    }
}
