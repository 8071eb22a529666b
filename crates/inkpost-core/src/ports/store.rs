use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::StoreError;

/// Persistence contract for posts.
///
/// Bound either to a local key-value collection or to a remote REST backend.
/// Each binding owns identity assignment for the posts it creates.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read the whole collection, in storage order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by id.
    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError>;

    /// Assign an id and persist a new post.
    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Overwrite an existing post. Fails with `StoreError::NotFound` if the id is unknown.
    async fn update(&self, post: Post) -> Result<Post, StoreError>;

    /// Remove a post. Fails with `StoreError::NotFound` if the id is unknown.
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;
}
