//! Local binding: the whole collection as one JSON array under a fixed key.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use inkpost_core::domain::{NewPost, Post, PostId};
use inkpost_core::error::StoreError;
use inkpost_core::ports::{KeyValueStore, PostStore};
use inkpost_shared::PostDto;

use super::mapping::{post_from_dto, post_to_dto, posts_from_dtos};
use crate::ids::IdGenerator;

/// Key the collection is stored under.
pub const POSTS_KEY: &str = "posts";

/// `PostStore` over a `KeyValueStore`.
///
/// Every mutation rewrites the whole array; records other than the one being
/// changed are written back exactly as they were read. Mutations from this
/// process are serialized; concurrent writers in other processes are not
/// coordinated.
pub struct LocalPostStore {
    kv: Arc<dyn KeyValueStore>,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl LocalPostStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            ids: IdGenerator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Stored records exactly as read, so untouched ones are written back verbatim.
    async fn read_records(&self) -> Result<Vec<PostDto>, StoreError> {
        let raw = match self.kv.get(POSTS_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        serde_json::from_str(&raw)
            .map_err(|e| StoreError::Serialization(format!("'{}' key: {}", POSTS_KEY, e)))
    }

    async fn write_records(&self, records: &[PostDto]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.kv.set(POSTS_KEY, &raw).await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for LocalPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(posts_from_dtos(self.read_records().await?))
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let records = self.read_records().await?;
        records
            .into_iter()
            .find(|record| record.id == id)
            .map(post_from_dto)
            .transpose()
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;

        if let Some(highest) = records.iter().map(|r| r.id).max() {
            self.ids.observe(highest);
        }
        let id = self
            .ids
            .next_id()
            .ok_or_else(|| StoreError::Storage("no post ids left".to_string()))?;
        let post = post.into_post(id);

        records.push(post_to_dto(&post));
        self.write_records(&records).await?;

        tracing::debug!(post_id = post.id, total = records.len(), "Post stored locally");
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;

        let record = records
            .iter_mut()
            .find(|record| record.id == post.id)
            .ok_or(StoreError::NotFound)?;
        // createdAt keeps the exact string it was first written with.
        record.title = post.title.clone();
        record.content = post.content.clone();

        self.write_records(&records).await?;
        tracing::debug!(post_id = post.id, "Post updated locally");
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;

        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound);
        }

        self.write_records(&records).await?;
        tracing::debug!(post_id = id, remaining = records.len(), "Post deleted locally");
        Ok(())
    }
}
