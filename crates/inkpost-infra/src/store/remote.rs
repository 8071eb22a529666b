//! Remote binding: every operation is one call to the posts REST backend.

use async_trait::async_trait;

use inkpost_core::domain::{NewPost, Post, PostId};
use inkpost_core::error::StoreError;
use inkpost_core::ports::PostStore;
use inkpost_shared::PostDto;

use super::mapping::{post_from_dto, post_to_dto, posts_from_dtos};
use crate::http::HttpClient;
use crate::ids::IdGenerator;

/// `PostStore` backed by `GET/POST /posts` and `GET/PUT/DELETE /posts/{id}`.
///
/// The backend expects the client to choose the id of a new post; ids come from
/// a strictly increasing generator so rapid creates never collide.
pub struct RemotePostStore {
    http: HttpClient,
    ids: IdGenerator,
}

impl RemotePostStore {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            ids: IdGenerator::new(),
        }
    }

    fn post_path(id: PostId) -> String {
        format!("/posts/{}", id)
    }
}

#[async_trait]
impl PostStore for RemotePostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let dtos: Vec<PostDto> = self.http.get_json("/posts").await?;
        Ok(posts_from_dtos(dtos))
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let dto: Option<PostDto> = self.http.get_optional(&Self::post_path(id)).await?;
        dto.map(post_from_dto).transpose()
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let id = self
            .ids
            .next_id()
            .ok_or_else(|| StoreError::Storage("no post ids left".to_string()))?;
        let post = post.into_post(id);
        let created: PostDto = self.http.post_json("/posts", &post_to_dto(&post)).await?;
        tracing::debug!(post_id = created.id, "Post created on backend");
        post_from_dto(created)
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let updated: PostDto = self
            .http
            .put_json(&Self::post_path(post.id), &post_to_dto(&post))
            .await?;
        post_from_dto(updated)
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let ack = self.http.delete(&Self::post_path(id)).await?;
        tracing::debug!(post_id = id, ack = ?ack.message, "Post deleted on backend");
        Ok(())
    }
}
