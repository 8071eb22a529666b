use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post identifier. Millisecond-timestamp shaped, assigned at the store boundary.
pub type PostId = i64;

/// Post entity - a titled piece of HTML content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Replace the content. Id, title and creation time are carried over untouched.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }
}

/// A post that has been validated but not yet given an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time, at the millisecond
    /// resolution the timestamp is persisted with.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::at(title, content, Utc::now().trunc_subsecs(3))
    }

    /// Create a new post with an explicit creation time.
    pub fn at(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        let content = content.into();

        if content.trim().is_empty() {
            return Err(DomainError::Validation(
                "Post content must not be empty".to_string(),
            ));
        }
        if title.is_empty() {
            return Err(DomainError::Validation(
                "Post title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title,
            content,
            created_at,
        })
    }

    /// Attach the identifier chosen by the store.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
