use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a short text message owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`. Blank content is rejected.
    pub fn new(user_id: Uuid, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        ensure_not_blank(&content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the content. The post is left untouched when `content` is blank.
    pub fn edit(&mut self, content: impl Into<String>) -> Result<(), DomainError> {
        let content = content.into();
        ensure_not_blank(&content)?;

        self.content = content;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether `user_id` is the owner of this post.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

fn ensure_not_blank(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::Validation("content must not be blank".to_string()));
    }
    Ok(())
}
