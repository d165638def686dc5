use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod manager;

/// Trait for managing posts.
#[async_trait]
pub trait Manager {
    /// Create a new post.
    async fn create(&self, body: &str) -> anyhow::Result<i64>;
    /// Find a post by its identifier.
    async fn find_by_id(&self, post_id: i64) -> anyhow::Result<Option<Post>>;
    /// Find all posts, oldest first.
    async fn find_all(&self) -> anyhow::Result<Vec<Post>>;
    /// Replace the body of the post with the given identifier.
    async fn update_body(&self, post_id: i64, body: &str) -> anyhow::Result<()>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for a post.
pub struct Post {
    /// Unique post identifier, assigned by the database.
    pub id: i64,
    /// Text of the post.
    pub body: String,
}

impl Post {
    /// Returns the first `chars` characters of the post body.
    ///
    /// Counts characters, not bytes, so multi-byte text is never
    /// truncated mid-character.
    #[must_use]
    pub fn excerpt(&self, chars: usize) -> String {
        self.body.chars().take(chars).collect()
    }
}
