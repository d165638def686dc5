//! Manager for the post model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::Post;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Insert a new post into the database.
    ///
    /// # Errors
    /// Errors if the post cannot be inserted into the database.
    async fn create(&self, body: &str) -> anyhow::Result<i64> {
        let statement = "
            INSERT INTO post ( body )
            VALUES ( $1 )
        ";
        let id = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(body)
                    .execute(&mut *connection)
                    .await?
                    .last_insert_id()
            }
        };
        let Some(found_id) = id else {
            anyhow::bail!("No id returned for inserted post");
        };
        Ok(found_id)
    }

    /// Find a post by its identifier.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_by_id(&self, post_id: i64) -> anyhow::Result<Option<Post>> {
        let statement = "
            SELECT *
            FROM post
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Post>(statement)
                    .bind(post_id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find all posts, oldest first.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Post>> {
        let statement = "
            SELECT *
            FROM post
            ORDER BY id ASC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Post>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Replace the body of the post with the given identifier.
    ///
    /// # Errors
    /// Errors if the post cannot be updated.
    async fn update_body(&self, post_id: i64, body: &str) -> anyhow::Result<()> {
        let statement = "
            UPDATE post
            SET body = $1
            WHERE id = $2
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(body)
                    .bind(post_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }
}
