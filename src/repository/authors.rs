//! PostgreSQL author store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::AuthorStore;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorRecord},
};

#[derive(Clone)]
pub struct PgAuthorStore {
    pool: Pool<Postgres>,
}

impl PgAuthorStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the `authors` table if it does not exist yet
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))
    }
}

#[async_trait]
impl AuthorStore for PgAuthorStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, record: AuthorRecord) -> AppResult<Author> {
        match record.id {
            Some(id) => sqlx::query_as::<_, Author>(
                r#"
                UPDATE authors SET first_name = $1, last_name = $2
                WHERE id = $3
                RETURNING id, first_name, last_name
                "#,
            )
            .bind(&record.first_name)
            .bind(&record.last_name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::author_not_found(id)),
            None => {
                let row = sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (first_name, last_name)
                    VALUES ($1, $2)
                    RETURNING id, first_name, last_name
                    "#,
                )
                .bind(&record.first_name)
                .bind(&record.last_name)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
