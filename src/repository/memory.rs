//! In-memory author store

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AuthorStore;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorRecord},
};

#[derive(Debug)]
struct Inner {
    authors: BTreeMap<i64, Author>,
    /// Highest id ever assigned or seeded
    last_id: i64,
}

/// In-memory implementation of the author store.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct MemoryAuthorStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryAuthorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorStore {
    /// Creates a new empty memory store.
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Creates a new memory store with initial data.
    pub fn with_data(authors: Vec<Author>) -> Self {
        let last_id = authors.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner {
                authors: authors.into_iter().map(|a| (a.id, a)).collect(),
                last_id,
            }),
        }
    }
}

#[async_trait]
impl AuthorStore for MemoryAuthorStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let inner = self.inner.read().await;
        Ok(inner.authors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let inner = self.inner.read().await;
        Ok(inner.authors.get(&id).cloned())
    }

    async fn save(&self, record: AuthorRecord) -> AppResult<Author> {
        let mut inner = self.inner.write().await;
        match record.id {
            Some(id) => {
                let author = inner
                    .authors
                    .get_mut(&id)
                    .ok_or_else(|| AppError::author_not_found(id))?;
                author.first_name = record.first_name;
                author.last_name = record.last_name;
                Ok(author.clone())
            }
            None => {
                let id = inner
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| AppError::Internal("author id space exhausted".to_string()))?;
                inner.last_id = id;
                let author = Author {
                    id,
                    first_name: record.first_name,
                    last_name: record.last_name,
                };
                inner.authors.insert(id, author.clone());
                Ok(author)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.authors.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
