//! Repository layer: record stores for authors

pub mod authors;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorRecord},
};

pub use authors::PgAuthorStore;
pub use memory::MemoryAuthorStore;

/// Persistence capability the author service depends on.
///
/// Implementations are responsible for the atomicity of their own
/// `save` and `delete_by_id` operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All authors, in the store's natural order
    async fn list(&self) -> AppResult<Vec<Author>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>>;

    /// Insert when `record.id` is `None` (the store assigns the id), otherwise
    /// rewrite the existing record. Rewriting a missing id is a `NotFound` error.
    async fn save(&self, record: AuthorRecord) -> AppResult<Author>;

    /// Returns `true` if a record existed and was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Cheap round-trip proving the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

pub type AuthorStoreArc = Arc<dyn AuthorStore>;
