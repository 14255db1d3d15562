//! Business logic services

pub mod authors;

use crate::{config::ValidationConfig, repository::AuthorStoreArc};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: AuthorStoreArc, validation: &ValidationConfig) -> Self {
        Self {
            authors: authors::AuthorService::new(store, validation.reject_blank_names),
        }
    }
}
