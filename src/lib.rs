//! Authors Server
//!
//! A REST JSON API for managing author records, backed by a pluggable
//! record store (in-memory or PostgreSQL).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire services on top of an explicitly provided record store
    pub fn new(config: &AppConfig, store: repository::AuthorStoreArc) -> Self {
        Self {
            services: Arc::new(services::Services::new(store, &config.validation)),
        }
    }
}
