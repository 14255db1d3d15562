//! Data models for the authors server

pub mod author;
pub mod response;

// Re-export commonly used types
pub use author::{Author, AuthorInput, AuthorRecord, DeleteStatus};
pub use response::{ApiResponse, Lookup};
