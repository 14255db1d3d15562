//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Full author record as persisted by a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Store-assigned identifier, immutable once assigned
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Create or update author request.
///
/// There is no `id` field: an `id` key in the body, whatever its type, is
/// skipped like any other unknown key. Ids are assigned by the store on
/// insert and taken from the path on update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

impl AuthorInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Author not yet persisted, or an existing one being rewritten.
/// `id == None` asks the store to assign one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorRecord {
    /// New record built from client input; the store assigns the id
    pub fn from_input(input: AuthorInput) -> Self {
        Self {
            id: None,
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

impl From<Author> for AuthorRecord {
    fn from(author: Author) -> Self {
        Self {
            id: Some(author.id),
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

/// Status object returned as `data` after a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteStatus {
    pub id: i64,
    pub deleted: bool,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
