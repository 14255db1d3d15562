//! Author service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorInput, AuthorRecord},
        response::Lookup,
    },
    repository::AuthorStoreArc,
};

#[derive(Clone)]
pub struct AuthorService {
    store: AuthorStoreArc,
    reject_blank_names: bool,
}

impl AuthorService {
    pub fn new(store: AuthorStoreArc, reject_blank_names: bool) -> Self {
        Self {
            store,
            reject_blank_names,
        }
    }

    /// List all authors in store order
    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        self.store.list().await
    }

    /// Resolve an author by id; a missing id is a normal outcome
    pub async fn get_by_id(&self, id: i64) -> AppResult<Lookup<Author>> {
        Ok(self.store.find_by_id(id).await?.into())
    }

    /// Persist a new author. Any id in the input is ignored.
    pub async fn create(&self, input: AuthorInput) -> AppResult<Author> {
        self.check_names(&input)?;
        let author = self.store.save(AuthorRecord::from_input(input)).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    /// Replace the names of an existing author. Never inserts.
    pub async fn update(&self, id: i64, input: AuthorInput) -> AppResult<Author> {
        self.check_names(&input)?;

        let mut record: AuthorRecord = self
            .get_by_id(id)
            .await?
            .found_or_else(|| AppError::author_not_found(id))?
            .into();
        record.first_name = input.first_name;
        record.last_name = input.last_name;

        let author = self.store.save(record).await?;
        tracing::info!(author_id = id, "Author updated");
        Ok(author)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_by_id(id).await? {
            return Err(AppError::author_not_found(id));
        }
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }

    /// Check the record store answers, without reading any records
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    fn check_names(&self, input: &AuthorInput) -> AppResult<()> {
        if self.reject_blank_names {
            input.validate()?;
        }
        Ok(())
    }
}
