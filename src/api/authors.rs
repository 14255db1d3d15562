//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorInput, DeleteStatus},
        response::{ApiResponse, Lookup},
    },
    AppState,
};

use super::{AppJson, AuthorId};

/// Envelope holding a single author
#[derive(Serialize, ToSchema)]
pub struct AuthorEnvelope {
    pub data: Author,
    pub message: String,
}

/// Envelope holding a list of authors
#[derive(Serialize, ToSchema)]
pub struct AuthorListEnvelope {
    pub data: Vec<Author>,
    pub message: String,
}

/// Envelope returned after a delete
#[derive(Serialize, ToSchema)]
pub struct DeleteEnvelope {
    pub data: DeleteStatus,
    pub message: String,
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors/",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = AuthorListEnvelope)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Author>>>> {
    let authors = state.services.authors.list_all().await?;
    Ok(Json(ApiResponse::success(authors)))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}/",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorEnvelope),
        (status = 400, description = "Malformed author ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
) -> AppResult<Json<ApiResponse<Author>>> {
    match state.services.authors.get_by_id(id).await? {
        Lookup::Found(author) => Ok(Json(ApiResponse::success(author))),
        Lookup::NotFound => Err(AppError::author_not_found(id)),
    }
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors/",
    tag = "authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = AuthorEnvelope),
        (status = 400, description = "Invalid author data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(input): AppJson<AuthorInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<Author>>)> {
    let author = state.services.authors.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(author))))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}/",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author updated", body = AuthorEnvelope),
        (status = 400, description = "Malformed author ID or data", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
    AppJson(input): AppJson<AuthorInput>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.services.authors.update(id, input).await?;
    Ok(Json(ApiResponse::with_message(
        author,
        format!("author with id {} has been successfully updated", id),
    )))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}/",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = DeleteEnvelope),
        (status = 400, description = "Malformed author ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
) -> AppResult<Json<ApiResponse<DeleteStatus>>> {
    state.services.authors.delete(id).await?;
    Ok(Json(ApiResponse::with_message(
        DeleteStatus { id, deleted: true },
        format!("author with id {} has been successfully deleted", id),
    )))
}
