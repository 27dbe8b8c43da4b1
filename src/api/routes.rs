//! Axum handlers for the notes REST API.
//!
//! Store access is synchronous file I/O, so every service call runs on the
//! blocking pool.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, ErrorBody};
use super::validation::{
    validate_new_note, validate_note_update, CreateNoteRequest, DeleteManyRequest,
    UpdateNoteRequest,
};
use super::AppState;
use crate::entity::{Note, NoteSummary};
use crate::repository::NoteRepository;
use crate::service::{NoteService, SortKey};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// `title`, `creationDate` or `modificationDate`; anything else keeps storage order.
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    pub notes: usize,
}

async fn run_blocking<R, T, F>(state: &AppState<R>, call: F) -> Result<T, ApiError>
where
    R: NoteRepository + 'static,
    T: Send + 'static,
    F: FnOnce(&NoteService<R>) -> crate::error::Result<T> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    let result = tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| ApiError::InternalError {
            message: format!("worker task failed: {}", e),
        })?;
    Ok(result?)
}

// POST /notes
#[utoipa::path(
    post,
    path = "/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 500, description = "Store could not be read or written", body = ErrorBody)
    )
)]
pub async fn create_note<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(request) = body?;
    let payload = validate_new_note(request)?;
    let note = run_blocking(&state, move |service| service.create(payload)).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

// GET /notes?sort=title|creationDate|modificationDate
#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    params(ListQuery),
    responses(
        (status = 200, description = "Every note without its content", body = [NoteSummary]),
        (status = 500, description = "Store could not be read", body = ErrorBody)
    )
)]
pub async fn list_notes<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    let Query(query) = query?;
    let sort = SortKey::parse_optional(query.sort.as_deref());
    let notes = run_blocking(&state, move |service| service.find_all(sort)).await?;
    Ok(Json(notes))
}

// GET /notes/{id}
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "The full note", body = Note),
        (status = 404, description = "No note with this id", body = ErrorBody)
    )
)]
pub async fn get_note<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let note = run_blocking(&state, move |service| service.find_one(&id)).await?;
    Ok(Json(note))
}

// PATCH /notes/{id}
#[utoipa::path(
    patch,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "The updated note", body = Note),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "No note with this id", body = ErrorBody)
    )
)]
pub async fn update_note<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(request) = body?;
    let update = validate_note_update(request)?;
    let note = run_blocking(&state, move |service| service.update(&id, update)).await?;
    Ok(Json(note))
}

// DELETE /notes/{id}
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = bool),
        (status = 404, description = "No note with this id", body = ErrorBody)
    )
)]
pub async fn delete_note<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let target = id.clone();
    if run_blocking(&state, move |service| service.remove(&target)).await? {
        Ok(Json(true))
    } else {
        Err(ApiError::NotFound { id })
    }
}

// DELETE /notes
#[utoipa::path(
    delete,
    path = "/notes",
    tag = "notes",
    request_body = DeleteManyRequest,
    responses(
        (status = 200, description = "Whether any listed note was removed", body = bool),
        (status = 400, description = "Invalid payload", body = ErrorBody)
    )
)]
pub async fn delete_notes<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
    body: Result<Json<DeleteManyRequest>, JsonRejection>,
) -> Result<Json<bool>, ApiError> {
    let Json(request) = body?;
    let removed = run_blocking(&state, move |service| service.remove_many(&request.ids)).await?;
    Ok(Json(removed))
}

// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus),
        (status = 500, description = "Store could not be read", body = ErrorBody)
    )
)]
pub async fn health<R: NoteRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<HealthStatus>, ApiError> {
    let notes = run_blocking(&state, |service| service.count()).await?;
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
        notes,
    }))
}
