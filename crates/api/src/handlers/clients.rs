use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, instrument};

use super::AppState;
use crate::ApiError;
use db::{ClientFields, ClientRow, DbError};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub client_id: i32,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn store_error(state: &AppState, err: DbError) -> ApiError {
    match err {
        DbError::NotFound => ApiError::NotFound(state.messages.client_not_found.to_owned()),
        other => other.into(),
    }
}

#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClientRow>>, ApiError> {
    let clients = state.store.list().await?;
    debug!(count = clients.len(), "listed clients");
    Ok(Json(clients))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClientRow>, ApiError> {
    match state.store.get(&id).await {
        Ok(client) => Ok(Json(client)),
        Err(err) => Err(store_error(&state, err)),
    }
}

#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ClientFields>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(fields) = payload?;
    if !fields.has_required() {
        return Err(ApiError::BadRequest(
            state.messages.name_and_email_required.to_owned(),
        ));
    }

    match state.store.create(&fields).await {
        Ok(client_id) => {
            debug!(client_id, "client created");
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    client_id,
                    message: state.messages.client_created,
                }),
            ))
        }
        Err(err) if err.is_unique_violation() => Err(ApiError::Conflict(
            state.messages.email_already_registered.to_owned(),
        )),
        Err(err) => Err(err.into()),
    }
}

/// Full replace of `name`, `email` and `address`. Unlike `create`, the body
/// is passed to the store as-is.
#[instrument(skip_all, fields(id = %id))]
pub async fn update(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ClientFields>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(fields) = payload?;
    match state.store.update(&id, &fields).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: state.messages.client_updated,
        })),
        Err(err) => Err(store_error(&state, err)),
    }
}

#[instrument(skip_all, fields(id = %id))]
pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.store.delete(&id).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: state.messages.client_deleted,
        })),
        Err(err) => Err(store_error(&state, err)),
    }
}
