// rest/routes/tasks.rs — Task CRUD routes.
//
// Status strings are parsed into the typed enum here, at the boundary.
// Everything past this module works with `Status` values, never raw strings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::task::{NewTask, Status, Task, TaskPatch};
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// Path segments are taken as raw strings so a non-numeric id still gets the
/// `{"error": …}` envelope instead of axum's plaintext rejection.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation("Invalid task id"))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    // A missing title reports before a bad status value
    if body.title.as_deref().unwrap_or("").is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    let status = match body.status.as_deref() {
        None => Status::Pending,
        Some(s) => s
            .parse()
            .map_err(|_| ApiError::validation("Invalid status"))?,
    };
    let new = NewTask {
        title: body.title.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        status,
    };
    let task = ctx.storage.create_task(new).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let filter = match query.status.as_deref() {
        // `?status=` with no value means unfiltered
        None | Some("") => None,
        Some(s) => Some(
            s.parse()
                .map_err(|_| ApiError::validation("Invalid status filter"))?,
        ),
    };
    let tasks = ctx.storage.list_tasks(filter).await?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = ctx.storage.get_task(parse_id(&id)?).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    // 404 takes precedence over a bad status value
    let existing = ctx.storage.get_task(parse_id(&id)?).await?;
    let status = match body.status.as_deref() {
        None => None,
        Some(s) => Some(
            s.parse::<Status>()
                .map_err(|_| ApiError::validation("Invalid status"))?,
        ),
    };
    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        status,
    };
    let task = ctx.storage.update_task(existing, patch).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    ctx.storage.delete_task(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Task deleted" })))
}
