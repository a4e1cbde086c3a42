//! Goal CRUD handlers.
//!
//! Request bodies are decoded from raw bytes so clients need not send a
//! `Content-Type` header; any decoding failure is a 400. Path and body
//! extractor rejections are taken as `Result`s so they also leave as JSON.

use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::{debug, info};

use todo_api_core::{Goal, GoalId, GoalInput, Page};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List goals.
///
/// `start` and `count` are read leniently: missing, non-numeric, or
/// out-of-range values fall back to the defaults.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn list_goals(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Goal>>> {
    let page = Page::from_query(
        params.get("start").map(String::as_str),
        params.get("count").map(String::as_str),
    );
    let goals = state.store().list(page).await?;
    Ok(Json(goals))
}

/// Fetch one goal.
///
/// # Errors
///
/// Returns 400 for a non-numeric id, 404 if absent, 500 if the store fails.
pub async fn get_goal(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Goal>> {
    let id = parse_id(path)?;
    let goal = state.store().get(id).await?;
    Ok(Json(goal))
}

/// Create a goal.
///
/// # Errors
///
/// Returns 400 for an invalid body, 500 if the store fails.
pub async fn create_goal(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Goal>)> {
    let input = parse_input(body)?;
    let goal = state.store().insert(input).await?;

    info!(goal_id = %goal.id, "Created goal");
    Ok((StatusCode::CREATED, Json(goal)))
}

/// Update a goal's name and description.
///
/// An absent id is not an error: nothing is written and the input is echoed
/// back under the path id.
///
/// # Errors
///
/// Returns 400 for a non-numeric id or invalid body, 500 if the store fails.
pub async fn update_goal(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Goal>> {
    let id = parse_id(path)?;
    let input = parse_input(body)?;
    let goal = state.store().update(id, input).await?;

    info!(goal_id = %goal.id, "Updated goal");
    Ok(Json(goal))
}

/// Delete a goal. Deleting an absent id still reports success.
///
/// # Errors
///
/// Returns 400 for a non-numeric id, 500 if the store fails.
pub async fn delete_goal(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Value>> {
    let id = parse_id(path)?;
    state.store().delete(id).await?;

    info!(goal_id = %id, "Deleted goal");
    Ok(Json(json!({ "result": "success" })))
}

fn invalid_id() -> AppError {
    AppError::BadRequest("Invalid goal ID".to_string())
}

fn invalid_payload() -> AppError {
    AppError::BadRequest("Invalid request payload".to_string())
}

fn parse_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<GoalId> {
    let Path(raw) = path.map_err(|rejection| {
        debug!(error = %rejection, "Rejected goal id");
        invalid_id()
    })?;
    raw.parse().map_err(|_| invalid_id())
}

fn parse_input(body: std::result::Result<Bytes, BytesRejection>) -> Result<GoalInput> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        invalid_payload()
    })?;
    let input: GoalInput = serde_json::from_slice(&body).map_err(|_| invalid_payload())?;
    input
        .validate()
        .map_err(|_| AppError::BadRequest("Goal name is required".to_string()))?;
    Ok(input)
}
