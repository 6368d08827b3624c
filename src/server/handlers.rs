//! Request handlers for the pacing API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::errors::DomainError;
use crate::domain::models::DateRange;
use crate::domain::ports::GoalRepository;
use crate::server::error::ApiError;
use crate::services::{CommitAggregator, ProgressPlanner};

/// Shared state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<CommitAggregator>,
    pub goals: Arc<dyn GoalRepository>,
    /// The tracked author.
    pub username: String,
    /// Key-value slot the yearly target is stored under.
    pub goal_slot: String,
}

/// Query parameters for the aggregation endpoints.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub since: Option<String>,
    pub until: Option<String>,
}

impl RangeQuery {
    /// Both parameters are required; absence of either is the
    /// caller's error.
    fn into_range(self) -> Result<DateRange, ApiError> {
        match (self.since, self.until) {
            (Some(since), Some(until)) => {
                DateRange::parse(&since, &until).map_err(ApiError::from)
            }
            _ => Err(ApiError::from(DomainError::MissingParameters)),
        }
    }
}

/// Body for `PUT /goal`.
#[derive(Debug, Deserialize)]
pub struct SetGoalRequest {
    pub target: u64,
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /commits?since&until` — aggregate the commit count for the
/// configured author over the range.
pub async fn get_commits(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Value>, ApiError> {
    let range = params.into_range()?;
    let total = state.aggregator.aggregate(&state.username, &range).await?;
    Ok(Json(json!({ "totalCommits": total })))
}

/// `GET /progress?since&until` — aggregate, then project pacing
/// against the stored yearly target.
pub async fn get_progress(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Value>, ApiError> {
    let range = params.into_range()?;
    let target = state
        .goals
        .load(&state.goal_slot)
        .await?
        .ok_or(DomainError::GoalNotSet)?;

    let total = state.aggregator.aggregate(&state.username, &range).await?;
    let report = ProgressPlanner::compute_progress(total, target, Local::now().date_naive());

    Ok(Json(json!({
        "totalCommits": total,
        "message": report.pace_message(),
        "report": report,
    })))
}

/// `GET /goal` — read the stored yearly target.
pub async fn get_goal(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let target = state
        .goals
        .load(&state.goal_slot)
        .await?
        .ok_or(DomainError::GoalNotSet)?;
    Ok(Json(json!({ "target": target })))
}

/// `PUT /goal` — save (or overwrite) the yearly target.
pub async fn put_goal(
    State(state): State<AppState>,
    Json(body): Json<SetGoalRequest>,
) -> Result<Json<Value>, ApiError> {
    state.goals.save(&state.goal_slot, body.target).await?;
    Ok(Json(json!({ "target": body.target })))
}
