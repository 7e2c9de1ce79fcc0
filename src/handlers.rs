use crate::errors::AppError;
use crate::models::{DailyStats, DateWindow, DaySnapshot, DisplayFigures, RefreshResponse};
use crate::refresh::RefreshOutcome;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn get_today(State(state): State<AppState>) -> Result<Json<DailyStats>, AppError> {
    let snapshot = current_snapshot(&state).await?;
    Ok(Json(snapshot.stats.clone()))
}

pub async fn get_display(State(state): State<AppState>) -> Result<Json<DisplayFigures>, AppError> {
    let snapshot = current_snapshot(&state).await?;
    Ok(Json(snapshot.display))
}

pub async fn get_dates(State(state): State<AppState>) -> Result<Json<DateWindow>, AppError> {
    let snapshot = current_snapshot(&state).await?;
    Ok(Json(snapshot.window.clone()))
}

pub async fn get_snapshot(State(state): State<AppState>) -> Result<Json<DaySnapshot>, AppError> {
    let snapshot = current_snapshot(&state).await?;
    Ok(Json(snapshot.as_ref().clone()))
}

pub async fn refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let outcome = state.refresh().await;
    let date = state
        .snapshots
        .current()
        .await
        .map(|snapshot| snapshot.date.clone());

    let response = match outcome {
        RefreshOutcome::Applied => RefreshResponse {
            outcome: "applied".into(),
            date,
            message: None,
        },
        RefreshOutcome::Superseded => RefreshResponse {
            outcome: "superseded".into(),
            date,
            message: None,
        },
        RefreshOutcome::Failed(message) => RefreshResponse {
            outcome: "failed".into(),
            date,
            message: Some(message),
        },
    };
    Json(response)
}

async fn current_snapshot(state: &AppState) -> Result<Arc<DaySnapshot>, AppError> {
    state
        .snapshots
        .current()
        .await
        .ok_or_else(|| AppError::unavailable("no snapshot available"))
}
