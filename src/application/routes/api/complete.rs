use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::errors::ApiError;
use crate::application::state::AppState;
use crate::domain::categories::Category;
use crate::domain::shelves::ShelfItem;
use crate::domain::year_window::{YearWindow, parse_year};

/// Response body for every `/api/complete` route.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletedItems {
    pub data: Vec<ShelfItem>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn completed_this_year(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CompletedItems>, ApiError> {
    completed(&state, &category, None).await
}

#[tracing::instrument(skip(state))]
pub(crate) async fn completed_in_year(
    State(state): State<AppState>,
    Path((category, year)): Path<(String, String)>,
) -> Result<Json<CompletedItems>, ApiError> {
    completed(&state, &category, Some(&year)).await
}

#[tracing::instrument(skip(state))]
pub(crate) async fn completed_screen_this_year(
    State(state): State<AppState>,
) -> Result<Json<CompletedItems>, ApiError> {
    completed_screen(&state, None).await
}

#[tracing::instrument(skip(state))]
pub(crate) async fn completed_screen_in_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<CompletedItems>, ApiError> {
    completed_screen(&state, Some(&year)).await
}

async fn completed(
    state: &AppState,
    category: &str,
    year: Option<&str>,
) -> Result<Json<CompletedItems>, ApiError> {
    // Category first, so an unknown category is reported whatever the year segment holds.
    let category: Category = category.parse()?;
    let window = YearWindow::for_request(year.map(parse_year).transpose()?)?;

    let data = state
        .completion_service
        .completed_in_year(category, &window)
        .await?;

    info!(%category, year = window.year(), items = data.len(), "completed items served");
    Ok(Json(CompletedItems { data }))
}

async fn completed_screen(
    state: &AppState,
    year: Option<&str>,
) -> Result<Json<CompletedItems>, ApiError> {
    let window = YearWindow::for_request(year.map(parse_year).transpose()?)?;

    let data = state
        .completion_service
        .completed_screen_in_year(&window)
        .await?;

    info!(year = window.year(), items = data.len(), "completed screen items served");
    Ok(Json(CompletedItems { data }))
}
