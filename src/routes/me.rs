// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-user routes: own routine and nutrition.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{MacroProgress, Meal, NutritionGoal, Routine};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me/exercises", get(get_exercises))
        .route("/api/me/nutrition", get(get_nutrition))
        .route("/api/me/meals", post(log_meal))
}

fn profile_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

/// Own routine. Users without one get an empty map.
async fn get_exercises(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Routine>> {
    let id = user.profile_id()?;
    let directory = state.directory.read().await;
    if directory.get_user_by_id(id).is_none() {
        return Err(profile_not_found(id));
    }
    Ok(Json(directory.get_exercises_by_user(id).unwrap_or_default()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResponse {
    pub goal: Option<NutritionGoal>,
    pub progress: MacroProgress,
}

async fn get_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<NutritionResponse>> {
    let id = user.profile_id()?;
    let directory = state.directory.read().await;
    let profile = directory.get_user_by_id(id).ok_or_else(|| profile_not_found(id))?;
    let progress = directory
        .nutrition_progress(id)
        .ok_or_else(|| profile_not_found(id))?;
    Ok(Json(NutritionResponse {
        goal: profile.nutrition_goal,
        progress,
    }))
}

async fn log_meal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(meal): Json<Meal>,
) -> Result<Json<MacroProgress>> {
    let id = user.profile_id()?;
    let progress = state
        .directory
        .write()
        .await
        .log_meal(id, &meal)
        .ok_or_else(|| profile_not_found(id))?;
    Ok(Json(progress))
}
