// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trainer routes: assigned clients, their routines and nutrition.
//!
//! A trainer only sees users assigned to them; anyone else is reported as
//! not found.

use crate::db::directory::exercise_count;
use crate::db::DirectoryStore;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Macros, NutritionGoal, Routine, User};
use crate::time_utils::age_on;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trainer/users", get(list_assigned))
        .route("/api/trainer/users/{id}", get(get_assigned))
        .route("/api/trainer/users/{id}/exercises", put(set_exercises))
        .route("/api/trainer/users/{id}/nutrition", put(set_nutrition))
}

/// Summary card for the assigned-users list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub nutrition_goal: Option<NutritionGoal>,
    pub exercise_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUserDetail {
    #[serde(flatten)]
    pub user: User,
    pub age: u32,
}

fn assigned_user(directory: &DirectoryStore, trainer_id: &str, user_id: &str) -> Result<User> {
    directory
        .get_user_by_id(user_id)
        .filter(|user| user.trainer_id.as_deref() == Some(trainer_id))
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

async fn list_assigned(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AssignedUserSummary>>> {
    let trainer_id = user.profile_id()?;
    let summaries = state
        .directory
        .read()
        .await
        .users_for_trainer(trainer_id)
        .into_iter()
        .map(|client| AssignedUserSummary {
            exercise_count: client.exercises.as_ref().map_or(0, exercise_count),
            id: client.id,
            name: client.name,
            email: client.email,
            nutrition_goal: client.nutrition_goal,
        })
        .collect();
    Ok(Json(summaries))
}

async fn get_assigned(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<AssignedUserDetail>> {
    let trainer_id = user.profile_id()?;
    let client = assigned_user(&*state.directory.read().await, trainer_id, &id)?;
    let age = age_on(client.birth_date, chrono::Utc::now().date_naive());
    Ok(Json(AssignedUserDetail { user: client, age }))
}

async fn set_exercises(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(routine): Json<Routine>,
) -> Result<Json<User>> {
    let trainer_id = user.profile_id()?;
    let mut directory = state.directory.write().await;
    assigned_user(&directory, trainer_id, &id)?;

    let updated = directory
        .set_exercises(&id, routine)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    tracing::info!(
        trainer_id = %trainer_id,
        user_id = %id,
        exercises = updated.exercises.as_ref().map_or(0, exercise_count),
        "Routine updated"
    );
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRequest {
    nutrition_goal: Option<NutritionGoal>,
    macros: Option<Macros>,
}

async fn set_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(req): Json<NutritionRequest>,
) -> Result<Json<User>> {
    let trainer_id = user.profile_id()?;
    let mut directory = state.directory.write().await;
    assigned_user(&directory, trainer_id, &id)?;

    let updated = directory
        .set_nutrition(&id, req.nutrition_goal, req.macros)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
    tracing::info!(trainer_id = %trainer_id, user_id = %id, "Nutrition plan updated");
    Ok(Json(updated))
}
