// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrator routes: manage users, trainers and assignments.

use crate::error::{AppError, Result};
use crate::models::{Macros, NutritionGoal, Role, Routine, Trainer, User, UserPatch};
use crate::routes::generate_id;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/users", get(list_users).post(create_user))
        .route(
            "/api/admin/users/{id}",
            patch(update_user).delete(delete_user),
        )
        .route("/api/admin/users/{id}/cycle-trainer", post(cycle_trainer))
        .route("/api/admin/trainers", get(list_trainers).post(create_trainer))
        .route("/api/admin/trainers/{id}/users", put(assign_users))
}

fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

fn trainer_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Trainer {} not found", id))
}

// ─── Users ───────────────────────────────────────────────────

/// Client user together with the name of their trainer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    #[serde(flatten)]
    pub user: User,
    pub trainer_name: Option<String>,
}

/// Clients (role `usuario`) with their current trainer.
async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<AdminUserView>> {
    let directory = state.directory.read().await;
    let trainers = directory.trainers();
    let views = directory
        .users()
        .iter()
        .filter(|user| user.role == Role::User)
        .map(|user| AdminUserView {
            trainer_name: trainers
                .iter()
                .find(|trainer| trainer.users.contains(&user.id))
                .map(|trainer| trainer.name.clone()),
            user: user.clone(),
        })
        .collect();
    Json(views)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    #[validate(length(min = 1, max = 64))]
    id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    name: String,
    #[validate(email)]
    email: String,
    birth_date: NaiveDate,
    role: Role,
    trainer_id: Option<String>,
    nutrition_goal: Option<NutritionGoal>,
    macros: Option<Macros>,
    exercises: Option<Routine>,
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    req.validate()?;
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("El nombre es obligatorio.".to_string()));
    }

    let user = User {
        id: req.id.unwrap_or_else(|| generate_id("u")),
        name,
        email: req.email,
        birth_date: req.birth_date,
        role: req.role,
        trainer_id: None,
        nutrition_goal: req.nutrition_goal,
        macros: req.macros,
        exercises: req.exercises,
    };

    let mut directory = state.directory.write().await;
    if let Some(trainer_id) = &req.trainer_id {
        if directory.get_trainer_by_id(trainer_id).is_none() {
            return Err(trainer_not_found(trainer_id));
        }
    }

    let id = user.id.clone();
    directory.add_user(user);
    if let Some(trainer_id) = req.trainer_id {
        let mut users = directory
            .get_trainer_by_id(&trainer_id)
            .map(|trainer| trainer.users)
            .unwrap_or_default();
        users.push(id.clone());
        directory.update_trainer_users(&trainer_id, &users);
    }

    let created = directory
        .get_user_by_id(&id)
        .ok_or_else(|| anyhow::anyhow!("user {} missing right after insert", id))?;
    tracing::info!(user_id = %id, role = %created.role, "User created by admin");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>> {
    let updated = state
        .directory
        .write()
        .await
        .update_user(&id, patch)
        .ok_or_else(|| user_not_found(&id))?;
    Ok(Json(updated))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .directory
        .write()
        .await
        .delete_user(&id)
        .ok_or_else(|| user_not_found(&id))?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTrainerResponse {
    pub user_id: String,
    pub trainer_id: String,
}

/// Move a user to the next trainer in list order.
async fn cycle_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CycleTrainerResponse>> {
    let mut directory = state.directory.write().await;
    if directory.get_user_by_id(&id).is_none() {
        return Err(user_not_found(&id));
    }
    let trainer_id = directory
        .cycle_trainer(&id)
        .ok_or_else(|| AppError::BadRequest("No trainers available".to_string()))?;
    Ok(Json(CycleTrainerResponse {
        user_id: id,
        trainer_id,
    }))
}

// ─── Trainers ────────────────────────────────────────────────

async fn list_trainers(State(state): State<Arc<AppState>>) -> Json<Vec<Trainer>> {
    Json(state.directory.read().await.trainers().to_vec())
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTrainerRequest {
    #[validate(length(min = 1, max = 64))]
    id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    name: String,
    #[validate(email)]
    email: Option<String>,
    #[validate(length(max = 32))]
    phone: Option<String>,
}

impl NewTrainerRequest {
    /// Trim inputs and drop optional fields left blank in the form.
    fn normalized(self) -> Self {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            id: non_blank(self.id),
            name: self.name.trim().to_string(),
            email: non_blank(self.email),
            phone: non_blank(self.phone),
        }
    }
}

async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTrainerRequest>,
) -> Result<(StatusCode, Json<Trainer>)> {
    let req = req.normalized();
    req.validate()?;

    let id = req.id.unwrap_or_else(|| generate_id("t"));
    let trainer = Trainer {
        email: req
            .email
            .unwrap_or_else(|| format!("{}@example.com", chrono::Utc::now().timestamp_millis())),
        id,
        name: req.name,
        phone: req.phone,
        users: Vec::new(),
    };

    state.directory.write().await.add_trainer(trainer.clone());
    tracing::info!(trainer_id = %trainer.id, "Trainer created by admin");
    Ok((StatusCode::CREATED, Json(trainer)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUsersRequest {
    user_ids: Vec<String>,
}

/// Replace a trainer's assigned users.
async fn assign_users(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AssignUsersRequest>,
) -> Result<Json<Trainer>> {
    let mut directory = state.directory.write().await;
    if directory.get_trainer_by_id(&id).is_none() {
        return Err(trainer_not_found(&id));
    }
    directory.update_trainer_users(&id, &req.user_ids);
    let trainer = directory
        .get_trainer_by_id(&id)
        .ok_or_else(|| trainer_not_found(&id))?;
    Ok(Json(trainer))
}
