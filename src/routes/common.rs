// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routes shared by every signed-in screen-set: profile, reminders, chat
//! and the rest timer.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Reminder, Role, Trainer, User, UserPatch};
use crate::routes::generate_id;
use crate::services::{ChatMessage, TimerSnapshot};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reminders", get(get_reminders))
        .route(
            "/api/profile",
            get(get_profile).put(update_profile).post(create_profile),
        )
        .route("/api/chat", get(get_chat).post(send_chat))
        .route("/api/timer", get(get_timer))
        .route("/api/timer/start", post(start_timer))
        .route("/api/timer/custom", post(start_custom_timer))
        .route("/api/timer/pause", post(pause_timer))
        .route("/api/timer/reset", post(reset_timer))
}

// ─── Reminders ───────────────────────────────────────────────

async fn get_reminders(State(state): State<Arc<AppState>>) -> Json<Vec<Reminder>> {
    let reminders = state.directory.read().await.reminders();
    Json(reminders.to_vec())
}

// ─── Profile ─────────────────────────────────────────────────

/// Fields a person may edit on their own profile.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100))]
    name: Option<String>,
    #[validate(email)]
    email: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl ProfileUpdate {
    /// Trim text fields so blank input fails validation.
    fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_string()),
            email: self.email.map(|email| email.trim().to_string()),
            ..self
        }
    }
}

/// Details needed to create a profile for an account that has none.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[validate(email)]
    email: String,
    birth_date: NaiveDate,
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>> {
    let profile_id = user.profile_id()?;
    let profile = state
        .directory
        .read()
        .await
        .get_user_by_id(profile_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", profile_id)))?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<User>> {
    let req = req.normalized();
    req.validate()?;
    let profile_id = user.profile_id()?;

    let patch = UserPatch {
        name: req.name,
        email: req.email,
        birth_date: req.birth_date,
        ..Default::default()
    };
    let updated = state
        .directory
        .write()
        .await
        .update_user(profile_id, patch)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", profile_id)))?;

    tracing::info!(username = %user.identity.username, user_id = %profile_id, "Profile updated");
    Ok(Json(updated))
}

/// Create and link a directory profile for the signed-in account.
///
/// Trainer accounts also get an empty trainer record under the same id so
/// they can be assigned clients right away.
async fn create_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<NewProfile>,
) -> Result<(StatusCode, Json<User>)> {
    req.validate()?;
    if user.identity.profile_id.is_some() {
        return Err(AppError::Conflict(
            "Account already has a profile".to_string(),
        ));
    }

    let prefix = match user.identity.role {
        Role::Administrator => "a",
        Role::Trainer => "t",
        Role::User => "u",
    };
    let profile = User {
        id: generate_id(prefix),
        name: user.identity.full_name.clone(),
        email: req.email,
        birth_date: req.birth_date,
        role: user.identity.role,
        trainer_id: None,
        nutrition_goal: None,
        macros: None,
        exercises: None,
    };

    // Lock order: session before directory, same as every other writer.
    let mut session = state.session.write().await;
    if !session.link_profile(&profile.id) {
        return Err(AppError::Unauthorized);
    }
    let mut directory = state.directory.write().await;
    directory.add_user(profile.clone());
    if profile.role == Role::Trainer {
        directory.add_trainer(Trainer {
            id: profile.id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: None,
            users: Vec::new(),
        });
    }

    tracing::info!(
        username = %user.identity.username,
        user_id = %profile.id,
        "Profile created"
    );
    Ok((StatusCode::CREATED, Json(profile)))
}

// ─── Chat ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
}

async fn get_chat(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.lock().await.history().to_vec())
}

async fn send_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatMessage>> {
    let mut chat = state.chat.lock().await;
    let reply = chat
        .send(&req.message)
        .cloned()
        .ok_or_else(|| AppError::BadRequest("Empty message".to_string()))?;
    Ok(Json(reply))
}

// ─── Timer ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StartTimerRequest {
    #[serde(default)]
    seconds: Option<u32>,
}

#[derive(Deserialize)]
pub struct CustomTimerRequest {
    #[serde(default)]
    minutes: u32,
    #[serde(default)]
    seconds: u32,
}

/// Timer state plus the presets the client renders as buttons.
#[derive(Serialize)]
pub struct TimerResponse {
    #[serde(flatten)]
    pub timer: TimerSnapshot,
    pub presets: [u32; 4],
}

impl From<TimerSnapshot> for TimerResponse {
    fn from(timer: TimerSnapshot) -> Self {
        Self {
            timer,
            presets: crate::services::timer::QUICK_TIMES,
        }
    }
}

async fn get_timer(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    Json(state.timer.snapshot().into())
}

async fn start_timer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartTimerRequest>,
) -> Result<Json<TimerResponse>> {
    Ok(Json(state.timer.start(req.seconds)?.into()))
}

async fn start_custom_timer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomTimerRequest>,
) -> Result<Json<TimerResponse>> {
    Ok(Json(
        state.timer.start_custom(req.minutes, req.seconds)?.into(),
    ))
}

async fn pause_timer(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    Json(state.timer.pause().into())
}

async fn reset_timer(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    Json(state.timer.reset().into())
}
