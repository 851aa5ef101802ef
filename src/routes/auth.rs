// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and session routes.

use crate::error::Result;
use crate::models::{Identity, Registration, ScreenSet};
use crate::services::role_router;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// Current identity and the screen-set the client should mount.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub identity: Option<Identity>,
    pub screen: ScreenSet,
}

impl SessionResponse {
    fn from_identity(identity: Option<&Identity>) -> Self {
        Self {
            identity: identity.cloned(),
            screen: role_router::select(identity),
        }
    }
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    let mut session = state.session.write().await;
    let identity = session.login(&req.username, &req.password)?;
    Ok(Json(SessionResponse::from_identity(Some(identity))))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Registration>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let mut session = state.session.write().await;
    let identity = session.register(req)?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_identity(Some(identity))),
    ))
}

async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.session.write().await.logout();
    // A new user on the device starts with a fresh timer and chat.
    state.timer.reset();
    *state.chat.lock().await = Default::default();
    StatusCode::NO_CONTENT
}

async fn session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(SessionResponse::from_identity(session.current()))
}
