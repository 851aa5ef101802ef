// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session and screen-set gating middleware.

use crate::error::AppError;
use crate::models::{Identity, ScreenSet};
use crate::services::role_router;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated session extracted for handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
    pub screen: ScreenSet,
}

impl AuthUser {
    /// Directory profile of the account, or 404 if it has none.
    pub fn profile_id(&self) -> Result<&str, AppError> {
        self.identity.profile_id.as_deref().ok_or_else(|| {
            AppError::NotFound(format!(
                "No profile linked to account {}",
                self.identity.username
            ))
        })
    }
}

async fn current_user(state: &AppState) -> Result<AuthUser, AppError> {
    let session = state.session.read().await;
    let identity = session.current().cloned().ok_or(AppError::Unauthorized)?;
    let screen = role_router::select(Some(&identity));
    Ok(AuthUser { identity, screen })
}

/// Middleware that requires an active session.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = current_user(&state).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

async fn require_screen(
    expected: ScreenSet,
    state: &AppState,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = current_user(state).await?;
    if user.screen != expected {
        tracing::warn!(
            username = %user.identity.username,
            screen = ?user.screen,
            required = ?expected,
            "Screen-set access denied"
        );
        return Err(AppError::Forbidden);
    }
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_screen(ScreenSet::Admin, &state, request, next).await
}

pub async fn require_trainer(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_screen(ScreenSet::Trainer, &state, request, next).await
}

pub async fn require_user(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_screen(ScreenSet::User, &state, request, next).await
}
