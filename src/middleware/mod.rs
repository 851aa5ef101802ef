// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (session gating, security headers).

pub mod auth;
pub mod security;

pub use auth::{require_admin, require_session, require_trainer, require_user, AuthUser};
