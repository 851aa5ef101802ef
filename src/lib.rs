// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitcoach: role-scoped state for a fitness coaching app
//!
//! This crate provides the backend the mobile client talks to: the
//! session and directory stores, the role router that picks which
//! screen-set a session sees, and small helpers (rest timer, chat
//! assistant, nutrition tracking).

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{DirectoryStore, SessionStore};
use services::{ChatAssistant, CountdownTimer};
use tokio::sync::{Mutex, RwLock};

/// Shared application state.
///
/// There is exactly one session per process; logging in replaces it.
pub struct AppState {
    pub config: Config,
    pub session: RwLock<SessionStore>,
    pub directory: RwLock<DirectoryStore>,
    pub chat: Mutex<ChatAssistant>,
    pub timer: CountdownTimer,
}

impl AppState {
    /// Build state from config, loading demo data when enabled.
    pub fn new(config: Config) -> Self {
        let (session, directory) = if config.seed_demo_data {
            db::seeded()
        } else {
            (SessionStore::default(), DirectoryStore::default())
        };
        Self::with_stores(config, session, directory)
    }

    pub fn with_stores(config: Config, session: SessionStore, directory: DirectoryStore) -> Self {
        Self {
            config,
            session: RwLock::new(session),
            directory: RwLock::new(directory),
            chat: Mutex::new(ChatAssistant::default()),
            timer: CountdownTimer::new(),
        }
    }
}
