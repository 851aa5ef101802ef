// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Maps the active identity to the screen-set the client should mount.

use crate::models::{Identity, Role, ScreenSet};

/// Select the screen-set for the current session.
pub fn select(identity: Option<&Identity>) -> ScreenSet {
    match identity.map(|identity| identity.role) {
        None => ScreenSet::Anonymous,
        Some(Role::Administrator) => ScreenSet::Admin,
        Some(Role::Trainer) => ScreenSet::Trainer,
        Some(Role::User) => ScreenSet::User,
    }
}
