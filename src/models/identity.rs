// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session identity and credential records.

use super::Role;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The authenticated principal of the active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Identity {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    /// Directory user record this account edits as its own profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

/// Registry entry used to authenticate. Passwords are plaintext (mock auth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub profile_id: Option<String>,
}

impl CredentialRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            profile_id: self.profile_id.clone(),
        }
    }
}

/// Registration payload, as entered in the sign-up form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}
