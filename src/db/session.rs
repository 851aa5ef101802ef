// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store: credential registry plus the single active identity.
//!
//! The registry is append-only. Usernames are unique ignoring case and
//! are stored lowercased for anything added through [`SessionStore::register`].
//! A failed login never disturbs the current identity.

use crate::models::{CredentialRecord, Identity, Registration};

/// Errors surfaced to the login and registration forms.
///
/// Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(&'static str),

    /// Same message for unknown user and wrong password.
    #[error("Credenciales inválidas.")]
    Authentication,

    #[error("El usuario ya existe.")]
    Conflict,
}

const MISSING_CREDENTIALS: &str = "Ingresa usuario y contraseña.";
const MISSING_FIELDS: &str = "Todos los campos son obligatorios.";

/// Holds zero or one authenticated identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    registry: Vec<CredentialRecord>,
    current: Option<Identity>,
}

fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl SessionStore {
    /// Create a store over an initial registry, with nobody logged in.
    pub fn new(registry: Vec<CredentialRecord>) -> Self {
        Self {
            registry,
            current: None,
        }
    }

    /// Currently authenticated identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn registry(&self) -> &[CredentialRecord] {
        &self.registry
    }

    fn find(&self, normalized: &str) -> Option<&CredentialRecord> {
        self.registry
            .iter()
            .find(|record| record.username.to_lowercase() == normalized)
    }

    /// Authenticate and replace the active identity.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&Identity, SessionError> {
        let username = normalize_username(username);
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::Validation(MISSING_CREDENTIALS));
        }

        let record = match self.find(&username) {
            Some(record) if record.password == password => record,
            _ => {
                tracing::info!(username = %username, "Login rejected");
                return Err(SessionError::Authentication);
            }
        };

        let mut identity = record.identity();
        identity.username = username;
        tracing::info!(
            username = %identity.username,
            role = %identity.role,
            "Login succeeded"
        );
        Ok(self.current.insert(identity))
    }

    /// Create an account and log into it immediately.
    pub fn register(&mut self, registration: Registration) -> Result<&Identity, SessionError> {
        let username = normalize_username(&registration.username);
        let password = registration.password.trim();
        let full_name = registration.full_name.trim();
        if username.is_empty() || password.is_empty() || full_name.is_empty() {
            return Err(SessionError::Validation(MISSING_FIELDS));
        }
        if self.find(&username).is_some() {
            tracing::info!(username = %username, "Registration rejected: username taken");
            return Err(SessionError::Conflict);
        }

        let record = CredentialRecord {
            username,
            password: password.to_string(),
            full_name: full_name.to_string(),
            role: registration.role,
            profile_id: None,
        };
        let identity = record.identity();
        self.registry.push(record);

        tracing::info!(
            username = %identity.username,
            role = %identity.role,
            "Account registered"
        );
        Ok(self.current.insert(identity))
    }

    /// Clear the active identity. Idempotent.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(username = %identity.username, "Logged out");
        }
    }

    /// Link the active account to a directory profile.
    ///
    /// Returns `false` when nobody is logged in.
    pub fn link_profile(&mut self, profile_id: &str) -> bool {
        let Some(identity) = self.current.as_mut() else {
            return false;
        };
        identity.profile_id = Some(profile_id.to_string());

        let username = identity.username.clone();
        if let Some(record) = self
            .registry
            .iter_mut()
            .find(|record| record.username.to_lowercase() == username)
        {
            record.profile_id = Some(profile_id.to_string());
        }
        true
    }
}
