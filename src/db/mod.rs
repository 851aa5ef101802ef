// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory stores. State lives for the lifetime of the process.

pub mod directory;
pub mod seed;
pub mod session;

pub use directory::DirectoryStore;
pub use session::{SessionError, SessionStore};

/// Stores pre-filled with the demo accounts and directory.
pub fn seeded() -> (SessionStore, DirectoryStore) {
    (
        SessionStore::new(seed::credentials()),
        DirectoryStore::new(seed::users(), seed::trainers(), seed::reminders()),
    )
}
