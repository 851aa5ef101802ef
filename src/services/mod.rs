// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - logic that sits beside the stores.

pub mod chat;
pub mod role_router;
pub mod timer;

pub use chat::{ChatAssistant, ChatMessage};
pub use timer::{CountdownTimer, TimerError, TimerSnapshot};
