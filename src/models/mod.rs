// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod identity;
pub mod nutrition;
pub mod reminder;
pub mod role;
pub mod trainer;
pub mod user;

pub use identity::{CredentialRecord, Identity, Registration};
pub use nutrition::{Gauge, MacroProgress, Meal};
pub use reminder::Reminder;
pub use role::{Role, ScreenSet};
pub use trainer::Trainer;
pub use user::{Exercise, Macros, NutritionGoal, Routine, User, UserPatch};
