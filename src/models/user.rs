// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory user model: profile, routine and nutrition targets.

use super::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Training routine keyed by day index.
pub type Routine = BTreeMap<u32, Vec<Exercise>>;

/// A person in the directory (client, trainer or admin profile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub birth_date: NaiveDate,
    pub role: Role,
    /// Owning trainer; kept consistent with `Trainer::users`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_goal: Option<NutritionGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<number, Array<Exercise>> | undefined")
    )]
    pub exercises: Option<Routine>,
}

/// Partial update for a [`User`].
///
/// The trainer link is deliberately absent: assignment goes through
/// `DirectoryStore::update_trainer_users`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub birth_date: Option<NaiveDate>,
    pub role: Option<Role>,
    pub nutrition_goal: Option<NutritionGoal>,
    pub macros: Option<Macros>,
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<number, Array<Exercise>> | null")
    )]
    pub exercises: Option<Routine>,
}

impl UserPatch {
    /// Produce a new record with the provided fields replaced.
    pub fn apply(self, user: &User) -> User {
        User {
            id: user.id.clone(),
            name: self.name.unwrap_or_else(|| user.name.clone()),
            email: self.email.unwrap_or_else(|| user.email.clone()),
            birth_date: self.birth_date.unwrap_or(user.birth_date),
            role: self.role.unwrap_or(user.role),
            trainer_id: user.trainer_id.clone(),
            nutrition_goal: self.nutrition_goal.or(user.nutrition_goal),
            macros: self.macros.or(user.macros),
            exercises: self.exercises.or_else(|| user.exercises.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum NutritionGoal {
    /// Muscle gain.
    #[serde(rename = "ganancia")]
    Gain,
    /// Cutting.
    #[serde(rename = "definición")]
    Definition,
}

/// Daily macro targets (kcal and grams).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Macros {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sets: NonZeroU32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub reps: NonZeroU32,
}
