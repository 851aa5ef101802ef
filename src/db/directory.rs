// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory store: users, trainers and reminders.
//!
//! Collections are immutable snapshots (`Arc<[T]>`). Every mutation builds a
//! new slice and swaps it in, so a snapshot handed out earlier keeps
//! describing the state at the time it was taken.
//!
//! Unknown ids are not errors: lookups return `None` and mutations are
//! no-ops.
//!
//! `Trainer::users` and `User::trainer_id` must agree. The only code that
//! writes `trainer_id` is [`DirectoryStore::update_trainer_users`]; every
//! other reassignment path calls it.

use crate::models::{
    MacroProgress, Macros, Meal, NutritionGoal, Reminder, Role, Routine, Trainer, User,
    UserPatch,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    users: Arc<[User]>,
    trainers: Arc<[Trainer]>,
    reminders: Arc<[Reminder]>,
    nutrition: HashMap<String, MacroProgress>,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl DirectoryStore {
    pub fn new(users: Vec<User>, trainers: Vec<Trainer>, reminders: Vec<Reminder>) -> Self {
        Self {
            users: users.into(),
            trainers: trainers.into(),
            reminders: reminders.into(),
            nutrition: HashMap::new(),
        }
    }

    // ─── Snapshots ───────────────────────────────────────────────

    pub fn users(&self) -> Arc<[User]> {
        Arc::clone(&self.users)
    }

    pub fn trainers(&self) -> Arc<[Trainer]> {
        Arc::clone(&self.trainers)
    }

    pub fn reminders(&self) -> Arc<[Reminder]> {
        Arc::clone(&self.reminders)
    }

    // ─── Users ───────────────────────────────────────────────────

    /// Append a user. Ids and emails are not checked for uniqueness.
    pub fn add_user(&mut self, user: User) {
        tracing::debug!(user_id = %user.id, role = %user.role, "Adding user");
        let mut users = self.users.to_vec();
        users.push(user);
        self.users = users.into();
    }

    /// Merge `patch` into the user with `id` and return the new record.
    ///
    /// New macros re-target any progress logged so far.
    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        let retarget = patch.macros.is_some();
        let updated = patch.apply(&self.users[index]);
        if retarget {
            if let Some(progress) = self.nutrition.get_mut(id) {
                progress.retarget(updated.macros);
            }
        }

        let mut users = self.users.to_vec();
        users[index] = updated.clone();
        self.users = users.into();

        tracing::debug!(user_id = %id, "User updated");
        Some(updated)
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    pub fn get_exercises_by_user(&self, id: &str) -> Option<Routine> {
        self.get_user_by_id(id)?.exercises
    }

    /// Remove a user and drop them from every trainer's list.
    pub fn delete_user(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        let mut users = self.users.to_vec();
        let removed = users.remove(index);
        self.users = users.into();

        if self.trainers.iter().any(|t| t.users.iter().any(|u| u == id)) {
            self.trainers = self
                .trainers
                .iter()
                .map(|trainer| Trainer {
                    users: trainer.users.iter().filter(|u| *u != id).cloned().collect(),
                    ..trainer.clone()
                })
                .collect();
        }
        self.nutrition.remove(id);

        tracing::info!(user_id = %id, "User deleted");
        Some(removed)
    }

    /// Clients (role `usuario`) currently assigned to `trainer_id`.
    pub fn users_for_trainer(&self, trainer_id: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| {
                user.role == Role::User && user.trainer_id.as_deref() == Some(trainer_id)
            })
            .cloned()
            .collect()
    }

    /// Replace a user's routine.
    pub fn set_exercises(&mut self, user_id: &str, exercises: Routine) -> Option<User> {
        self.update_user(
            user_id,
            UserPatch {
                exercises: Some(exercises),
                ..Default::default()
            },
        )
    }

    /// Set the nutrition goal and macro targets.
    ///
    /// Logged progress is restarted against the new targets.
    pub fn set_nutrition(
        &mut self,
        user_id: &str,
        goal: Option<NutritionGoal>,
        macros: Option<Macros>,
    ) -> Option<User> {
        let updated = self.update_user(
            user_id,
            UserPatch {
                nutrition_goal: goal,
                macros,
                ..Default::default()
            },
        )?;
        self.nutrition.remove(user_id);
        Some(updated)
    }

    // ─── Trainers ────────────────────────────────────────────────

    /// Append a trainer. Ids are not checked for uniqueness.
    pub fn add_trainer(&mut self, trainer: Trainer) {
        tracing::debug!(trainer_id = %trainer.id, "Adding trainer");
        let mut trainers = self.trainers.to_vec();
        trainers.push(trainer);
        self.trainers = trainers.into();
    }

    pub fn get_trainer_by_id(&self, id: &str) -> Option<Trainer> {
        self.trainers.iter().find(|trainer| trainer.id == id).cloned()
    }

    /// Set the users assigned to `trainer_id`.
    ///
    /// Listed users are claimed: their `trainer_id` becomes `trainer_id` and
    /// they are removed from every other trainer. Users that pointed at this
    /// trainer but are not listed are released. Everyone else is untouched.
    /// Repeated ids keep their first position. Unknown trainer: no-op.
    pub fn update_trainer_users(&mut self, trainer_id: &str, user_ids: &[String]) {
        if !self.trainers.iter().any(|trainer| trainer.id == trainer_id) {
            tracing::debug!(trainer_id = %trainer_id, "Assignment ignored: unknown trainer");
            return;
        }

        let mut seen = HashSet::new();
        let mut assigned = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            if seen.insert(id.as_str()) {
                assigned.push(id.clone());
            }
        }

        self.trainers = self
            .trainers
            .iter()
            .map(|trainer| {
                if trainer.id == trainer_id {
                    Trainer {
                        users: assigned.clone(),
                        ..trainer.clone()
                    }
                } else {
                    Trainer {
                        users: trainer
                            .users
                            .iter()
                            .filter(|id| !seen.contains(id.as_str()))
                            .cloned()
                            .collect(),
                        ..trainer.clone()
                    }
                }
            })
            .collect();

        let mut claimed = 0usize;
        let mut released = 0usize;
        self.users = self
            .users
            .iter()
            .map(|user| {
                if seen.contains(user.id.as_str()) {
                    claimed += 1;
                    User {
                        trainer_id: Some(trainer_id.to_string()),
                        ..user.clone()
                    }
                } else if user.trainer_id.as_deref() == Some(trainer_id) {
                    released += 1;
                    User {
                        trainer_id: None,
                        ..user.clone()
                    }
                } else {
                    user.clone()
                }
            })
            .collect();

        tracing::info!(
            trainer_id = %trainer_id,
            assigned = assigned.len(),
            claimed,
            released,
            "Trainer assignments updated"
        );
    }

    /// Move a user to the trainer after their current one, wrapping around.
    ///
    /// Unassigned users go to the first trainer. Returns the new trainer id,
    /// or `None` when the user is unknown or there are no trainers.
    pub fn cycle_trainer(&mut self, user_id: &str) -> Option<String> {
        if self.trainers.is_empty() || !self.users.iter().any(|user| user.id == user_id) {
            return None;
        }

        let current = self
            .trainers
            .iter()
            .position(|trainer| trainer.users.iter().any(|id| id == user_id));
        let next_index = current.map_or(0, |index| (index + 1) % self.trainers.len());
        let next = self.trainers[next_index].clone();

        let mut users = next.users;
        if !users.iter().any(|id| id == user_id) {
            users.push(user_id.to_string());
        }
        self.update_trainer_users(&next.id, &users);
        Some(next.id)
    }

    // ─── Nutrition ───────────────────────────────────────────────

    /// Today's macro progress for a user. Unknown user: `None`.
    pub fn nutrition_progress(&self, user_id: &str) -> Option<MacroProgress> {
        if let Some(progress) = self.nutrition.get(user_id) {
            return Some(*progress);
        }
        let user = self.users.iter().find(|user| user.id == user_id)?;
        Some(MacroProgress::for_targets(user.macros))
    }

    /// Record a meal. `None` when the user is unknown.
    pub fn log_meal(&mut self, user_id: &str, meal: &Meal) -> Option<MacroProgress> {
        let mut progress = self.nutrition_progress(user_id)?;
        progress.log(meal);
        self.nutrition.insert(user_id.to_string(), progress);
        tracing::debug!(user_id = %user_id, calories = meal.calories, "Meal logged");
        Some(progress)
    }
}

/// Total number of exercises in a routine.
pub fn exercise_count(routine: &Routine) -> usize {
    routine.values().map(Vec::len).sum()
}
