// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Demo fixtures loaded at startup. Nothing is persisted.

use crate::models::{
    CredentialRecord, Exercise, Macros, NutritionGoal, Reminder, Role, Routine, Trainer, User,
};
use chrono::NaiveDate;
use std::num::NonZeroU32;

fn credential(
    username: &str,
    password: &str,
    full_name: &str,
    role: Role,
    profile: &str,
) -> CredentialRecord {
    CredentialRecord {
        username: username.to_string(),
        password: password.to_string(),
        full_name: full_name.to_string(),
        role,
        profile_id: Some(profile.to_string()),
    }
}

/// Demo accounts, one per role.
pub fn credentials() -> Vec<CredentialRecord> {
    vec![
        credential("admin", "admin123", "Ana Admin", Role::Administrator, "a1"),
        credential("coach", "coach123", "Carlos Coach", Role::Trainer, "t1"),
        credential("user", "user123", "Úrsula Usuario", Role::User, "u1"),
    ]
}

fn exercise(id: &str, name: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets: NonZeroU32::new(sets).unwrap_or(NonZeroU32::MIN),
        reps: NonZeroU32::new(reps).unwrap_or(NonZeroU32::MIN),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn users() -> Vec<User> {
    let mut routine = Routine::new();
    routine.insert(
        1,
        vec![
            exercise("e1", "Sentadilla", 4, 8),
            exercise("e2", "Peso muerto rumano", 3, 10),
        ],
    );
    routine.insert(
        2,
        vec![
            exercise("e3", "Press de banca", 4, 8),
            exercise("e4", "Dominadas", 3, 8),
        ],
    );

    vec![
        User {
            id: "u1".to_string(),
            name: "Juan Pérez".to_string(),
            email: "usuario@example.com".to_string(),
            birth_date: date(1992, 5, 10),
            role: Role::User,
            trainer_id: Some("t1".to_string()),
            nutrition_goal: Some(NutritionGoal::Gain),
            macros: Some(Macros {
                calories: 2200,
                protein: 160,
                carbs: 260,
                fats: 70,
            }),
            exercises: Some(routine),
        },
        User {
            id: "t1".to_string(),
            name: "Entrenador X".to_string(),
            email: "entrenador@example.com".to_string(),
            birth_date: date(1988, 3, 21),
            role: Role::Trainer,
            trainer_id: None,
            nutrition_goal: None,
            macros: None,
            exercises: None,
        },
        User {
            id: "a1".to_string(),
            name: "Admin Y".to_string(),
            email: "admin@example.com".to_string(),
            birth_date: date(1985, 11, 2),
            role: Role::Administrator,
            trainer_id: None,
            nutrition_goal: None,
            macros: None,
            exercises: None,
        },
    ]
}

pub fn trainers() -> Vec<Trainer> {
    vec![Trainer {
        id: "t1".to_string(),
        name: "Entrenador X".to_string(),
        email: "entrenador@example.com".to_string(),
        phone: None,
        users: vec!["u1".to_string()],
    }]
}

pub fn reminders() -> Vec<Reminder> {
    [
        ("r1", "Beber agua", "10:00"),
        ("r2", "Snack saludable", "12:30"),
        ("r3", "Tiempo de descanso", "15:00"),
    ]
    .into_iter()
    .map(|(id, title, time)| Reminder {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        icon: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_assignments_consistent() {
        let users = users();
        for trainer in trainers() {
            for id in &trainer.users {
                let user = users.iter().find(|u| &u.id == id).unwrap();
                assert_eq!(user.trainer_id.as_deref(), Some(trainer.id.as_str()));
            }
        }
    }

    #[test]
    fn test_seed_credentials_unique() {
        let creds = credentials();
        let mut names: Vec<_> = creds.iter().map(|c| c.username.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), creds.len());
    }
}
