// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory store behaviour, focused on keeping `Trainer::users` and
//! `User::trainer_id` in agreement.

use chrono::NaiveDate;
use fitcoach::db::{seed, DirectoryStore};
use fitcoach::models::{Role, Trainer, User, UserPatch};

fn client(id: &str, trainer_id: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: format!("Cliente {id}"),
        email: format!("{id}@example.com"),
        birth_date: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
        role: Role::User,
        trainer_id: trainer_id.map(str::to_string),
        nutrition_goal: None,
        macros: None,
        exercises: None,
    }
}

fn trainer(id: &str, users: &[&str]) -> Trainer {
    Trainer {
        id: id.to_string(),
        name: format!("Entrenador {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        users: ids(users),
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Every listed user points back at its trainer, and every pointer is
/// listed by exactly that trainer.
fn assert_consistent(store: &DirectoryStore) {
    let trainers = store.trainers();
    for user in store.users().iter() {
        let listing: Vec<&str> = trainers
            .iter()
            .filter(|t| t.users.contains(&user.id))
            .map(|t| t.id.as_str())
            .collect();
        match &user.trainer_id {
            Some(trainer_id) => assert_eq!(listing, vec![trainer_id.as_str()], "user {}", user.id),
            None => assert!(listing.is_empty(), "user {} listed by {:?}", user.id, listing),
        }
    }
}

fn three_trainers() -> DirectoryStore {
    DirectoryStore::new(
        vec![
            client("u1", Some("t1")),
            client("u2", Some("t1")),
            client("u3", Some("t2")),
            client("u4", None),
        ],
        vec![
            trainer("t1", &["u1", "u2"]),
            trainer("t2", &["u3"]),
            trainer("t3", &[]),
        ],
        vec![],
    )
}

#[test]
fn test_release_scenario() {
    let mut store = three_trainers();
    store.update_trainer_users("t1", &ids(&["u2"]));

    assert_eq!(store.get_trainer_by_id("t1").unwrap().users, ids(&["u2"]));
    assert_eq!(store.get_user_by_id("u1").unwrap().trainer_id, None);
    assert_eq!(
        store.get_user_by_id("u2").unwrap().trainer_id.as_deref(),
        Some("t1")
    );
    assert_consistent(&store);
}

#[test]
fn test_claim_removes_user_from_other_trainers() {
    let mut store = three_trainers();
    store.update_trainer_users("t3", &ids(&["u3", "u1", "u4"]));

    for id in ["u1", "u3", "u4"] {
        assert_eq!(
            store.get_user_by_id(id).unwrap().trainer_id.as_deref(),
            Some("t3")
        );
    }
    assert_eq!(store.get_trainer_by_id("t1").unwrap().users, ids(&["u2"]));
    assert!(store.get_trainer_by_id("t2").unwrap().users.is_empty());
    assert_eq!(
        store.get_user_by_id("u2").unwrap().trainer_id.as_deref(),
        Some("t1")
    );
    assert_consistent(&store);
}

#[test]
fn test_every_claim_holds_for_every_pair() {
    let trainer_ids = ["t1", "t2", "t3"];
    let user_ids = ["u1", "u2", "u3", "u4"];
    for target in trainer_ids {
        for user in user_ids {
            let mut store = three_trainers();
            let mut list = store.get_trainer_by_id(target).unwrap().users;
            list.push(user.to_string());
            store.update_trainer_users(target, &list);

            assert_eq!(
                store.get_user_by_id(user).unwrap().trainer_id.as_deref(),
                Some(target)
            );
            for other in trainer_ids.iter().filter(|t| **t != target) {
                assert!(!store
                    .get_trainer_by_id(other)
                    .unwrap()
                    .users
                    .contains(&user.to_string()));
            }
            assert_consistent(&store);
        }
    }
}

#[test]
fn test_release_is_idempotent() {
    let mut store = three_trainers();
    store.update_trainer_users("t1", &ids(&["u2"]));
    let users_after_first = store.users();
    let trainers_after_first = store.trainers();

    store.update_trainer_users("t1", &ids(&["u2"]));
    assert_eq!(store.users().to_vec(), users_after_first.to_vec());
    assert_eq!(store.trainers().to_vec(), trainers_after_first.to_vec());
    assert_eq!(store.get_user_by_id("u1").unwrap().trainer_id, None);
}

#[test]
fn test_untouched_users_keep_their_trainer() {
    let mut store = three_trainers();
    store.update_trainer_users("t1", &ids(&[]));
    assert_eq!(
        store.get_user_by_id("u3").unwrap().trainer_id.as_deref(),
        Some("t2")
    );
    assert_eq!(store.get_user_by_id("u4").unwrap().trainer_id, None);
    assert_consistent(&store);
}

#[test]
fn test_partial_patch_changes_only_name() {
    let mut store = DirectoryStore::new(seed::users(), seed::trainers(), seed::reminders());
    let before = store.get_user_by_id("u1").unwrap();

    let updated = store
        .update_user(
            "u1",
            UserPatch {
                name: Some("X".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "X");
    assert_eq!(
        User {
            name: before.name.clone(),
            ..updated.clone()
        },
        before
    );
    assert_eq!(store.get_user_by_id("u1").unwrap(), updated);
}

#[test]
fn test_lookups_on_missing_ids() {
    let store = DirectoryStore::new(seed::users(), seed::trainers(), seed::reminders());
    assert!(store.get_user_by_id("missing").is_none());
    assert!(store.get_exercises_by_user("missing").is_none());
    assert!(store.get_exercises_by_user("t1").is_none());
    assert_eq!(store.get_exercises_by_user("u1").unwrap().len(), 2);
}

#[test]
fn test_delete_user_drops_assignment() {
    let mut store = three_trainers();
    let removed = store.delete_user("u2").unwrap();
    assert_eq!(removed.id, "u2");
    assert_eq!(store.get_trainer_by_id("t1").unwrap().users, ids(&["u1"]));
    assert!(store.delete_user("u2").is_none());
    assert_consistent(&store);
}

#[test]
fn test_cycle_trainer_moves_to_exactly_one_trainer() {
    let mut store = three_trainers();
    assert_eq!(store.cycle_trainer("u1").as_deref(), Some("t2"));
    assert_eq!(store.cycle_trainer("u4").as_deref(), Some("t1"));
    assert_eq!(store.cycle_trainer("u3").as_deref(), Some("t3"));
    assert_eq!(store.cycle_trainer("u3").as_deref(), Some("t1"));
    assert_consistent(&store);
}

#[test]
fn test_users_for_trainer_lists_only_clients() {
    let mut store = DirectoryStore::new(seed::users(), seed::trainers(), seed::reminders());
    let assigned = store.users_for_trainer("t1");
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, "u1");

    store.update_trainer_users("t1", &[]);
    assert!(store.users_for_trainer("t1").is_empty());
}

#[test]
fn test_reminders_are_seeded() {
    let store = DirectoryStore::new(seed::users(), seed::trainers(), seed::reminders());
    let titles: Vec<_> = store.reminders().iter().map(|r| r.title.clone()).collect();
    assert_eq!(
        titles,
        vec!["Beber agua", "Snack saludable", "Tiempo de descanso"]
    );
}
