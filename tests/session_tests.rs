// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store behaviour: login normalization, registration rules and the
//! single active identity.

use fitcoach::db::{seed, SessionError, SessionStore};
use fitcoach::models::{Registration, Role};

fn seeded_store() -> SessionStore {
    SessionStore::new(seed::credentials())
}

fn registration(username: &str, role: Role) -> Registration {
    Registration {
        username: username.to_string(),
        password: "secret".to_string(),
        full_name: "Nueva Persona".to_string(),
        role,
    }
}

/// Mix the case of every other character.
fn case_variant(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn test_login_accepts_any_case_and_whitespace() {
    for record in seed::credentials() {
        let mut store = seeded_store();
        let username = format!("  {}\t", case_variant(&record.username));
        let password = format!("{}  ", record.password);

        let identity = store.login(&username, &password).unwrap().clone();
        assert_eq!(identity.username, record.username.to_lowercase());
        assert_eq!(identity.full_name, record.full_name);
        assert_eq!(identity.role, record.role);
        assert_eq!(store.current(), Some(&identity));
    }
}

#[test]
fn test_admin_login_scenario() {
    let mut store = seeded_store();
    let identity = store.login("ADMIN", "admin123 ").unwrap();
    assert_eq!(identity.role, Role::Administrator);
    assert_eq!(identity.full_name, "Ana Admin");
}

#[test]
fn test_wrong_password_keeps_prior_identity() {
    let mut store = seeded_store();
    store.login("coach", "coach123").unwrap();

    let err = store.login("admin", "wrong").unwrap_err();
    assert_eq!(err, SessionError::Authentication);
    assert_eq!(store.current().unwrap().username, "coach");
}

#[test]
fn test_unknown_user_and_wrong_password_look_the_same() {
    let mut store = seeded_store();
    let unknown = store.login("nobody", "admin123").unwrap_err();
    let wrong = store.login("admin", "admin124").unwrap_err();
    assert_eq!(unknown, wrong);
    assert_eq!(unknown.to_string(), wrong.to_string());
    assert!(store.current().is_none());
}

#[test]
fn test_password_is_case_sensitive() {
    let mut store = seeded_store();
    assert_eq!(
        store.login("admin", "ADMIN123").unwrap_err(),
        SessionError::Authentication
    );
}

#[test]
fn test_register_rejects_case_variants_of_existing_username() {
    for variant in ["admin", "ADMIN", "Admin", "  aDmIn "] {
        let mut store = seeded_store();
        let before = store.registry().to_vec();

        let err = store.register(registration(variant, Role::User)).unwrap_err();
        assert_eq!(err, SessionError::Conflict);
        assert_eq!(store.registry(), before.as_slice());
        assert!(store.current().is_none());
    }
}

#[test]
fn test_register_conflict_message_differs_from_auth_failure() {
    assert_ne!(
        SessionError::Conflict.to_string(),
        SessionError::Authentication.to_string()
    );
}

#[test]
fn test_register_logs_in_immediately() {
    let mut store = seeded_store();
    store.login("admin", "admin123").unwrap();

    let identity = store
        .register(registration("  NuevaPersona ", Role::Trainer))
        .unwrap()
        .clone();
    assert_eq!(identity.username, "nuevapersona");
    assert_eq!(identity.role, Role::Trainer);
    assert_eq!(store.current().unwrap().username, "nuevapersona");
    assert_eq!(store.registry().len(), 4);

    // The stored password is trimmed too.
    store.logout();
    store.login("nuevapersona", "secret").unwrap();
}

#[test]
fn test_register_requires_all_fields() {
    let mut store = seeded_store();
    let mut req = registration("alguien", Role::User);
    req.password = "   ".to_string();

    assert!(matches!(
        store.register(req).unwrap_err(),
        SessionError::Validation(_)
    ));
    assert_eq!(store.registry().len(), 3);
}

#[test]
fn test_relogin_replaces_identity() {
    let mut store = seeded_store();
    store.login("admin", "admin123").unwrap();
    store.login("user", "user123").unwrap();
    assert_eq!(store.current().unwrap().role, Role::User);

    store.logout();
    assert!(store.current().is_none());
}
