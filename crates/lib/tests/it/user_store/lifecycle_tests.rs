//! User lifecycle tests: create, delete, login, and logout
//!
//! Tests the directory operations of the store including:
//! - Duplicate creation is refused without changing the user count
//! - Reserved accounts always exist and cannot be deleted
//! - Sessions start only for existing users and end on logout

use photoroll::ReservedUser;

use crate::helpers::*;

// ===== USER CREATION TESTS =====

#[test]
fn test_second_create_is_refused() {
    let (_dir, mut store, _clock) = setup_store();

    for username in ["alice", "Bob", "carol smith"] {
        assert!(store.create(username));
        let count = store.user_count();
        assert!(!store.create(username), "duplicate {username} accepted");
        assert_eq!(store.user_count(), count);
    }
}

#[test]
fn test_usernames_are_case_sensitive() {
    let (_dir, mut store, _clock) = setup_store();
    assert!(store.create("alice"));
    assert!(store.create("Alice"));
    assert!(store.exists("alice") && store.exists("Alice"));
    assert!(!store.exists("ALICE"));
}

#[test]
fn test_new_users_have_no_albums() {
    let (_dir, mut store, _clock) = setup_store();
    store.create("alice");
    assert!(store.get("alice").unwrap().albums().is_empty());
    assert!(store.get("nobody").is_none());
}

// ===== DELETION TESTS =====

#[test]
fn test_reserved_users_survive_any_delete() {
    let (_dir, mut store, _clock) = setup_store();
    store.create("alice");
    store.delete("alice");

    for reserved in ReservedUser::ALL {
        assert!(!store.delete(reserved.username()));
        assert!(store.exists(reserved.username()));
    }

    // Logged in as admin makes no difference
    store.login("admin");
    assert!(!store.delete("admin"));
    assert!(!store.delete("stock"));
}

#[test]
fn test_delete_discards_the_users_albums() {
    let (dir, mut store, clock) = setup_session("alice");
    let path = add_photo_on(&mut store, &clock, &dir, "trip", "a.jpg", 3);
    store.logout();

    assert!(store.delete("alice"));
    assert!(!store.exists("alice"));
    assert!(store.resolve_photo(&path).is_none());
    assert!(!store.delete("alice"));
}

#[test]
fn test_get_all_returns_a_snapshot_copy() {
    let (_dir, mut store, _clock) = setup_store();
    let before = store.get_all();
    store.create("alice");
    assert_eq!(before.len(), 2);
    assert_eq!(store.get_all().len(), 3);
}

// ===== SESSION TESTS =====

#[test]
fn test_login_then_logout_clears_session() {
    let (_dir, mut store, _clock) = setup_store();
    store.create("alice");
    assert!(store.login("alice"));
    assert_eq!(store.current_user().map(|u| u.username()), Some("alice"));
    store.logout();
    assert!(store.current_user().is_none());
}

#[test]
fn test_failed_login_keeps_existing_session() {
    let (_dir, mut store, _clock) = setup_store();
    store.create("alice");
    store.login("alice");
    assert!(!store.login("mallory"));
    assert_eq!(store.current_user().map(|u| u.username()), Some("alice"));
}

#[test]
fn test_admin_check_follows_session() {
    let (_dir, mut store, _clock) = setup_store();
    assert!(!store.is_current_admin());
    store.login("stock");
    assert!(!store.is_current_admin());
    store.login("admin");
    assert!(store.is_current_admin());
    store.logout();
    assert!(!store.is_current_admin());
}

#[test]
fn test_logout_without_session_is_harmless() {
    let (_dir, mut store, _clock) = setup_store();
    store.logout();
    assert!(store.current_user().is_none());
}
