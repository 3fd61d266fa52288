//! Snapshot persistence tests
//!
//! Every mutation rewrites the snapshot, a restart reproduces the graph,
//! and an unreadable snapshot is replaced by a fresh one.

use std::fs;

use photoroll::{UserStore, photo::Photo};

use crate::helpers::*;

#[test]
fn test_restart_reproduces_graph() {
    let (dir, mut store, clock) = setup_session("alice");
    let a = add_photo_on(&mut store, &clock, &dir, "trip", "a.jpg", 2);
    let b = add_photo_on(&mut store, &clock, &dir, "trip", "b.jpg", 4);
    add_photo_on(&mut store, &clock, &dir, "home", "c.jpg", 6);
    store.copy_photo("trip", &a, "home").unwrap();
    store.set_caption(&a, "Harbor").unwrap();
    store.add_tag(&a, "place", "Lisbon").unwrap();
    store.add_tag(&b, "person", "Ana").unwrap();
    store.logout();

    let before = store.get_all();
    drop(store);

    let restarted = reopen(&dir, clock);
    let after = restarted.get_all();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.username(), new.username());
        assert_eq!(old.albums().len(), new.albums().len());
        for (old_album, new_album) in old.albums().iter().zip(new.albums()) {
            assert_eq!(old_album.name(), new_album.name());
            let old_photos = old_album.photos();
            let new_photos = new_album.photos();
            assert_eq!(old_photos.len(), new_photos.len());
            assert!(
                old_photos
                    .iter()
                    .zip(new_photos)
                    .all(|(p, q)| Photo::same_contents(p, q))
            );
        }
    }
    assert_eq!(
        restarted.resolve_photo(&a).map(|p| p.caption()),
        Some("Harbor")
    );
}

#[test]
fn test_every_mutation_is_written() {
    let (dir, mut store, clock) = setup_store();
    store.create("alice");
    let on_disk = reopen(&dir, clock.clone());
    assert!(on_disk.exists("alice"));

    store.delete("alice");
    let on_disk = reopen(&dir, clock);
    assert!(!on_disk.exists("alice"));
}

#[test]
fn test_session_is_not_persisted() {
    let (dir, store, clock) = setup_session("alice");
    drop(store);
    let restarted = reopen(&dir, clock);
    assert!(restarted.current_user().is_none());
}

#[test]
fn test_corrupt_snapshot_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "{not json").unwrap();

    let store = UserStore::open(config_for(&dir));
    assert_eq!(store.usernames(), vec!["admin", "stock"]);

    // The fresh state replaced the corrupt file
    let text = fs::read_to_string(dir.path().join("users.json")).unwrap();
    assert!(text.contains("\"admin\""));
}

#[test]
fn test_missing_data_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("data");
    let store = UserStore::open(
        photoroll::StoreConfig::new(&nested).with_stock_photos(Vec::<std::path::PathBuf>::new()),
    );
    assert!(nested.is_dir());
    assert!(store.save().is_ok());
}
