//! First-run provisioning tests

use std::fs;

use photoroll::{StoreConfig, UserStore};

use crate::helpers::*;

#[test]
fn test_stock_album_uses_existing_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let files = dir.path().join("files");
    fs::create_dir(&files).unwrap();
    fs::write(files.join("one.jpg"), b"1").unwrap();
    fs::write(files.join("three.png"), b"3").unwrap();

    let config = StoreConfig::new(dir.path().join("data")).with_stock_photos([
        files.join("one.jpg"),
        files.join("two.jpg"),
        files.join("three.png"),
    ]);
    let store = UserStore::open(config);

    let stock = store.get("stock").unwrap();
    assert_eq!(stock.albums().len(), 1);
    let album = &stock.albums()[0];
    assert_eq!(album.name(), "stock");
    let names: Vec<_> = album.photos().iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["one.jpg", "three.png"]);
}

#[test]
fn test_seeding_runs_once() {
    let (dir, mut store, clock) = setup_store();
    store.login("stock");
    store.delete_album("stock").unwrap();
    store.logout();
    drop(store);

    let restarted = reopen(&dir, clock);
    assert!(restarted.get("stock").unwrap().albums().is_empty());
}

#[test]
fn test_missing_reserved_user_is_recreated() {
    let (dir, store, clock) = setup_store();
    drop(store);

    // Strip the admin account out of the snapshot
    let path = dir.path().join("users.json");
    let mut snapshot: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    snapshot["users"]
        .as_array_mut()
        .unwrap()
        .retain(|u| u["username"] != "admin");
    fs::write(&path, snapshot.to_string()).unwrap();

    let restarted = reopen(&dir, clock);
    assert_eq!(restarted.usernames(), vec!["stock", "admin"]);
}
