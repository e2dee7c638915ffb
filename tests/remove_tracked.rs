use std::path::Path;

use footprint::adapters::IdentityResolver;
use footprint::{ErrorKind, List, Policy, Result};

#[derive(Copy, Clone, Debug, Default)]
struct FixedIds;

impl IdentityResolver for FixedIds {
    fn user_name(&self, _uid: u32) -> Result<String> {
        Ok("builder".to_string())
    }
    fn group_name(&self, _gid: u32) -> Result<String> {
        Ok("builders".to_string())
    }
}

#[test]
fn remove_unlinks_and_drops_the_entry() {
    let td = tempfile::tempdir().unwrap();
    let keep = td.path().join("keep");
    let gone = td.path().join("gone");
    let list = List::new();
    list.create_with(&keep, &FixedIds).unwrap();
    list.create_with(&gone, &FixedIds).unwrap();

    let dropped = list.remove(&gone).unwrap();
    assert_eq!(dropped, 1);
    assert!(!gone.exists());
    assert!(keep.exists());

    let entries = list.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path(), std::fs::canonicalize(&keep).unwrap());
}

#[test]
fn remove_drops_every_duplicate_entry() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("twice");
    let list = List::new();
    list.create_with(&path, &FixedIds).unwrap();
    list.create_with(&path, &FixedIds).unwrap();
    assert_eq!(list.len(), 2);

    assert_eq!(list.remove(&path).unwrap(), 2);
    assert_eq!(list.len(), 0);
    assert!(!path.exists());
}

#[test]
fn removing_an_untracked_path_drops_nothing() {
    let td = tempfile::tempdir().unwrap();
    let tracked = td.path().join("tracked");
    let stray = td.path().join("stray");
    let list = List::new();
    list.create_with(&tracked, &FixedIds).unwrap();
    std::fs::write(&stray, b"stray").unwrap();

    assert_eq!(list.remove(&stray).unwrap(), 0);
    assert!(!stray.exists());
    assert_eq!(list.len(), 1);
}

#[test]
fn missing_file_is_tolerated_by_default() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("already-gone");
    let list = List::new();
    list.create_with(&path, &FixedIds).unwrap();
    std::fs::remove_file(&path).unwrap();

    // the stale entry is still dropped
    assert_eq!(list.remove(&path).unwrap(), 1);
    assert_eq!(list.len(), 0);
}

#[test]
fn strict_policy_rejects_removing_a_missing_file() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("already-gone");
    let list = List::with_policy(Policy::strict());
    list.create_with(&path, &FixedIds).unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = list.remove(&path).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
    // on error the ledger is untouched
    assert_eq!(list.len(), 1);
}

#[test]
fn remaining_entries_keep_their_order() {
    let text = "-rw-r--r--\ta/b\t/one\n-rw-r--r--\ta/b\t/two\n-rw-r--r--\ta/b\t/three\n";
    let list = List::parse(text.as_bytes()).unwrap();

    // /two does not exist on disk; the default policy tolerates that
    assert_eq!(list.remove(Path::new("/two")).unwrap(), 1);
    let entries = list.snapshot();
    assert_eq!(entries[0].path(), Path::new("/one"));
    assert_eq!(entries[1].path(), Path::new("/three"));
}
