//! Reusable contract checks for [`Backend`] implementations.
//!
//! Backend crates run these against their own implementation from unit or
//! integration tests (enable the `test-utils` feature). Each check uses its
//! own `suite/...` key namespace, so one backend instance can run the whole
//! suite, but the namespace must start out empty.

use bytes::Bytes;

use crate::{Backend, Entry};

/// Put followed by get returns exactly the written bytes.
pub fn put_get_round_trip(backend: &impl Backend) {
    let entry = Entry::new("suite/round_trip", Bytes::from_static(b"payload"));
    backend.put(&entry).unwrap();

    let fetched = backend.get("suite/round_trip").unwrap().unwrap();
    assert_eq!(fetched, entry);

    // A zero-length value is present, not absent.
    let empty = Entry::new("suite/round_trip_empty", Bytes::new());
    backend.put(&empty).unwrap();
    let fetched = backend.get("suite/round_trip_empty").unwrap().unwrap();
    assert_eq!(fetched.value, Bytes::new());
}

/// A key that was never written reads back as absent, not as an error.
pub fn get_missing_returns_none(backend: &impl Backend) {
    assert!(backend.get("suite/never_written").unwrap().is_none());
}

/// Deleting a missing key succeeds; deleting a present key removes it.
pub fn delete_is_idempotent(backend: &impl Backend) {
    backend.delete("suite/delete/missing").unwrap();

    let entry = Entry::new("suite/delete/present", Bytes::from_static(b"x"));
    backend.put(&entry).unwrap();
    backend.delete("suite/delete/present").unwrap();
    assert!(backend.get("suite/delete/present").unwrap().is_none());

    // And again, now that it is gone.
    backend.delete("suite/delete/present").unwrap();
}

/// Unconditional overwrite: the second put wins.
pub fn last_write_wins(backend: &impl Backend) {
    let key = "suite/last_write";
    backend
        .put(&Entry::new(key, Bytes::from_static(b"first")))
        .unwrap();
    backend
        .put(&Entry::new(key, Bytes::from_static(b"second")))
        .unwrap();

    let fetched = backend.get(key).unwrap().unwrap();
    assert_eq!(fetched.value, Bytes::from_static(b"second"));
}

/// Listing returns sorted immediate children with `/` markers for names
/// that have descendants.
pub fn list_marks_directories(backend: &impl Backend) {
    backend
        .put(&Entry::new("suite/list/a", Bytes::from_static(b"1")))
        .unwrap();
    backend
        .put(&Entry::new("suite/list/b/c", Bytes::from_static(b"2")))
        .unwrap();
    backend
        .put(&Entry::new("suite/list/b/d", Bytes::from_static(b"3")))
        .unwrap();

    let names = backend.list("suite/list/").unwrap();
    assert!(names.contains(&"a".to_string()), "got {:?}", names);
    assert!(names.contains(&"b/".to_string()), "got {:?}", names);
    assert!(
        !names.contains(&"c".to_string()),
        "grandchildren must not appear: {:?}",
        names
    );

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "listing must be sorted");

    let names = backend.list("suite/list/b/").unwrap();
    assert!(names.contains(&"c".to_string()), "got {:?}", names);
    assert!(names.contains(&"d".to_string()), "got {:?}", names);
}
