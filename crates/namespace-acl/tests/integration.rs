//! Integration tests for namespace permission matching and the ACL store.

use namespace_acl::{
    AclError, AclStore, DecisionReason, NamespacePermission, NamespacePermissionCollection,
    PermissionName,
};

fn perm(name: &str, actions: &str) -> NamespacePermission {
    NamespacePermission::new(name, actions).unwrap()
}

fn document_tree() -> NamespacePermissionCollection {
    let mut acl = NamespacePermissionCollection::new();
    acl.add(perm("starksm/Project1", "r---")).unwrap();
    acl.add(perm("starksm/Project1/Documents/Public", "rw--"))
        .unwrap();
    acl.add(perm("starksm/Project1/Documents/Public/Private", "----"))
        .unwrap();
    acl
}

// ─────── Collection end-to-end ───────

/// Walks a document tree: reads inherit from the project root, writes only
/// where granted, and the all-unset grant cuts access off below it.
#[test]
fn test_document_tree_walkthrough() {
    let acl = document_tree();

    // Read anywhere under the project root.
    assert!(acl.implies(&perm("starksm/Project1", "r---")).unwrap());
    assert!(acl
        .implies(&perm("starksm/Project1/Documents/Folder1", "r---"))
        .unwrap());

    // Write only under Public.
    assert!(!acl
        .implies(&perm("starksm/Project1/Documents/Folder1", "rw--"))
        .unwrap());
    assert!(acl
        .implies(&perm("starksm/Project1/Documents/Public/draft.txt", "rw--"))
        .unwrap());

    // Nothing at all under Public/Private, despite the rw-- grant above it.
    assert!(!acl
        .implies(&perm(
            "starksm/Project1/Documents/Public/Private/secret.txt",
            "r---"
        ))
        .unwrap());

    // Outside the granted namespace entirely.
    assert!(!acl.implies(&perm("scott/Project2", "r---")).unwrap());
}

/// Sibling paths under a shared parent do not imply each other.
#[test]
fn test_sibling_namespace_isolation() {
    let mut acl = NamespacePermissionCollection::new();
    acl.add(perm("Project1/Documents/Public", "rw--")).unwrap();

    assert!(!acl
        .implies(&perm("Project1/Documents/view1.jpg", "r---"))
        .unwrap());
    assert!(acl
        .implies(&perm("Project1/Documents/Public/view1.jpg", "r---"))
        .unwrap());
}

/// Enumeration crosses buckets in ascending name order.
#[test]
fn test_enumeration_order() {
    let acl = document_tree();
    let names: Vec<String> = acl.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(
        names,
        [
            "starksm/Project1",
            "starksm/Project1/Documents/Public",
            "starksm/Project1/Documents/Public/Private",
        ]
    );
}

// ─────── Store end-to-end ───────

/// Full store lifecycle: grant → check → freeze → persist → reload.
#[test]
fn test_store_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acls.json");

    {
        let mut store = AclStore::with_persistence(&path);
        store.grant("starksm", "starksm/Project1", "r---").unwrap();
        store
            .grant("starksm", "starksm/Project1/Documents/Public", "rw--")
            .unwrap();
        store.grant("scott", "scott/Inbox", "rw--").unwrap();
        store.freeze("starksm");
        store.save().unwrap();
    }

    let mut store = AclStore::load(&path).unwrap();
    assert_eq!(store.subject_count(), 2);
    assert!(store.collection("starksm").unwrap().is_read_only());
    assert_eq!(store.collection("starksm").unwrap().len(), 2);

    // Decisions survive the round trip.
    let decision = store
        .check("starksm", "starksm/Project1/Documents/Folder1", "r---")
        .unwrap();
    assert!(decision.granted);
    assert_eq!(decision.governing.unwrap().to_string(), "starksm/Project1");

    // So does the frozen flag.
    let err = store
        .grant("starksm", "starksm/Project2", "r---")
        .unwrap_err();
    assert!(matches!(err, AclError::ReadOnly));

    // The other subject stayed mutable.
    store.grant("scott", "scott/Outbox", "rw--").unwrap();
}

/// Loading a missing file yields a fresh store bound to the path.
#[test]
fn test_load_missing_file_creates_new() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("acls.json");

    let mut store = AclStore::load(&path).unwrap();
    assert_eq!(store.subject_count(), 0);

    store.grant("starksm", "starksm/Project1", "r---").unwrap();
    store.save().unwrap();
    assert!(path.exists());
}

/// A corrupt store file surfaces as an I/O error, not a panic.
#[test]
fn test_load_corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acls.json");
    std::fs::write(&path, "not json").unwrap();

    let err = AclStore::load(&path).unwrap_err();
    assert!(matches!(err, AclError::Io { .. }));
}

// ─────── Cross-type behavior ───────

/// The name ordering and the ancestor scan agree: the governing name for a
/// deep request is always the longest registered ancestor.
#[test]
fn test_governing_is_longest_ancestor() {
    let mut acl = NamespacePermissionCollection::new();
    for (name, actions) in [
        ("a", "r---"),
        ("a/b", "rw--"),
        ("a/b/c/d", "----"),
        ("a/x", "rw--"),
    ] {
        acl.add(perm(name, actions)).unwrap();
    }

    let cases = [
        ("a/q", "a"),
        ("a/b/q", "a/b"),
        ("a/b/c", "a/b"),
        ("a/b/c/d/e/f", "a/b/c/d"),
        ("a/x/y", "a/x"),
    ];
    for (request, expected) in cases {
        let name = PermissionName::new(request).unwrap();
        let (governing, _) = acl.governing(&name).unwrap();
        assert_eq!(governing.to_string(), expected, "request {}", request);
    }

    assert!(acl.governing(&PermissionName::new("b").unwrap()).is_none());
}

/// Width mismatches between a stored grant and a request fail fast instead
/// of granting or denying silently.
#[test]
fn test_mismatched_action_widths_error() {
    let acl = document_tree();
    let err = acl
        .implies(&perm("starksm/Project1/Documents", "r----"))
        .unwrap_err();
    assert!(matches!(
        err,
        AclError::ActionWidthMismatch {
            granted: 4,
            requested: 5
        }
    ));
}
