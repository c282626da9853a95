//! # Namespace ACL
//!
//! Hierarchical namespace permission matching: `/`-delimited permission
//! names, fixed-width positional action flags, and closest-ancestor
//! ("most specific wins") lookup, with a subject-keyed ACL store on top.
//!
//! ## Features
//!
//! - **Permission names** — parsed hierarchical paths with a total order
//!   under which every ancestor sorts below its descendants
//! - **Action sets** — fixed-width positional flags (`"rw--"`) with
//!   asymmetric implication; an unset grant position implies nothing
//! - **Collections** — name-keyed permission buckets answering requests
//!   from the exact name or its longest registered ancestor
//! - **ACL store** — per-subject collections with GRANT/CHECK/FREEZE and
//!   JSON-backed load/save
//!
//! ## Example
//!
//! ```rust
//! use namespace_acl::{AclStore, DecisionReason};
//!
//! let mut store = AclStore::new();
//!
//! // Grant read on a project subtree, and cut access off below one folder.
//! store.grant("starksm", "starksm/Project1", "r---").unwrap();
//! store
//!     .grant("starksm", "starksm/Project1/Documents/Private", "----")
//!     .unwrap();
//!
//! // Reads inherit from the closest ancestor grant.
//! let decision = store
//!     .check("starksm", "starksm/Project1/Documents/Folder1", "r---")
//!     .unwrap();
//! assert!(decision.granted);
//!
//! // The more specific all-unset grant shadows the broader one.
//! let decision = store
//!     .check("starksm", "starksm/Project1/Documents/Private/f.txt", "r---")
//!     .unwrap();
//! assert!(!decision.granted);
//! assert_eq!(decision.reason, DecisionReason::Denied);
//! ```

pub mod actions;
pub mod collection;
pub mod error;
pub mod name;
pub mod permission;
pub mod store;

pub use actions::{ActionFlag, ActionSet};
pub use collection::NamespacePermissionCollection;
pub use error::AclError;
pub use name::PermissionName;
pub use permission::NamespacePermission;
pub use store::{AccessDecision, AclStore, DecisionReason};

/// Convenience result type for ACL operations.
pub type Result<T> = std::result::Result<T, AclError>;
