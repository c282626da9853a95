//! ACL store — in-memory per-subject permission collections with optional
//! JSON persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::collection::NamespacePermissionCollection;
use crate::error::AclError;
use crate::name::PermissionName;
use crate::permission::NamespacePermission;

/// Reason for an access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    /// A governing permission implied the request.
    Granted,
    /// A governing name was found but none of its permissions implied the
    /// request.
    Denied,
    /// No registered name is an ancestor of the requested name.
    NoGoverningName,
    /// The subject has no permissions at all.
    UnknownSubject,
}

/// Result of an access check against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// Whether access is granted.
    pub granted: bool,
    /// The name whose bucket governed the decision (if any).
    pub governing: Option<PermissionName>,
    /// The reason for the decision.
    pub reason: DecisionReason,
}

/// The ACL store — holds one permission collection per subject.
///
/// Provides GRANT/CHECK/FREEZE operations and optional JSON persistence.
#[derive(Debug, Default)]
pub struct AclStore {
    /// Per-subject collections, keyed by subject identifier.
    subjects: BTreeMap<String, NamespacePermissionCollection>,
    /// Optional path for persistent storage.
    persist_path: Option<PathBuf>,
}

/// On-disk representation of the store.
#[derive(Serialize, Deserialize)]
struct StoredAcls {
    subjects: BTreeMap<String, NamespacePermissionCollection>,
}

impl AclStore {
    /// Create a new empty store (in-memory only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with persistent storage at the given path.
    pub fn with_persistence(path: impl AsRef<Path>) -> Self {
        Self {
            subjects: BTreeMap::new(),
            persist_path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Load a store from persistent storage.
    ///
    /// A missing file yields a fresh store bound to the path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AclError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("ACL store not found at {}, creating new", path.display());
            return Ok(Self::with_persistence(path));
        }
        let data = std::fs::read_to_string(path).map_err(|e| AclError::Io {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let stored: StoredAcls = serde_json::from_str(&data).map_err(|e| AclError::Io {
            message: format!("failed to parse ACL store: {}", e),
        })?;
        info!("ACL store loaded: {} subjects", stored.subjects.len());
        Ok(Self {
            subjects: stored.subjects,
            persist_path: Some(path.to_path_buf()),
        })
    }

    /// Persist the store to disk (if a persist path is configured).
    pub fn save(&self) -> Result<(), AclError> {
        let Some(path) = &self.persist_path else {
            return Ok(());
        };
        let stored = StoredAcls {
            subjects: self.subjects.clone(),
        };
        let data = serde_json::to_string_pretty(&stored).map_err(|e| AclError::Io {
            message: format!("failed to serialize ACL store: {}", e),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AclError::Io {
                message: format!("failed to create directory {}: {}", parent.display(), e),
            })?;
        }
        std::fs::write(path, data).map_err(|e| AclError::Io {
            message: format!("failed to write {}: {}", path.display(), e),
        })?;
        info!("ACL store saved: {} subjects", self.subjects.len());
        Ok(())
    }

    // ─────── Grant / check ───────

    /// Grant `actions` on `path` to `subject`.
    ///
    /// The subject's collection is created on first grant. Fails when the
    /// path or actions fail to parse, or when the subject's collection has
    /// been frozen.
    pub fn grant(&mut self, subject: &str, path: &str, actions: &str) -> Result<(), AclError> {
        let permission = NamespacePermission::new(path, actions)?;
        self.subjects
            .entry(subject.to_string())
            .or_default()
            .add(permission)?;
        info!("GRANT '{}' SUBJECT({}) ACTIONS({})", path, subject, actions);
        Ok(())
    }

    /// Check whether `subject` may perform `actions` on `path`.
    pub fn check(
        &self,
        subject: &str,
        path: &str,
        actions: &str,
    ) -> Result<AccessDecision, AclError> {
        let request = NamespacePermission::new(path, actions)?;
        debug!("CHECK '{}' SUBJECT({}) ACTIONS({})", path, subject, actions);

        let Some(collection) = self.subjects.get(subject) else {
            return Ok(AccessDecision {
                granted: false,
                governing: None,
                reason: DecisionReason::UnknownSubject,
            });
        };

        let Some((governing, bucket)) = collection.governing(request.name()) else {
            return Ok(AccessDecision {
                granted: false,
                governing: None,
                reason: DecisionReason::NoGoverningName,
            });
        };

        let mut granted = false;
        for permission in bucket {
            if permission.implies(&request)? {
                granted = true;
                break;
            }
        }
        Ok(AccessDecision {
            granted,
            governing: Some(governing.clone()),
            reason: if granted {
                DecisionReason::Granted
            } else {
                DecisionReason::Denied
            },
        })
    }

    // ─────── Subject management ───────

    /// Freeze a subject's collection (one-way read-only transition).
    ///
    /// Returns `false` if the subject has no collection.
    pub fn freeze(&mut self, subject: &str) -> bool {
        match self.subjects.get_mut(subject) {
            Some(collection) => {
                collection.set_read_only();
                info!("FREEZE SUBJECT({})", subject);
                true
            }
            None => false,
        }
    }

    /// The collection for a subject, if any.
    pub fn collection(&self, subject: &str) -> Option<&NamespacePermissionCollection> {
        self.subjects.get(subject)
    }

    /// Remove a subject and all its permissions.
    pub fn remove_subject(&mut self, subject: &str) -> bool {
        let removed = self.subjects.remove(subject).is_some();
        if removed {
            info!("REMOVE SUBJECT({})", subject);
        }
        removed
    }

    /// All subject identifiers, in order.
    pub fn subjects(&self) -> Vec<String> {
        self.subjects.keys().cloned().collect()
    }

    /// Number of subjects with at least one collection.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
