//! Named namespace permissions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actions::ActionSet;
use crate::error::AclError;
use crate::name::PermissionName;

/// A permission on a hierarchical namespace — a full name plus a
/// fixed-width action set.
///
/// Pure value type: implication compares action sets only. Whether a
/// permission's name governs a requested name is resolved by
/// [`NamespacePermissionCollection`](crate::NamespacePermissionCollection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespacePermission {
    name: PermissionName,
    actions: ActionSet,
}

impl NamespacePermission {
    /// Parse a permission from a path and an action string.
    pub fn new(name: &str, actions: &str) -> Result<Self, AclError> {
        Ok(Self {
            name: PermissionName::new(name)?,
            actions: ActionSet::parse(actions)?,
        })
    }

    /// Build a permission from already-parsed parts.
    pub fn from_parts(name: PermissionName, actions: ActionSet) -> Self {
        Self { name, actions }
    }

    /// The full hierarchical name.
    pub fn name(&self) -> &PermissionName {
        &self.name
    }

    /// The positional action flags.
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Whether this permission's actions imply the request's actions.
    ///
    /// Fails fast when the action widths differ.
    pub fn implies(&self, request: &NamespacePermission) -> Result<bool, AclError> {
        self.actions.implies(&request.actions)
    }
}

impl fmt::Display for NamespacePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.actions)
    }
}
