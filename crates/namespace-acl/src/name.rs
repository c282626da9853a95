//! Hierarchical permission names.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AclError;

/// A parsed, ordered hierarchical name — `/`-delimited segments.
///
/// Names compare segment-by-segment; when one name is a strict prefix of
/// the other, the shorter name orders first. Under this order every
/// ancestor of a name sorts strictly below it, which is what lets
/// [`NamespacePermissionCollection`](crate::NamespacePermissionCollection)
/// find the closest ancestor by scanning downward from the name itself.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionName {
    segments: Vec<String>,
}

impl PermissionName {
    /// Parse a `/`-delimited path into a name.
    ///
    /// Empty names and empty segments (leading, trailing, or doubled `/`)
    /// are rejected.
    pub fn new(path: &str) -> Result<Self, AclError> {
        if path.is_empty() {
            return Err(AclError::InvalidName {
                name: path.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        let segments: Vec<String> = path.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(AclError::InvalidName {
                name: path.to_string(),
                reason: "name contains an empty segment".to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// Number of segments.
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check whether `child`'s segment sequence begins with this name's
    /// full segment sequence.
    ///
    /// Whole segments only — `a/bc` is not a child of `a/b`. A name is a
    /// parent of itself (`starts_with` semantics).
    pub fn is_parent(&self, child: &PermissionName) -> bool {
        child.segments.starts_with(&self.segments)
    }
}

impl Ord for PermissionName {
    /// Total order: lexicographic over the common-length segments; the
    /// segment count decides only when all compared segments are equal.
    fn cmp(&self, other: &Self) -> Ordering {
        for (ours, theirs) in self.segments.iter().zip(&other.segments) {
            match ours.cmp(theirs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.segments.len().cmp(&other.segments.len())
    }
}

impl PartialOrd for PermissionName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for PermissionName {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PermissionName {
    type Error = AclError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PermissionName> for String {
    fn from(name: PermissionName) -> Self {
        name.to_string()
    }
}
