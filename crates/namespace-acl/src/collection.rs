//! Ordered permission collections with closest-ancestor lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AclError;
use crate::name::PermissionName;
use crate::permission::NamespacePermission;

/// An ordered collection of [`NamespacePermission`]s keyed by their full
/// names, answering requests by closest-ancestor ("most specific wins")
/// lookup.
///
/// Permissions sharing a name accumulate in one bucket. A request is
/// governed by the exact-name bucket when one exists, otherwise by the
/// bucket of the longest registered ancestor of the requested name. Only
/// the governing bucket is consulted: a specific name that grants nothing
/// shadows broader grants above it.
///
/// The collection starts mutable; [`set_read_only`](Self::set_read_only)
/// freezes it permanently. Not internally synchronized — callers serialize
/// mutation against reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespacePermissionCollection {
    /// Permission buckets keyed by full name, in name order.
    buckets: BTreeMap<PermissionName, Vec<NamespacePermission>>,
    /// One-way mutable → read-only flag.
    read_only: bool,
}

impl NamespacePermissionCollection {
    /// Create an empty, mutable collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a permission under its full name, creating the bucket if absent.
    ///
    /// Fails with [`AclError::ReadOnly`] once the collection is frozen.
    pub fn add(&mut self, permission: NamespacePermission) -> Result<(), AclError> {
        if self.read_only {
            return Err(AclError::ReadOnly);
        }
        self.buckets
            .entry(permission.name().clone())
            .or_default()
            .push(permission);
        Ok(())
    }

    /// Mark the collection read-only. The transition is one-way.
    pub fn set_read_only(&mut self) {
        self.read_only = true;
    }

    /// Whether the collection has been frozen.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Find the bucket governing `name`.
    ///
    /// The exact-name bucket wins when present. Otherwise the keys strictly
    /// below `name` are scanned in descending order and the first key that
    /// is an ancestor of `name` governs; every ancestor sorts below its
    /// descendants, so the first hit is the longest ancestor. Returns
    /// `None` when no registered name governs the request.
    pub fn governing(
        &self,
        name: &PermissionName,
    ) -> Option<(&PermissionName, &[NamespacePermission])> {
        if let Some((key, bucket)) = self.buckets.get_key_value(name) {
            return Some((key, bucket.as_slice()));
        }
        self.buckets
            .range(..name)
            .rev()
            .find(|(key, _)| key.is_parent(name))
            .map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// Test whether any stored permission governs and implies the request.
    ///
    /// True iff a governing bucket exists and at least one of its
    /// permissions implies the request (short-circuit OR). Action width
    /// mismatches between the request and a consulted grant fail fast.
    pub fn implies(&self, request: &NamespacePermission) -> Result<bool, AclError> {
        if self.buckets.is_empty() {
            return Ok(false);
        }
        let Some((_, bucket)) = self.governing(request.name()) else {
            return Ok(false);
        };
        for granted in bucket {
            if granted.implies(request)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Iterate all stored permissions in ascending name order.
    ///
    /// Lazy and single-pass; insertion order is preserved within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &NamespacePermission> {
        self.buckets.values().flatten()
    }

    /// Total number of stored permissions across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the collection holds no permissions.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
