//! Positional action flags.
//!
//! An action string like `"rw--"` is a fixed-width vector of positions,
//! each either a concrete flag character or `-` (unset). Implication is
//! tested position-by-position and is asymmetric: an unset position on the
//! grant side implies nothing, while an unset position on the request side
//! imposes no requirement. In particular `"----"` does NOT imply `"r---"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AclError;

/// A single position in an action string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionFlag {
    /// The position carries a concrete flag character (e.g. `r`).
    Set(char),
    /// The position is `-` — unset.
    Unset,
}

/// A fixed-width vector of positional action flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionSet {
    flags: Vec<ActionFlag>,
}

impl ActionSet {
    /// Parse an action string, one flag per character.
    ///
    /// `-` marks an unset position; every other character is a flag. Empty
    /// action strings are rejected.
    pub fn parse(actions: &str) -> Result<Self, AclError> {
        if actions.is_empty() {
            return Err(AclError::InvalidActions {
                actions: actions.to_string(),
                reason: "action string is empty".to_string(),
            });
        }
        let flags = actions
            .chars()
            .map(|c| {
                if c == '-' {
                    ActionFlag::Unset
                } else {
                    ActionFlag::Set(c)
                }
            })
            .collect();
        Ok(Self { flags })
    }

    /// Width of the action string.
    pub fn width(&self) -> usize {
        self.flags.len()
    }

    /// The flag at `position`, if in range.
    pub fn flag(&self, position: usize) -> Option<ActionFlag> {
        self.flags.get(position).copied()
    }

    /// Whether every position is unset.
    pub fn is_all_unset(&self) -> bool {
        self.flags.iter().all(|f| *f == ActionFlag::Unset)
    }

    /// Positional implication against a requested action set.
    ///
    /// Fails fast with [`AclError::ActionWidthMismatch`] when the widths
    /// differ rather than reading past the shorter string. A position
    /// passes when the request leaves it unset, or when both sides carry
    /// the same flag character.
    pub fn implies(&self, requested: &ActionSet) -> Result<bool, AclError> {
        if self.flags.len() != requested.flags.len() {
            return Err(AclError::ActionWidthMismatch {
                granted: self.flags.len(),
                requested: requested.flags.len(),
            });
        }
        let ok = self
            .flags
            .iter()
            .zip(&requested.flags)
            .all(|(granted, wanted)| match (granted, wanted) {
                (_, ActionFlag::Unset) => true,
                (ActionFlag::Unset, ActionFlag::Set(_)) => false,
                (ActionFlag::Set(g), ActionFlag::Set(w)) => g == w,
            });
        Ok(ok)
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            match flag {
                ActionFlag::Set(c) => write!(f, "{}", c)?,
                ActionFlag::Unset => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

impl FromStr for ActionSet {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ActionSet {
    type Error = AclError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ActionSet> for String {
    fn from(actions: ActionSet) -> Self {
        actions.to_string()
    }
}
