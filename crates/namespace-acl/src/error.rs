//! ACL error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the namespace ACL.
#[derive(Debug, Error, Diagnostic)]
pub enum AclError {
    /// Permission name failed to parse.
    #[error("invalid permission name '{name}': {reason}")]
    #[diagnostic(code(nsacl::invalid_name))]
    InvalidName {
        /// The offending name text.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Action string failed to parse.
    #[error("invalid action string '{actions}': {reason}")]
    #[diagnostic(code(nsacl::invalid_actions))]
    InvalidActions {
        /// The offending action text.
        actions: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Granted and requested action strings have different widths.
    #[error("action width mismatch: granted {granted} positions, requested {requested}")]
    #[diagnostic(
        code(nsacl::action_width_mismatch),
        help("grant and request action strings must be the same width")
    )]
    ActionWidthMismatch {
        /// Width of the granted action set.
        granted: usize,
        /// Width of the requested action set.
        requested: usize,
    },

    /// Attempt to add to a collection already marked read-only.
    #[error("permission collection is read-only")]
    #[diagnostic(
        code(nsacl::read_only),
        help("the read-only transition is one-way; build a new collection to add permissions")
    )]
    ReadOnly,

    /// Persistent storage I/O error.
    #[error("ACL store I/O error: {message}")]
    #[diagnostic(code(nsacl::io_error))]
    Io {
        /// The error description.
        message: String,
    },
}
