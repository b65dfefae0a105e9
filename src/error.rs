//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type
//!
//! Comprehensive error enum used across the application. Traversal-level I/O
//! failures are deliberately *not* represented here: an unreadable directory
//! prunes its own subtree inside the search task and never surfaces as a
//! failure of the whole search. Everything that does end a run goes through
//! this type.

use std::io;
use thiserror::Error;

/// Unified error type for all navigator operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No root folders configured; search is never attempted.
    #[error("no root folders found in the configuration")]
    NoRootFolders,

    /// Search completed with an empty result set.
    #[error("no matching folders found")]
    NoMatches,

    /// Selection input did not parse as an integer.
    #[error("invalid selection: {input:?}")]
    InvalidSelection { input: String },

    /// Selection parsed but falls outside the displayed index range.
    #[error("invalid selection: {index} is out of range (0..{len})")]
    SelectionOutOfRange { index: i64, len: usize },

    /// Standard input closed before a selection line could be read.
    #[error("error reading selection input")]
    SelectionRead,

    /// External program failed to start.
    #[error("failed to launch {cmd}: {source}")]
    Launch {
        cmd: String,
        #[source]
        source: io::Error,
    },

    /// No usable editor: `$EDITOR` unset and no fallback found on `$PATH`.
    #[error("no editor found; set $EDITOR")]
    EditorNotFound,

    /// Home directory could not be resolved for `~/` expansion.
    #[error("could not determine home directory")]
    HomeDir,
}
