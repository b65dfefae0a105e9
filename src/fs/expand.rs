//! src/fs/expand.rs
//! ============================================================================
//! # Home Expansion
//!
//! Resolves the `~/` shorthand allowed in configured root folders. Expansion
//! happens exactly once, before any traversal task is spawned.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::AppError;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without the shorthand pass through unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf, AppError> {
    if path == "~" {
        let base: BaseDirs = BaseDirs::new().ok_or(AppError::HomeDir)?;
        return Ok(base.home_dir().to_path_buf());
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let base: BaseDirs = BaseDirs::new().ok_or(AppError::HomeDir)?;
        return Ok(base.home_dir().join(rest));
    }
    Ok(PathBuf::from(path))
}
