//! src/tasks/search_task.rs
//! ============================================================================
//! # Search Task: Concurrent Recursive Folder Search
//!
//! Fans out one Tokio task per configured root folder; every task lists its
//! directory and spawns a further task for each non-hidden child directory.
//! Matching child names are pushed onto a shared unbounded channel as they
//! are found.
//!
//! Completion is signalled by sender lifetime rather than an explicit
//! counter: every spawned task owns a clone of the sender and the caller's
//! original is dropped before the receiver is returned, so the channel ends
//! exactly when the last task (however deeply spawned) exits. The receiver
//! can neither end early nor hang on a finished traversal.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Start the concurrent search and return the receiving end of the match
/// stream.
///
/// `roots` must already be home-expanded. Roots are always scanned, even
/// when their own base name is hidden; they are never match candidates
/// themselves. Matching is a case-insensitive substring test against each
/// directory's base name.
pub fn spawn_search(roots: Vec<PathBuf>, fragment: &str) -> UnboundedReceiver<PathBuf> {
    let (tx, rx) = mpsc::unbounded_channel::<PathBuf>();
    let needle: Arc<str> = Arc::from(fragment.to_lowercase());

    debug!("searching {} root folder(s) for {needle:?}", roots.len());
    for root in roots {
        spawn_scan(root, Arc::clone(&needle), tx.clone());
    }
    // The original `tx` drops here; only the spawned tasks keep the channel
    // open from now on.
    rx
}

/// Scan one directory's immediate children and fan out into subdirectories.
fn spawn_scan(dir: PathBuf, needle: Arc<str>, tx: UnboundedSender<PathBuf>) {
    tokio::spawn(async move {
        let mut read_dir: fs::ReadDir = match fs::read_dir(&dir).await {
            Ok(rd) => rd,
            Err(e) => {
                // Prune this subtree only; siblings keep searching.
                warn!("error reading folder {}: {e}", dir.display());
                return;
            }
        };

        loop {
            let entry = match read_dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!("error reading folder {}: {e}", dir.display());
                    break;
                }
            };

            let is_dir: bool = match entry.file_type().await {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    warn!("error inspecting {}: {e}", entry.path().display());
                    continue;
                }
            };
            if !is_dir {
                continue;
            }

            let name = entry.file_name();
            let name: &str = match name.to_str() {
                Some(name) => name,
                None => continue,
            };

            // Hidden directories: no match test, no recursion.
            if name.starts_with('.') {
                continue;
            }

            let path: PathBuf = entry.path();
            if name.to_lowercase().contains(needle.as_ref()) {
                // A send error means the collector went away; stop scanning.
                if tx.send(path.clone()).is_err() {
                    return;
                }
            }

            spawn_scan(path, Arc::clone(&needle), tx.clone());
        }
    });
}
