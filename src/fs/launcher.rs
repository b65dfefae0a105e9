//! src/fs/launcher.rs
//! ============================================================================
//! # Launcher: External Program Invocation
//!
//! Builds and starts the external programs the navigator hands a resolved
//! path to: the platform file opener, the configured editor command, and the
//! config-file editor. Opener and editor-command launches are detached; the
//! config-file editor runs attached and is awaited.

use std::env;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::AppError;

/// Build the platform command that opens `path` with the OS file opener.
pub fn opener_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Build the command that opens `path` with the configured editor.
pub fn editor_command(editor_cmd: &str, path: &Path) -> Command {
    let mut cmd = Command::new(editor_cmd);
    cmd.arg(path);
    cmd
}

/// Start `cmd` detached: stdio is nulled and the child is never awaited, so
/// the navigator exits while the opened program keeps running.
pub fn launch_detached(mut cmd: Command, label: &str) -> Result<(), AppError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    debug!("launching {label} detached");
    cmd.spawn().map(|_child| ()).map_err(|e| AppError::Launch {
        cmd: label.to_string(),
        source: e,
    })
}

/// Open `path` in the user's editor, attached to the current terminal, and
/// wait for it to exit. Used for editing the config file.
pub async fn open_in_editor(path: &Path) -> Result<(), AppError> {
    let editor: String = resolve_editor()?;

    let status = Command::new(&editor)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| AppError::Launch {
            cmd: editor.clone(),
            source: e,
        })?;

    if !status.success() {
        warn!("editor {editor} exited with {status}");
    }
    Ok(())
}

/// `$EDITOR` if set, otherwise the first of `nano`, `vi`, `vim` on `$PATH`.
fn resolve_editor() -> Result<String, AppError> {
    if let Ok(editor) = env::var("EDITOR")
        && !editor.trim().is_empty()
    {
        return Ok(editor);
    }

    for candidate in ["nano", "vi", "vim"] {
        if find_in_path(candidate) {
            return Ok(candidate.to_string());
        }
    }
    Err(AppError::EditorNotFound)
}

fn find_in_path(bin: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(bin).is_file())
}
