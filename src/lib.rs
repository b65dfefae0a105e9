//! lib.rs — Library Entry for the Project Navigator
//! -----------------------------------------------
//! Exposes the error type, configuration, filesystem helpers, background
//! search task, and the collector/selection logic. The binary in `main.rs`
//! wires these together behind the CLI.

/// --- Error handling (unified error type for the app) ---
pub mod error;

/// --- Configuration: root folders, editor command ---
pub mod config {
    pub mod config;
}

/// --- Filesystem helpers: home expansion, external launchers ---
pub mod fs {
    pub mod expand;
    pub mod launcher;
}

/// --- Background/async tasks ---
pub mod tasks {
    pub mod search_task;
}

/// --- Collector and interactive disambiguation ---
pub mod select;

pub mod logging;
pub use logging::Logger;

pub use error::AppError;
