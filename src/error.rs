use std::path::PathBuf;

use thiserror::Error;

/// The only fatal condition in the engine's external interface: everything
/// else (parse failures, per-line read errors, unrecognized directives) is
/// reported and the run continues.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not open {path}")]
    FileOpen { path: PathBuf, #[source] source: std::io::Error },
}
