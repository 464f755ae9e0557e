use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid module identifier '{name}'")]
    #[diagnostic(help("module names must look like 'feature-<name>', e.g. feature-login"))]
    InvalidIdentifier { name: String },

    #[error("module '{path}' already exists")]
    #[diagnostic(help("pick a different module name or remove the existing directory"))]
    ModuleAlreadyExists { path: PathBuf },

    #[error("module '{path}' does not exist")]
    #[diagnostic(help("run 'atlasgen structure <module>' to create the module skeleton first"))]
    ModuleNotFound { path: PathBuf },

    #[error("file already exists: {path}")]
    #[diagnostic(help("re-run with --overwrite to replace it, or --skip-existing to keep it"))]
    FileAlreadyExists { path: PathBuf },

    #[error(transparent)]
    Render(#[from] atlasgen_templates::Error),

    #[error("filesystem operation failed on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("interrupted during the '{stage}' stage")]
    Interrupted { stage: &'static str, cleaned: bool },

    #[error("stage '{stage}' failed")]
    StageFailed {
        stage: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl From<atlasgen_core::Error> for Error {
    fn from(e: atlasgen_core::Error) -> Self {
        match e {
            atlasgen_core::Error::AlreadyExists { path } => Error::FileAlreadyExists { path },
            atlasgen_core::Error::Io { path, source } => Error::Io { path, source },
        }
    }
}
