use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure preparing the traversal. Recorded once in the report, after which
/// no files are processed.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("cannot resolve absolute path of {root}: {source}")]
    Absolute {
        root: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot access {root}: {source}")]
    Access {
        root: PathBuf,
        source: std::io::Error,
    },
    #[error("{root} is not a directory")]
    NotADirectory { root: PathBuf },
}

/// Failure gathering a single file's record. Recorded in place of the record
/// fields; traversal continues.
#[derive(Debug, Error)]
pub enum FileProcessingError {
    #[error("cannot read metadata: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not under the explored root")]
    OutsideRoot { path: PathBuf },
    #[error("{path} has no file name")]
    NoFileName { path: PathBuf },
    #[error("{message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },
}

impl FileProcessingError {
    pub(crate) fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileProcessingError::Metadata {
            path: path.into(),
            source,
        }
    }

    /// The path the failure concerns, if known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FileProcessingError::Metadata { path, .. }
            | FileProcessingError::OutsideRoot { path }
            | FileProcessingError::NoFileName { path } => Some(path),
            FileProcessingError::Walk { path, .. } => path.as_deref(),
        }
    }
}

/// Failure reading a file's content.
#[derive(Debug, Error)]
pub enum ContentReadError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
}

impl ContentReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentReadError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that reach the caller of [`explore`](crate::explore). Everything else
/// is written into the report.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to write report: {0}")]
    Sink(#[from] std::io::Error),
    #[error("cannot open report file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
