use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Missing {} folder: {}", folder_name(.0), .0.display())]
    MissingDirectory(PathBuf),

    #[error("No .{extension} files found in: {}", dir.display())]
    NoInputFiles { dir: PathBuf, extension: String },

    #[error("Not a valid document container: {}", path.display())]
    DocumentFormat {
        path: PathBuf,
        #[source]
        source: docx_rs::ReaderError,
    },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

fn folder_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io { path: path.into(), source }
    }
}
