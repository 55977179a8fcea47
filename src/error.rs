use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a conversion run. All variants are caught at
/// the CLI boundary and rendered as a message plus a nonzero exit code.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Bad arguments to the directory setter. Recoverable: the previously
    /// held directory pair is left unchanged.
    #[error("unable to set directories: {reason}")]
    InvalidDirectoryInput { reason: String },

    /// The target directory could not be created. The run aborts before
    /// any file is touched.
    #[error("unable to create target directory {}: {source}", path.display())]
    TargetDirUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No source-format files were found. Reported as a user-facing
    /// condition, not a crash.
    #[error("could not find any {format} images in source folder {}", dir.display())]
    NoSourceImages { dir: PathBuf, format: String },

    /// Any probe, filesystem, or codec error outside the expected
    /// "not found" case. Aborts the remaining run; files converted before
    /// this point stay converted.
    #[error("unexpected error while processing {}: {source}", path.display())]
    UnexpectedFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConvertError {
    pub fn unexpected(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConvertError::UnexpectedFile { path: path.into(), source: Box::new(source) }
    }
}
