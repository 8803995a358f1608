//! Error type shared by the codec, the I/O helpers and the batch runner.
//!
//! Every failure is tied to the file that caused it so the batch runner can
//! report it after the join without touching sibling files.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("cannot read input file {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {path}: {source}")]
    OutputWriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("worker processing {path} panicked: {message}")]
    WorkerPanicked { path: String, message: String },

    #[error("could not start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl CodecError {
    /// Short name of the failure kind, used in per-file reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::InputUnavailable { .. } => "InputUnavailable",
            CodecError::OutputWriteFailed { .. } => "OutputWriteFailed",
            CodecError::WorkerPanicked { .. } => "WorkerPanicked",
            CodecError::Pool(_) => "Pool",
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
