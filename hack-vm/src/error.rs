use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown arithmetic command '{command}'")]
    UnknownArithmetic { line: usize, command: String },

    #[error("line {line}: unknown memory segment '{segment}'")]
    UnknownSegment { line: usize, segment: String },

    #[error("line {line}: segment '{segment}' has no pop form")]
    SegmentNotPoppable { line: usize, segment: String },

    #[error("line {line}: malformed command '{command}'")]
    MalformedCommand { line: usize, command: String },

    #[error("line {line}: index {index} out of range for segment '{segment}'")]
    IndexOutOfRange {
        line: usize,
        segment: String,
        index: i32,
    },

    #[error("directory {0} contains no .vm files")]
    EmptyDirectory(PathBuf),
}

impl From<hack_common::SourceError> for TranslateError {
    fn from(err: hack_common::SourceError) -> Self {
        match err {
            hack_common::SourceError::Io { path, source } => TranslateError::Io {
                path: PathBuf::from(path),
                source,
            },
        }
    }
}
