use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unterminated string constant")]
    UnterminatedString { line: usize },

    #[error("line {line}: unexpected character '{ch}'")]
    IllegalChar { line: usize, ch: char },

    #[error("line {line}: integer constant {value} out of range (0..=32767)")]
    IntConstOutOfRange { line: usize, value: i64 },
}
