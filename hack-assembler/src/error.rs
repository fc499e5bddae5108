//! Error taxonomy for the Hack assembler (spec §7).
//!
//! Every fatal condition carries the 0-based logical-line ordinal it was
//! detected on, except I/O failures, which carry the path instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblerError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown comp mnemonic {mnemonic:?}")]
    UnknownComp { line: usize, mnemonic: String },

    #[error("line {line}: unknown dest mnemonic {mnemonic:?}")]
    UnknownDest { line: usize, mnemonic: String },

    #[error("line {line}: unknown jump mnemonic {mnemonic:?}")]
    UnknownJump { line: usize, mnemonic: String },

    #[error("line {line}: malformed A-instruction symbol {symbol:?}")]
    MalformedSymbol { line: usize, symbol: String },

    #[error("line {line}: immediate {value} does not fit in 15 bits")]
    ImmediateOutOfRange { line: usize, value: u32 },

    #[error("line {line}: label {label:?} is already defined")]
    DuplicateLabel { line: usize, label: String },
}

impl From<hack_common::SourceError> for AssemblerError {
    fn from(err: hack_common::SourceError) -> Self {
        match err {
            hack_common::SourceError::Io { path, source } => AssemblerError::Io { path, source },
        }
    }
}
