//! Shared Line Source for the Hack toolchain
//!
//! Both the assembler and the VM translator read a text file, strip `//`
//! line comments and blank lines, and walk the result as a sequence of
//! trimmed logical lines with stable 0-based ordinals. This crate is that
//! one shared reader so the two tools don't reimplement comment-stripping
//! twice.

use std::fs;
use std::path::Path;

/// A non-blank, comment-free, trimmed line paired with its 0-based ordinal
/// among surviving lines (used as the ROM address during assembler pass
/// one, and simply as a line number for diagnostics elsewhere).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub ordinal: usize,
    pub text: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads `path`, strips `//` line comments, trims, and drops lines that
/// become empty. Ordinals are 0-based and contiguous over surviving lines.
pub fn read_logical_lines(path: &Path) -> Result<Vec<LogicalLine>, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut lines = Vec::new();
    for raw in contents.lines() {
        let stripped = strip_line_comment(raw);
        let trimmed = stripped.trim();
        if !trimmed.is_empty() {
            let ordinal = lines.len();
            lines.push(LogicalLine {
                ordinal,
                text: trimmed.to_string(),
            });
        }
    }
    Ok(lines)
}

/// Deletes everything from the first `//` onward. Byte-level scan avoids
/// searching inside multi-byte sequences since `/` is always single-byte.
pub fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'/' && bytes[i + 1] == b'/' {
            return &line[..i];
        }
    }
    line
}
