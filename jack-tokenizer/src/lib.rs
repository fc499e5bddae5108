//! Jack lexer: turns `.jack` source into a token stream.
//!
//! Deliberately stops at tokenizing — no parser, no code generator. See
//! `jack-tokenizer` binary for a token dump.

pub mod error;
pub mod token;

use std::fs;
use std::path::Path;

pub use error::LexError;
pub use token::{Token, TokenKind};

/// Strips `/* ... */`, `/** ... */`, and `//` comments, preserving newlines
/// so the token line numbers below stay accurate. A `"` toggles string
/// mode, during which `//` and `/*` are ordinary characters.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Lexes already comment-stripped source into a token stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let stripped = strip_comments(source);
    let mut tokens = Vec::new();
    let mut chars = stripped.chars().peekable();
    let mut line = 1usize;

    while let Some(&ch) = chars.peek() {
        if ch == '\n' {
            line += 1;
            chars.next();
            continue;
        }
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        if ch == '"' {
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                if c == '\n' {
                    return Err(LexError::UnterminatedString { line });
                }
                text.push(c);
            }
            if !closed {
                return Err(LexError::UnterminatedString { line });
            }
            tokens.push(Token {
                kind: TokenKind::StringConst,
                text,
                line,
            });
            continue;
        }
        if ch.is_ascii_digit() {
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            match text.parse::<i64>() {
                Ok(value) if (0..=32767).contains(&value) => {}
                Ok(value) => return Err(LexError::IntConstOutOfRange { line, value }),
                Err(_) => return Err(LexError::IntConstOutOfRange { line, value: i64::MAX }),
            }
            tokens.push(Token {
                kind: TokenKind::IntConst,
                text,
                line,
            });
            continue;
        }
        if ch.is_alphabetic() || ch == '_' {
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_alphanumeric() || c == '_' {
                    text.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            let kind = if token::KEYWORDS.contains(text.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token { kind, text, line });
            continue;
        }
        if token::is_symbol(ch) {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::Symbol,
                text: ch.to_string(),
                line,
            });
            continue;
        }
        return Err(LexError::IllegalChar { line, ch });
    }

    Ok(tokens)
}

pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, LexError> {
    let source = fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tokenize(&source)
}
