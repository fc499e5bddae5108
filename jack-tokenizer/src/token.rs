use phf::{phf_map, phf_set};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Symbol,
    IntConst,
    StringConst,
    Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

pub static KEYWORDS: phf::Set<&'static str> = phf_set! {
    "class", "constructor", "function", "method", "field", "static", "var",
    "int", "char", "boolean", "void", "true", "false", "null", "this",
    "let", "do", "if", "else", "while", "return",
};

/// XML-unsafe symbols map to their escape, matching the original tokenizer's
/// `symbol()` accessor; everything else maps to itself.
pub static SYMBOL_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '&' => "&amp;",
};

pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}' | '(' | ')' | '[' | ']' | '.' | ',' | ';' | '+' | '-' | '*' | '/' | '&' | '|'
            | '<' | '>' | '=' | '~'
    )
}

impl Token {
    /// The symbol escaped for XML output, identity for non-symbol kinds or
    /// symbols with no XML-unsafe meaning.
    pub fn escaped_symbol(&self) -> &str {
        if self.kind != TokenKind::Symbol {
            return &self.text;
        }
        let ch = self.text.chars().next().expect("symbol token is never empty");
        SYMBOL_ESCAPES.get(&ch).copied().unwrap_or(&self.text)
    }
}
