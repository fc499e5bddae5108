//! Parser module for Hack assembly language
//!
//! Classifies each logical line produced by [`hack_common`] as an
//! A-instruction, a C-instruction, or a label pseudo-instruction (spec
//! §4.2), and decomposes C-instructions into their `dest`/`comp`/`jump`
//! parts by splitting on `=` and `;`.

use hack_common::LogicalLine;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CommandType {
    /// `@Xxx` where `Xxx` is either a symbol or a decimal number
    ACommand,
    /// `dest=comp;jump`
    CCommand,
    /// `(Xxx)` where `Xxx` is a symbol
    LCommand,
}

/// A single classified instruction, carrying the 0-based ordinal of the
/// logical line it came from (used to report errors with a line number).
pub struct Instruction<'a> {
    pub line: usize,
    pub command_type: CommandType,
    text: &'a str,
}

impl<'a> Instruction<'a> {
    fn classify(logical: &'a LogicalLine) -> Self {
        let command_type = match logical.text.as_bytes()[0] {
            b'@' => CommandType::ACommand,
            b'(' => CommandType::LCommand,
            _ => CommandType::CCommand,
        };
        Instruction {
            line: logical.ordinal,
            command_type,
            text: &logical.text,
        }
    }

    /// Returns the symbol from an A-instruction or L-instruction.
    ///
    /// # Panics
    /// Panics if called on a C-instruction; callers only reach this after
    /// matching on `command_type`.
    pub fn symbol(&self) -> &'a str {
        match self.command_type {
            CommandType::ACommand => &self.text[1..],
            CommandType::LCommand => &self.text[1..self.text.len() - 1],
            CommandType::CCommand => unreachable!("symbol() called on a C-instruction"),
        }
    }

    /// Returns the `dest` part of a C-instruction (empty string if absent).
    pub fn dest(&self) -> &'a str {
        debug_assert_eq!(self.command_type, CommandType::CCommand);
        match self.text.find('=') {
            Some(pos) => &self.text[..pos],
            None => "",
        }
    }

    /// Returns the `comp` part of a C-instruction.
    pub fn comp(&self) -> &'a str {
        debug_assert_eq!(self.command_type, CommandType::CCommand);
        let start = self.text.find('=').map_or(0, |pos| pos + 1);
        let end = self.text.find(';').unwrap_or(self.text.len());
        &self.text[start..end]
    }

    /// Returns the `jump` part of a C-instruction (empty string if absent).
    pub fn jump(&self) -> &'a str {
        debug_assert_eq!(self.command_type, CommandType::CCommand);
        match self.text.find(';') {
            Some(pos) => &self.text[pos + 1..],
            None => "",
        }
    }
}

/// Iterates the classified instructions in a program, in source order.
pub fn instructions(lines: &[LogicalLine]) -> impl Iterator<Item = Instruction<'_>> {
    lines.iter().map(Instruction::classify)
}

/// A valid Hack symbol: a letter/`_`/`.`/`$`/`:`, followed by any number of
/// letters, digits, `_`, `.`, `$`, `:` (spec §4.2/§7 — malformed A-instruction
/// symbols are fatal, not silently coerced).
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    let is_symbol_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':');
    is_symbol_char(first) && chars.all(is_symbol_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ordinal: usize, text: &str) -> LogicalLine {
        LogicalLine {
            ordinal,
            text: text.to_string(),
        }
    }

    #[test]
    fn classifies_all_three_kinds() {
        let lines = vec![line(0, "@100"), line(1, "(LOOP)"), line(2, "D=M")];
        let kinds: Vec<_> = instructions(&lines).map(|i| i.command_type).collect();
        assert_eq!(
            kinds,
            vec![
                CommandType::ACommand,
                CommandType::LCommand,
                CommandType::CCommand
            ]
        );
    }

    #[test]
    fn a_instruction_symbol() {
        let lines = vec![line(0, "@VARIABLE")];
        let instr: Vec<_> = instructions(&lines).collect();
        assert_eq!(instr[0].symbol(), "VARIABLE");
    }

    #[test]
    fn l_instruction_symbol() {
        let lines = vec![line(0, "(LOOP)")];
        let instr: Vec<_> = instructions(&lines).collect();
        assert_eq!(instr[0].symbol(), "LOOP");
    }

    #[test]
    fn c_instruction_full_decomposition() {
        let lines = vec![line(0, "MD=D+1;JMP")];
        let instr: Vec<_> = instructions(&lines).collect();
        assert_eq!(instr[0].dest(), "MD");
        assert_eq!(instr[0].comp(), "D+1");
        assert_eq!(instr[0].jump(), "JMP");
    }

    #[test]
    fn c_instruction_missing_dest_and_jump() {
        let lines = vec![line(0, "D+1"), line(1, "D=D+1")];
        let instr: Vec<_> = instructions(&lines).collect();
        assert_eq!(instr[0].dest(), "");
        assert_eq!(instr[0].jump(), "");
        assert_eq!(instr[1].jump(), "");
    }

    #[test]
    fn symbol_validation() {
        assert!(is_valid_symbol("LOOP"));
        assert!(is_valid_symbol("_var"));
        assert!(is_valid_symbol("i"));
        assert!(is_valid_symbol("Foo.bar$ret.1"));
        assert!(!is_valid_symbol("1LOOP"));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("has space"));
    }
}
