use hack_common::LogicalLine;

use crate::error::TranslateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Arithmetic,
    Push,
    Pop,
    Label,
    Goto,
    IfGoto,
    Function,
    Call,
    Return,
}

/// A single parsed VM command, borrowing its tokens from the source line.
pub struct Command<'a> {
    pub line: usize,
    pub text: &'a str,
    pub command_type: CommandType,
    parts: Vec<&'a str>,
}

impl<'a> Command<'a> {
    fn new(line: usize, text: &'a str) -> Result<Self, TranslateError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let first = parts[0];
        let command_type = match first {
            "push" => CommandType::Push,
            "pop" => CommandType::Pop,
            "label" => CommandType::Label,
            "goto" => CommandType::Goto,
            "if-goto" => CommandType::IfGoto,
            "function" => CommandType::Function,
            "call" => CommandType::Call,
            "return" => CommandType::Return,
            _ => CommandType::Arithmetic,
        };
        Ok(Command {
            line,
            text,
            command_type,
            parts,
        })
    }

    /// The operator for arithmetic commands, or the target/function name
    /// for everything else. Never called for `Return`.
    pub fn arg1(&self) -> Result<&'a str, TranslateError> {
        match self.command_type {
            CommandType::Arithmetic => Ok(self.parts[0]),
            CommandType::Return => Err(TranslateError::MalformedCommand {
                line: self.line,
                command: self.text.to_string(),
            }),
            _ => self.parts.get(1).copied().ok_or_else(|| TranslateError::MalformedCommand {
                line: self.line,
                command: self.text.to_string(),
            }),
        }
    }

    /// The numeric third token, for push/pop/function/call.
    pub fn arg2(&self) -> Result<i32, TranslateError> {
        let raw = self.parts.get(2).ok_or_else(|| TranslateError::MalformedCommand {
            line: self.line,
            command: self.text.to_string(),
        })?;
        raw.parse().map_err(|_| TranslateError::MalformedCommand {
            line: self.line,
            command: self.text.to_string(),
        })
    }
}

/// Parses every logical line into a `Command`, in source order.
pub fn commands(lines: &[LogicalLine]) -> Result<Vec<Command<'_>>, TranslateError> {
    lines
        .iter()
        .map(|line| Command::new(line.ordinal, &line.text))
        .collect()
}
