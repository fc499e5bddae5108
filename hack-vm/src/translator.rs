use std::collections::HashMap;

use hack_common::LogicalLine;

use crate::codegen;
use crate::error::TranslateError;
use crate::parser::{self, CommandType};
use crate::segment::Segment;

/// Threads `jumpCount` and the per-function call-site counters across every
/// translation unit in a run, while `current_file_stem` is reset per unit.
/// A free-standing `static mut` counter would not survive translating a
/// directory of files in one process; this is that state, owned once.
pub struct Translator {
    current_file_stem: String,
    jump_count: usize,
    call_counts: HashMap<String, usize>,
}

impl Translator {
    pub fn new() -> Self {
        Translator {
            current_file_stem: String::new(),
            jump_count: 0,
            call_counts: HashMap::new(),
        }
    }

    pub fn set_file_stem(&mut self, stem: impl Into<String>) {
        self.current_file_stem = stem.into();
    }

    /// Translates one unit's logical lines into an assembly fragment.
    pub fn translate_unit(&mut self, lines: &[LogicalLine]) -> Result<String, TranslateError> {
        let commands = parser::commands(lines)?;
        let mut out = String::new();
        for command in &commands {
            self.translate_command(command, &mut out)?;
        }
        Ok(out)
    }

    fn translate_command(
        &mut self,
        command: &parser::Command<'_>,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        match command.command_type {
            CommandType::Arithmetic => {
                codegen::write_arithmetic(
                    out,
                    command.arg1()?,
                    command.text,
                    &mut self.jump_count,
                    command.line,
                )?;
            }
            CommandType::Push => {
                let segment = Segment::parse(command.arg1()?, command.line)?;
                let index = command.arg2()?;
                codegen::write_push(
                    out,
                    segment,
                    index,
                    &self.current_file_stem,
                    command.text,
                    command.line,
                )?;
            }
            CommandType::Pop => {
                let segment = Segment::parse(command.arg1()?, command.line)?;
                let index = command.arg2()?;
                codegen::write_pop(
                    out,
                    segment,
                    index,
                    &self.current_file_stem,
                    command.text,
                    command.line,
                )?;
            }
            CommandType::Label => codegen::write_label(out, command.arg1()?, command.text),
            CommandType::Goto => codegen::write_goto(out, command.arg1()?, command.text),
            CommandType::IfGoto => codegen::write_if_goto(out, command.arg1()?, command.text),
            CommandType::Function => {
                let name = command.arg1()?;
                let n_vars = command.arg2()?;
                codegen::write_function(out, name, n_vars, command.text);
            }
            CommandType::Call => {
                let name = command.arg1()?;
                let n_args = command.arg2()?;
                let ordinal = self.call_counts.entry(name.to_string()).or_insert(0);
                *ordinal += 1;
                let return_label = format!("{name}$ret.{ordinal}");
                codegen::write_call(out, name, n_args, &return_label, command.text);
            }
            CommandType::Return => codegen::write_return(out, command.text),
        }
        Ok(())
    }

    /// The inlined `call Sys.init 0` bootstrap, with `SP` set to 256 first.
    /// The return label is unique because no user call predates bootstrap.
    pub fn write_bootstrap(&mut self, out: &mut String) {
        out.push_str("// bootstrap\n@256\nD=A\n@SP\nM=D\n");
        let ordinal = self.call_counts.entry("Sys.init".to_string()).or_insert(0);
        *ordinal += 1;
        // No real source line exists for this synthesized call.
        codegen::write_call(out, "Sys.init", 0, "Sys.init$ret.0", "call Sys.init 0");
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(strs: &[&str]) -> Vec<LogicalLine> {
        strs.iter()
            .enumerate()
            .map(|(ordinal, text)| LogicalLine {
                ordinal,
                text: (*text).to_string(),
            })
            .collect()
    }

    #[test]
    fn jump_count_persists_across_units() {
        let mut translator = Translator::new();
        translator.set_file_stem("A");
        translator.translate_unit(&lines_of(&["eq"])).unwrap();
        translator.set_file_stem("B");
        let out = translator.translate_unit(&lines_of(&["eq"])).unwrap();
        assert!(out.contains("(EQ1)"), "second unit should continue the counter: {out}");
    }

    #[test]
    fn static_segment_uses_current_unit_stem() {
        let mut translator = Translator::new();
        translator.set_file_stem("Foo");
        let out = translator.translate_unit(&lines_of(&["push static 0"])).unwrap();
        assert!(out.contains("@Foo.0"));

        translator.set_file_stem("Bar");
        let out = translator.translate_unit(&lines_of(&["push static 0"])).unwrap();
        assert!(out.contains("@Bar.0"));
    }

    #[test]
    fn call_site_ordinals_increment_per_function_name() {
        let mut translator = Translator::new();
        let out = translator
            .translate_unit(&lines_of(&["call Foo.bar 0", "call Foo.bar 1"]))
            .unwrap();
        assert!(out.contains("Foo.bar$ret.1"));
        assert!(out.contains("Foo.bar$ret.2"));
    }

    #[test]
    fn bootstrap_sets_stack_pointer_then_calls_sys_init() {
        let mut translator = Translator::new();
        let mut out = String::new();
        translator.write_bootstrap(&mut out);
        assert!(out.starts_with("// bootstrap\n@256\nD=A\n@SP\nM=D\n"));
        assert!(out.contains("Sys.init$ret.0"));
    }
}
