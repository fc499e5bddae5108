//! Hack Assembler for the `Nand2Tetris` Hack platform
//!
//! A two-pass assembler that translates symbolic Hack assembly (`.asm`)
//! into 16-bit Hack machine code (`.hack`).
//!
//! # Architecture
//!
//! - [`parser`]: classifies logical lines into A/C/L-instructions and
//!   decomposes C-instructions
//! - [`code`]: binary encoding of `dest`/`comp`/`jump`/addresses
//! - [`symbol_table`]: predefined symbols plus label/variable resolution
//! - [`error`]: the fatal-error taxonomy
//!
//! # Example
//!
//! ```
//! use hack_assembler::{code, parser::{self, CommandType}};
//! use hack_common::LogicalLine;
//!
//! let lines = vec![
//!     LogicalLine { ordinal: 0, text: "@100".into() },
//!     LogicalLine { ordinal: 1, text: "D=M".into() },
//! ];
//! let instrs: Vec<_> = parser::instructions(&lines).collect();
//! assert_eq!(instrs[0].command_type, CommandType::ACommand);
//! assert_eq!(instrs[0].symbol(), "100");
//! assert_eq!(
//!     code::encode_c_instruction("D", "M", "", 1).unwrap(),
//!     "1111110000010000"
//! );
//! ```

pub mod code;
pub mod error;
pub mod parser;
pub mod symbol_table;

pub use error::AssemblerError;
pub use parser::CommandType;
pub use symbol_table::SymbolTable;

use hack_common::LogicalLine;

/// Pass one: walk the logical lines, binding each label to the ROM address
/// of the instruction that follows it. Label pseudo-instructions do not
/// occupy a ROM address themselves.
pub fn first_pass(
    lines: &[LogicalLine],
    symbol_table: &mut SymbolTable,
) -> Result<(), AssemblerError> {
    let mut rom_address: u16 = 0;
    for instr in parser::instructions(lines) {
        match instr.command_type {
            CommandType::LCommand => {
                symbol_table.define_label(instr.symbol(), rom_address, instr.line)?;
            }
            CommandType::ACommand | CommandType::CCommand => {
                rom_address += 1;
            }
        }
    }
    Ok(())
}

/// Pass two: re-walk the logical lines, resolving every symbol and
/// emitting one 16-character binary instruction per line, in source order.
pub fn second_pass(
    lines: &[LogicalLine],
    symbol_table: &mut SymbolTable,
) -> Result<Vec<String>, AssemblerError> {
    let mut ram_address: u16 = 16;
    let mut output = Vec::with_capacity(lines.len());

    for instr in parser::instructions(lines) {
        match instr.command_type {
            CommandType::ACommand => {
                let symbol = instr.symbol();
                let address = if let Ok(value) = symbol.parse::<u32>() {
                    value
                } else {
                    if !parser::is_valid_symbol(symbol) {
                        return Err(AssemblerError::MalformedSymbol {
                            line: instr.line,
                            symbol: symbol.to_string(),
                        });
                    }
                    u32::from(symbol_table.get_or_insert(symbol, &mut ram_address))
                };
                output.push(code::encode_a_instruction(address, instr.line)?);
            }
            CommandType::CCommand => {
                output.push(code::encode_c_instruction(
                    instr.dest(),
                    instr.comp(),
                    instr.jump(),
                    instr.line,
                )?);
            }
            CommandType::LCommand => {}
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(text: &str) -> Vec<LogicalLine> {
        text.lines()
            .enumerate()
            .map(|(ordinal, text)| LogicalLine {
                ordinal,
                text: text.to_string(),
            })
            .collect()
    }

    fn run(text: &str) -> Vec<String> {
        let lines = lines_of(text);
        let mut symbols = SymbolTable::new();
        first_pass(&lines, &mut symbols).unwrap();
        second_pass(&lines, &mut symbols).unwrap()
    }

    #[test]
    fn label_resolves_to_rom_address_of_next_instruction() {
        let out = run("@i\nD=A\n(LOOP)\n@i\nD=M\n@LOOP\nD;JGT");
        // @LOOP (line 5, the last A-instruction) should resolve to ROM
        // address 2, the address of the first instruction after (LOOP).
        assert_eq!(out[5], "0000000000000010");
    }

    #[test]
    fn variables_allocate_sequentially_from_sixteen() {
        let out = run("@foo\nM=1\n@bar\nM=1\n@foo\nM=1");
        assert_eq!(out[0], "0000000000010000"); // foo -> 16
        assert_eq!(out[2], "0000000000010001"); // bar -> 17
        assert_eq!(out[4], "0000000000010000"); // foo again -> 16
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let lines = lines_of("(LOOP)\n@0\n(LOOP)");
        let mut symbols = SymbolTable::new();
        let err = first_pass(&lines, &mut symbols).unwrap_err();
        assert!(matches!(err, AssemblerError::DuplicateLabel { .. }));
    }

    #[test]
    fn out_of_range_immediate_is_rejected() {
        let lines = lines_of("@32768\nD=A");
        let mut symbols = SymbolTable::new();
        first_pass(&lines, &mut symbols).unwrap();
        let err = second_pass(&lines, &mut symbols).unwrap_err();
        assert!(matches!(err, AssemblerError::ImmediateOutOfRange { .. }));
    }

    #[test]
    fn malformed_symbol_is_rejected() {
        let lines = lines_of("@1abc");
        let mut symbols = SymbolTable::new();
        first_pass(&lines, &mut symbols).unwrap();
        let err = second_pass(&lines, &mut symbols).unwrap_err();
        assert!(matches!(err, AssemblerError::MalformedSymbol { .. }));
    }
}
