//! Hack Assembler - Main Entry Point
//!
//! A two-pass assembler for the Hack assembly language.
//!
//! # Usage
//! ```bash
//! hack-assembler <input.asm> [output.hack]
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use hack_assembler::{first_pass, second_pass, SymbolTable};

fn output_path(input: &str, explicit_output: Option<&str>) -> String {
    explicit_output.map_or_else(
        || {
            Path::new(input)
                .with_extension("hack")
                .to_string_lossy()
                .into_owned()
        },
        std::string::ToString::to_string,
    )
}

fn run(input_path: &str, output_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let lines = hack_common::read_logical_lines(Path::new(input_path))?;

    let mut symbol_table = SymbolTable::new();
    first_pass(&lines, &mut symbol_table)?;
    let instructions = second_pass(&lines, &mut symbol_table)?;

    fs::write(output_path, instructions.join("\n") + "\n")?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <input.asm> [output.hack]", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let output = output_path(input_path, args.get(2).map(String::as_str));

    if let Err(err) = run(input_path, &output) {
        eprintln!("Error: {err}");
        process::exit(1);
    }

    println!("Assembly completed. Output written to {output}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_generation() {
        assert_eq!(output_path("test.asm", None), "test.hack");
        assert_eq!(output_path("test.asm", Some("custom.hack")), "custom.hack");
        assert_eq!(output_path("dir/file.asm", None), "dir/file.hack");
    }
}
