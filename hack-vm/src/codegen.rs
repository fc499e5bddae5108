use std::fmt::Write as _;

use crate::error::TranslateError;
use crate::segment::Segment;

/// Push the value of `D` onto the stack and advance `SP`.
fn write_push_d(out: &mut String) {
    write_asm(
        out,
        &["// push the value into stack", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
    );
}

/// Decrement `SP` and load the popped value into `D`.
fn write_pop_to_d(out: &mut String) {
    write_asm(out, &["// pop the top element of the stack", "@SP", "M=M-1", "A=M", "D=M"]);
}

fn write_asm(out: &mut String, lines: &[&str]) {
    for line in lines {
        writeln!(out, "{line}").unwrap();
    }
}

/// Emits the original VM source line as a comment (spec §6), verbatim —
/// not a reconstruction from the parsed command's parts.
fn write_source_comment(out: &mut String, source_line: &str) {
    writeln!(out, "// {source_line}").unwrap();
}

pub fn write_arithmetic(
    out: &mut String,
    command: &str,
    source_line: &str,
    jump_count: &mut usize,
    line: usize,
) -> Result<(), TranslateError> {
    write_source_comment(out, source_line);
    match command {
        "add" => write_binary_op(out, "D+M"),
        "sub" => write_binary_op(out, "D-M"),
        "and" => write_binary_op(out, "D&M"),
        "or" => write_binary_op(out, "D|M"),
        "neg" => write_unary_op(out, true),
        "not" => write_unary_op(out, false),
        "eq" => write_comparison(out, "JEQ", jump_count),
        "gt" => write_comparison(out, "JGT", jump_count),
        "lt" => write_comparison(out, "JLT", jump_count),
        _ => {
            return Err(TranslateError::UnknownArithmetic {
                line,
                command: command.to_string(),
            })
        }
    }
    Ok(())
}

fn write_binary_op(out: &mut String, operation: &str) {
    write_pop_to_d(out);
    write_asm(out, &["@R13", "M=D"]);
    write_pop_to_d(out);
    write_asm(out, &["@R13"]);
    writeln!(out, "D={operation}").unwrap();
    write_push_d(out);
}

fn write_unary_op(out: &mut String, is_neg: bool) {
    write_pop_to_d(out);
    if is_neg {
        write_asm(out, &["@0", "D=A-D"]);
    } else {
        write_asm(out, &["D=!D"]);
    }
    write_push_d(out);
}

fn write_comparison(out: &mut String, jump: &str, jump_count: &mut usize) {
    let label_prefix = match jump {
        "JEQ" => "EQ",
        "JGT" => "GT",
        _ => "LT",
    };
    let n = *jump_count;
    *jump_count += 1;

    write_pop_to_d(out);
    write_asm(out, &["@R13", "M=D"]);
    write_pop_to_d(out);
    write_asm(out, &["@R13", "D=D-M"]);
    writeln!(out, "@{label_prefix}{n}").unwrap();
    writeln!(out, "D;{jump}").unwrap();
    write_asm(out, &["@SP", "A=M", "M=0", "@SP", "M=M+1"]);
    writeln!(out, "@{label_prefix}{n}END").unwrap();
    write_asm(out, &["0;JMP"]);
    writeln!(out, "({label_prefix}{n})").unwrap();
    write_asm(out, &["@SP", "A=M", "M=-1", "@SP", "M=M+1"]);
    writeln!(out, "({label_prefix}{n}END)").unwrap();
}

pub fn write_push(
    out: &mut String,
    segment: Segment,
    index: i32,
    file_stem: &str,
    source_line: &str,
    line: usize,
) -> Result<(), TranslateError> {
    write_source_comment(out, source_line);
    match segment {
        Segment::Constant => {
            writeln!(out, "@{index}").unwrap();
            write_asm(out, &["D=A"]);
        }
        Segment::Local | Segment::Argument | Segment::This | Segment::That => {
            let base = segment.base_symbol().unwrap();
            writeln!(out, "@{base}").unwrap();
            write_asm(out, &["D=M"]);
            writeln!(out, "@{index}").unwrap();
            write_asm(out, &["A=D+A", "D=M"]);
        }
        Segment::Temp => {
            if !(0..=7).contains(&index) {
                return Err(TranslateError::IndexOutOfRange {
                    line,
                    segment: "temp".to_string(),
                    index,
                });
            }
            writeln!(out, "@{}", 5 + index).unwrap();
            write_asm(out, &["D=M"]);
        }
        Segment::Pointer => match index {
            0 => write_asm(out, &["@THIS", "D=M"]),
            1 => write_asm(out, &["@THAT", "D=M"]),
            _ => {
                return Err(TranslateError::IndexOutOfRange {
                    line,
                    segment: "pointer".to_string(),
                    index,
                })
            }
        },
        Segment::Static => {
            writeln!(out, "@{file_stem}.{index}").unwrap();
            write_asm(out, &["D=M"]);
        }
    }
    write_push_d(out);
    Ok(())
}

pub fn write_pop(
    out: &mut String,
    segment: Segment,
    index: i32,
    file_stem: &str,
    source_line: &str,
    line: usize,
) -> Result<(), TranslateError> {
    write_source_comment(out, source_line);
    match segment {
        Segment::Constant => {
            return Err(TranslateError::SegmentNotPoppable {
                line,
                segment: "constant".to_string(),
            })
        }
        Segment::Local | Segment::Argument | Segment::This | Segment::That => {
            let base = segment.base_symbol().unwrap();
            writeln!(out, "@{base}").unwrap();
            write_asm(out, &["D=M"]);
            writeln!(out, "@{index}").unwrap();
            write_asm(out, &["D=D+A", "@R13", "M=D"]);
            write_pop_to_d(out);
            write_asm(out, &["@R13", "A=M", "M=D"]);
        }
        Segment::Temp => {
            if !(0..=7).contains(&index) {
                return Err(TranslateError::IndexOutOfRange {
                    line,
                    segment: "temp".to_string(),
                    index,
                });
            }
            write_pop_to_d(out);
            writeln!(out, "@{}", 5 + index).unwrap();
            write_asm(out, &["M=D"]);
        }
        Segment::Pointer => {
            write_pop_to_d(out);
            match index {
                0 => write_asm(out, &["@THIS", "M=D"]),
                1 => write_asm(out, &["@THAT", "M=D"]),
                _ => {
                    return Err(TranslateError::IndexOutOfRange {
                        line,
                        segment: "pointer".to_string(),
                        index,
                    })
                }
            }
        }
        Segment::Static => {
            write_pop_to_d(out);
            writeln!(out, "@{file_stem}.{index}").unwrap();
            write_asm(out, &["M=D"]);
        }
    }
    Ok(())
}

pub fn write_label(out: &mut String, name: &str, source_line: &str) {
    write_source_comment(out, source_line);
    writeln!(out, "({name})").unwrap();
}

pub fn write_goto(out: &mut String, name: &str, source_line: &str) {
    write_source_comment(out, source_line);
    writeln!(out, "@{name}").unwrap();
    write_asm(out, &["0;JMP"]);
}

pub fn write_if_goto(out: &mut String, name: &str, source_line: &str) {
    write_source_comment(out, source_line);
    write_pop_to_d(out);
    writeln!(out, "@{name}").unwrap();
    write_asm(out, &["D;JNE"]);
}

pub fn write_function(out: &mut String, name: &str, n_vars: i32, source_line: &str) {
    write_source_comment(out, source_line);
    writeln!(out, "({name})").unwrap();
    for _ in 0..n_vars {
        write_asm(out, &["@SP", "A=M", "M=0", "@SP", "M=M+1"]);
    }
}

/// Pushes return address, caller's `LCL`/`ARG`/`THIS`/`THAT`, repoints `ARG`
/// and `LCL`, jumps to `name`, and emits the return label. `n_args` is the
/// number of arguments the caller already pushed.
pub fn write_call(out: &mut String, name: &str, n_args: i32, return_label: &str, source_line: &str) {
    write_source_comment(out, source_line);
    writeln!(out, "@{return_label}").unwrap();
    write_asm(out, &["D=A"]);
    write_push_d(out);
    for saved in ["LCL", "ARG", "THIS", "THAT"] {
        writeln!(out, "@{saved}").unwrap();
        write_asm(out, &["D=M"]);
        write_push_d(out);
    }
    write_asm(out, &["@SP", "D=M", "@5", "D=D-A"]);
    writeln!(out, "@{n_args}").unwrap();
    write_asm(out, &["D=D-A", "@ARG", "M=D"]);
    write_asm(out, &["@SP", "D=M", "@LCL", "M=D"]);
    writeln!(out, "@{name}").unwrap();
    write_asm(out, &["0;JMP"]);
    writeln!(out, "({return_label})").unwrap();
}

/// Restores the caller's frame and jumps back. The return address is read
/// into `R14` before `RAM[ARG]` is overwritten, since `ARG` may alias
/// `endFrame - 5` when the callee took zero arguments.
pub fn write_return(out: &mut String, source_line: &str) {
    write_source_comment(out, source_line);
    write_asm(out, &["@LCL", "D=M", "@R13", "M=D"]);
    write_asm(out, &["@5", "A=D-A", "D=M", "@R14", "M=D"]);
    write_pop_to_d(out);
    write_asm(out, &["@ARG", "A=M", "M=D"]);
    write_asm(out, &["@ARG", "D=M+1", "@SP", "M=D"]);
    for (offset, dest) in [(1, "THAT"), (2, "THIS"), (3, "ARG"), (4, "LCL")] {
        write_asm(out, &["@R13", "D=M"]);
        writeln!(out, "@{offset}").unwrap();
        write_asm(out, &["A=D-A", "D=M"]);
        writeln!(out, "@{dest}").unwrap();
        write_asm(out, &["M=D"]);
    }
    write_asm(out, &["@R14", "A=M", "0;JMP"]);
}
