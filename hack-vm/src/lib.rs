//! Hack VM-to-assembly translator.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let (output_path, assembly) = hack_vm::translate(Path::new("Main.vm")).unwrap();
//! std::fs::write(output_path, assembly).unwrap();
//! ```

pub mod codegen;
pub mod error;
pub mod parser;
pub mod segment;
pub mod translator;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::TranslateError;
pub use translator::Translator;

/// Translates a single `.vm` file or a directory of them into one assembly
/// listing, choosing the output path the way the Nand2Tetris tool does:
/// `<stem>.asm` beside a single file, `<dir-name>.asm` inside a directory.
/// Nothing is written to disk here — the caller decides when and where, so
/// a failure partway through a directory never leaves a partial file.
pub fn translate(input: &Path) -> Result<(PathBuf, String), TranslateError> {
    if input.is_dir() {
        translate_directory(input)
    } else {
        translate_file(input)
    }
}

fn translate_file(path: &Path) -> Result<(PathBuf, String), TranslateError> {
    let lines = hack_common::read_logical_lines(path)?;
    let stem = file_stem_of(path);
    let mut translator = Translator::new();
    translator.set_file_stem(stem);
    let assembly = translator.translate_unit(&lines)?;
    Ok((path.with_extension("asm"), assembly))
}

fn translate_directory(dir: &Path) -> Result<(PathBuf, String), TranslateError> {
    let mut vm_files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| TranslateError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("vm"))
        .collect();
    vm_files.sort();

    if vm_files.is_empty() {
        return Err(TranslateError::EmptyDirectory(dir.to_path_buf()));
    }

    let mut translator = Translator::new();
    let mut bootstrap = String::new();
    translator.write_bootstrap(&mut bootstrap);

    let mut unit_outputs = Vec::with_capacity(vm_files.len());
    for file in &vm_files {
        let lines = hack_common::read_logical_lines(file)?;
        translator.set_file_stem(file_stem_of(file));
        unit_outputs.push(translator.translate_unit(&lines)?);
    }

    let mut combined = bootstrap;
    for unit in unit_outputs {
        combined.push_str(&unit);
    }

    let dir_stem = dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let output_path = dir.join(format!("{dir_stem}.asm"));
    Ok((output_path, combined))
}

fn file_stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_string()
}
