use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <input.vm|input-dir>", args[0]);
        process::exit(1);
    }

    let input = Path::new(&args[1]);
    match hack_vm::translate(input) {
        Ok((output_path, assembly)) => {
            if let Err(e) = fs::write(&output_path, assembly) {
                eprintln!("Error: cannot write {}: {e}", output_path.display());
                process::exit(1);
            }
            println!("Translation complete: {} -> {}", input.display(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
