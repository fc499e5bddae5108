use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <input.jack>", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    match jack_tokenizer::tokenize_file(path) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:?}\t{}", token.kind, token.text);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
