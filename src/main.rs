use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use arithc::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(file_path));
        process::exit(1);
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let tree = parse(tokens.unwrap());

    match tree {
        Ok(tree) => {
            println!("Parsed in {:?}", parse_start.elapsed());
            println!("{:#?}", tree);
        }
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            process::exit(1);
        }
    }
}
