#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based source line number together with the file it came from.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line(file: PathBuf, line_number: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    content
        .lines()
        .nth((line_number - 1) as usize)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 1);
        assert_eq!(line, "2 + 3 * 4");

        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 2);
        assert_eq!(line, "10 - 2 - 3");

        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 3);
        assert_eq!(line, "7");
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: name (tip)
        -> expr.txt
           |
        20 | 3 +
    */

    let line = error.line();
    let line_text = get_line(file.clone(), line);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");
    println!("{} | {}", line_string, line_text.trim());
}
