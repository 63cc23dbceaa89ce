//! Stdin prompt helpers shared by the interactive menu.

use std::io::{self, Write};

use gradebook_core::Record;

/// Print a label and read one trimmed line from stdin.
///
/// A closed stdin surfaces as `UnexpectedEof` so callers can leave their
/// re-prompt loops.
pub fn read_trimmed(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt for an integer, re-prompting until one parses.
pub fn prompt_i32(label: &str) -> io::Result<i32> {
    loop {
        match read_trimmed(label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Prompt for a complete student record.
pub fn prompt_record() -> io::Result<Record> {
    let name = loop {
        let input = read_trimmed("Student name: ")?;
        if !input.is_empty() {
            break input;
        }
        println!("Name cannot be empty.");
    };

    let kor = prompt_i32("Korean score: ")?;
    let eng = prompt_i32("English score: ")?;
    let math = prompt_i32("Math score: ")?;

    Ok(Record::new(name, kor, eng, math))
}
