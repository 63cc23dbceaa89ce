//! Interactive menu loop driving the core operations.

use std::path::{Path, PathBuf};

use anyhow::Result;
use gradebook_core::{codec, report, Error, Report, Store};

use crate::prompt;

pub fn run(default_file: &Path) -> Result<()> {
    let mut store = Store::new();

    loop {
        print_menu();

        let choice = prompt::read_trimmed("Select (1-5): ")?;
        match choice.as_str() {
            "1" => load(&mut store, default_file)?,
            "2" => add(&mut store)?,
            "3" => save(&store, default_file)?,
            "4" => print_report(&store),
            "5" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Please choose 1-5."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("[Menu]");
    println!("1. Load records from a .dat file");
    println!("2. Add a student");
    println!("3. Save records to a .dat file");
    println!("4. Score report");
    println!("5. Quit");
    println!("-------------------");
}

/// Prompt for a filename; empty input falls back to the default.
fn prompt_path(default_file: &Path) -> Result<PathBuf> {
    let input = prompt::read_trimmed(&format!(
        "Filename (default {}): ",
        default_file.display()
    ))?;
    if input.is_empty() {
        Ok(default_file.to_path_buf())
    } else {
        Ok(PathBuf::from(input))
    }
}

fn load(store: &mut Store, default_file: &Path) -> Result<()> {
    let path = prompt_path(default_file)?;
    match codec::load(store, &path) {
        Ok(count) => println!("Read {count} student records."),
        Err(Error::OpenFailed { path, source }) => {
            println!("Could not open {}: {source}", path.display());
        }
        // Mid-stream failure: records decoded so far stay in the store
        Err(e) => println!("Load stopped early: {e}. Kept {} records.", store.len()),
    }
    Ok(())
}

fn add(store: &mut Store) -> Result<()> {
    let record = prompt::prompt_record()?;
    store.append(record);
    println!("Student added.");
    Ok(())
}

fn save(store: &Store, default_file: &Path) -> Result<()> {
    let path = prompt_path(default_file)?;
    match codec::save(store, &path) {
        Ok(count) => println!("Saved {count} student records."),
        Err(Error::OpenFailed { path, source }) => {
            println!("Could not open {}: {source}", path.display());
        }
        Err(e) => println!("Save failed: {e}"),
    }
    Ok(())
}

fn print_report(store: &Store) {
    match Report::generate(store) {
        Some(generated) => println!("\n{}", report::render_table(&generated)),
        None => println!("No student records to report."),
    }
}
