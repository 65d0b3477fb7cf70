use std::fs;
use std::io::{self, Read};
use std::process;

use tsar_core::OrthographyEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn user_dict_add(engine: &OrthographyEngine, word: &str, replacement: &str) {
    if engine.add_user_entry(word, replacement) {
        println!("Added: {} → {}", word.trim(), replacement.trim());
    } else {
        println!("Ignored: word and replacement must not be empty");
    }
}

pub fn user_dict_remove(engine: &OrthographyEngine, word: &str) {
    if engine.remove_user_entry(word) {
        println!("Removed: {}", word.trim());
    } else {
        println!("Not found: {}", word.trim());
    }
}

pub fn user_dict_list(engine: &OrthographyEngine) {
    let entries = engine.list_user_entries();
    if entries.is_empty() {
        println!("(empty)");
    } else {
        for (word, replacement) in &entries {
            println!("{word}\t{replacement}");
        }
        println!("---");
        println!("{} entries", entries.len());
    }
}

pub fn user_dict_export(engine: &OrthographyEngine) {
    println!("{}", engine.export_user_dictionary());
}

/// Import from `file`, or from stdin when `file` is "-".
pub fn user_dict_import(engine: &OrthographyEngine, file: &str) {
    let content = if file == "-" {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        die!(fs::read_to_string(file), "Error reading {file}: {}")
    };
    let count = engine.import_user_dictionary(&content);
    println!("Imported: {count} entries");
}
