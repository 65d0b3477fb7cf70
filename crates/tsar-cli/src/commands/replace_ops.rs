use std::io::{self, Read, Write};
use std::process;

use tsar_core::OrthographyEngine;

use crate::text::rewrite_text;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn replace_cmd(engine: &OrthographyEngine, words: &[String]) {
    for word in words {
        let replacement = engine.replace_word(word);
        println!("{word}\t{replacement}");
    }
}

/// Rewrite stdin to stdout as if it were typed on the keyboard.
pub fn convert_cmd(engine: &OrthographyEngine, auto_replace: bool) {
    let mut input = String::new();
    die!(io::stdin().read_to_string(&mut input), "Error reading stdin: {}");
    let output = rewrite_text(engine, &input, auto_replace);
    let mut stdout = io::stdout().lock();
    die!(stdout.write_all(output.as_bytes()), "Error writing stdout: {}");
}
