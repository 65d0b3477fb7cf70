use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", tsar_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        tsar_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: paths.user_dict={}, paths.assets={}, features.auto_replace={}, features.archaisms={}",
        s.paths.user_dict.display(),
        s.paths.assets.display(),
        s.features.auto_replace,
        s.features.archaisms
    );
}
