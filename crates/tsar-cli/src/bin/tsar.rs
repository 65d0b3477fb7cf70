use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tsar_cli::commands::{
    config_ops, default_data_dir, load_settings, open_engine, replace_ops, user_dict_ops,
};
use tsar_cli::trace_init::init_tracing;
use tsar_core::settings::Settings;
use tsar_core::OrthographyEngine;

#[derive(Parser)]
#[command(name = "tsar", about = "Pre-reform Russian orthography tool")]
struct Cli {
    /// Data directory holding the user dictionary, assets and settings.toml
    /// (default: $XDG_DATA_HOME/tsar or ~/.local/share/tsar)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Settings file (default: <data-dir>/settings.toml, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable the archaism overlay regardless of settings
    #[arg(long, global = true)]
    archaisms: bool,
    /// Directory for the JSON trace log (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the pre-reform spelling of each word
    Replace {
        /// Words to rewrite
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Rewrite text from stdin to stdout, word by word
    Convert,
    /// Manage the user dictionary
    UserDict {
        #[command(subcommand)]
        action: UserDictAction,
    },
    /// Default settings and validation
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum UserDictAction {
    /// Add or overwrite a word
    Add {
        /// Word as typed (matched case-insensitively)
        word: String,
        /// Replacement spelling
        replacement: String,
    },
    /// Remove a word
    Remove {
        /// Word to remove
        word: String,
    },
    /// List all words
    List,
    /// Print the dictionary as a JSON object
    Export,
    /// Merge a JSON object into the dictionary
    Import {
        /// JSON file ("-" for stdin)
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate {
        /// Settings file
        file: String,
    },
}

/// Load settings and open the engine selected by the global options.
fn setup(cli: &Cli) -> (Settings, OrthographyEngine) {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let settings = load_settings(&data_dir, cli.config.as_deref());
    let engine = open_engine(&data_dir, &settings);
    if cli.archaisms {
        engine.set_archaisms_enabled(true);
    }
    (settings, engine)
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_tracing(log_dir);
    }

    match &cli.command {
        Command::Replace { words } => {
            let (_, engine) = setup(&cli);
            replace_ops::replace_cmd(&engine, words)
        }
        Command::Convert => {
            let (settings, engine) = setup(&cli);
            replace_ops::convert_cmd(&engine, settings.features.auto_replace)
        }
        Command::UserDict { action } => {
            let (_, engine) = setup(&cli);
            match action {
                UserDictAction::Add { word, replacement } => {
                    user_dict_ops::user_dict_add(&engine, word, replacement)
                }
                UserDictAction::Remove { word } => user_dict_ops::user_dict_remove(&engine, word),
                UserDictAction::List => user_dict_ops::user_dict_list(&engine),
                UserDictAction::Export => user_dict_ops::user_dict_export(&engine),
                UserDictAction::Import { file } => user_dict_ops::user_dict_import(&engine, file),
            }
        }
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(file),
        },
    }
}
