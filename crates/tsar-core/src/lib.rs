//! Pre-reform Russian orthography engine.
//!
//! Rewrites one already-delimited word at a time into its pre-1918 spelling
//! using layered dictionaries and two suffix rules, keeping the capitalization
//! of the typed word.

pub mod casing;
pub mod dict;
pub mod engine;
pub mod rules;
pub mod settings;
pub mod user_dict;

pub use engine::OrthographyEngine;
