pub mod commands;
pub mod text;
pub mod trace_init;
