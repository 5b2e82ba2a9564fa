//! CLI subcommands.

pub mod age_band;
pub mod config;
pub mod parse;
