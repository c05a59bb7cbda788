//! CLI subcommand implementations.

pub mod news;
