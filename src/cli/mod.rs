// CLI module - command-line interface definition

pub mod args;

pub use args::{Cli, ConvertArgs};
