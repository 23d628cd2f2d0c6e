// Commands module - handles CLI command execution

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;
use std::path::Path;

use crate::config::{self, Options};

pub mod convert;

pub use convert::handle_convert;

/// Write the completion script for `shell` into `sink`
pub fn handle_completion<W: Write>(shell: Shell, sink: &mut W) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, sink);
    sink.flush().context("Failed to write shell completion")
}

/// Print the effective configuration
pub fn handle_show_config(effective: &Options, file: Option<&Options>) {
    println!("Current configuration:");
    println!("    Scope: {}", effective.scope());
    println!("    Strict: {}", effective.strict);
    println!(
        "    Prefix: {}",
        effective.prefix.as_deref().unwrap_or("(none)")
    );
    println!("    Indent: {:?}", effective.indent);
    println!("    Stream: {}", effective.stream);
    if effective.declaration.enabled {
        println!(
            "    Declaration: encoding={}",
            effective.declaration.encoding.as_deref().unwrap_or("(none)")
        );
    } else {
        println!("    Declaration: disabled");
    }

    if file.is_some() {
        println!("\n  Configuration file loaded");
    } else {
        println!("\n  No configuration file loaded");
        println!(
            "  Create one with: cucumber-junit --init-config {}",
            config::CONFIG_FILE_NAME
        );
    }

    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Configuration file");
    println!("  3. Built-in defaults (lowest)");
}

/// Write the default configuration file
pub fn handle_init_config(path: &Path) -> Result<()> {
    let toml_content = Options::default().to_toml();
    std::fs::write(path, toml_content)
        .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;
    println!("Configuration file created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_names_binary() {
        let mut script = Vec::new();
        handle_completion(Shell::Bash, &mut script).unwrap();
        let script = String::from_utf8(script).unwrap();
        assert!(script.contains("cucumber-junit"));
        assert!(script.contains("--scope"));
    }
}
