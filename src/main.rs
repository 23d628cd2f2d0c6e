// Main entry point for cucumber-junit

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use cucumber_junit::cli::Cli;
use cucumber_junit::commands;
use cucumber_junit::config::Options;
use cucumber_junit::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.verbose {
        info!("Starting cucumber-junit v{}", env!("CARGO_PKG_VERSION"));
    }

    // Load configuration from file (if exists)
    let file_options = Options::find_config_file().and_then(|path| {
        match Options::try_load_from_file(&path) {
            Ok(options) => {
                debug!("Loaded options from {}", path.display());
                Some(options)
            }
            Err(err) => {
                warn!("Ignoring invalid configuration file {}: {}", path.display(), err);
                None
            }
        }
    });

    if let Some(shell) = cli.completion {
        return commands::handle_completion(shell, &mut std::io::stdout());
    }

    if let Some(config_file) = &cli.init_config {
        return commands::handle_init_config(config_file);
    }

    let options = cli
        .convert_args
        .apply(file_options.clone().unwrap_or_default());

    if cli.config {
        commands::handle_show_config(&options, file_options.as_ref());
        return Ok(());
    }

    commands::handle_convert(&cli.convert_args, &options)
}
