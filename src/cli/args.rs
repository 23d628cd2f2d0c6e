// CLI argument definitions using Clap

use clap::{Args, Parser};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use crate::config::Options;

/// Convert Cucumber JSON reports into JUnit XML
#[derive(Parser, Debug)]
#[command(name = "cucumber-junit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert Cucumber JSON reports into JUnit XML", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert_args: ConvertArgs,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print shell completion script
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<Shell>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Cucumber JSON report to convert ("-" or omitted reads stdin)
    #[arg(required = false)]
    pub input: Option<PathBuf>,

    /// Write the JUnit XML report to this file instead of stdout
    #[arg(short = 'o', long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Report pending and undefined steps as failures
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Aggregation scope: "step" (each step is a testcase) or "scenario"
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<String>,

    /// Prefix prepended to testsuite and testcase names
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Indent nested elements by N spaces
    #[arg(long, value_name = "N", conflicts_with = "no_indent")]
    pub indent: Option<usize>,

    /// Write the whole document on a single line
    #[arg(long, default_value_t = false)]
    pub no_indent: bool,

    /// Omit the <?xml ...?> declaration
    #[arg(long, default_value_t = false)]
    pub no_declaration: bool,

    /// Encoding named in the XML declaration
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<String>,

    /// Stream XML into the output instead of buffering it
    #[arg(long, default_value_t = false)]
    pub stream: bool,
}

impl ConvertArgs {
    /// Input path, `None` when reading stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Layer command-line flags over file or default options
    pub fn apply(&self, mut options: Options) -> Options {
        if self.strict {
            options.strict = true;
        }
        if self.stream {
            options.stream = true;
        }
        if let Some(scope) = &self.scope {
            options.scope = Some(scope.clone());
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = Some(prefix.clone());
        }
        if let Some(width) = self.indent {
            options.indent = " ".repeat(width);
        }
        if self.no_indent {
            options.indent = String::new();
        }
        if self.no_declaration {
            options.declaration.enabled = false;
        }
        if let Some(encoding) = &self.encoding {
            options.declaration.encoding = Some(encoding.clone());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::junit::Scope;

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::parse_from([
            "cucumber-junit",
            "report.json",
            "-o",
            "junit.xml",
            "--strict",
            "--scope",
            "scenario",
            "--prefix",
            "ci-",
            "--indent",
            "2",
        ]);
        let args = &cli.convert_args;
        assert_eq!(args.input_path(), Some(Path::new("report.json")));
        assert_eq!(args.output, Some(PathBuf::from("junit.xml")));

        let options = args.apply(Options::default());
        assert!(options.strict);
        assert_eq!(options.scope(), Scope::Scenario);
        assert_eq!(options.prefix, Some("ci-".to_string()));
        assert_eq!(options.indent, "  ");
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = Cli::parse_from(["cucumber-junit", "-"]);
        assert!(cli.convert_args.input_path().is_none());

        let cli = Cli::parse_from(["cucumber-junit"]);
        assert!(cli.convert_args.input_path().is_none());
    }

    #[test]
    fn test_flags_override_file_options() {
        let file = Options {
            strict: true,
            scope: Some("scenario".to_string()),
            ..Default::default()
        };
        let cli = Cli::parse_from(["cucumber-junit", "--scope", "step", "--no-indent", "--no-declaration"]);
        let options = cli.convert_args.apply(file);
        assert!(options.strict);
        assert_eq!(options.scope(), Scope::Step);
        assert_eq!(options.indent, "");
        assert!(!options.declaration.enabled);
    }

    #[test]
    fn test_completion_shell() {
        let cli = Cli::parse_from(["cucumber-junit", "--completion", "zsh"]);
        assert_eq!(cli.completion, Some(Shell::Zsh));

        let result = Cli::try_parse_from(["cucumber-junit", "--completion", "cmd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_indent_conflicts_with_no_indent() {
        let result = Cli::try_parse_from(["cucumber-junit", "--indent", "2", "--no-indent"]);
        assert!(result.is_err());
    }
}
