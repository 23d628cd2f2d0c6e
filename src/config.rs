// Configuration handling - conversion options and the optional TOML config file

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::junit::Scope;
use crate::xml::{XmlDeclaration, XmlOptions};

pub const CONFIG_FILE_NAME: &str = ".cucumber-junitrc.toml";

/// Conversion options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// One indentation level; empty disables pretty printing
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Write straight into the output sink instead of buffering
    #[serde(default)]
    pub stream: bool,

    /// Report pending and undefined steps as failures
    #[serde(default)]
    pub strict: bool,

    /// "scenario" or "step" (default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Prepended to testsuite and testcase names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// XML declaration header
    #[serde(default)]
    pub declaration: Declaration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            stream: false,
            strict: false,
            scope: None,
            prefix: None,
            declaration: Declaration::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_encoding", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone: Option<bool>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            enabled: true,
            encoding: default_encoding(),
            standalone: None,
        }
    }
}

// Default values
pub fn default_indent() -> String {
    String::from("    ")
}

fn default_encoding() -> Option<String> {
    Some(String::from("UTF-8"))
}

fn default_true() -> bool {
    true
}

impl Options {
    /// Selected aggregation scope
    pub fn scope(&self) -> Scope {
        Scope::from_option(self.scope.as_deref())
    }

    /// Serializer settings derived from these options
    pub fn xml_options(&self) -> Result<XmlOptions> {
        Ok(XmlOptions {
            indent: self.indent_unit()?,
            declaration: self.declaration.enabled.then(|| XmlDeclaration {
                encoding: self.declaration.encoding.clone(),
                standalone: self
                    .declaration
                    .standalone
                    .map(|yes| (if yes { "yes" } else { "no" }).to_string()),
            }),
        })
    }

    fn indent_unit(&self) -> Result<Option<(u8, usize)>> {
        let Some(first) = self.indent.chars().next() else {
            return Ok(None);
        };
        if (first == ' ' || first == '\t') && self.indent.chars().all(|c| c == first) {
            Ok(Some((first as u8, self.indent.len())))
        } else {
            Err(Error::InvalidOption(format!(
                "indent must repeat a single space or tab character, got {:?}",
                self.indent
            )))
        }
    }

    /// First configuration file found in the default locations
    pub fn find_config_file() -> Option<PathBuf> {
        // Check locations in order:
        // 1. .cucumber-junitrc.toml (current directory)
        // 2. ~/.cucumber-junitrc.toml (home directory)

        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        paths.into_iter().find(|path| path.exists())
    }

    /// Load configuration from a specific file, reporting why it could not be used
    pub fn try_load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::try_parse(&content)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        Self::try_load_from_file(path).ok()
    }

    /// Parse configuration from TOML string
    pub fn try_parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from TOML string, `None` when malformed
    pub fn parse(content: &str) -> Option<Self> {
        Self::try_parse(content).ok()
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}
