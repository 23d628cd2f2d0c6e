pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod cucumber;
pub mod error;
pub mod junit;
pub mod logging;
pub mod xml;

pub use config::Options;
pub use convert::{build_report, convert, convert_to_writer};
pub use error::{Error, Result};
pub use junit::Scope;
