// Convert command - read a Cucumber JSON report and emit JUnit XML

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use tracing::{debug, info};

use crate::cli::ConvertArgs;
use crate::config::Options;
use crate::xml::{Element, XmlOptions, serialize};

pub fn handle_convert(args: &ConvertArgs, options: &Options) -> Result<()> {
    let raw = read_input(args)?;
    // Convert before touching the output so a bad report leaves it as it was
    let report = render_report(&raw, options)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create JUnit report file: {}", path.display())
            })?;
            report.write_to(BufWriter::new(file))?;
            info!("JUnit report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            report.write_to(stdout.lock())?;
        }
    }

    Ok(())
}

fn read_input(args: &ConvertArgs) -> Result<String> {
    match args.input_path() {
        Some(path) => {
            debug!("Reading Cucumber report from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read Cucumber report: {}", path.display()))
        }
        None => {
            debug!("Reading Cucumber report from stdin");
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read Cucumber report from stdin")?;
            Ok(raw)
        }
    }
}

/// A converted report waiting for its output sink
pub enum RenderedReport {
    /// Serialized up front
    Buffered(String),
    /// Serialized while writing
    Streamed { root: Element, xml_options: XmlOptions },
}

/// Parse and transform `raw`, failing before any output is opened
pub fn render_report(raw: &str, options: &Options) -> Result<RenderedReport> {
    if options.stream {
        let xml_options = options
            .xml_options()
            .context("Failed to convert Cucumber report")?;
        let root = crate::build_report(raw, options).context("Failed to convert Cucumber report")?;
        Ok(RenderedReport::Streamed { root, xml_options })
    } else {
        let xml = crate::convert(raw, options).context("Failed to convert Cucumber report")?;
        Ok(RenderedReport::Buffered(xml))
    }
}

impl RenderedReport {
    /// Write the report followed by a trailing newline
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        match self {
            RenderedReport::Buffered(xml) => sink
                .write_all(xml.as_bytes())
                .context("Failed to write JUnit XML content")?,
            RenderedReport::Streamed { root, xml_options } => {
                serialize::write_to(root, xml_options, &mut sink)
                    .context("Failed to write JUnit XML content")?
            }
        }

        sink.write_all(b"\n")
            .context("Failed to write JUnit XML content")?;
        sink.flush().context("Failed to flush JUnit XML content")?;
        Ok(())
    }
}

/// Convert `raw` and write it into `sink`
pub fn write_report<W: Write>(raw: &str, options: &Options, sink: W) -> Result<()> {
    render_report(raw, options)?.write_to(sink)
}
