// Convert - top-level entry points from raw Cucumber JSON to JUnit XML

use std::io::Write;

use tracing::debug;

use crate::config::Options;
use crate::cucumber;
use crate::error::Result;
use crate::junit;
use crate::xml::{Element, serialize};

/// Build the `<testsuites>` tree for a raw report
///
/// Empty or whitespace-only input is not an error: it yields a root holding a single empty
/// `<testsuite>`, as does a report without any convertible element.
pub fn build_report(raw: &str, options: &Options) -> Result<Element> {
    let mut root = Element::new("testsuites");

    if raw.trim().is_empty() {
        debug!("Empty report, emitting placeholder testsuite");
        root.push(Element::new("testsuite"));
        return Ok(root);
    }

    let features = cucumber::parse_report(raw)?;
    let scope = options.scope();
    let suites = junit::transform(&features, options);
    debug!(
        "Converted {} feature(s) into {} testsuite(s) using {} scope",
        features.len(),
        suites.len(),
        scope
    );

    if suites.is_empty() {
        root.push(Element::new("testsuite"));
    }
    for suite in suites {
        root.push(suite);
    }

    Ok(root)
}

/// Convert a raw report into JUnit XML text
pub fn convert(raw: &str, options: &Options) -> Result<String> {
    let xml_options = options.xml_options()?;
    let root = build_report(raw, options)?;
    serialize::to_string(&root, &xml_options)
}

/// Convert a raw report and write the XML straight into `sink`
pub fn convert_to_writer<W: Write>(raw: &str, options: &Options, sink: W) -> Result<()> {
    let xml_options = options.xml_options()?;
    let root = build_report(raw, options)?;
    serialize::write_to(&root, &xml_options, sink)
}
