// JUnit module - Cucumber features to <testsuite> elements

pub mod scenario_scope;
pub mod step_scope;
pub mod support;

use crate::config::Options;
use crate::cucumber::Feature;
use crate::xml::Element;

pub use support::{Outcome, create_failure, create_property, create_skipped, resolve_outcome};

/// Aggregation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Each step is a testcase, each scenario a testsuite
    #[default]
    Step,
    /// Each scenario is a testcase, each feature a testsuite
    Scenario,
}

impl Scope {
    /// `"scenario"` (any case) selects scenario scope, anything else step scope
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("scenario") => Scope::Scenario,
            _ => Scope::Step,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Step => "step",
            Scope::Scenario => "scenario",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert features into `<testsuite>` elements, preserving input order
pub fn transform(features: &[Feature], options: &Options) -> Vec<Element> {
    match options.scope() {
        Scope::Step => step_scope::transform(features, options),
        Scope::Scenario => scenario_scope::transform(features, options),
    }
}
