// Scenario scope - every scenario is a <testcase>, every feature a <testsuite>

use tracing::trace;

use super::support::{create_property, prefixed, properties, resolve_outcome, scenario_properties};
use crate::config::Options;
use crate::cucumber::{Element as Scenario, Feature, Status};
use crate::xml::Element;

/// Convert all features, one `<testsuite>` per feature
pub fn transform(features: &[Feature], options: &Options) -> Vec<Element> {
    features
        .iter()
        .map(|feature| convert_feature(feature, options))
        .collect()
}

/// Result of converting a single scenario, folded into the feature totals by the caller
#[derive(Debug, Clone)]
pub struct ScenarioContribution {
    pub testcase: Element,
    /// Highest-priority status among the visible steps; `None` when there were none
    pub status: Option<Status>,
    pub time: f64,
}

/// Roll-up rank: passed < skipped/pending/undefined/unknown < failed
fn priority(status: Status) -> u8 {
    match status {
        Status::Passed => 0,
        Status::Skipped | Status::Pending | Status::Undefined | Status::Unknown => 1,
        Status::Failed => 2,
    }
}

pub fn convert_feature(feature: &Feature, options: &Options) -> Element {
    let mut failures = 0u64;
    let mut skipped = 0u64;
    let mut time = 0.0f64;
    let mut testcases = Vec::new();

    for scenario in feature.elements.iter().filter(|e| !e.is_background()) {
        let contribution = convert_scenario(scenario, &feature.name, options);
        match contribution.status {
            Some(Status::Failed) => failures += 1,
            Some(Status::Passed) => {}
            _ => skipped += 1,
        }
        time += contribution.time;
        testcases.push(contribution.testcase);
    }

    let mut props: Vec<Element> = feature
        .tags
        .iter()
        .map(|tag| create_property(tag.name(), true))
        .collect();
    props.push(create_property(
        "URI",
        feature.uri.clone().unwrap_or_default(),
    ));

    trace!(
        "Feature '{}': {} scenario(s), {} failure(s), {} skipped",
        feature.name,
        testcases.len(),
        failures,
        skipped
    );

    let mut suite = Element::new("testsuite")
        .with_attr("name", feature.name.as_str())
        .with_attr("failures", failures)
        .with_attr("errors", 0u64)
        .with_attr("skipped", skipped)
        .with_attr("test", feature.elements.len() as u64)
        .with_attr("time", time)
        .with_child(properties(props));
    for testcase in testcases {
        suite.push(testcase);
    }
    suite
}

/// Convert a scenario into a `<testcase>` and report its status and time
pub fn convert_scenario(
    scenario: &Scenario,
    classname: &str,
    options: &Options,
) -> ScenarioContribution {
    let mut status: Option<Status> = None;
    let mut time = 0.0f64;
    let mut outcomes = Vec::new();

    for step in scenario.visible_steps() {
        time += step.result.seconds().unwrap_or_default();

        let step_status = step.result.status;
        status = match status {
            Some(current) if priority(step_status) <= priority(current) => Some(current),
            _ => Some(step_status),
        };

        if let Some(child) = resolve_outcome(step, options.strict).into_element() {
            outcomes.push(child);
        }
    }

    let mut testcase = Element::new("testcase")
        .with_attr("classname", classname)
        .with_attr("name", prefixed(options.prefix.as_deref(), &scenario.name))
        .with_attr("time", time)
        .with_child(properties(scenario_properties(scenario)));
    for outcome in outcomes {
        testcase.push(outcome);
    }

    ScenarioContribution {
        testcase,
        status,
        time,
    }
}
