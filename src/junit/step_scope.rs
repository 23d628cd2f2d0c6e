// Step scope - every step is a <testcase>, every scenario a <testsuite>

use tracing::trace;

use super::support::{create_property, prefixed, properties, resolve_outcome, scenario_properties};
use crate::config::Options;
use crate::cucumber::{Element as Scenario, Feature, Step};
use crate::xml::Element;

/// Convert all features, one `<testsuite>` per non-background element
pub fn transform(features: &[Feature], options: &Options) -> Vec<Element> {
    features
        .iter()
        .flat_map(|feature| convert_feature(feature, options))
        .collect()
}

pub fn convert_feature(feature: &Feature, options: &Options) -> Vec<Element> {
    feature
        .elements
        .iter()
        .filter(|element| !element.is_background())
        .map(|scenario| convert_scenario(scenario, feature.declared_uri(), options))
        .collect()
}

/// Convert a scenario into a `<testsuite>`
pub fn convert_scenario(scenario: &Scenario, uri: Option<&str>, options: &Options) -> Element {
    let mut props = scenario_properties(scenario);
    if let Some(uri) = uri {
        props.push(create_property("URI", uri));
    }

    let mut tests = 0u64;
    let mut failures = 0u64;
    let mut skipped = 0u64;
    let mut time = 0.0f64;
    let mut testcases = Vec::new();

    for step in scenario.visible_steps() {
        tests += 1;
        let testcase = convert_step(step, scenario, options);

        // Counted from the produced element rather than the status
        if testcase.has_child("failure") {
            failures += 1;
        }
        if testcase.has_child("skipped") {
            skipped += 1;
        }
        time += step.result.seconds().unwrap_or_default();
        testcases.push(testcase);
    }

    trace!(
        "Scenario '{}': {} step(s), {} failure(s), {} skipped",
        scenario.id, tests, failures, skipped
    );

    let mut suite = Element::new("testsuite")
        .with_attr("name", prefixed(options.prefix.as_deref(), &scenario.id))
        .with_attr("tests", tests)
        .with_attr("failures", failures)
        .with_attr("skipped", skipped)
        .with_attr("time", time)
        .with_child(properties(props));
    for testcase in testcases {
        suite.push(testcase);
    }
    suite
}

/// Convert a step into a `<testcase>`
pub fn convert_step(step: &Step, scenario: &Scenario, options: &Options) -> Element {
    let name = format!("{}{}", step.keyword, step.name);
    let mut testcase = Element::new("testcase")
        .with_attr("name", prefixed(options.prefix.as_deref(), &name))
        .with_attr("classname", scenario.id.as_str());

    if let Some(seconds) = step.result.seconds() {
        testcase.set_attr("time", seconds);
    }

    if let Some(child) = resolve_outcome(step, options.strict).into_element() {
        testcase.push(child);
    }

    testcase
}
