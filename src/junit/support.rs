// Shared JUnit element builders used by both aggregation scopes

use serde_json::Value;

use crate::cucumber::{Element as Scenario, Status, Step};
use crate::xml::{AttrValue, Element};

/// Creates a `<property>` element; `value` is stored verbatim
pub fn create_property(name: &str, value: impl Into<AttrValue>) -> Element {
    Element::new("property")
        .with_attr("name", name)
        .with_attr("value", value)
}

/// Creates a `<failure>` element carrying the first line as `message` and the full text as body
pub fn create_failure(message: &str) -> Element {
    let summary = message.split('\n').next().unwrap_or_default();
    Element::new("failure")
        .with_attr("message", summary)
        .with_text(message)
}

/// Creates a `<skipped message=""/>` marker
pub fn create_skipped() -> Element {
    Element::new("skipped").with_attr("message", "")
}

/// What a single step contributes to its testcase
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Failure(String),
    Skipped,
    None,
}

impl Outcome {
    pub fn into_element(self) -> Option<Element> {
        match self {
            Outcome::Failure(message) => Some(create_failure(&message)),
            Outcome::Skipped => Some(create_skipped()),
            Outcome::None => None,
        }
    }
}

/// Maps a step result to its outcome; under `strict`, pending and undefined steps fail
///
/// A failed step without an `error_message` still fails, with an empty message and body.
pub fn resolve_outcome(step: &Step, strict: bool) -> Outcome {
    match (step.result.status, strict) {
        (Status::Passed, _) | (Status::Unknown, _) => Outcome::None,
        (Status::Failed, _) => {
            Outcome::Failure(step.result.error_message.clone().unwrap_or_default())
        }
        (Status::Pending, true) => Outcome::Failure("Pending".to_string()),
        (Status::Undefined, true) => Outcome::Failure(undefined_snippet(step)),
        (Status::Pending, false) | (Status::Undefined, false) | (Status::Skipped, _) => {
            Outcome::Skipped
        }
    }
}

fn undefined_snippet(step: &Step) -> String {
    format!(
        "Undefined step. Implement with the following snippet:\n  \
         this.{}(/^{}$/, function(callback) {{\n      \
         // Write code here that turns the phrase above into concrete actions\n      \
         callback(null, 'pending');\n  \
         }});",
        step.keyword.trim(),
        step.name
    )
}

/// Tag properties (value `true`) followed by the scenario's custom properties
pub fn scenario_properties(scenario: &Scenario) -> Vec<Element> {
    let tags = scenario
        .tags
        .iter()
        .map(|tag| create_property(tag.name(), true));
    let custom = scenario
        .properties
        .iter()
        .map(|(name, value)| create_property(name, property_value(value)));
    tags.chain(custom).collect()
}

fn property_value(value: &Value) -> AttrValue {
    match value {
        Value::Bool(b) => AttrValue::Bool(*b),
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Null => AttrValue::Text(String::new()),
        other => AttrValue::Text(other.to_string()),
    }
}

/// Wraps properties into a `<properties>` element
pub fn properties(items: Vec<Element>) -> Element {
    let mut element = Element::new("properties");
    for item in items {
        element.push(item);
    }
    element
}

/// Prepends the configured prefix to a name
pub fn prefixed(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{}", prefix, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cucumber::StepResult;

    fn step(keyword: &str, name: &str, status: Status) -> Step {
        Step {
            keyword: keyword.to_string(),
            name: name.to_string(),
            hidden: false,
            result: StepResult {
                status,
                error_message: None,
                duration: None,
            },
        }
    }

    #[test]
    fn test_create_property() {
        let p = create_property("@smoke", true);
        assert_eq!(p.name, "property");
        assert_eq!(p.attr("name"), Some(&AttrValue::from("@smoke")));
        assert_eq!(p.attr("value"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_create_failure_first_line() {
        let f = create_failure("first line\nsecond line\nthird");
        assert_eq!(f.attr("message"), Some(&AttrValue::from("first line")));
        assert_eq!(f.text(), "first line\nsecond line\nthird");
    }

    #[test]
    fn test_create_failure_single_line() {
        let f = create_failure("boom");
        assert_eq!(f.attr("message"), Some(&AttrValue::from("boom")));
        assert_eq!(f.text(), "boom");
    }

    #[test]
    fn test_create_skipped() {
        let s = create_skipped();
        assert_eq!(s.name, "skipped");
        assert_eq!(s.attr("message"), Some(&AttrValue::from("")));
        assert!(s.children.is_empty());
    }

    #[test]
    fn test_resolve_outcome_table() {
        let passed = step("Given ", "x", Status::Passed);
        let skipped = step("Given ", "x", Status::Skipped);
        let pending = step("Given ", "x", Status::Pending);
        let undefined = step("Given ", "x", Status::Undefined);
        let unknown = step("Given ", "x", Status::Unknown);

        for strict in [false, true] {
            assert_eq!(resolve_outcome(&passed, strict), Outcome::None);
            assert_eq!(resolve_outcome(&skipped, strict), Outcome::Skipped);
            assert_eq!(resolve_outcome(&unknown, strict), Outcome::None);
        }
        assert_eq!(resolve_outcome(&pending, false), Outcome::Skipped);
        assert_eq!(resolve_outcome(&undefined, false), Outcome::Skipped);
        assert_eq!(
            resolve_outcome(&pending, true),
            Outcome::Failure("Pending".to_string())
        );
    }

    #[test]
    fn test_resolve_outcome_failed_uses_error_message() {
        let mut failed = step("Then ", "it works", Status::Failed);
        failed.result.error_message = Some("AssertionError\n  at line 3".to_string());
        assert_eq!(
            resolve_outcome(&failed, false),
            Outcome::Failure("AssertionError\n  at line 3".to_string())
        );
    }

    #[test]
    fn test_resolve_outcome_failed_without_message() {
        let failed = step("Then ", "it works", Status::Failed);
        let outcome = resolve_outcome(&failed, false);
        assert_eq!(outcome, Outcome::Failure(String::new()));

        let failure = outcome.into_element().unwrap();
        assert_eq!(failure.name, "failure");
        assert_eq!(failure.attr("message"), Some(&AttrValue::from("")));
        assert_eq!(failure.text(), "");
    }

    #[test]
    fn test_undefined_snippet_text() {
        let undefined = step("When ", "I log in", Status::Undefined);
        let expected = "Undefined step. Implement with the following snippet:\n\
                        \x20 this.When(/^I log in$/, function(callback) {\n\
                        \x20     // Write code here that turns the phrase above into concrete actions\n\
                        \x20     callback(null, 'pending');\n\
                        \x20 });";
        assert_eq!(
            resolve_outcome(&undefined, true),
            Outcome::Failure(expected.to_string())
        );
    }

    #[test]
    fn test_scenario_properties_order() {
        let raw = r#"{"tags": [{"name": "@a"}, "@b"], "properties": {"owner": "qa", "retry": false, "runs": 3}}"#;
        let scenario: Scenario = serde_json::from_str(raw).unwrap();
        let props = scenario_properties(&scenario);
        let names: Vec<String> = props
            .iter()
            .map(|p| p.attr("name").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["@a", "@b", "owner", "retry", "runs"]);
        assert_eq!(props[2].attr("value"), Some(&AttrValue::from("qa")));
        assert_eq!(props[3].attr("value"), Some(&AttrValue::Bool(false)));
        assert_eq!(props[4].attr("value"), Some(&AttrValue::from("3")));
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed(Some("ci: "), "name"), "ci: name");
        assert_eq!(prefixed(None, "name"), "name");
    }
}
