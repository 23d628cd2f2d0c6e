// Cucumber module - JSON report model as emitted by Cucumber runners
//
// Every collection field tolerates being absent or `null`; only a document that is not
// JSON, or not an array of features, is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Parse a raw Cucumber JSON report
pub fn parse_report(raw: &str) -> serde_json::Result<Vec<Feature>> {
    serde_json::from_str(raw)
}

/// Top-level grouping of scenarios, one per `.feature` file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<Element>,
}

impl Feature {
    /// URI when the feature declares a non-empty one
    pub fn declared_uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

/// Scenario or background
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Element {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,

    /// Free-form custom properties, kept in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
}

impl Element {
    pub fn is_background(&self) -> bool {
        self.kind.as_deref() == Some("background")
    }

    /// Steps that are reported (hooks and other hidden steps are dropped)
    pub fn visible_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|step| !step.hidden)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyword: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub result: StepResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepResult {
    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub error_message: Option<String>,

    /// Duration in nanoseconds
    #[serde(default)]
    pub duration: Option<f64>,
}

impl StepResult {
    /// Duration in seconds, only when the runner reported a positive one
    pub fn seconds(&self) -> Option<f64> {
        self.duration
            .filter(|ns| *ns > 0.0)
            .map(|ns| ns / NANOS_PER_SECOND)
    }
}

pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Step status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    Passed,
    Failed,
    Pending,
    Undefined,
    Skipped,
    /// Absent or unrecognised status (e.g. `ambiguous`)
    #[default]
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Pending => "pending",
            Status::Undefined => "undefined",
            Status::Skipped => "skipped",
            Status::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            "undefined" => Ok(Self::Undefined),
            "skipped" => Ok(Self::Skipped),
            _ => Ok(Self::Unknown),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .and_then(|s| s.parse().ok())
            .unwrap_or(Status::Unknown))
    }
}

/// Tag, serialized either as `"@smoke"` or `{"name": "@smoke", "line": 3}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Name(String),
    Object {
        #[serde(default)]
        name: String,
    },
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Name(name) => name,
            Tag::Object { name } => name,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_feature() {
        let features = parse_report(r#"[{"name": "Login"}]"#).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Login");
        assert!(features[0].uri.is_none());
        assert!(features[0].tags.is_empty());
        assert!(features[0].elements.is_empty());
    }

    #[test]
    fn test_parse_null_collections_as_empty() {
        let raw = r#"[{"name": "F", "tags": null, "elements": [
            {"type": "scenario", "id": "f;s", "steps": null, "properties": null}
        ]}]"#;
        let features = parse_report(raw).unwrap();
        let element = &features[0].elements[0];
        assert!(element.steps.is_empty());
        assert!(element.properties.is_empty());
    }

    #[test]
    fn test_parse_tags_both_shapes() {
        let raw = r#"[{"tags": ["@plain", {"name": "@object", "line": 1}]}]"#;
        let features = parse_report(raw).unwrap();
        let names: Vec<&str> = features[0].tags.iter().map(Tag::name).collect();
        assert_eq!(names, vec!["@plain", "@object"]);
    }

    #[test]
    fn test_parse_status_values() {
        let raw = r#"[{"elements": [{"steps": [
            {"result": {"status": "passed"}},
            {"result": {"status": "failed", "error_message": "boom"}},
            {"result": {"status": "pending"}},
            {"result": {"status": "undefined"}},
            {"result": {"status": "skipped"}},
            {"result": {"status": "ambiguous"}},
            {"result": {"status": null}},
            {}
        ]}]}]"#;
        let features = parse_report(raw).unwrap();
        let statuses: Vec<Status> = features[0].elements[0]
            .steps
            .iter()
            .map(|s| s.result.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                Status::Passed,
                Status::Failed,
                Status::Pending,
                Status::Undefined,
                Status::Skipped,
                Status::Unknown,
                Status::Unknown,
                Status::Unknown,
            ]
        );
    }

    #[test]
    fn test_background_and_hidden_filters() {
        let raw = r#"[{"elements": [
            {"type": "background", "steps": [{"name": "a"}]},
            {"type": "scenario", "steps": [{"name": "b"}, {"name": "hook", "hidden": true}]}
        ]}]"#;
        let features = parse_report(raw).unwrap();
        assert!(features[0].elements[0].is_background());
        assert!(!features[0].elements[1].is_background());
        let visible: Vec<&str> = features[0].elements[1]
            .visible_steps()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(visible, vec!["b"]);
    }

    #[test]
    fn test_step_result_seconds() {
        let result = StepResult {
            duration: Some(2_500_000_000.0),
            ..Default::default()
        };
        assert_eq!(result.seconds(), Some(2.5));

        let zero = StepResult {
            duration: Some(0.0),
            ..Default::default()
        };
        assert_eq!(zero.seconds(), None);
        assert_eq!(StepResult::default().seconds(), None);
    }

    #[test]
    fn test_properties_keep_document_order() {
        let raw = r#"[{"elements": [{"properties": {"zeta": "1", "alpha": "2", "mid": "3"}}]}]"#;
        let features = parse_report(raw).unwrap();
        let keys: Vec<&String> = features[0].elements[0].properties.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_declared_uri_ignores_empty() {
        let feature = Feature {
            uri: Some(String::new()),
            ..Default::default()
        };
        assert!(feature.declared_uri().is_none());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_report(r#"{"name": "F"}"#).is_err());
        assert!(parse_report("not json").is_err());
    }
}
