//! Analysis record parsed from the caller's JSON payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ExportError, FieldIssues, ShapeError};

/// The seven section fields the caller must supply, in payload order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "communicationStyles",
    "recurringPatterns",
    "reflectiveFrameworks",
    "gettingInTheWay",
    "constructiveFeedback",
    "outlook",
    "optionalAppendix",
];

/// One relationship analysis, keyed by fixed section names.
///
/// Constructed once per invocation from the whole of standard input and
/// immutable afterwards. Unknown extra keys in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub communication_styles: String,
    pub recurring_patterns: String,
    pub reflective_frameworks: String,
    pub getting_in_the_way: String,
    pub constructive_feedback: String,
    pub outlook: String,
    pub optional_appendix: String,
}

/// Parse a JSON payload into an [`AnalysisRecord`].
///
/// Shape problems are collected across all seven fields before reporting, so
/// a payload missing three fields names all three in one error instead of
/// failing on the first lookup.
pub fn parse_record(input: &str) -> Result<AnalysisRecord, ExportError> {
    let value: Value = serde_json::from_str(input).map_err(ExportError::InputParse)?;

    let object = value
        .as_object()
        .ok_or(ExportError::InputShape(ShapeError::NotAnObject))?;

    let mut issues = FieldIssues::default();
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None => issues.missing.push(field),
            Some(Value::String(_)) => {}
            Some(_) => issues.not_strings.push(field),
        }
    }
    if !issues.is_empty() {
        return Err(ExportError::InputShape(ShapeError::Fields(issues)));
    }

    // Every field is known present and a string at this point.
    let text = |field: &str| -> String {
        object
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    Ok(AnalysisRecord {
        communication_styles: text("communicationStyles"),
        recurring_patterns: text("recurringPatterns"),
        reflective_frameworks: text("reflectiveFrameworks"),
        getting_in_the_way: text("gettingInTheWay"),
        constructive_feedback: text("constructiveFeedback"),
        outlook: text("outlook"),
        optional_appendix: text("optionalAppendix"),
    })
}
