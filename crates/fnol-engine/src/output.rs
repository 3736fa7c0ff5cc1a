//! Output shapes for exported results

use fnol_domain::{AttributeRecord, FieldName, OutputRecord, Route};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reasoning used when a record carries none
pub const NO_EXPLANATION: &str = "No explanation available";

/// Which fields an exported record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    /// The full output record, including flags and timestamp
    #[default]
    Enhanced,

    /// Only the four core fields
    Strict,
}

/// The four core fields of an output record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreOutput {
    /// Present attributes
    pub extracted_fields: AttributeRecord,

    /// Absent mandatory fields
    #[serde(serialize_with = "fnol_domain::serialize_field_names")]
    pub missing_fields: Vec<FieldName>,

    /// Selected queue
    pub recommended_route: Route,

    /// Justification, never empty
    pub reasoning: String,
}

impl From<&OutputRecord> for CoreOutput {
    fn from(record: &OutputRecord) -> Self {
        let reasoning = if record.reasoning.trim().is_empty() {
            NO_EXPLANATION.to_string()
        } else {
            record.reasoning.clone()
        };
        Self {
            extracted_fields: record.extracted_fields.clone(),
            missing_fields: record.missing_fields.clone(),
            recommended_route: record.recommended_route,
            reasoning,
        }
    }
}

/// Render one record in the requested shape
pub fn to_json(record: &OutputRecord, shape: OutputShape) -> Result<Value, serde_json::Error> {
    match shape {
        OutputShape::Enhanced => serde_json::to_value(record),
        OutputShape::Strict => serde_json::to_value(CoreOutput::from(record)),
    }
}

/// Render many records as a JSON array
pub fn to_json_array(
    records: &[&OutputRecord],
    shape: OutputShape,
) -> Result<Value, serde_json::Error> {
    records
        .iter()
        .map(|record| to_json(record, shape))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Ways a JSON value can fail the core output contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value is not a JSON object
    #[error("output is not a JSON object")]
    NotAnObject,

    /// A core field is absent
    #[error("missing core field '{0}'")]
    MissingField(&'static str),

    /// A core field has the wrong JSON type
    #[error("field '{field}' should be {expected}")]
    WrongType {
        /// Offending field
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },

    /// The route is not one of the five known queues
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
}

/// Check that a JSON value carries the four core fields with the right types
pub fn validate_core_format(value: &Value) -> Result<(), FormatError> {
    let object = value.as_object().ok_or(FormatError::NotAnObject)?;

    let field = |name: &'static str| object.get(name).ok_or(FormatError::MissingField(name));
    let wrong = |field: &'static str, expected: &'static str| FormatError::WrongType { field, expected };

    if !field("extractedFields")?.is_object() {
        return Err(wrong("extractedFields", "an object"));
    }

    let missing = field("missingFields")?
        .as_array()
        .ok_or_else(|| wrong("missingFields", "an array"))?;
    if !missing.iter().all(Value::is_string) {
        return Err(wrong("missingFields", "an array of strings"));
    }

    let route = field("recommendedRoute")?
        .as_str()
        .ok_or_else(|| wrong("recommendedRoute", "a string"))?;
    if Route::parse(route).is_none() {
        return Err(FormatError::UnknownRoute(route.to_string()));
    }

    if !field("reasoning")?.is_string() {
        return Err(wrong("reasoning", "a string"));
    }
    Ok(())
}
