//! Decision module - routing outcome and the output record contract

use crate::field::FieldName;
use crate::record::AttributeRecord;
use crate::route::Route;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of triaging one document
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Selected workflow queue
    pub route: Route,

    /// Human-readable justification for the route
    pub reasoning: String,

    /// Absent mandatory fields, in mandatory-list order
    pub missing_fields: Vec<FieldName>,

    /// Investigation flags: keyword hits in keyword-list order, then at most
    /// one discrepancy flag
    pub flags: Vec<String>,
}

/// Final record handed to downstream workflow systems
///
/// Serializes to the external contract:
///
/// ```json
/// {
///   "documentName": "claim.txt",
///   "extractedFields": { "policy_number": "POL-001", "estimated_damage": 3000.0 },
///   "missingFields": ["policyholder_name"],
///   "investigationFlags": [],
///   "recommendedRoute": "MANUAL_REVIEW",
///   "reasoning": "Missing mandatory fields: policyholder_name",
///   "processedAt": "2024-03-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Name of the source document
    pub document_name: String,

    /// Present attributes; absent ones are omitted
    pub extracted_fields: AttributeRecord,

    /// Absent mandatory fields, canonical mandatory order
    #[serde(serialize_with = "crate::field::serialize_field_names")]
    pub missing_fields: Vec<FieldName>,

    /// Investigation flags in detection order
    pub investigation_flags: Vec<String>,

    /// Selected workflow queue
    pub recommended_route: Route,

    /// Justification for the route
    pub reasoning: String,

    /// When the record was assembled
    pub processed_at: DateTime<Utc>,
}

impl OutputRecord {
    /// Decision carried by this record
    pub fn decision(&self) -> Decision {
        Decision {
            route: self.recommended_route,
            reasoning: self.reasoning.clone(),
            missing_fields: self.missing_fields.clone(),
            flags: self.investigation_flags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_output_record_contract() {
        let mut fields = AttributeRecord::new();
        fields.policy_number = Some("POL-001".to_string());

        let record = OutputRecord {
            document_name: "claim.txt".to_string(),
            extracted_fields: fields,
            missing_fields: vec![FieldName::PolicyholderName, FieldName::EstimatedDamage],
            investigation_flags: vec![],
            recommended_route: Route::ManualReview,
            reasoning: "Missing mandatory fields: policyholder_name, estimated_damage".to_string(),
            processed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["documentName"], "claim.txt");
        assert_eq!(value["extractedFields"]["policy_number"], "POL-001");
        assert_eq!(
            value["missingFields"],
            serde_json::json!(["policyholder_name", "estimated_damage"])
        );
        assert_eq!(value["investigationFlags"], serde_json::json!([]));
        assert_eq!(value["recommendedRoute"], "MANUAL_REVIEW");
        assert_eq!(value["processedAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_decision_view() {
        let record = OutputRecord {
            document_name: "x".to_string(),
            extracted_fields: AttributeRecord::new(),
            missing_fields: vec![],
            investigation_flags: vec!["flag".to_string()],
            recommended_route: Route::InvestigationQueue,
            reasoning: "flag".to_string(),
            processed_at: Utc::now(),
        };
        let decision = record.decision();
        assert_eq!(decision.route, Route::InvestigationQueue);
        assert_eq!(decision.flags, vec!["flag".to_string()]);
    }
}
