//! Mandatory field completeness checking

use fnol_domain::{AttributeRecord, FieldName};

/// Reports which mandatory attributes a record lacks
#[derive(Debug, Clone)]
pub struct CompletenessValidator {
    mandatory: Vec<FieldName>,
}

impl CompletenessValidator {
    /// Create a validator over an ordered mandatory list
    pub fn new(mandatory: Vec<FieldName>) -> Self {
        Self { mandatory }
    }

    /// Mandatory fields in configured order
    pub fn mandatory(&self) -> &[FieldName] {
        &self.mandatory
    }

    /// Absent mandatory fields, in mandatory-list order
    pub fn missing_fields(&self, record: &AttributeRecord) -> Vec<FieldName> {
        self.mandatory
            .iter()
            .copied()
            .filter(|field| !record.is_present(*field))
            .collect()
    }

    /// Whether every mandatory field is present
    pub fn is_complete(&self, record: &AttributeRecord) -> bool {
        self.mandatory.iter().all(|field| record.is_present(*field))
    }
}

impl Default for CompletenessValidator {
    fn default() -> Self {
        Self::new(crate::default_mandatory_fields())
    }
}
