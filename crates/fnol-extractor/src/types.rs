//! Result types for detailed extraction

use fnol_domain::{AttributeRecord, FieldName};

/// What happened to the first capture found for a field
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The normalized value was stored
    Accepted,

    /// The capture was found but could not be parsed as an amount
    Unparseable,
}

/// Provenance of one field value
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// Field the capture belongs to
    pub field: FieldName,

    /// Index of the winning pattern in the field's list
    pub pattern_index: usize,

    /// Raw captured text before normalization
    pub raw: String,

    /// Whether the value made it into the record
    pub outcome: MatchOutcome,
}

/// Attribute record together with the captures that produced it
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Extracted attributes
    pub record: AttributeRecord,

    /// One entry per field whose patterns matched, canonical order
    pub matches: Vec<FieldMatch>,
}

impl Extraction {
    /// Capture details for a field, if any pattern matched
    pub fn match_for(&self, field: FieldName) -> Option<&FieldMatch> {
        self.matches.iter().find(|m| m.field == field)
    }
}
