//! Pattern table configuration for the Extractor

use crate::error::ExtractorError;
use fnol_domain::FieldName;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calendar date, numeric or ISO
const DATE: &str = r"(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}|\d{4}-\d{1,2}-\d{1,2})";

/// Clock time with optional meridiem
const TIME: &str = r"(\d{1,2}:\d{2}(?:[ \t]*[ap]\.?m\.?)?)";

/// Date range such as `01/01/2024 to 12/31/2024`
const DATE_RANGE: &str =
    r"([0-9][0-9/.\-]*[ \t]*(?:to|through|thru|-|–)[ \t]*[0-9][0-9/.\-]*)";

/// Currency amount filling the rest of the line, optionally followed by
/// `USD` or `dollars`. Anything else on the line is captured whole so that
/// `3 thousand` or `1e5` fails to parse and the field stays absent.
const AMOUNT: &str =
    r"(?m:(\$?[ \t]*\d[\d,]*(?:\.\d+)?)[ \t]*(?:usd|dollars)?[ \t\r]*$|([^\n]+))";

/// Dollar-prefixed amount in running prose. A magnitude word or letters
/// glued to the number stay in the capture and make it unparseable.
const DOLLARS: &str =
    r"(\$[ \t]*\d[\d,]*(?:\.\d+)?(?:[ \t]*(?:thousand|million|billion)\b|[a-z][a-z0-9]*)?)";

/// Personal or business name
const NAME: &str = r"([a-z][a-z .,'\-]*)";

/// Identifier containing at least one digit
const IDENT: &str = r"([a-z0-9\-/]*\d[a-z0-9\-/]*)";

/// Remainder of the line
const LINE: &str = r"([^\n]+)";

/// Label separator
const SEP: &str = r"[ \t]*:[ \t]*";

/// Ordered extraction patterns per field
///
/// For each field the patterns are tried in order and the first one that
/// matches anywhere in the document wins. Patterns are compiled
/// case-insensitively. Fields missing from the table are never extracted.
///
/// Serialized as a TOML table of string arrays:
///
/// ```toml
/// policy_number = ['\bpolicy\s*number\s*:\s*(\S+)']
/// claim_type = ['claim type:\s*([^\n]+)']
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl PatternTable {
    /// Table with no patterns at all
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Patterns for a field, in priority order
    pub fn patterns_for(&self, field: FieldName) -> &[String] {
        self.entries
            .get(field.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the patterns of a field
    pub fn set(&mut self, field: FieldName, patterns: Vec<String>) {
        self.entries.insert(field.as_str().to_string(), patterns);
    }

    /// Add a lowest-priority pattern to a field
    pub fn push(&mut self, field: FieldName, pattern: impl Into<String>) {
        self.entries
            .entry(field.as_str().to_string())
            .or_default()
            .push(pattern.into());
    }

    /// Builder form of [`PatternTable::set`]
    pub fn with(mut self, field: FieldName, patterns: &[&str]) -> Self {
        self.set(field, patterns.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Replace this table's lists with every list present in `other`
    ///
    /// Fields absent from `other` keep their patterns; an empty list in
    /// `other` disables extraction of that field.
    pub fn overlay(mut self, other: PatternTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Whether at least one pattern is configured for the field
    pub fn covers(&self, field: FieldName) -> bool {
        !self.patterns_for(field).is_empty()
    }

    /// Field names as written in the table, including unknown ones
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total number of patterns
    pub fn pattern_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check that every key names a field and every pattern compiles
    pub fn validate(&self) -> Result<(), ExtractorError> {
        for (name, patterns) in &self.entries {
            if FieldName::parse(name).is_none() {
                return Err(ExtractorError::UnknownField(name.clone()));
            }
            for (index, pattern) in patterns.iter().enumerate() {
                compile(name, index, pattern)?;
            }
        }
        Ok(())
    }

    /// Load a pattern table from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the pattern table to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Compile one pattern the way the extractor does
pub(crate) fn compile(
    field: &str,
    index: usize,
    pattern: &str,
) -> Result<regex::Regex, ExtractorError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ExtractorError::InvalidPattern {
            field: field.to_string(),
            index,
            message: e.to_string(),
        })
}

impl Default for PatternTable {
    /// Label-driven patterns for typical loss-notice documents
    fn default() -> Self {
        let mut table = Self::empty();

        table.set(
            FieldName::PolicyNumber,
            vec![
                format!(r"\bpolicy[ \t]*(?:number\b|num\b|no\b\.?|#)[ \t]*[:#]?[ \t]*{IDENT}"),
                format!(r"\bpol(?:icy)?[ \t]*(?:no\.?|#)?[ \t]*[:#][ \t]*{IDENT}"),
                r"\b(pol[\-/]?\d[a-z0-9\-/]*)".to_string(),
            ],
        );

        table.set(
            FieldName::PolicyholderName,
            vec![
                format!(
                    r"\b(?:policy[ \t]*holder|named[ \t]+insured|name[ \t]+of[ \t]+(?:the[ \t]+)?insured|insured[ \t]+name)(?:[ \t]+name)?{SEP}{NAME}"
                ),
                format!(r"\b(?:insured|policy[ \t]+owner){SEP}{NAME}"),
            ],
        );

        table.set(
            FieldName::EffectiveDates,
            vec![
                format!(
                    r"\b(?:effective[ \t]+(?:dates?|period)|policy[ \t]+period|coverage[ \t]+period|period[ \t]+of[ \t]+(?:coverage|insurance)|effective){SEP}{DATE_RANGE}"
                ),
                r"(\d{1,2}/\d{1,2}/\d{2,4}[ \t]*(?:to|through|thru|-|–)[ \t]*\d{1,2}/\d{1,2}/\d{2,4})"
                    .to_string(),
            ],
        );

        table.set(
            FieldName::IncidentDate,
            vec![
                format!(
                    r"\b(?:date[ \t]+of[ \t]+(?:the[ \t]+)?(?:loss|incident|accident)|(?:loss|incident|accident)[ \t]+date)[ \t]*:?[ \t]*{DATE}"
                ),
                format!(r"\b(?:occurred|happened|took[ \t]+place)[ \t]+on[ \t]+{DATE}"),
                format!(r"\bdate{SEP}{DATE}"),
            ],
        );

        table.set(
            FieldName::IncidentTime,
            vec![
                format!(
                    r"\b(?:time[ \t]+of[ \t]+(?:the[ \t]+)?(?:loss|incident|accident)|(?:loss|incident|accident)[ \t]+time|time)[ \t]*:?[ \t]*{TIME}"
                ),
                format!(r"\b(?:at|around|approximately)[ \t]+{TIME}"),
            ],
        );

        table.set(
            FieldName::IncidentLocation,
            vec![
                format!(r"\b(?:loss|incident|accident)[ \t]+location{SEP}{LINE}"),
                format!(
                    r"\b(?:location|place[ \t]+of[ \t]+(?:loss|incident|accident)|address[ \t]+of[ \t]+(?:loss|incident|accident)|scene){SEP}{LINE}"
                ),
                r"\boccurred[ \t]+at[ \t]+([^\n.]+)".to_string(),
            ],
        );

        table.set(
            FieldName::IncidentDescription,
            vec![
                format!(
                    r"(?m)\b(?:incident[ \t]+description|description[ \t]+of[ \t]+(?:the[ \t]+)?(?:loss|incident|accident)|loss[ \t]+description|describe[ \t]+(?:the[ \t]+)?(?:loss|incident|accident)|description|what[ \t]+happened|narrative){SEP}([^\n]+(?:\n[ \t]*(?-i:[^\n:a-z]*[a-z][^\n:]*)$)*)"
                ),
                format!(
                    r"\b(?:loss|incident|accident|claim)[ \t]+(?:details|summary|narrative){SEP}{LINE}"
                ),
            ],
        );

        table.set(
            FieldName::Claimant,
            vec![format!(
                r"\b(?:claimant(?:[ \t]+name)?|claim[ \t]+filed[ \t]+by|filed[ \t]+by|reported[ \t]+by|person[ \t]+filing[ \t]+(?:the[ \t]+)?claim){SEP}{NAME}"
            )],
        );

        table.set(
            FieldName::ThirdParties,
            vec![
                format!(
                    r"\bthird[ \t\-]*part(?:y|ies)(?:[ \t]+(?:names?|involved|details))?{SEP}{LINE}"
                ),
                format!(
                    r"\bother[ \t]+(?:party|parties|drivers?)(?:[ \t]+involved)?{SEP}{LINE}"
                ),
                format!(r"\bwitness(?:es)?{SEP}{LINE}"),
            ],
        );

        table.set(
            FieldName::ContactDetails,
            vec![
                format!(
                    r"\bcontact(?:[ \t]+(?:details|info|information|number|phone))?{SEP}{LINE}"
                ),
                r"(\(?\d{3}\)?[ \t.\-]?\d{3}[ \t.\-]\d{4})".to_string(),
                r"([a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,})".to_string(),
            ],
        );

        table.set(
            FieldName::AssetType,
            vec![
                format!(
                    r"\b(?:asset|vehicle|property|equipment)[ \t]+(?:type|class|category){SEP}{LINE}"
                ),
                format!(r"\btype[ \t]+of[ \t]+(?:asset|vehicle|property|equipment){SEP}{LINE}"),
            ],
        );

        table.set(
            FieldName::AssetId,
            vec![
                r"\b(?:asset|vehicle|equipment|property)[ \t]+(?:id|identifier|number|no\.?)[ \t]*[:#][ \t]*([a-z0-9][a-z0-9\-]*)"
                    .to_string(),
                r"\b(?:vin|serial[ \t]+(?:number|no\.?)|license[ \t]+plate|plate[ \t]+(?:number|no\.?))[ \t]*[:#][ \t]*([a-z0-9][a-z0-9\-]*)"
                    .to_string(),
            ],
        );

        table.set(
            FieldName::EstimatedDamage,
            vec![
                format!(
                    r"\b(?:estimated[ \t]+(?:damages?|loss|repair[ \t]+costs?|amount)|repair[ \t]+(?:estimate|costs?)|amount[ \t]+of[ \t]+(?:loss|damage)){SEP}{AMOUNT}"
                ),
                format!(
                    r"\b(?:damage[ \t]+estimate|damages?|loss[ \t]+amount|claim[ \t]+amount|total[ \t]+loss|amount[ \t]+claimed){SEP}{AMOUNT}"
                ),
                format!(
                    r"\bestimated[ \t]+(?:damages?|loss)[ \t]+(?:of|is|was|at)[ \t]+{DOLLARS}"
                ),
            ],
        );

        table.set(
            FieldName::ClaimType,
            vec![
                format!(
                    r"\b(?:claim[ \t]+type|type[ \t]+of[ \t]+claim|claim[ \t]+(?:category|class|classification)){SEP}{LINE}"
                ),
                format!(
                    r"\b(?:coverage[ \t]+type|loss[ \t]+type|type[ \t]+of[ \t]+loss|line[ \t]+of[ \t]+business){SEP}{LINE}"
                ),
            ],
        );

        table.set(
            FieldName::Attachments,
            vec![
                format!(
                    r"\b(?:attachments?|attached[ \t]+(?:documents?|files?)|enclosures?|supporting[ \t]+documents?|documents[ \t]+attached){SEP}{LINE}"
                ),
                format!(r"\b(?:photos|documents|evidence)[ \t]+(?:attached|provided|submitted){SEP}{LINE}"),
            ],
        );

        table.set(
            FieldName::InitialEstimate,
            vec![
                format!(
                    r"\b(?:initial|preliminary|first|original)[ \t]+(?:damage[ \t]+)?(?:estimate|assessment|quote|appraisal){SEP}{AMOUNT}"
                ),
                format!(
                    r"\b(?:initial|preliminary)[ \t]+(?:estimate|assessment)[ \t]+(?:of|was|is|at)[ \t]+{DOLLARS}"
                ),
            ],
        );

        table
    }
}
