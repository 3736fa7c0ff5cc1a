//! Pattern-driven field extraction

use crate::config::{compile, PatternTable};
use crate::error::ExtractorError;
use crate::normalize::{collapse_whitespace, parse_amount};
use crate::types::{Extraction, FieldMatch, MatchOutcome};
use fnol_domain::{AttributeRecord, FieldKind, FieldName, FieldValue};
use regex::Regex;
use tracing::{debug, trace};

/// Compiled patterns for one field
#[derive(Debug, Clone)]
struct FieldRule {
    field: FieldName,
    patterns: Vec<Regex>,
}

/// Recovers an [`AttributeRecord`] from raw document text
///
/// Built once from a [`PatternTable`] and shared across documents; holds no
/// per-document state.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    rules: Vec<FieldRule>,
}

impl FieldExtractor {
    /// Compile a pattern table
    ///
    /// Fails on unknown field names or patterns that do not compile.
    pub fn new(table: &PatternTable) -> Result<Self, ExtractorError> {
        if let Some(unknown) = table.field_names().find(|n| FieldName::parse(n).is_none()) {
            return Err(ExtractorError::UnknownField(unknown.to_string()));
        }

        let mut rules = Vec::new();
        for field in FieldName::ALL {
            let sources = table.patterns_for(field);
            if sources.is_empty() {
                continue;
            }
            let patterns = sources
                .iter()
                .enumerate()
                .map(|(index, pattern)| compile(field.as_str(), index, pattern))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push(FieldRule { field, patterns });
        }

        debug!(
            "Compiled {} patterns for {} fields",
            table.pattern_count(),
            rules.len()
        );
        Ok(Self { rules })
    }

    /// Extractor over the built-in pattern table
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(&PatternTable::default())
    }

    /// Extract every configured field from the text
    pub fn extract(&self, text: &str) -> AttributeRecord {
        self.extract_detailed(text).record
    }

    /// Extract every configured field and report which pattern produced each value
    pub fn extract_detailed(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for rule in &self.rules {
            let Some((pattern_index, raw)) = first_capture(&rule.patterns, text) else {
                trace!("No match for {}", rule.field);
                continue;
            };

            let value = match rule.field.kind() {
                FieldKind::Text => Some(FieldValue::Text(collapse_whitespace(raw))),
                FieldKind::Currency => parse_amount(raw).map(FieldValue::Amount),
            };

            let outcome = match value {
                Some(value) => match extraction.record.insert(rule.field, value) {
                    Ok(()) => MatchOutcome::Accepted,
                    Err(e) => {
                        debug!("Rejected value for {}: {}", rule.field, e);
                        MatchOutcome::Unparseable
                    }
                },
                None => {
                    debug!("Unparseable amount for {}: {:?}", rule.field, raw);
                    MatchOutcome::Unparseable
                }
            };

            extraction.matches.push(FieldMatch {
                field: rule.field,
                pattern_index,
                raw: raw.to_string(),
                outcome,
            });
        }

        debug!(
            "Extracted {}/{} fields",
            extraction.record.present_count(),
            FieldName::COUNT
        );
        extraction
    }

    /// Number of compiled patterns for a field
    pub fn pattern_count(&self, field: FieldName) -> usize {
        self.rules
            .iter()
            .find(|r| r.field == field)
            .map_or(0, |r| r.patterns.len())
    }
}

/// First non-empty capture across the patterns, tried in priority order
///
/// The first capture group that took part in the match is used, otherwise
/// the whole match. A capture that trims to nothing falls through to the
/// next pattern.
fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<(usize, &'t str)> {
    patterns.iter().enumerate().find_map(|(index, pattern)| {
        let caps = pattern.captures(text)?;
        let m = caps.iter().skip(1).flatten().next().or_else(|| caps.get(0))?;
        let raw = m.as_str().trim();
        (!raw.is_empty()).then_some((index, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(field: FieldName, patterns: &[&str]) -> FieldExtractor {
        FieldExtractor::new(&PatternTable::empty().with(field, patterns)).unwrap()
    }

    #[test]
    fn test_first_pattern_wins_over_position() {
        let ex = extractor(
            FieldName::ClaimType,
            &[r"type of claim:\s*([^\n]+)", r"claim type:\s*([^\n]+)"],
        );
        let record = ex.extract("Claim Type: Auto\nType of Claim: Property");
        assert_eq!(record.claim_type.as_deref(), Some("Property"));
    }

    #[test]
    fn test_whole_match_without_group() {
        let ex = extractor(FieldName::PolicyNumber, &[r"POL-\d+"]);
        let record = ex.extract("ref pol-42 attached");
        assert_eq!(record.policy_number.as_deref(), Some("pol-42"));
    }

    #[test]
    fn test_empty_capture_falls_through() {
        let ex = extractor(
            FieldName::AssetType,
            &[r"asset:([ \t]*)", r"vehicle:\s*(\w+)"],
        );
        let extraction = ex.extract_detailed("asset:   \nvehicle: Sedan");
        assert_eq!(extraction.record.asset_type.as_deref(), Some("Sedan"));
        assert_eq!(extraction.match_for(FieldName::AssetType).unwrap().pattern_index, 1);
    }

    #[test]
    fn test_unparseable_amount_does_not_fall_through() {
        let ex = extractor(
            FieldName::EstimatedDamage,
            &[r"damage:\s*([^\n]+)", r"\$([\d,]+)"],
        );
        let extraction = ex.extract_detailed("Damage: unknown at this time\nQuote $500");
        assert_eq!(extraction.record.estimated_damage, None);
        assert_eq!(
            extraction.match_for(FieldName::EstimatedDamage).unwrap().outcome,
            MatchOutcome::Unparseable
        );
    }

    #[test]
    fn test_unknown_field_fails_construction() {
        let table = PatternTable::from_toml("loss_cause = ['cause:(.*)']").unwrap();
        assert!(matches!(
            FieldExtractor::new(&table),
            Err(ExtractorError::UnknownField(_))
        ));
    }

    #[test]
    fn test_pattern_count() {
        let ex = extractor(FieldName::Claimant, &["a", "b"]);
        assert_eq!(ex.pattern_count(FieldName::Claimant), 2);
        assert_eq!(ex.pattern_count(FieldName::AssetId), 0);
    }
}
