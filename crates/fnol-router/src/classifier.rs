//! Routing classifier

use crate::config::RoutingConfig;
use crate::rules::{default_rules, fallback_rule, Rule, RoutingContext};
use fnol_domain::{AttributeRecord, Decision, FieldName, Route};
use tracing::debug;

/// Evaluates the routing chain for one claim at a time
#[derive(Debug, Clone)]
pub struct RoutingClassifier {
    config: RoutingConfig,
    specialist_types: Vec<String>,
    rules: Vec<Rule>,
    fallback: Rule,
}

impl RoutingClassifier {
    /// Create a classifier with the given configuration
    pub fn new(config: RoutingConfig) -> Self {
        let specialist_types = config
            .specialist_claim_types
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        Self {
            config,
            specialist_types,
            rules: default_rules(),
            fallback: fallback_rule(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Conditional rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule applied when no conditional rule matches
    pub fn fallback(&self) -> &Rule {
        &self.fallback
    }

    /// Select a route and explain it
    pub fn classify(
        &self,
        record: &AttributeRecord,
        missing: &[FieldName],
        flags: &[String],
    ) -> (Route, String) {
        let ctx = RoutingContext {
            record,
            missing,
            flags,
            specialist_types: &self.specialist_types,
            fast_track_threshold: self.config.fast_track_threshold,
        };

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.applies(&ctx))
            .unwrap_or(&self.fallback);
        debug!("Rule '{}' selected {}", rule.name, rule.route);
        (rule.route, rule.explain(&ctx))
    }

    /// Build the full decision, taking ownership of the check results
    pub fn decide(
        &self,
        record: &AttributeRecord,
        missing_fields: Vec<FieldName>,
        flags: Vec<String>,
    ) -> Decision {
        let (route, reasoning) = self.classify(record, &missing_fields, &flags);
        Decision {
            route,
            reasoning,
            missing_fields,
            flags,
        }
    }
}

impl Default for RoutingClassifier {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(claim_type: &str, damage: Option<f64>) -> AttributeRecord {
        let mut record = AttributeRecord::new();
        record.claim_type = Some(claim_type.to_string());
        record.estimated_damage = damage;
        record
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RoutingClassifier::default()
            .rules()
            .iter()
            .map(|r| r.route)
            .collect();
        assert_eq!(
            names,
            vec![
                Route::ManualReview,
                Route::InvestigationQueue,
                Route::SpecialistQueue,
                Route::FastTrack,
            ]
        );
    }

    #[test]
    fn test_fallback_decides_unmatched_claims() {
        let classifier = RoutingClassifier::default();
        assert_eq!(classifier.fallback().route, Route::StandardProcessing);

        let (route, reasoning) = classifier.classify(&record("Property Damage", None), &[], &[]);
        assert_eq!(route, Route::StandardProcessing);
        assert_eq!(reasoning, "No specific routing criteria met");
    }

    #[test]
    fn test_missing_fields_route_to_manual_review() {
        let classifier = RoutingClassifier::default();
        let (route, reasoning) = classifier.classify(
            &record("Bodily Injury", Some(100.0)),
            &[FieldName::PolicyholderName, FieldName::AssetType],
            &["Red flag".to_string()],
        );
        assert_eq!(route, Route::ManualReview);
        assert_eq!(
            reasoning,
            "Missing mandatory fields: policyholder_name, asset_type"
        );
    }

    #[test]
    fn test_flags_joined_in_order() {
        let classifier = RoutingClassifier::default();
        let flags = vec!["first flag".to_string(), "second flag".to_string()];
        let (route, reasoning) =
            classifier.classify(&record("Property Damage", Some(100.0)), &[], &flags);
        assert_eq!(route, Route::InvestigationQueue);
        assert_eq!(reasoning, "first flag; second flag");
    }

    #[test]
    fn test_specialist_cites_claim_type() {
        let classifier = RoutingClassifier::default();
        let (route, reasoning) =
            classifier.classify(&record("Bodily Injury", Some(50_000.0)), &[], &[]);
        assert_eq!(route, Route::SpecialistQueue);
        assert_eq!(
            reasoning,
            "Claim type 'Bodily Injury' requires specialist handling (matched 'injury')"
        );
    }

    #[test]
    fn test_specialist_match_is_case_insensitive() {
        let classifier = RoutingClassifier::new(RoutingConfig {
            specialist_claim_types: vec!["MARINE".to_string()],
            ..RoutingConfig::default()
        });
        let (route, _) = classifier.classify(&record("Marine cargo", Some(10.0)), &[], &[]);
        assert_eq!(route, Route::SpecialistQueue);
    }

    #[test]
    fn test_fast_track_below_threshold() {
        let classifier = RoutingClassifier::default();
        let (route, reasoning) =
            classifier.classify(&record("Property Damage", Some(3_000.0)), &[], &[]);
        assert_eq!(route, Route::FastTrack);
        assert_eq!(
            reasoning,
            "Damage amount $3,000.00 is below the $25,000.00 fast-track threshold"
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let classifier = RoutingClassifier::default();
        let (route, reasoning) =
            classifier.classify(&record("Property Damage", Some(25_000.0)), &[], &[]);
        assert_eq!(route, Route::StandardProcessing);
        assert!(reasoning.contains("$25,000.00"));
    }

    #[test]
    fn test_standard_without_amount() {
        let classifier = RoutingClassifier::default();
        let (route, reasoning) = classifier.classify(&record("Theft", None), &[], &[]);
        assert_eq!(route, Route::StandardProcessing);
        assert_eq!(reasoning, "No specific routing criteria met");
    }

    #[test]
    fn test_decide_keeps_inputs() {
        let classifier = RoutingClassifier::default();
        let decision = classifier.decide(
            &record("Theft", Some(1.0)),
            vec![],
            vec!["flag".to_string()],
        );
        assert_eq!(decision.route, Route::InvestigationQueue);
        assert_eq!(decision.flags, vec!["flag".to_string()]);
        assert!(decision.missing_fields.is_empty());
    }

    proptest! {
        #[test]
        fn test_missing_dominates(
            damage in proptest::option::of(0.0f64..1.0e7),
            flagged in any::<bool>(),
        ) {
            let classifier = RoutingClassifier::default();
            let flags = if flagged { vec!["flag".to_string()] } else { vec![] };
            let (route, _) = classifier.classify(
                &record("Bodily Injury", damage),
                &[FieldName::ClaimType],
                &flags,
            );
            prop_assert_eq!(route, Route::ManualReview);
        }

        #[test]
        fn test_flags_dominate_below_threshold(damage in 0.0f64..25_000.0) {
            let classifier = RoutingClassifier::default();
            let (route, _) = classifier.classify(
                &record("Property Damage", Some(damage)),
                &[],
                &["flag".to_string()],
            );
            prop_assert_eq!(route, Route::InvestigationQueue);
        }
    }
}
