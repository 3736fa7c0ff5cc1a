//! Property tests over generated loss notices

use fnol_domain::{FieldName, Route};
use fnol_engine::{ClaimsProcessor, TriageConfig};
use proptest::prelude::*;

/// Label lines that may or may not appear in a generated notice
const LINES: [&str; 8] = [
    "Policy Number: POL-12345",
    "Policyholder Name: Pat Doe",
    "Date of Loss: 02/14/2024",
    "Location: 9 Harbor Rd",
    "Describe Loss: hail dented the roof",
    "Claim Type: Property Damage",
    "Asset Type: Building",
    "Estimated Damage: $4,200",
];

fn notice(included: &[bool], extra: &str) -> String {
    let mut text: Vec<&str> = LINES
        .iter()
        .zip(included)
        .filter(|(_, keep)| **keep)
        .map(|(line, _)| *line)
        .collect();
    text.push(extra);
    text.join("\n")
}

fn processor() -> ClaimsProcessor {
    ClaimsProcessor::new(TriageConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn test_processing_is_deterministic(
        included in proptest::collection::vec(any::<bool>(), LINES.len()),
        extra in "[a-zA-Z0-9 :$,.\n]{0,80}",
    ) {
        let processor = processor();
        let text = notice(&included, &extra);
        let first = processor.process("doc", &text);
        let second = processor.process("doc", &text);

        prop_assert_eq!(&first.extracted_fields, &second.extracted_fields);
        prop_assert_eq!(first.decision(), second.decision());
    }

    #[test]
    fn test_missing_fields_match_extracted_fields(
        included in proptest::collection::vec(any::<bool>(), LINES.len()),
        extra in "[a-zA-Z0-9 :$,.\n]{0,80}",
    ) {
        let processor = processor();
        let output = processor.process("doc", &notice(&included, &extra));
        let mandatory = processor.config().mandatory().unwrap();

        let expected: Vec<FieldName> = mandatory
            .into_iter()
            .filter(|f| !output.extracted_fields.is_present(*f))
            .collect();
        prop_assert_eq!(&output.missing_fields, &expected);
    }

    #[test]
    fn test_missing_mandatory_field_forces_manual_review(
        dropped in 0usize..LINES.len(),
        description in "[a-z ]{0,40}",
    ) {
        let mut included = vec![true; LINES.len()];
        included[dropped] = false;
        let text = notice(&included, &format!("Remarks {}", description));
        let output = processor().process("doc", &text);

        prop_assert_eq!(output.recommended_route, Route::ManualReview);
        prop_assert!(!output.missing_fields.is_empty());
    }

    #[test]
    fn test_flags_dominate_cost_routing(damage in 0u32..25_000) {
        let text = format!(
            "{}\nDescribe Loss: the incident looks fabricated\nEstimated Damage: ${}",
            LINES[..7].join("\n").replace("Describe Loss: hail dented the roof\n", ""),
            damage
        );
        let output = processor().process("doc", &text);

        prop_assert!(output.missing_fields.is_empty());
        prop_assert_eq!(output.recommended_route, Route::InvestigationQueue);
    }

    #[test]
    fn test_non_numeric_damage_never_extracted(words in "[a-z]{1,12}( [a-z]{1,12}){0,3}") {
        let mut included = vec![true; LINES.len()];
        included[7] = false;
        let text = notice(&included, &format!("Estimated Damage: {}", words));
        let output = processor().process("doc", &text);

        prop_assert_eq!(output.extracted_fields.estimated_damage, None);
        prop_assert!(output.missing_fields.contains(&FieldName::EstimatedDamage));
    }
}
