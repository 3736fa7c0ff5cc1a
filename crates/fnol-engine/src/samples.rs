//! Built-in sample loss notices

use crate::batch::Document;

const AUTO_DAMAGE: &str = "FIRST NOTICE OF LOSS (FNOL)

Policy Number: POL-2024-001234
Policyholder Name: John Smith
Effective Dates: 01/01/2024 - 12/31/2024

INCIDENT INFORMATION
Incident Date: 01/15/2024
Time: 14:30 PM
Location: Intersection of Main St and Oak Ave, Springfield, IL 60601

Description: Vehicle collision with another automobile. Minor injuries to driver.
Vehicle sustained significant front-end damage including broken headlight,
damaged bumper, and hood dent.

INVOLVED PARTIES
Claimant: John Smith
Third Party: Jane Doe
Contact Details: 217-555-0123, john.smith@email.com

ASSET DETAILS
Asset Type: Automobile
Asset ID: VIN-2020XYZ789ABC
Estimated Damage: $8,500.00

CLAIM INFORMATION
Claim Type: Property Damage
Initial Estimate: $8,200.00
Attachments: Police_Report.pdf, Photos.jpg
";

const INJURY: &str = "FIRST NOTICE OF LOSS

Policy Number: POL-2024-005678
Effective Dates: 06/01/2024 - 05/31/2025

INCIDENT INFORMATION
Incident Date: 01/20/2024
Location: Office Building, 100 Commerce Dr, Chicago, IL
Description: Employee sustained injury while performing job duties.
Incident occurred in warehouse during loading operations.

Asset Type: Worker Compensation Claim
Claim Type: Bodily Injury - Workers Compensation
Estimated Damage: $45,000.00

[MISSING: Policyholder Name, Incident Time, Claimant Details, Contact Information]
";

const SUSPICIOUS: &str = "FNOL REPORT

Policy Number: POL-2024-009999
Policyholder Name: Robert Johnson
Incident Date: 01/22/2024
Location: Warehouse, Industrial Park

Description: Equipment loss reported. Circumstances appear suspicious and staged.
Multiple inconsistencies in timeline. Fraud indicators present.
Equipment was worth $120,000 but claim shows inconsistent valuations.

Asset Type: Industrial Equipment
Estimated Damage: $120,000.00
Initial Estimate: $45,000.00
Claim Type: Equipment Loss

[MISSING: Policyholder contact details, detailed incident description]
";

/// Three sample notices: a clean auto claim, an injury claim missing the
/// policyholder, and an equipment claim with fraud indicators
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("Claim_001_Auto_Damage.txt", AUTO_DAMAGE),
        Document::new("Claim_002_Injury.txt", INJURY),
        Document::new("Claim_003_Suspicious.txt", SUSPICIOUS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClaimsProcessor, TriageConfig};
    use fnol_domain::{FieldName, Route};

    fn run(index: usize) -> fnol_domain::OutputRecord {
        let processor = ClaimsProcessor::new(TriageConfig::default()).unwrap();
        let document = &sample_documents()[index];
        processor.process(&document.name, &document.text)
    }

    #[test]
    fn test_auto_damage_sample_is_fast_tracked() {
        let output = run(0);
        assert_eq!(output.recommended_route, Route::FastTrack);
        assert_eq!(output.extracted_fields.present_count(), FieldName::COUNT);
        assert!(output.investigation_flags.is_empty());
    }

    #[test]
    fn test_injury_sample_needs_manual_review() {
        let output = run(1);
        assert_eq!(output.recommended_route, Route::ManualReview);
        assert_eq!(output.missing_fields, vec![FieldName::PolicyholderName]);
        assert_eq!(output.reasoning, "Missing mandatory fields: policyholder_name");
    }

    #[test]
    fn test_suspicious_sample_is_investigated() {
        let output = run(2);
        assert_eq!(output.recommended_route, Route::InvestigationQueue);
        assert_eq!(
            &output.investigation_flags[..4],
            &[
                "Red flag detected: 'fraud' found in incident description".to_string(),
                "Red flag detected: 'staged' found in incident description".to_string(),
                "Red flag detected: 'inconsistent' found in incident description".to_string(),
                "Red flag detected: 'suspicious' found in incident description".to_string(),
            ]
        );
        assert_eq!(output.investigation_flags.len(), 5);
        assert!(output.investigation_flags[4].starts_with("Inconsistency detected"));
    }
}
