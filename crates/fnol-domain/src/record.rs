//! Record module - the attributes recovered from one loss notice

use crate::field::{FieldKind, FieldName};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// An owned attribute value, as produced by extraction
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Normalized text value
    Text(String),

    /// Non-negative currency amount
    Amount(f64),
}

impl FieldValue {
    /// Value kind
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Amount(_) => FieldKind::Currency,
        }
    }
}

/// A borrowed view of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldRef<'a> {
    /// Normalized text value
    Text(&'a str),

    /// Non-negative currency amount
    Amount(f64),
}

/// Error raised when a value does not fit the field it is stored in
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Value kind differs from the field kind
    #[error("field '{field}' stores {expected:?} values")]
    KindMismatch {
        /// Target field
        field: FieldName,
        /// Kind the field stores
        expected: FieldKind,
    },

    /// Currency amount is negative, NaN or infinite
    #[error("field '{field}' rejects amount {amount}")]
    InvalidAmount {
        /// Target field
        field: FieldName,
        /// Rejected amount
        amount: f64,
    },
}

/// Attributes recovered from one FNOL document
///
/// Every attribute is optional. Currency attributes hold a finite,
/// non-negative amount; zero is a valid extracted value while `None` means
/// the attribute could not be found. A record is built once per document and
/// is not mutated after it has been packaged into an output record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRecord {
    /// Policy identifier
    pub policy_number: Option<String>,
    /// Name of the policyholder
    pub policyholder_name: Option<String>,
    /// Policy effective-date range
    pub effective_dates: Option<String>,
    /// Date of the incident
    pub incident_date: Option<String>,
    /// Time of the incident
    pub incident_time: Option<String>,
    /// Where the incident happened
    pub incident_location: Option<String>,
    /// Free-text narrative of the incident
    pub incident_description: Option<String>,
    /// Person filing the claim
    pub claimant: Option<String>,
    /// Other parties involved
    pub third_parties: Option<String>,
    /// Contact details
    pub contact_details: Option<String>,
    /// Kind of asset involved
    pub asset_type: Option<String>,
    /// Asset identifier
    pub asset_id: Option<String>,
    /// Estimated damage amount
    pub estimated_damage: Option<f64>,
    /// Type of claim
    pub claim_type: Option<String>,
    /// Attached documents
    pub attachments: Option<String>,
    /// Initial or preliminary estimate amount
    pub initial_estimate: Option<f64>,
}

impl AttributeRecord {
    /// Create an empty record (every attribute absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of an attribute, if present
    pub fn get(&self, field: FieldName) -> Option<FieldRef<'_>> {
        if let Some(slot) = self.text_slot(field) {
            return slot.as_deref().map(FieldRef::Text);
        }
        self.amount(field).map(FieldRef::Amount)
    }

    /// Whether an attribute is present
    pub fn is_present(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    /// Text value of a text attribute
    pub fn text(&self, field: FieldName) -> Option<&str> {
        self.text_slot(field).and_then(|slot| slot.as_deref())
    }

    /// Amount of a currency attribute
    pub fn amount(&self, field: FieldName) -> Option<f64> {
        match field {
            FieldName::EstimatedDamage => self.estimated_damage,
            FieldName::InitialEstimate => self.initial_estimate,
            _ => None,
        }
    }

    /// Store a value, replacing any previous one
    ///
    /// The value kind must match [`FieldName::kind`] and amounts must be
    /// finite and non-negative.
    pub fn insert(&mut self, field: FieldName, value: FieldValue) -> Result<(), RecordError> {
        match (field.kind(), value) {
            (FieldKind::Text, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_slot_mut(field) {
                    *slot = Some(text);
                }
                Ok(())
            }
            (FieldKind::Currency, FieldValue::Amount(amount)) => {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(RecordError::InvalidAmount { field, amount });
                }
                match field {
                    FieldName::EstimatedDamage => self.estimated_damage = Some(amount),
                    FieldName::InitialEstimate => self.initial_estimate = Some(amount),
                    _ => {}
                }
                Ok(())
            }
            (expected, _) => Err(RecordError::KindMismatch { field, expected }),
        }
    }

    /// Iterate over present attributes in canonical order
    pub fn present(&self) -> impl Iterator<Item = (FieldName, FieldRef<'_>)> + '_ {
        FieldName::ALL
            .iter()
            .filter_map(move |&field| self.get(field).map(|value| (field, value)))
    }

    /// Number of present attributes
    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// Share of the 16 attributes that are present (0.0-1.0)
    pub fn extraction_rate(&self) -> f64 {
        self.present_count() as f64 / FieldName::COUNT as f64
    }

    fn text_slot(&self, field: FieldName) -> Option<&Option<String>> {
        let slot = match field {
            FieldName::PolicyNumber => &self.policy_number,
            FieldName::PolicyholderName => &self.policyholder_name,
            FieldName::EffectiveDates => &self.effective_dates,
            FieldName::IncidentDate => &self.incident_date,
            FieldName::IncidentTime => &self.incident_time,
            FieldName::IncidentLocation => &self.incident_location,
            FieldName::IncidentDescription => &self.incident_description,
            FieldName::Claimant => &self.claimant,
            FieldName::ThirdParties => &self.third_parties,
            FieldName::ContactDetails => &self.contact_details,
            FieldName::AssetType => &self.asset_type,
            FieldName::AssetId => &self.asset_id,
            FieldName::ClaimType => &self.claim_type,
            FieldName::Attachments => &self.attachments,
            FieldName::EstimatedDamage | FieldName::InitialEstimate => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, field: FieldName) -> Option<&mut Option<String>> {
        let slot = match field {
            FieldName::PolicyNumber => &mut self.policy_number,
            FieldName::PolicyholderName => &mut self.policyholder_name,
            FieldName::EffectiveDates => &mut self.effective_dates,
            FieldName::IncidentDate => &mut self.incident_date,
            FieldName::IncidentTime => &mut self.incident_time,
            FieldName::IncidentLocation => &mut self.incident_location,
            FieldName::IncidentDescription => &mut self.incident_description,
            FieldName::Claimant => &mut self.claimant,
            FieldName::ThirdParties => &mut self.third_parties,
            FieldName::ContactDetails => &mut self.contact_details,
            FieldName::AssetType => &mut self.asset_type,
            FieldName::AssetId => &mut self.asset_id,
            FieldName::ClaimType => &mut self.claim_type,
            FieldName::Attachments => &mut self.attachments,
            FieldName::EstimatedDamage | FieldName::InitialEstimate => return None,
        };
        Some(slot)
    }
}

/// Serialized as `{ field_name: value, ... }` in canonical order, absent
/// attributes omitted.
impl Serialize for AttributeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.present_count()))?;
        for (field, value) in self.present() {
            map.serialize_entry(field.as_str(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = AttributeRecord::new();
        assert_eq!(record.present_count(), 0);
        assert_eq!(record.extraction_rate(), 0.0);
        for field in FieldName::ALL {
            assert!(!record.is_present(field));
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut record = AttributeRecord::new();
        record
            .insert(FieldName::ClaimType, FieldValue::Text("Theft".to_string()))
            .unwrap();
        record
            .insert(FieldName::EstimatedDamage, FieldValue::Amount(0.0))
            .unwrap();

        assert_eq!(record.get(FieldName::ClaimType), Some(FieldRef::Text("Theft")));
        assert_eq!(record.text(FieldName::ClaimType), Some("Theft"));
        // Zero is a value, not absence
        assert_eq!(record.amount(FieldName::EstimatedDamage), Some(0.0));
        assert!(record.is_present(FieldName::EstimatedDamage));
        assert_eq!(record.present_count(), 2);
    }

    #[test]
    fn test_kind_mismatch() {
        let mut record = AttributeRecord::new();
        let result = record.insert(FieldName::EstimatedDamage, FieldValue::Text("lots".into()));
        assert_eq!(
            result,
            Err(RecordError::KindMismatch {
                field: FieldName::EstimatedDamage,
                expected: FieldKind::Currency,
            })
        );

        let result = record.insert(FieldName::Claimant, FieldValue::Amount(1.0));
        assert!(matches!(result, Err(RecordError::KindMismatch { .. })));
        assert_eq!(record.present_count(), 0);
    }

    #[test]
    fn test_record_error_messages() {
        let err = RecordError::KindMismatch {
            field: FieldName::EstimatedDamage,
            expected: FieldKind::Currency,
        };
        assert_eq!(err.to_string(), "field 'estimated_damage' stores Currency values");

        let err: Box<dyn std::error::Error> = Box::new(RecordError::InvalidAmount {
            field: FieldName::InitialEstimate,
            amount: -5.0,
        });
        assert_eq!(err.to_string(), "field 'initial_estimate' rejects amount -5");
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        let mut record = AttributeRecord::new();
        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            let result = record.insert(FieldName::InitialEstimate, FieldValue::Amount(amount));
            assert!(matches!(result, Err(RecordError::InvalidAmount { .. })));
        }
        assert!(record.initial_estimate.is_none());
    }

    #[test]
    fn test_serialize_omits_absent_in_canonical_order() {
        let mut record = AttributeRecord::new();
        record.claim_type = Some("Property Damage".to_string());
        record.policy_number = Some("POL-001".to_string());
        record.estimated_damage = Some(3000.0);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"policy_number":"POL-001","estimated_damage":3000.0,"claim_type":"Property Damage"}"#
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any finite non-negative amount is stored as-is
        #[test]
        fn test_amount_storage(amount in 0.0f64..1.0e12) {
            let mut record = AttributeRecord::new();
            prop_assert!(record.insert(FieldName::EstimatedDamage, FieldValue::Amount(amount)).is_ok());
            prop_assert_eq!(record.get(FieldName::EstimatedDamage), Some(FieldRef::Amount(amount)));
        }

        /// Property: negative amounts never become present
        #[test]
        fn test_negative_amount_stays_absent(amount in -1.0e12f64..-0.001) {
            let mut record = AttributeRecord::new();
            prop_assert!(record.insert(FieldName::InitialEstimate, FieldValue::Amount(amount)).is_err());
            prop_assert!(!record.is_present(FieldName::InitialEstimate));
        }

        /// Property: serialized keys are exactly the present fields
        #[test]
        fn test_serialized_keys_match_present(mask in proptest::collection::vec(any::<bool>(), FieldName::COUNT)) {
            let mut record = AttributeRecord::new();
            for (field, keep) in FieldName::ALL.iter().zip(&mask) {
                if !keep {
                    continue;
                }
                let value = match field.kind() {
                    FieldKind::Text => FieldValue::Text(format!("{} value", field)),
                    FieldKind::Currency => FieldValue::Amount(10.0),
                };
                record.insert(*field, value).unwrap();
            }

            let value = serde_json::to_value(&record).unwrap();
            let object = value.as_object().unwrap();
            prop_assert_eq!(object.len(), mask.iter().filter(|k| **k).count());
            for field in FieldName::ALL {
                prop_assert_eq!(object.contains_key(field.as_str()), record.is_present(field));
            }
        }
    }
}
