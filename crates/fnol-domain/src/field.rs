//! Field module - the 16 attributes a loss notice may carry

use std::fmt;

/// Value kind of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, stored trimmed with whitespace runs collapsed
    Text,

    /// Currency amount, stored as a non-negative decimal
    Currency,
}

/// Name of an extractable attribute
///
/// The declaration order is the canonical order used whenever fields are
/// listed (serialized records, default mandatory list, reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    /// Policy identifier
    PolicyNumber,
    /// Name of the policyholder
    PolicyholderName,
    /// Policy effective-date range
    EffectiveDates,
    /// Date of the incident
    IncidentDate,
    /// Time of the incident
    IncidentTime,
    /// Where the incident happened
    IncidentLocation,
    /// Free-text narrative of the incident
    IncidentDescription,
    /// Person filing the claim
    Claimant,
    /// Other parties involved
    ThirdParties,
    /// Phone, email or other contact details
    ContactDetails,
    /// Kind of asset involved (vehicle, property, equipment)
    AssetType,
    /// Asset identifier (VIN, serial number)
    AssetId,
    /// Estimated damage amount
    EstimatedDamage,
    /// Type of claim
    ClaimType,
    /// Attached documents
    Attachments,
    /// Initial or preliminary estimate amount
    InitialEstimate,
}

impl FieldName {
    /// Number of attributes
    pub const COUNT: usize = 16;

    /// All attributes in canonical order
    pub const ALL: [FieldName; Self::COUNT] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::EffectiveDates,
        FieldName::IncidentDate,
        FieldName::IncidentTime,
        FieldName::IncidentLocation,
        FieldName::IncidentDescription,
        FieldName::Claimant,
        FieldName::ThirdParties,
        FieldName::ContactDetails,
        FieldName::AssetType,
        FieldName::AssetId,
        FieldName::EstimatedDamage,
        FieldName::ClaimType,
        FieldName::Attachments,
        FieldName::InitialEstimate,
    ];

    /// Get the serialized (snake_case) field name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policy_number",
            FieldName::PolicyholderName => "policyholder_name",
            FieldName::EffectiveDates => "effective_dates",
            FieldName::IncidentDate => "incident_date",
            FieldName::IncidentTime => "incident_time",
            FieldName::IncidentLocation => "incident_location",
            FieldName::IncidentDescription => "incident_description",
            FieldName::Claimant => "claimant",
            FieldName::ThirdParties => "third_parties",
            FieldName::ContactDetails => "contact_details",
            FieldName::AssetType => "asset_type",
            FieldName::AssetId => "asset_id",
            FieldName::EstimatedDamage => "estimated_damage",
            FieldName::ClaimType => "claim_type",
            FieldName::Attachments => "attachments",
            FieldName::InitialEstimate => "initial_estimate",
        }
    }

    /// Parse a field from its serialized name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|f| f.as_str() == wanted)
    }

    /// Value kind stored for this field
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::EstimatedDamage | FieldName::InitialEstimate => FieldKind::Currency,
            _ => FieldKind::Text,
        }
    }

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Serialize a field list as its snake_case names
///
/// For use with `#[serde(serialize_with = "...")]` on `Vec<FieldName>`.
pub fn serialize_field_names<S>(fields: &[FieldName], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(fields.iter().map(FieldName::as_str))
}
