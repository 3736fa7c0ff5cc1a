//! Route module - downstream workflow queues for triaged claims

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow queue a claim is routed to
///
/// Listed from the rule evaluated first to the fallback:
/// - ManualReview: mandatory data is missing
/// - InvestigationQueue: fraud keywords or amount discrepancies
/// - SpecialistQueue: claim type needs specialist handling (injury, liability)
/// - FastTrack: complete, clean, low-value claims
/// - StandardProcessing: everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    /// Complete, unflagged claims below the fast-track threshold
    FastTrack,

    /// Default queue
    StandardProcessing,

    /// Injury, liability and other specialist claim types
    SpecialistQueue,

    /// Claims carrying red flags
    InvestigationQueue,

    /// Claims with missing mandatory fields
    ManualReview,
}

impl Route {
    /// All routes, in serialized-name order of the external contract
    pub const ALL: [Route; 5] = [
        Route::FastTrack,
        Route::StandardProcessing,
        Route::SpecialistQueue,
        Route::InvestigationQueue,
        Route::ManualReview,
    ];

    /// Get the route name as it appears in output records
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::FastTrack => "FAST_TRACK",
            Route::StandardProcessing => "STANDARD_PROCESSING",
            Route::SpecialistQueue => "SPECIALIST_QUEUE",
            Route::InvestigationQueue => "INVESTIGATION_QUEUE",
            Route::ManualReview => "MANUAL_REVIEW",
        }
    }

    /// Parse a route from a string (case-insensitive, `-` or `_` separated)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "FAST_TRACK" => Some(Route::FastTrack),
            "STANDARD_PROCESSING" => Some(Route::StandardProcessing),
            "SPECIALIST_QUEUE" => Some(Route::SpecialistQueue),
            "INVESTIGATION_QUEUE" => Some(Route::InvestigationQueue),
            "MANUAL_REVIEW" => Some(Route::ManualReview),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route: {}", s))
    }
}
