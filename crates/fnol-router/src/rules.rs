//! The ordered routing rule chain

use fnol_domain::{format_currency, AttributeRecord, FieldName, Route};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RoutingContext<'a> {
    /// Extracted attributes
    pub record: &'a AttributeRecord,
    /// Absent mandatory fields, mandatory-list order
    pub missing: &'a [FieldName],
    /// Investigation flags, detection order
    pub flags: &'a [String],
    /// Lowercased specialist claim-type substrings, configured order
    pub specialist_types: &'a [String],
    /// Fast-track threshold
    pub fast_track_threshold: f64,
}

impl RoutingContext<'_> {
    /// First specialist substring contained in the claim type
    pub fn matched_specialist_type(&self) -> Option<&str> {
        let claim_type = self.record.claim_type.as_deref()?.to_lowercase();
        self.specialist_types
            .iter()
            .find(|t| claim_type.contains(t.as_str()))
            .map(String::as_str)
    }

    fn below_threshold(&self) -> bool {
        self.record
            .estimated_damage
            .is_some_and(|amount| amount < self.fast_track_threshold)
    }
}

/// One link of the routing chain
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short rule name for logs
    pub name: &'static str,
    /// Route selected when the rule applies
    pub route: Route,
    applies: fn(&RoutingContext<'_>) -> bool,
    explain: fn(&RoutingContext<'_>) -> String,
}

impl Rule {
    /// Whether the rule decides this claim
    pub fn applies(&self, ctx: &RoutingContext<'_>) -> bool {
        (self.applies)(ctx)
    }

    /// Reasoning text for a claim this rule decided
    pub fn explain(&self, ctx: &RoutingContext<'_>) -> String {
        (self.explain)(ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("route", &self.route)
            .finish()
    }
}

/// Conditional rules in priority order; the first that applies decides
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "missing-mandatory",
            route: Route::ManualReview,
            applies: |ctx| !ctx.missing.is_empty(),
            explain: |ctx| {
                let names: Vec<&str> = ctx.missing.iter().map(FieldName::as_str).collect();
                format!("Missing mandatory fields: {}", names.join(", "))
            },
        },
        Rule {
            name: "investigation-flags",
            route: Route::InvestigationQueue,
            applies: |ctx| !ctx.flags.is_empty(),
            explain: |ctx| ctx.flags.join("; "),
        },
        Rule {
            name: "specialist-claim-type",
            route: Route::SpecialistQueue,
            applies: |ctx| ctx.matched_specialist_type().is_some(),
            explain: |ctx| {
                let claim_type = ctx.record.claim_type.as_deref().unwrap_or_default();
                match ctx.matched_specialist_type() {
                    Some(matched) => format!(
                        "Claim type '{}' requires specialist handling (matched '{}')",
                        claim_type, matched
                    ),
                    None => format!("Claim type '{}' requires specialist handling", claim_type),
                }
            },
        },
        Rule {
            name: "fast-track",
            route: Route::FastTrack,
            applies: |ctx| ctx.below_threshold(),
            explain: |ctx| {
                format!(
                    "Damage amount {} is below the {} fast-track threshold",
                    format_currency(ctx.record.estimated_damage.unwrap_or_default()),
                    format_currency(ctx.fast_track_threshold)
                )
            },
        },
    ]
}

/// Rule deciding every claim no conditional rule matched
pub fn fallback_rule() -> Rule {
    Rule {
        name: "standard",
        route: Route::StandardProcessing,
        applies: |_| true,
        explain: standard_reasoning,
    }
}

/// Reasoning for the fallback route
fn standard_reasoning(ctx: &RoutingContext<'_>) -> String {
    match ctx.record.estimated_damage {
        Some(amount) => format!(
            "Damage amount {} meets or exceeds the {} fast-track threshold",
            format_currency(amount),
            format_currency(ctx.fast_track_threshold)
        ),
        None => "No specific routing criteria met".to_string(),
    }
}
