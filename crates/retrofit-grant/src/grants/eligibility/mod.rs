mod bands;
mod rules;
mod signals;
mod tier;

pub use bands::{EnergyBand, IncomeBand};
pub use rules::TierRule;
pub use signals::HouseholdSignals;
pub use tier::SubsidyTier;

use super::domain::Household;
use serde::Serialize;
use tracing::debug;

/// Resolved tier together with the rule that matched and the figures it saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityDecision {
    pub tier: SubsidyTier,
    pub tier_label: &'static str,
    /// Description of the matching rule, absent when the household is not eligible.
    pub matched_rule: Option<&'static str>,
    pub signals: HouseholdSignals,
}

/// Maps raw household answers to a subsidy tier.
pub fn resolve_tier(household: &Household) -> SubsidyTier {
    assess_eligibility(household).tier
}

pub fn assess_eligibility(household: &Household) -> EligibilityDecision {
    let signals = HouseholdSignals::from_household(household);
    let rule = rules::first_match(&signals);
    let tier = rule.map(|rule| rule.tier).unwrap_or(SubsidyTier::None);

    debug!(
        tier = tier.key(),
        income = %signals.monthly_income,
        household_size = signals.household_size,
        energy = %signals.energy_demand,
        comprehensive = signals.comprehensive_retrofit,
        "resolved subsidy tier"
    );

    EligibilityDecision {
        tier,
        tier_label: tier.label(),
        matched_rule: rule.map(|rule| rule.description),
        signals,
    }
}

/// The ordered cascade, for callers that want to show or test individual rules.
pub fn tier_rules() -> &'static [TierRule] {
    &rules::TIER_RULES
}
