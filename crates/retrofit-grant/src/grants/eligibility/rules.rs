use rust_decimal::Decimal;
use std::fmt;

use super::signals::HouseholdSignals;
use super::tier::SubsidyTier;

const SINGLE_HIGHEST_INCOME_CAP: u32 = 1_800;
const MULTI_HIGHEST_INCOME_CAP: u32 = 1_300;
/// Demand must exceed this figure (exclusive) for the highest tier.
const HIGHEST_ENERGY_FLOOR: u32 = 140;
const SINGLE_INCREASED_INCOME_CAP: u32 = 3_150;
const MULTI_INCREASED_INCOME_CAP: u32 = 2_250;
const BASIC_ANNUAL_INCOME_CAP: u32 = 135_000;

/// One step of the eligibility cascade.
#[derive(Clone, Copy)]
pub struct TierRule {
    pub tier: SubsidyTier,
    pub description: &'static str,
    pub(crate) applies: fn(&HouseholdSignals) -> bool,
}

impl TierRule {
    pub fn applies(&self, signals: &HouseholdSignals) -> bool {
        (self.applies)(signals)
    }
}

impl fmt::Debug for TierRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierRule")
            .field("tier", &self.tier)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Cascade order matters: the first matching rule decides the tier.
pub(crate) static TIER_RULES: [TierRule; 3] = [
    TierRule {
        tier: SubsidyTier::Highest,
        description: "income within the highest-tier cap, energy demand above 140 kWh/(m²·rok), comprehensive retrofit planned",
        applies: highest_tier,
    },
    TierRule {
        tier: SubsidyTier::Increased,
        description: "monthly income per person within the increased-tier cap",
        applies: increased_tier,
    },
    TierRule {
        tier: SubsidyTier::Basic,
        description: "annual household income within 135 000 zł",
        applies: basic_tier,
    },
];

pub(crate) fn first_match(signals: &HouseholdSignals) -> Option<&'static TierRule> {
    TIER_RULES.iter().find(|rule| rule.applies(signals))
}

fn highest_tier(signals: &HouseholdSignals) -> bool {
    let cap = if signals.single_person() {
        SINGLE_HIGHEST_INCOME_CAP
    } else {
        MULTI_HIGHEST_INCOME_CAP
    };

    signals.monthly_income <= Decimal::from(cap)
        && signals.energy_demand > Decimal::from(HIGHEST_ENERGY_FLOOR)
        && signals.comprehensive_retrofit
}

fn increased_tier(signals: &HouseholdSignals) -> bool {
    let cap = if signals.single_person() {
        SINGLE_INCREASED_INCOME_CAP
    } else {
        MULTI_INCREASED_INCOME_CAP
    };

    signals.monthly_income <= Decimal::from(cap)
}

fn basic_tier(signals: &HouseholdSignals) -> bool {
    signals.annual_income() <= Decimal::from(BASIC_ANNUAL_INCOME_CAP)
}
