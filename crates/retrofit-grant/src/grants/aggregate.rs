use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::calculator::{compute_category, CategoryResult};
use super::catalog::WorkCategory;
use super::domain::{Beneficiary, GrantApplication, WorksBill};
use super::eligibility::{assess_eligibility, HouseholdSignals, SubsidyTier};

pub const NOT_ELIGIBLE_MESSAGE: &str = "Nie spełniasz kryteriów programu – zbyt wysokie dochody lub niewystarczająca energochłonność budynku. Dotacja nie przysługuje.";

/// Cross-category sums after the programme ceiling has been applied to the grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
    pub grant: Decimal,
    pub beneficiary: Decimal,
    /// Summed category grants before the ceiling.
    pub uncapped_grant: Decimal,
    pub ceiling_applied: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub docs: CategoryResult,
    pub heat: CategoryResult,
    pub thermo: CategoryResult,
    pub vent: CategoryResult,
    pub totals: Totals,
}

impl CalculationResult {
    pub fn category(&self, category: WorkCategory) -> &CategoryResult {
        match category {
            WorkCategory::Documentation => &self.docs,
            WorkCategory::HeatSource => &self.heat,
            WorkCategory::ThermalEnvelope => &self.thermo,
            WorkCategory::Ventilation => &self.vent,
        }
    }

    fn category_mut(&mut self, category: WorkCategory) -> &mut CategoryResult {
        match category {
            WorkCategory::Documentation => &mut self.docs,
            WorkCategory::HeatSource => &mut self.heat,
            WorkCategory::ThermalEnvelope => &mut self.thermo,
            WorkCategory::Ventilation => &mut self.vent,
        }
    }
}

/// Outcome handed to presenters: either a full calculation or the not-eligible notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GrantAssessment {
    Eligible {
        beneficiary: Beneficiary,
        tier: SubsidyTier,
        tier_label: &'static str,
        active_categories: Vec<WorkCategory>,
        result: CalculationResult,
    },
    NotEligible {
        beneficiary: Beneficiary,
        tier: SubsidyTier,
        message: &'static str,
    },
}

impl GrantAssessment {
    pub fn tier(&self) -> SubsidyTier {
        match self {
            GrantAssessment::Eligible { tier, .. } | GrantAssessment::NotEligible { tier, .. } => {
                *tier
            }
        }
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            GrantAssessment::Eligible { result, .. } => Some(result),
            GrantAssessment::NotEligible { .. } => None,
        }
    }
}

/// Documentation always counts; the other categories follow the household's scope answers.
pub fn is_category_active(category: WorkCategory, signals: &HouseholdSignals) -> bool {
    match category {
        WorkCategory::Documentation => true,
        WorkCategory::HeatSource => signals.replace_heat,
        WorkCategory::ThermalEnvelope | WorkCategory::Ventilation => {
            signals.comprehensive_retrofit
        }
    }
}

/// Runs every active category at `tier` and folds the results into capped totals.
pub fn calculate(
    works: &WorksBill,
    signals: &HouseholdSignals,
    tier: SubsidyTier,
) -> CalculationResult {
    let mut result = CalculationResult::default();
    if !tier.is_eligible() {
        return result;
    }

    for category in WorkCategory::ALL {
        if is_category_active(category, signals) {
            *result.category_mut(category) =
                compute_category(category.items(), works.entries(category), tier);
        }
    }

    result.totals = summarize(&result, tier);
    result
}

fn summarize(result: &CalculationResult, tier: SubsidyTier) -> Totals {
    let mut net = Decimal::ZERO;
    let mut vat = Decimal::ZERO;
    let mut uncapped_grant = Decimal::ZERO;

    for category in WorkCategory::ALL {
        let totals = result.category(category);
        net = net.saturating_add(totals.net);
        vat = vat.saturating_add(totals.vat);
        uncapped_grant = uncapped_grant.saturating_add(totals.grant);
    }

    let gross = net.saturating_add(vat);
    let ceiling = tier.grant_ceiling();
    let grant = uncapped_grant.min(ceiling);
    let ceiling_applied = grant < uncapped_grant;

    if ceiling_applied {
        debug!(
            tier = tier.key(),
            %uncapped_grant,
            %ceiling,
            "grant clamped to programme ceiling"
        );
    }

    Totals {
        net,
        vat,
        gross,
        grant,
        beneficiary: gross.saturating_sub(grant),
        uncapped_grant,
        ceiling_applied,
    }
}

/// Full pipeline for one submission: resolve the tier, then price the bill when eligible.
pub fn assess(application: &GrantApplication) -> GrantAssessment {
    let decision = assess_eligibility(&application.household);
    let beneficiary = application.beneficiary.clone();

    if !decision.tier.is_eligible() {
        return GrantAssessment::NotEligible {
            beneficiary,
            tier: decision.tier,
            message: NOT_ELIGIBLE_MESSAGE,
        };
    }

    let active_categories = WorkCategory::ALL
        .into_iter()
        .filter(|category| is_category_active(*category, &decision.signals))
        .collect();

    GrantAssessment::Eligible {
        beneficiary,
        tier: decision.tier,
        tier_label: decision.tier_label,
        active_categories,
        result: calculate(&application.works, &decision.signals, decision.tier),
    }
}
