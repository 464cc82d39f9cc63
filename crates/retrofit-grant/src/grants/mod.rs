//! Eligibility resolution and grant calculation for retrofit bills of works.
//!
//! Everything here is a pure function of its inputs: raw form text goes in, and a
//! [`GrantAssessment`] comes out. Malformed numbers are read as zero rather than rejected.

mod aggregate;
pub mod calculator;
pub mod catalog;
pub mod decimal;
pub mod domain;
pub mod eligibility;
pub mod import;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregate::{
    assess, calculate, is_category_active, CalculationResult, GrantAssessment, Totals,
    NOT_ELIGIBLE_MESSAGE,
};
pub use calculator::{compute_category, resolve_vat_rate, CategoryResult, RowResult};
pub use catalog::{ItemDefinition, WorkCategory};
pub use decimal::{parse_decimal, parse_household_size};
pub use domain::{Beneficiary, GrantApplication, Household, LineEntries, LineEntry, WorksBill};
pub use eligibility::{
    assess_eligibility, resolve_tier, tier_rules, EligibilityDecision, EnergyBand,
    HouseholdSignals, IncomeBand, SubsidyTier, TierRule,
};
pub use import::{BillImportError, BillImporter};
pub use router::grant_router;
pub use views::CatalogView;
