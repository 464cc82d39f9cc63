use rust_decimal::Decimal;
use serde::Serialize;

use super::bands::{EnergyBand, IncomeBand};
use crate::grants::decimal::{parse_decimal, parse_household_size};
use crate::grants::domain::Household;

/// Normalized household figures the tier rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseholdSignals {
    pub monthly_income: Decimal,
    pub household_size: u32,
    pub energy_demand: Decimal,
    pub comprehensive_retrofit: bool,
    pub replace_heat: bool,
}

impl HouseholdSignals {
    pub fn from_household(household: &Household) -> Self {
        let monthly_income = IncomeBand::from_key(&household.income)
            .map(IncomeBand::representative)
            .unwrap_or_else(|| parse_decimal(&household.income));
        let energy_demand = EnergyBand::from_key(&household.energy_category)
            .map(EnergyBand::representative)
            .unwrap_or_else(|| parse_decimal(&household.energy_category));

        Self {
            monthly_income,
            household_size: parse_household_size(&household.household_size),
            energy_demand,
            comprehensive_retrofit: is_yes(&household.comprehensive_retrofit),
            replace_heat: is_yes(&household.replace_heat),
        }
    }

    pub fn single_person(&self) -> bool {
        self.household_size == 1
    }

    /// Yearly income of the whole household.
    pub fn annual_income(&self) -> Decimal {
        self.monthly_income
            .saturating_mul(Decimal::from(12))
            .saturating_mul(Decimal::from(self.household_size))
    }
}

fn is_yes(value: &str) -> bool {
    value.trim() == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household(income: &str, size: &str, energy: &str) -> Household {
        Household {
            energy_category: energy.to_string(),
            income: income.to_string(),
            household_size: size.to_string(),
            replace_heat: "no".to_string(),
            comprehensive_retrofit: "yes".to_string(),
        }
    }

    #[test]
    fn band_keys_map_to_representative_values() {
        let signals = HouseholdSignals::from_household(&household("mid", "2", "very_high"));
        assert_eq!(signals.monthly_income, Decimal::from(2_000));
        assert_eq!(signals.energy_demand, Decimal::from(150));
        assert!(signals.comprehensive_retrofit);
        assert!(!signals.replace_heat);
    }

    #[test]
    fn raw_figures_are_parsed() {
        let signals = HouseholdSignals::from_household(&household("1750,50", "1", "142"));
        assert_eq!(signals.monthly_income, Decimal::new(175_050, 2));
        assert_eq!(signals.energy_demand, Decimal::from(142));
        assert!(signals.single_person());
    }

    #[test]
    fn unknown_keys_fall_back_to_zero() {
        let signals = HouseholdSignals::from_household(&household("rich", "x", "drafty"));
        assert_eq!(signals.monthly_income, Decimal::ZERO);
        assert_eq!(signals.energy_demand, Decimal::ZERO);
        assert_eq!(signals.household_size, 1);
    }

    #[test]
    fn annual_income_scales_by_household() {
        let signals = HouseholdSignals::from_household(&household("3750", "3", "low"));
        assert_eq!(signals.annual_income(), Decimal::from(135_000));
    }
}
