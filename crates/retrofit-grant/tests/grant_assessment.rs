//! End-to-end scenarios through the public calculator facade: bill import, tier resolution,
//! category pricing, and the programme ceiling.

use std::str::FromStr;

use rust_decimal::Decimal;
use retrofit_grant::grants::{
    assess, compute_category, resolve_tier, BillImporter, GrantApplication, GrantAssessment,
    Household, SubsidyTier, WorkCategory,
};

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("valid decimal literal")
}

fn household(income: &str, size: &str, replace_heat: &str, comprehensive: &str) -> Household {
    Household {
        energy_category: "very_high".to_string(),
        income: income.to_string(),
        household_size: size.to_string(),
        replace_heat: replace_heat.to_string(),
        comprehensive_retrofit: comprehensive.to_string(),
    }
}

fn fixture_application(household: Household) -> GrantApplication {
    let works = BillImporter::from_reader(&include_bytes!("fixtures/bill_of_works.csv")[..])
        .expect("fixture imports");
    GrantApplication {
        household,
        works,
        ..GrantApplication::default()
    }
}

#[test]
fn fixture_bill_imports_every_row() {
    let application = fixture_application(Household::default());

    assert_eq!(application.works.len(), 8);
    assert_eq!(application.works.thermal_envelope.len(), 3);
    assert_eq!(application.works.ventilation["central_rekuperation"].vat, "0.08");
}

#[test]
fn highest_tier_bill_hits_the_programme_ceiling() {
    let application = fixture_application(household("1250", "4", "yes", "yes"));

    let assessment = assess(&application);

    let GrantAssessment::Eligible { tier, result, .. } = &assessment else {
        panic!("expected eligible assessment, got {assessment:?}");
    };
    assert_eq!(*tier, SubsidyTier::Highest);

    // audit 1100 + certificate capped at 400
    assert_eq!(result.docs.grant, dec("1500"));
    // heat pump capped at 37500, central heating 18500 below its cap
    assert_eq!(result.heat.grant, dec("56000"));
    // walls and windows capped per m², doors dropped for zero price
    assert_eq!(result.thermo.rows.len(), 2);
    assert_eq!(result.thermo.grant, dec("40000") + dec("17040"));
    // recuperation capped at 16700
    assert_eq!(result.vent.grant, dec("16700"));

    assert_eq!(result.totals.uncapped_grant, dec("131240"));
    assert_eq!(result.totals.grant, dec("131240"));
    assert!(!result.totals.ceiling_applied);
    assert_eq!(result.totals.gross, result.totals.net + result.totals.vat);
    assert_eq!(
        result.totals.beneficiary,
        result.totals.gross - result.totals.grant
    );
}

#[test]
fn increased_tier_scales_the_same_bill() {
    let application = fixture_application(household("2100", "2", "yes", "no"));

    let assessment = assess(&application);

    assert_eq!(assessment.tier(), SubsidyTier::Increased);
    let result = assessment.result().expect("eligible result");
    assert!(result.thermo.is_empty());
    assert!(result.vent.is_empty());
    // heat pump 37500 × 0.7 = 26250, central heating 20500 × 0.7 = 14350
    assert_eq!(result.heat.grant, dec("40600"));
    // audit 840, certificate 280
    assert_eq!(result.docs.grant, dec("1120"));
    assert_eq!(result.totals.grant, dec("41720"));
}

#[test]
fn vat_overrides_from_the_bill_apply_per_row() {
    let application = fixture_application(household("1250", "4", "no", "no"));

    let result = assess(&application).result().cloned().expect("eligible");

    let certificate = result
        .docs
        .rows
        .iter()
        .find(|row| row.item_id == "certificate")
        .expect("certificate row");
    assert_eq!(certificate.vat_rate, dec("0.23"));
    assert_eq!(certificate.vat_amount, dec("103.5"));

    let audit = &result.docs.rows[0];
    assert_eq!(audit.vat_rate, dec("0.08"));
}

#[test]
fn category_calculation_is_usable_on_its_own() {
    let application = fixture_application(Household::default());
    let tier = resolve_tier(&household("1700", "1", "no", "yes"));

    let ventilation = compute_category(
        WorkCategory::Ventilation.items(),
        &application.works.ventilation,
        tier,
    );

    assert_eq!(tier, SubsidyTier::Highest);
    assert_eq!(ventilation.net, dec("19900"));
    assert_eq!(ventilation.vat, dec("1592"));
    assert_eq!(ventilation.grant, dec("16700"));
    assert_eq!(ventilation.beneficiary, dec("4792"));
}
