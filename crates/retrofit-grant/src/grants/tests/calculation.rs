use rust_decimal::Decimal;

use super::common::*;
use crate::grants::calculator::compute_category;
use crate::grants::catalog::{
    WorkCategory, DOCUMENTATION_ITEMS, HEAT_SOURCE_ITEMS, THERMAL_ENVELOPE_ITEMS,
};
use crate::grants::domain::LineEntry;
use crate::grants::eligibility::SubsidyTier;

#[test]
fn grant_equals_net_cost_when_price_is_below_the_cap() {
    let result = compute_category(
        &DOCUMENTATION_ITEMS,
        &entries(&[("audit", "1", "900")]),
        SubsidyTier::Highest,
    );

    let row = &result.rows[0];
    assert_eq!(row.item_id, "audit");
    assert_eq!(row.cost_net, dec("900"));
    assert_eq!(row.grant, dec("900"));
    assert_eq!(row.vat_amount, dec("72"));
    assert_eq!(row.gross, dec("972"));
    assert_eq!(row.beneficiary, dec("72"));
}

#[test]
fn grant_is_capped_per_unit_when_price_is_above_the_cap() {
    let result = compute_category(
        &DOCUMENTATION_ITEMS,
        &entries(&[("audit", "1", "1500")]),
        SubsidyTier::Highest,
    );

    let row = &result.rows[0];
    assert_eq!(row.grant, dec("1200"));
    assert_eq!(row.vat_amount, dec("120"));
    assert_eq!(row.gross, dec("1620"));
    assert_eq!(row.beneficiary, dec("420"));
}

#[test]
fn lower_tiers_scale_the_per_unit_ceiling() {
    let walls = entries(&[("walls", "100", "200")]);

    let increased = compute_category(&THERMAL_ENVELOPE_ITEMS, &walls, SubsidyTier::Increased);
    assert_eq!(increased.rows[0].cost_net, dec("20000"));
    assert_eq!(increased.rows[0].grant, dec("17500"));
    assert_eq!(increased.beneficiary, dec("4100"));

    let basic = compute_category(
        &THERMAL_ENVELOPE_ITEMS,
        &entries(&[("windows", "10", "400")]),
        SubsidyTier::Basic,
    );
    assert_eq!(basic.rows[0].grant, dec("4000"), "480 per m² cap is not binding");
}

#[test]
fn grant_never_exceeds_net_cost_at_any_tier() {
    let priced = entries(&[("district", "1", "10000"), ("air_water_pump", "2", "40000")]);

    for tier in [
        SubsidyTier::Basic,
        SubsidyTier::Increased,
        SubsidyTier::Highest,
    ] {
        let result = compute_category(&HEAT_SOURCE_ITEMS, &priced, tier);
        assert_eq!(result.rows.len(), 2);
        for row in &result.rows {
            assert!(row.grant <= row.cost_net, "{} at {tier:?}", row.item_id);
        }
    }
}

#[test]
fn gross_is_net_plus_vat_for_rows_and_category() {
    let mut priced = entries(&[("roof_ceiling", "85,75", "123.45"), ("doors", "3.3", "1999,99")]);
    priced.insert(
        "garage_doors".to_string(),
        LineEntry::new("1", "4321.09").with_vat("23"),
    );

    let result = compute_category(&THERMAL_ENVELOPE_ITEMS, &priced, SubsidyTier::Increased);

    assert_eq!(result.rows.len(), 3);
    for row in &result.rows {
        assert_eq!(row.gross, row.cost_net + row.vat_amount);
        assert_eq!(row.beneficiary, row.gross - row.grant);
    }
    assert_eq!(result.gross, result.net + result.vat);
    assert_eq!(result.beneficiary, result.gross - result.grant);
    assert_eq!(
        result.net,
        result.rows.iter().map(|row| row.cost_net).sum::<Decimal>()
    );
}

#[test]
fn items_without_quantity_or_price_are_dropped() {
    let priced = entries(&[
        ("audit", "", "900"),
        ("certificate", "1", "0"),
        ("unknown_item", "1", "500"),
    ]);

    let result = compute_category(&DOCUMENTATION_ITEMS, &priced, SubsidyTier::Highest);

    assert!(result.is_empty());
    assert_eq!(result.net, dec("0"));
    assert_eq!(result.beneficiary, dec("0"));
}

#[test]
fn garbage_numbers_drop_the_row_instead_of_failing() {
    let priced = entries(&[("audit", "abc", "900"), ("certificate", "1", "n/a")]);

    let result = compute_category(&DOCUMENTATION_ITEMS, &priced, SubsidyTier::Highest);

    assert!(result.is_empty());
}

#[test]
fn comma_decimals_are_priced() {
    let result = compute_category(
        &THERMAL_ENVELOPE_ITEMS,
        &entries(&[("floors", "12,5", "100")]),
        SubsidyTier::Highest,
    );

    assert_eq!(result.rows[0].quantity, dec("12.5"));
    assert_eq!(result.rows[0].cost_net, dec("1250"));
    assert_eq!(result.rows[0].grant, dec("1250"));
}

#[test]
fn entry_vat_overrides_the_item_default() {
    let mut priced = entries(&[("audit", "1", "1000")]);
    priced.insert(
        "certificate".to_string(),
        LineEntry::new("1", "1000").with_vat("0.23"),
    );
    priced
        .get_mut("audit")
        .expect("audit entry")
        .vat = "23".to_string();

    let result = compute_category(&DOCUMENTATION_ITEMS, &priced, SubsidyTier::Highest);

    assert!(result.rows.iter().all(|row| row.vat_amount == dec("230")));
}

#[test]
fn rows_follow_catalog_order() {
    let result = compute_category(
        &THERMAL_ENVELOPE_ITEMS,
        &entries(&[("floors", "10", "100"), ("roof_ceiling", "10", "100")]),
        SubsidyTier::Highest,
    );

    let ids: Vec<&str> = result.rows.iter().map(|row| row.item_id).collect();
    assert_eq!(ids, vec!["roof_ceiling", "floors"]);
}

#[test]
fn ineligible_tier_skips_every_entry() {
    let result = compute_category(
        WorkCategory::HeatSource.items(),
        &entries(&[("pellet_boiler", "1", "25000")]),
        SubsidyTier::None,
    );

    assert!(result.is_empty());
    assert_eq!(result.grant, dec("0"));
}
