use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::ItemDefinition;
use super::decimal::parse_decimal;
use super::domain::{LineEntries, LineEntry};
use super::eligibility::SubsidyTier;

/// Cost and grant breakdown for one priced catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult {
    pub item_id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub quantity: Decimal,
    pub cost_net: Decimal,
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub gross: Decimal,
    pub grant: Decimal,
    pub beneficiary: Decimal,
}

/// Rows of one category plus their sums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub rows: Vec<RowResult>,
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
    pub grant: Decimal,
    pub beneficiary: Decimal,
}

impl CategoryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Prices every item of `items` that has a matching entry with non-zero quantity and price.
///
/// Rows follow catalog order. Entries for ids outside `items` are ignored, and an ineligible
/// tier produces an empty result without looking at the entries.
pub fn compute_category(
    items: &[ItemDefinition],
    entries: &LineEntries,
    tier: SubsidyTier,
) -> CategoryResult {
    if !tier.is_eligible() {
        return CategoryResult::default();
    }

    let factor = tier.factor();
    let mut result = CategoryResult::default();

    for item in items {
        let Some(entry) = entries.get(item.id) else {
            continue;
        };
        let Some(row) = price_row(item, entry, factor) else {
            continue;
        };

        result.net = result.net.saturating_add(row.cost_net);
        result.vat = result.vat.saturating_add(row.vat_amount);
        result.grant = result.grant.saturating_add(row.grant);
        result.rows.push(row);
    }

    result.gross = result.net.saturating_add(result.vat);
    result.beneficiary = result.gross.saturating_sub(result.grant);
    result
}

fn price_row(item: &ItemDefinition, entry: &LineEntry, factor: Decimal) -> Option<RowResult> {
    let quantity = parse_decimal(&entry.quantity);
    let price = parse_decimal(&entry.price);
    if quantity.is_zero() || price.is_zero() {
        return None;
    }

    let vat_rate = resolve_vat_rate(&entry.vat, item.vat);
    let cost_net = quantity.saturating_mul(price);
    let grant_per_unit = item.max100.saturating_mul(factor);
    let max_grant = quantity.saturating_mul(grant_per_unit);
    let grant = cost_net.min(max_grant);
    let vat_amount = cost_net.saturating_mul(vat_rate);
    let gross = cost_net.saturating_add(vat_amount);

    Some(RowResult {
        item_id: item.id,
        name: item.name,
        unit: item.unit,
        quantity,
        cost_net,
        vat_rate,
        vat_amount,
        gross,
        grant,
        beneficiary: gross.saturating_sub(grant),
    })
}

/// Entry VAT wins when it parses to a non-zero value; otherwise the item default applies.
/// Values up to 1 are fractions, anything larger is a percentage.
pub fn resolve_vat_rate(entry_vat: &str, default_percent: Decimal) -> Decimal {
    let entered = parse_decimal(entry_vat);
    if entered.is_zero() {
        as_fraction(default_percent)
    } else {
        as_fraction(entered)
    }
}

fn as_fraction(value: Decimal) -> Decimal {
    if value <= Decimal::ONE {
        value
    } else {
        value / Decimal::ONE_HUNDRED
    }
}
