use std::str::FromStr;

use axum::response::Response;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::grants::domain::{GrantApplication, Household, LineEntries, LineEntry};

pub(super) fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("valid decimal literal")
}

pub(super) fn household(income: &str, size: &str, energy: &str, comprehensive: bool) -> Household {
    Household {
        energy_category: energy.to_string(),
        income: income.to_string(),
        household_size: size.to_string(),
        replace_heat: "no".to_string(),
        comprehensive_retrofit: if comprehensive { "yes" } else { "no" }.to_string(),
    }
}

/// Single-person household comfortably inside the highest tier, with every scope enabled.
pub(super) fn highest_tier_household() -> Household {
    Household {
        replace_heat: "yes".to_string(),
        ..household("1500", "1", "very_high", true)
    }
}

pub(super) fn entries(rows: &[(&str, &str, &str)]) -> LineEntries {
    rows.iter()
        .map(|(id, quantity, price)| (id.to_string(), LineEntry::new(*quantity, *price)))
        .collect()
}

pub(super) fn application(household: Household) -> GrantApplication {
    GrantApplication {
        household,
        ..GrantApplication::default()
    }
}

pub(super) fn decimal_field(value: &Value) -> Decimal {
    let text = value.as_str().expect("decimal serialized as string");
    dec(text)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
