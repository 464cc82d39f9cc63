use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::WorkCategory;
use super::decimal::raw_text;

/// Raw household answers as the form submits them; every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Energy band key (`low`, `mid`, `high`, `very_high`) or a kWh/(m²·year) figure.
    #[serde(default, deserialize_with = "raw_text")]
    pub energy_category: String,
    /// Income band key (`low`, `mid`, `high`, `above`) or monthly income per person.
    #[serde(default, deserialize_with = "raw_text")]
    pub income: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub household_size: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub replace_heat: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub comprehensive_retrofit: String,
}

/// Name and address printed on the result; not used by the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl Beneficiary {
    pub fn display_line(&self) -> String {
        match (self.name.trim(), self.address.trim()) {
            ("", address) => address.to_string(),
            (name, "") => name.to_string(),
            (name, address) => format!("{name}, {address}"),
        }
    }
}

/// User-entered quantity, unit price, and VAT override for one catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    #[serde(default, deserialize_with = "raw_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub price: String,
    #[serde(default, deserialize_with = "raw_text")]
    pub vat: String,
}

impl LineEntry {
    pub fn new(quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            price: price.into(),
            vat: String::new(),
        }
    }

    pub fn with_vat(mut self, vat: impl Into<String>) -> Self {
        self.vat = vat.into();
        self
    }
}

/// Entries keyed by catalog item id.
pub type LineEntries = BTreeMap<String, LineEntry>;

/// Bill of works split by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksBill {
    #[serde(default, alias = "docs")]
    pub documentation: LineEntries,
    #[serde(default, alias = "heat")]
    pub heat_source: LineEntries,
    #[serde(default, alias = "thermo")]
    pub thermal_envelope: LineEntries,
    #[serde(default, alias = "vent")]
    pub ventilation: LineEntries,
}

impl WorksBill {
    pub fn entries(&self, category: WorkCategory) -> &LineEntries {
        match category {
            WorkCategory::Documentation => &self.documentation,
            WorkCategory::HeatSource => &self.heat_source,
            WorkCategory::ThermalEnvelope => &self.thermal_envelope,
            WorkCategory::Ventilation => &self.ventilation,
        }
    }

    pub fn entries_mut(&mut self, category: WorkCategory) -> &mut LineEntries {
        match category {
            WorkCategory::Documentation => &mut self.documentation,
            WorkCategory::HeatSource => &mut self.heat_source,
            WorkCategory::ThermalEnvelope => &mut self.thermal_envelope,
            WorkCategory::Ventilation => &mut self.ventilation,
        }
    }

    /// Stores `entry` for `item_id`, replacing any earlier entry for the same item.
    pub fn insert(&mut self, category: WorkCategory, item_id: impl Into<String>, entry: LineEntry) {
        self.entries_mut(category).insert(item_id.into(), entry);
    }

    pub fn len(&self) -> usize {
        WorkCategory::ALL
            .iter()
            .map(|category| self.entries(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the presentation layer submits for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantApplication {
    #[serde(default)]
    pub beneficiary: Beneficiary,
    pub household: Household,
    #[serde(default)]
    pub works: WorksBill,
}
