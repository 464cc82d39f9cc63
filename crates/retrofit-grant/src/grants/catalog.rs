use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fundable item with its full-rate grant ceiling per unit and default VAT percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    /// Maximum grant per unit at the 100 % funding tier.
    pub max100: Decimal,
    /// Default VAT expressed as a percentage (8 means 8 %).
    pub vat: Decimal,
}

const fn zloty(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

const fn item(
    id: &'static str,
    name: &'static str,
    unit: &'static str,
    max100: u32,
) -> ItemDefinition {
    ItemDefinition {
        id,
        name,
        unit,
        max100: zloty(max100),
        vat: zloty(8),
    }
}

pub static DOCUMENTATION_ITEMS: [ItemDefinition; 2] = [
    item("audit", "Audyt energetyczny", "szt", 1_200),
    item(
        "certificate",
        "Świadectwo charakterystyki energetycznej",
        "szt",
        400,
    ),
];

pub static HEAT_SOURCE_ITEMS: [ItemDefinition; 10] = [
    item(
        "district",
        "Podłączenie do sieci ciepłowniczej (z węzłem cieplnym)",
        "szt",
        22_250,
    ),
    item("air_water_pump", "Pompa ciepła powietrze/woda", "szt", 31_500),
    item(
        "air_water_pump_high",
        "Pompa ciepła powietrze/woda (wyższa klasa efektywności)",
        "szt",
        37_500,
    ),
    item(
        "air_air_pump",
        "Pompa ciepła powietrze/powietrze",
        "szt",
        11_200,
    ),
    item(
        "ground_pump_high",
        "Gruntowa pompa ciepła (wysoka klasa efektywności)",
        "szt",
        45_000,
    ),
    item(
        "ground_source",
        "Dolne źródło gruntowej pompy ciepła",
        "szt",
        21_500,
    ),
    item(
        "wood_gas_boiler",
        "Kocioł zgazowujący drewno (podwyższony standard)",
        "szt",
        20_500,
    ),
    item(
        "pellet_boiler",
        "Kocioł na pellet drzewny (podwyższony standard)",
        "szt",
        20_500,
    ),
    item("electric_heating", "Ogrzewanie elektryczne", "szt", 11_200),
    item(
        "central_heating",
        "Instalacja centralnego ogrzewania + ciepła woda użytkowa",
        "szt",
        20_500,
    ),
];

// Windows and doors carry tiered per-m² rates (480/840/1200 and 1000/1750/2500); the
// highest rate is stored and scaled by the tier factor like every other item.
pub static THERMAL_ENVELOPE_ITEMS: [ItemDefinition; 6] = [
    item("roof_ceiling", "Ocieplenie stropu/dachu", "m²", 200),
    item("floors", "Ocieplenie podłóg", "m²", 150),
    item("walls", "Ocieplenie ścian", "m²", 250),
    item("windows", "Stolarka okienna", "m²", 1_200),
    item("doors", "Stolarka drzwiowa", "m²", 2_500),
    item("garage_doors", "Bramy garażowe", "szt", 2_500),
];

pub static VENTILATION_ITEMS: [ItemDefinition; 2] = [
    item(
        "central_rekuperation",
        "Rekuperacja centralna",
        "kpl",
        16_700,
    ),
    item("wall_rekuperator", "Rekuperator ścienny", "szt", 2_000),
];

/// The four groups of works a bill can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    Documentation,
    HeatSource,
    ThermalEnvelope,
    Ventilation,
}

impl WorkCategory {
    pub const ALL: [WorkCategory; 4] = [
        WorkCategory::Documentation,
        WorkCategory::HeatSource,
        WorkCategory::ThermalEnvelope,
        WorkCategory::Ventilation,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            WorkCategory::Documentation => "documentation",
            WorkCategory::HeatSource => "heat_source",
            WorkCategory::ThermalEnvelope => "thermal_envelope",
            WorkCategory::Ventilation => "ventilation",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            WorkCategory::Documentation => "Dokumentacja",
            WorkCategory::HeatSource => "Wymiana źródła ciepła",
            WorkCategory::ThermalEnvelope => "Prace termomodernizacyjne",
            WorkCategory::Ventilation => "Modernizacja systemu wentylacji",
        }
    }

    pub fn items(self) -> &'static [ItemDefinition] {
        match self {
            WorkCategory::Documentation => &DOCUMENTATION_ITEMS,
            WorkCategory::HeatSource => &HEAT_SOURCE_ITEMS,
            WorkCategory::ThermalEnvelope => &THERMAL_ENVELOPE_ITEMS,
            WorkCategory::Ventilation => &VENTILATION_ITEMS,
        }
    }

    /// Resolves a category from its key or the short form used in form payloads.
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "documentation" | "docs" => Some(WorkCategory::Documentation),
            "heat_source" | "heat" => Some(WorkCategory::HeatSource),
            "thermal_envelope" | "thermo" => Some(WorkCategory::ThermalEnvelope),
            "ventilation" | "vent" => Some(WorkCategory::Ventilation),
            _ => None,
        }
    }

    pub fn find_item(self, id: &str) -> Option<&'static ItemDefinition> {
        self.items().iter().find(|item| item.id == id)
    }
}

impl fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
