use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly income per person, grouped into the ranges offered by the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBand {
    Low,
    Mid,
    High,
    Above,
}

impl IncomeBand {
    pub const ALL: [IncomeBand; 4] = [
        IncomeBand::Low,
        IncomeBand::Mid,
        IncomeBand::High,
        IncomeBand::Above,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            IncomeBand::Low => "low",
            IncomeBand::Mid => "mid",
            IncomeBand::High => "high",
            IncomeBand::Above => "above",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IncomeBand::Low => "do 1 300 zł/os.",
            IncomeBand::Mid => "1 301–2 250 zł/os.",
            IncomeBand::High => "2 251–3 150 zł/os.",
            IncomeBand::Above => "powyżej 3 150 zł/os.",
        }
    }

    /// Value inside the range that stands in for the household's income.
    pub fn representative(self) -> Decimal {
        Decimal::from(match self {
            IncomeBand::Low => 1_300,
            IncomeBand::Mid => 2_000,
            IncomeBand::High => 2_700,
            IncomeBand::Above => 4_000,
        })
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.key() == value.trim())
    }
}

/// Building energy demand in kWh/(m²·year), grouped into broad bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    Low,
    Mid,
    High,
    VeryHigh,
}

impl EnergyBand {
    pub const ALL: [EnergyBand; 4] = [
        EnergyBand::Low,
        EnergyBand::Mid,
        EnergyBand::High,
        EnergyBand::VeryHigh,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            EnergyBand::Low => "low",
            EnergyBand::Mid => "mid",
            EnergyBand::High => "high",
            EnergyBand::VeryHigh => "very_high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EnergyBand::Low => "do 70 kWh/(m²·rok)",
            EnergyBand::Mid => "70–120 kWh/(m²·rok)",
            EnergyBand::High => "120–140 kWh/(m²·rok)",
            EnergyBand::VeryHigh => "powyżej 140 kWh/(m²·rok)",
        }
    }

    pub fn representative(self) -> Decimal {
        Decimal::from(match self {
            EnergyBand::Low => 70,
            EnergyBand::Mid => 100,
            EnergyBand::High => 130,
            EnergyBand::VeryHigh => 150,
        })
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.key() == value.trim())
    }
}
