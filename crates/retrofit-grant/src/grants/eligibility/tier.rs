use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Funding level a household qualifies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsidyTier {
    None,
    Basic,
    Increased,
    Highest,
}

impl SubsidyTier {
    /// Share of each item's full-rate ceiling granted at this tier.
    pub fn factor(self) -> Decimal {
        match self {
            SubsidyTier::None => Decimal::ZERO,
            SubsidyTier::Basic => Decimal::new(4, 1),
            SubsidyTier::Increased => Decimal::new(7, 1),
            SubsidyTier::Highest => Decimal::ONE,
        }
    }

    /// Programme-wide limit on the summed grant.
    pub fn grant_ceiling(self) -> Decimal {
        match self {
            SubsidyTier::None => Decimal::ZERO,
            SubsidyTier::Basic => Decimal::from(66_000),
            SubsidyTier::Increased => Decimal::from(99_000),
            SubsidyTier::Highest => Decimal::from(135_000),
        }
    }

    pub const fn is_eligible(self) -> bool {
        !matches!(self, SubsidyTier::None)
    }

    pub const fn key(self) -> &'static str {
        match self {
            SubsidyTier::None => "none",
            SubsidyTier::Basic => "basic",
            SubsidyTier::Increased => "increased",
            SubsidyTier::Highest => "highest",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SubsidyTier::None => "Brak dofinansowania",
            SubsidyTier::Basic => "Podstawowy – do 40 %",
            SubsidyTier::Increased => "Podwyższony – do 70 %",
            SubsidyTier::Highest => "Najwyższy – do 100 % netto",
        }
    }
}
