use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{ItemDefinition, WorkCategory};
use super::eligibility::{EnergyBand, IncomeBand, SubsidyTier};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCatalogView {
    pub category: WorkCategory,
    pub title: &'static str,
    pub items: &'static [ItemDefinition],
}

#[derive(Debug, Clone, Serialize)]
pub struct BandOptionView {
    pub key: &'static str,
    pub label: &'static str,
    pub representative: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub tier: SubsidyTier,
    pub label: &'static str,
    pub factor: Decimal,
    pub grant_ceiling: Decimal,
}

/// Reference data a form needs to render its inputs.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub categories: Vec<CategoryCatalogView>,
    pub income_bands: Vec<BandOptionView>,
    pub energy_bands: Vec<BandOptionView>,
    pub tiers: Vec<TierView>,
}

impl CatalogView {
    pub fn standard() -> Self {
        let categories = WorkCategory::ALL
            .into_iter()
            .map(|category| CategoryCatalogView {
                category,
                title: category.title(),
                items: category.items(),
            })
            .collect();

        let income_bands = IncomeBand::ALL
            .into_iter()
            .map(|band| BandOptionView {
                key: band.key(),
                label: band.label(),
                representative: band.representative(),
            })
            .collect();

        let energy_bands = EnergyBand::ALL
            .into_iter()
            .map(|band| BandOptionView {
                key: band.key(),
                label: band.label(),
                representative: band.representative(),
            })
            .collect();

        let tiers = [
            SubsidyTier::Basic,
            SubsidyTier::Increased,
            SubsidyTier::Highest,
        ]
        .into_iter()
        .map(|tier| TierView {
            tier,
            label: tier.label(),
            factor: tier.factor(),
            grant_ceiling: tier.grant_ceiling(),
        })
        .collect();

        Self {
            categories,
            income_bands,
            energy_bands,
            tiers,
        }
    }
}
