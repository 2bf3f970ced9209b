use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, CatalogResult};

/// How a margin rate converts base cost into sell price.
/// Target margin is profit as a share of sell price; markup is profit as a
/// share of cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginMode {
    TargetMargin,
    Markup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginProfile {
    pub id: Uuid,
    pub name: String,
    pub mode: MarginMode,
    /// When set, sell prices are rounded up to the nearest multiple.
    pub rounding_step: Option<f64>,
}

/// One quantity band of a margin profile. Bounds are inclusive; a missing
/// `qty_to` leaves the band open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginTier {
    pub qty_from: u32,
    pub qty_to: Option<u32>,
    /// Rate in percent, interpreted per the profile's mode.
    pub value: f64,
}

impl MarginTier {
    pub fn contains(&self, qty: u32) -> bool {
        qty >= self.qty_from && self.qty_to.is_none_or(|to| qty <= to)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(to) = self.qty_to {
            if to < self.qty_from {
                return Err(CatalogError::EmptyBand {
                    from: self.qty_from as f64,
                    to: to as f64,
                });
            }
        }
        Ok(())
    }
}

/// One area band of a direct m2 rate table. Bands are half-open
/// `[from_m2, to_m2)` so adjacent entries can share a boundary; a missing
/// `to_m2` extends to infinity. Anchor entries are eligible as
/// interpolation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct M2PriceTier {
    pub from_m2: f64,
    pub to_m2: Option<f64>,
    pub price_per_m2: f64,
    pub is_anchor: bool,
}

impl M2PriceTier {
    pub fn contains(&self, area_m2: f64) -> bool {
        area_m2 >= self.from_m2 && self.to_m2.is_none_or(|to| area_m2 < to)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(to) = self.to_m2 {
            if to <= self.from_m2 {
                return Err(CatalogError::EmptyBand {
                    from: self.from_m2,
                    to,
                });
            }
        }
        if self.price_per_m2 < 0.0 {
            return Err(CatalogError::NegativeValue {
                field: "price_per_m2",
                value: self.price_per_m2,
            });
        }
        Ok(())
    }
}
