use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, CatalogResult};

/// How a substrate is priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialPricing {
    /// Fixed price per press sheet of the given size.
    PerSheet {
        price_per_sheet: f64,
        sheet_width_mm: f64,
        sheet_height_mm: f64,
    },
    /// Price per m2 of consumed surface.
    PerArea { price_per_m2: f64 },
}

/// Substrate record as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub pricing: MaterialPricing,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl Material {
    pub fn validate(&self) -> CatalogResult<()> {
        match self.pricing {
            MaterialPricing::PerSheet {
                price_per_sheet,
                sheet_width_mm,
                sheet_height_mm,
            } => {
                if price_per_sheet < 0.0 {
                    return Err(CatalogError::NegativeValue {
                        field: "price_per_sheet",
                        value: price_per_sheet,
                    });
                }
                if sheet_width_mm <= 0.0 {
                    return Err(CatalogError::NonPositiveDimension(sheet_width_mm));
                }
                if sheet_height_mm <= 0.0 {
                    return Err(CatalogError::NonPositiveDimension(sheet_height_mm));
                }
            }
            MaterialPricing::PerArea { price_per_m2 } => {
                if price_per_m2 < 0.0 {
                    return Err(CatalogError::NegativeValue {
                        field: "price_per_m2",
                        value: price_per_m2,
                    });
                }
            }
        }
        Ok(())
    }
}
