use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, CatalogResult};

/// Ink pricing and consumption profile for a press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkSet {
    pub id: Uuid,
    pub name: String,
    pub price_per_ml: f64,
    /// Consumption at full coverage, in ml per m2.
    pub ml_per_m2_at_100pct: f64,
    /// Coverage assumed when a job does not declare its own.
    pub default_coverage_pct: f64,
    /// Informational consumption tolerance; not used in costing.
    pub tolerance_pct: f64,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl InkSet {
    pub fn validate(&self) -> CatalogResult<()> {
        for (field, value) in [
            ("price_per_ml", self.price_per_ml),
            ("ml_per_m2_at_100pct", self.ml_per_m2_at_100pct),
            ("default_coverage_pct", self.default_coverage_pct),
            ("tolerance_pct", self.tolerance_pct),
        ] {
            if value < 0.0 {
                return Err(CatalogError::NegativeValue { field, value });
            }
        }
        Ok(())
    }
}
