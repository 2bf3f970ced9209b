use platen_catalog::{InkSet, Machine, MarginProfile, MarginTier, Material};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::costing::{compute_base_costs, CostBreakdown};
use crate::imposition::{compute_imposition, ImpositionResult};
use crate::margin::{apply_margin, MarginOutcome};
use crate::PricingResult;

/// A machine-simulated print job request. Every field is explicit; the
/// engine does not accept untyped bags of product attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub qty: u32,
    /// 1 for single-sided, 2 for duplex work.
    pub sides: u32,
    pub item_width_mm: f64,
    pub item_height_mm: f64,
    pub bleed_mm: f64,
    pub gap_mm: f64,
    /// Overrides the ink set's default coverage when set.
    pub coverage_pct: Option<f64>,
}

/// Full quote for one job on one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub machine_id: Uuid,
    pub imposition: ImpositionResult,
    pub costs: CostBreakdown,
    pub pricing: MarginOutcome,
}

/// Runs the machine-simulated pricing pipeline: imposition, base costs,
/// margin. Holds the margin configuration; machines, materials and ink
/// sets are supplied per call.
pub struct QuoteEngine {
    profile: MarginProfile,
    tiers: Vec<MarginTier>,
}

impl QuoteEngine {
    pub fn new(profile: MarginProfile, tiers: Vec<MarginTier>) -> Self {
        Self { profile, tiers }
    }

    /// Quotes a job, or returns `Ok(None)` when the item cannot be laid
    /// out on the machine at these settings.
    pub fn quote_job(
        &self,
        machine: &Machine,
        material: &Material,
        ink_set: &InkSet,
        job: &JobSpec,
    ) -> PricingResult<Option<Quote>> {
        let imposition = compute_imposition(
            machine,
            job.item_width_mm,
            job.item_height_mm,
            job.bleed_mm,
            job.gap_mm,
        );

        let costs = match compute_base_costs(
            job.qty,
            job.sides,
            &imposition,
            machine,
            material,
            ink_set,
            job.coverage_pct,
        )? {
            Some(costs) => costs,
            None => {
                tracing::debug!(
                    machine = %machine.id,
                    item_width_mm = job.item_width_mm,
                    item_height_mm = job.item_height_mm,
                    "job does not fit on machine surface"
                );
                return Ok(None);
            }
        };

        let pricing = apply_margin(costs.total_base_cost, job.qty, &self.profile, &self.tiers)?;

        tracing::debug!(
            machine = %machine.id,
            ups = imposition.ups,
            total_sheets = costs.total_sheets,
            base_cost = costs.total_base_cost,
            sell_price = pricing.sell_price,
            "quoted machine job"
        );

        Ok(Some(Quote {
            machine_id: machine.id,
            imposition,
            costs,
            pricing,
        }))
    }
}
