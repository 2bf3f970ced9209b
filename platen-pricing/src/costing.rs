use platen_catalog::{InkSet, Machine, Material, MaterialPricing, Throughput};
use serde::{Deserialize, Serialize};

use crate::imposition::ImpositionResult;
use crate::{PricingError, PricingResult};

const MM2_PER_M2: f64 = 1_000_000.0;

/// Base production cost of a run, before margin. All money values are raw
/// f64 in the caller's currency unit; rounding happens once, at the
/// sell-price boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub ink_cost: f64,
    pub machine_cost: f64,
    pub total_base_cost: f64,
    /// Net sheets plus setup and run waste.
    pub total_sheets: u64,
    pub total_time_min: f64,
}

/// Computes material, ink and machine cost for producing `qty` items with
/// the given layout. Returns `Ok(None)` when the layout is infeasible
/// (`ups == 0`) - the job cannot run on this machine, which is distinct
/// from costing zero.
pub fn compute_base_costs(
    qty: u32,
    sides: u32,
    imposition: &ImpositionResult,
    machine: &Machine,
    material: &Material,
    ink_set: &InkSet,
    coverage_pct: Option<f64>,
) -> PricingResult<Option<CostBreakdown>> {
    if qty == 0 {
        return Err(PricingError::ZeroQuantity);
    }
    if sides == 0 || sides > 2 {
        return Err(PricingError::InvalidSides(sides));
    }
    if sides == 2 && !machine.duplex {
        return Err(PricingError::DuplexUnsupported);
    }
    if imposition.ups == 0 {
        return Ok(None);
    }

    let net_sheets = (qty as u64).div_ceil(imposition.ups);
    let run_waste_sheets = (net_sheets as f64 * machine.run_waste_pct / 100.0).ceil() as u64;
    let total_sheets = net_sheets + machine.setup_waste_sheets as u64 + run_waste_sheets;

    let printable_area_m2 =
        imposition.printable_width_mm * imposition.printable_height_mm / MM2_PER_M2;

    let material_cost = match material.pricing {
        MaterialPricing::PerSheet {
            price_per_sheet, ..
        } => total_sheets as f64 * price_per_sheet,
        MaterialPricing::PerArea { price_per_m2 } => {
            total_sheets as f64 * printable_area_m2 * price_per_m2
        }
    };

    // Per-item printed area is the bleed-inclusive footprint: the chosen
    // tile minus the gap share on each axis. This approximation is a fixed
    // contract, pinned by tests.
    let item_area_m2 = (imposition.tile_width_mm - imposition.gap_mm)
        * (imposition.tile_height_mm - imposition.gap_mm)
        / MM2_PER_M2;
    let coverage_pct = coverage_pct.unwrap_or(ink_set.default_coverage_pct);
    let ink_cost = item_area_m2
        * qty as f64
        * sides as f64
        * ink_set.ml_per_m2_at_100pct
        * (coverage_pct / 100.0)
        * ink_set.price_per_ml;

    let run_time_min = match machine.throughput {
        Throughput::SheetsPerHour(rate) => {
            if rate <= 0.0 {
                return Err(PricingError::InvalidThroughput(rate));
            }
            total_sheets as f64 / rate * 60.0
        }
        Throughput::AreaPerHour(rate) => {
            if rate <= 0.0 {
                return Err(PricingError::InvalidThroughput(rate));
            }
            total_sheets as f64 * printable_area_m2 / rate * 60.0
        }
    };
    let total_time_min = run_time_min + machine.setup_time_min;
    let machine_cost = total_time_min / 60.0 * machine.rate_per_hour;

    Ok(Some(CostBreakdown {
        material_cost,
        ink_cost,
        machine_cost,
        total_base_cost: material_cost + ink_cost + machine_cost,
        total_sheets,
        total_time_min,
    }))
}
