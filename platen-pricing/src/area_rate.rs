use platen_catalog::M2PriceTier;

use crate::{PricingError, PricingResult};

/// Resolves the price-per-m2 for a total printed area from a banded rate
/// table. Tiers are sorted by `from_m2` internally, so callers may pass
/// them in any order.
///
/// Stepped mode picks the band containing the area, falling back to the
/// highest band when nothing matches. Interpolated mode (at least two
/// anchor tiers) clamps below the lowest and above the highest anchor and
/// interpolates the rate linearly in between, producing a price curve
/// without cliffs at band boundaries.
pub fn resolve_rate(
    total_area_m2: f64,
    tiers: &[M2PriceTier],
    interpolate: bool,
) -> PricingResult<f64> {
    if tiers.is_empty() {
        return Err(PricingError::EmptyRateTable);
    }

    let mut sorted: Vec<&M2PriceTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.from_m2.total_cmp(&b.from_m2));

    if interpolate {
        let anchors: Vec<&M2PriceTier> = sorted.iter().copied().filter(|t| t.is_anchor).collect();
        if anchors.len() >= 2 {
            let first = anchors[0];
            let last = anchors[anchors.len() - 1];
            if total_area_m2 <= first.from_m2 {
                return Ok(first.price_per_m2);
            }
            if total_area_m2 >= last.from_m2 {
                return Ok(last.price_per_m2);
            }
            for pair in anchors.windows(2) {
                let (lower, upper) = (pair[0], pair[1]);
                if total_area_m2 >= lower.from_m2 && total_area_m2 < upper.from_m2 {
                    let t = (total_area_m2 - lower.from_m2) / (upper.from_m2 - lower.from_m2);
                    return Ok(lower.price_per_m2 + t * (upper.price_per_m2 - lower.price_per_m2));
                }
            }
        }
        // Fewer than two anchors: fall through to the stepped lookup.
    }

    let tier = sorted
        .iter()
        .find(|t| t.contains(total_area_m2))
        .copied()
        .unwrap_or(sorted[sorted.len() - 1]);
    Ok(tier.price_per_m2)
}

/// Prices an area-rated product: resolves the m2 rate for the job's total
/// area and multiplies it back out.
pub fn price_by_area(
    area_per_unit_m2: f64,
    quantity: u32,
    tiers: &[M2PriceTier],
    interpolate: bool,
) -> PricingResult<f64> {
    let total_area_m2 = area_per_unit_m2 * quantity as f64;
    let rate = resolve_rate(total_area_m2, tiers, interpolate)?;
    Ok(rate * total_area_m2)
}
