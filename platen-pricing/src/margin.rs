use platen_catalog::{MarginMode, MarginProfile, MarginTier};
use serde::{Deserialize, Serialize};

use crate::{PricingError, PricingResult};

/// Sell price derived from a base cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginOutcome {
    pub sell_price: f64,
    pub unit_price: f64,
    pub profit: f64,
    /// Profit as a percentage of sell price; zero when the sell price is
    /// zero.
    pub profit_pct: f64,
}

/// Converts a base cost to a sell price using the tier whose quantity band
/// contains `qty`. No matching tier means a 0% rate, not an error.
///
/// A target margin of exactly 100% falls back to `sell = base_cost` to
/// avoid the division singularity; rates above 100% are rejected.
pub fn apply_margin(
    base_cost: f64,
    qty: u32,
    profile: &MarginProfile,
    tiers: &[MarginTier],
) -> PricingResult<MarginOutcome> {
    if qty == 0 {
        return Err(PricingError::ZeroQuantity);
    }

    let rate = tiers
        .iter()
        .find(|tier| tier.contains(qty))
        .map(|tier| tier.value)
        .unwrap_or(0.0);

    let mut sell_price = match profile.mode {
        MarginMode::TargetMargin => {
            if rate > 100.0 {
                return Err(PricingError::MarginRateAboveLimit(rate));
            }
            if rate == 100.0 {
                base_cost
            } else {
                base_cost / (1.0 - rate / 100.0)
            }
        }
        MarginMode::Markup => base_cost * (1.0 + rate / 100.0),
    };

    if let Some(step) = profile.rounding_step {
        // Round up only: the seller never under-prices due to rounding.
        if step > 0.0 {
            sell_price = (sell_price / step).ceil() * step;
        }
    }

    let profit = sell_price - base_cost;
    let profit_pct = if sell_price == 0.0 {
        0.0
    } else {
        profit / sell_price * 100.0
    };

    Ok(MarginOutcome {
        sell_price,
        unit_price: sell_price / qty as f64,
        profit,
        profit_pct,
    })
}
