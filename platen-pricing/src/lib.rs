pub mod area_rate;
pub mod costing;
pub mod imposition;
pub mod margin;
pub mod quote;

/// Configuration-level failures surfaced by the engine. An infeasible
/// layout is not an error; it is reported as `ups = 0` / a `None` result.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    #[error("machine throughput must be positive, got {0}")]
    InvalidThroughput(f64),
    #[error("sides must be 1 or 2, got {0}")]
    InvalidSides(u32),
    #[error("machine does not support two-sided printing")]
    DuplexUnsupported,
    #[error("target margin above 100% is not supported, got {0}")]
    MarginRateAboveLimit(f64),
    #[error("area rate table has no tiers")]
    EmptyRateTable,
}

pub type PricingResult<T> = Result<T, PricingError>;

pub use area_rate::{price_by_area, resolve_rate};
pub use costing::{compute_base_costs, CostBreakdown};
pub use imposition::{compute_imposition, ImpositionResult, Rotation, ROLL_SEGMENT_MM};
pub use margin::{apply_margin, MarginOutcome};
pub use quote::{JobSpec, Quote, QuoteEngine};
