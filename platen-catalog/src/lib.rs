pub mod ink;
pub mod machine;
pub mod material;
pub mod rates;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("surface dimension must be positive, got {0}mm")]
    NonPositiveDimension(f64),
    #[error("margins consume the entire printable {0} of the surface")]
    MarginsExceedSurface(&'static str),
    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },
    #[error("throughput must be positive, got {0}")]
    NonPositiveThroughput(f64),
    #[error("tier band is empty: from {from} to {to}")]
    EmptyBand { from: f64, to: f64 },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

pub use ink::InkSet;
pub use machine::{Machine, Margins, SurfaceFormat, Throughput};
pub use material::{Material, MaterialPricing};
pub use rates::{M2PriceTier, MarginMode, MarginProfile, MarginTier};
