use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CatalogError, CatalogResult};

/// Printing surface geometry. Sheet presses have a fixed sheet size; roll
/// presses only constrain width, length is consumed per job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurfaceFormat {
    Sheet { width_mm: f64, height_mm: f64 },
    Roll { width_mm: f64 },
}

impl SurfaceFormat {
    pub fn width_mm(&self) -> f64 {
        match self {
            SurfaceFormat::Sheet { width_mm, .. } => *width_mm,
            SurfaceFormat::Roll { width_mm } => *width_mm,
        }
    }
}

/// Non-printable borders, subtracted from the surface on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top_mm: f64,
    pub right_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
}

impl Margins {
    pub fn uniform(mm: f64) -> Self {
        Self {
            top_mm: mm,
            right_mm: mm,
            bottom_mm: mm,
            left_mm: mm,
        }
    }

    pub fn horizontal_mm(&self) -> f64 {
        self.left_mm + self.right_mm
    }

    pub fn vertical_mm(&self) -> f64 {
        self.top_mm + self.bottom_mm
    }
}

/// Machine speed rating. Exactly one basis applies per machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Throughput {
    /// Sheets (or roll segments) per hour.
    SheetsPerHour(f64),
    /// Printed area in m2 per hour.
    AreaPerHour(f64),
}

impl Throughput {
    pub fn rate(&self) -> f64 {
        match self {
            Throughput::SheetsPerHour(r) => *r,
            Throughput::AreaPerHour(r) => *r,
        }
    }
}

/// Press descriptor as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: Uuid,
    pub name: String,
    pub surface: SurfaceFormat,
    pub margins: Margins,
    pub duplex: bool,
    /// Fixed sheet allowance consumed once per job.
    pub setup_waste_sheets: u32,
    /// Proportional waste applied to net sheets, in percent.
    pub run_waste_pct: f64,
    pub setup_time_min: f64,
    pub throughput: Throughput,
    /// Machine rate in currency units per hour.
    pub rate_per_hour: f64,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl Machine {
    /// Checks the record against the invariants the pricing engine relies on.
    pub fn validate(&self) -> CatalogResult<()> {
        match self.surface {
            SurfaceFormat::Sheet {
                width_mm,
                height_mm,
            } => {
                if width_mm <= 0.0 {
                    return Err(CatalogError::NonPositiveDimension(width_mm));
                }
                if height_mm <= 0.0 {
                    return Err(CatalogError::NonPositiveDimension(height_mm));
                }
                if self.margins.horizontal_mm() >= width_mm {
                    return Err(CatalogError::MarginsExceedSurface("width"));
                }
                if self.margins.vertical_mm() >= height_mm {
                    return Err(CatalogError::MarginsExceedSurface("height"));
                }
            }
            SurfaceFormat::Roll { width_mm } => {
                if width_mm <= 0.0 {
                    return Err(CatalogError::NonPositiveDimension(width_mm));
                }
                if self.margins.horizontal_mm() >= width_mm {
                    return Err(CatalogError::MarginsExceedSurface("width"));
                }
            }
        }

        for (field, value) in [
            ("margin top", self.margins.top_mm),
            ("margin right", self.margins.right_mm),
            ("margin bottom", self.margins.bottom_mm),
            ("margin left", self.margins.left_mm),
            ("run_waste_pct", self.run_waste_pct),
            ("setup_time_min", self.setup_time_min),
            ("rate_per_hour", self.rate_per_hour),
        ] {
            if value < 0.0 {
                return Err(CatalogError::NegativeValue { field, value });
            }
        }

        if self.throughput.rate() <= 0.0 {
            return Err(CatalogError::NonPositiveThroughput(self.throughput.rate()));
        }

        Ok(())
    }
}
