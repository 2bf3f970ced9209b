use platen_catalog::{Machine, SurfaceFormat};
use serde::{Deserialize, Serialize};

/// Reference segment length for roll media, in mm. Roll length is
/// unbounded, so yield is computed per linear metre and each consumed
/// segment is costed like a sheet downstream.
pub const ROLL_SEGMENT_MM: f64 = 1000.0;

/// Orientation of the item on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rotation {
    Zero,
    Ninety,
}

/// Outcome of the grid layout search. `ups == cols * rows` always holds;
/// an item that fits in neither orientation yields all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpositionResult {
    /// Item copies produced per sheet or roll segment. Wide enough that
    /// the cols x rows product cannot overflow for any grid.
    pub ups: u64,
    pub rotation: Rotation,
    pub printable_width_mm: f64,
    pub printable_height_mm: f64,
    /// Footprint of one item in the chosen orientation, bleed and gap
    /// included.
    pub tile_width_mm: f64,
    pub tile_height_mm: f64,
    /// Inter-item gap, echoed so costing can recover the bleed-inclusive
    /// item footprint from the tile.
    pub gap_mm: f64,
    pub cols: u32,
    pub rows: u32,
}

/// Lays out identical rectangular items on the machine's printable area,
/// trying the item unrotated and rotated 90 degrees and keeping whichever
/// grid yields more copies. Ties prefer the unrotated layout.
///
/// This is a grid-packing approximation, not a nesting solver: each item
/// consumes `item + 2*bleed + gap` per axis.
pub fn compute_imposition(
    machine: &Machine,
    item_width_mm: f64,
    item_height_mm: f64,
    bleed_mm: f64,
    gap_mm: f64,
) -> ImpositionResult {
    let printable_width_mm = machine.surface.width_mm() - machine.margins.horizontal_mm();
    let printable_height_mm = match machine.surface {
        SurfaceFormat::Sheet { height_mm, .. } => height_mm - machine.margins.vertical_mm(),
        SurfaceFormat::Roll { .. } => ROLL_SEGMENT_MM,
    };

    let tile_w = item_width_mm + 2.0 * bleed_mm + gap_mm;
    let tile_h = item_height_mm + 2.0 * bleed_mm + gap_mm;

    let infeasible = ImpositionResult {
        ups: 0,
        rotation: Rotation::Zero,
        printable_width_mm,
        printable_height_mm,
        tile_width_mm: tile_w,
        tile_height_mm: tile_h,
        gap_mm,
        cols: 0,
        rows: 0,
    };

    // Zero-size items are a caller error; report no fit rather than divide
    // by zero.
    if item_width_mm <= 0.0 || item_height_mm <= 0.0 {
        return infeasible;
    }

    let (upright_cols, upright_rows) = grid_fit(printable_width_mm, printable_height_mm, tile_w, tile_h);
    let (rotated_cols, rotated_rows) = grid_fit(printable_width_mm, printable_height_mm, tile_h, tile_w);

    let upright_ups = upright_cols as u64 * upright_rows as u64;
    let rotated_ups = rotated_cols as u64 * rotated_rows as u64;

    if rotated_ups > upright_ups {
        ImpositionResult {
            ups: rotated_ups,
            rotation: Rotation::Ninety,
            tile_width_mm: tile_h,
            tile_height_mm: tile_w,
            cols: rotated_cols,
            rows: rotated_rows,
            ..infeasible
        }
    } else if upright_ups > 0 {
        ImpositionResult {
            ups: upright_ups,
            rotation: Rotation::Zero,
            cols: upright_cols,
            rows: upright_rows,
            ..infeasible
        }
    } else {
        infeasible
    }
}

fn grid_fit(printable_w: f64, printable_h: f64, tile_w: f64, tile_h: f64) -> (u32, u32) {
    if tile_w <= 0.0 || tile_h <= 0.0 || printable_w <= 0.0 || printable_h <= 0.0 {
        return (0, 0);
    }
    let cols = (printable_w / tile_w).floor() as u32;
    let rows = (printable_h / tile_h).floor() as u32;
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platen_catalog::{Margins, Throughput};
    use uuid::Uuid;

    fn sheet_machine(width_mm: f64, height_mm: f64, margin_mm: f64) -> Machine {
        Machine {
            id: Uuid::new_v4(),
            name: "test press".to_string(),
            surface: SurfaceFormat::Sheet {
                width_mm,
                height_mm,
            },
            margins: Margins::uniform(margin_mm),
            duplex: true,
            setup_waste_sheets: 5,
            run_waste_pct: 2.0,
            setup_time_min: 12.0,
            throughput: Throughput::SheetsPerHour(620.0),
            rate_per_hour: 80.0,
            is_active: true,
            metadata: serde_json::json!({}),
        }
    }

    fn roll_machine(width_mm: f64, margin_mm: f64) -> Machine {
        let mut machine = sheet_machine(0.0, 0.0, margin_mm);
        machine.surface = SurfaceFormat::Roll { width_mm };
        machine.throughput = Throughput::AreaPerHour(25.0);
        machine
    }

    #[test]
    fn test_business_card_on_b1_sheet() {
        // 700x1000 with 10mm margins leaves 680x980. Tiles are 96x56:
        // unrotated 7x17 = 119, rotated 12x10 = 120.
        let machine = sheet_machine(700.0, 1000.0, 10.0);
        let result = compute_imposition(&machine, 90.0, 50.0, 2.0, 2.0);

        assert_eq!(result.ups, 120);
        assert_eq!(result.rotation, Rotation::Ninety);
        assert_eq!((result.cols, result.rows), (12, 10));
        assert_eq!(result.ups, result.cols as u64 * result.rows as u64);
        assert_eq!(result.printable_width_mm, 680.0);
        assert_eq!(result.printable_height_mm, 980.0);
        // Tile dimensions are reported for the chosen orientation.
        assert_eq!(result.tile_width_mm, 56.0);
        assert_eq!(result.tile_height_mm, 96.0);
    }

    #[test]
    fn test_tie_prefers_unrotated() {
        let machine = sheet_machine(500.0, 500.0, 0.0);
        let result = compute_imposition(&machine, 100.0, 100.0, 0.0, 0.0);

        assert_eq!(result.ups, 25);
        assert_eq!(result.rotation, Rotation::Zero);
    }

    #[test]
    fn test_non_square_tie_prefers_unrotated() {
        // 200x100 item on a 400x400 surface: both orientations yield 2x4=8.
        let machine = sheet_machine(400.0, 400.0, 0.0);
        let result = compute_imposition(&machine, 200.0, 100.0, 0.0, 0.0);

        assert_eq!(result.ups, 8);
        assert_eq!(result.rotation, Rotation::Zero);
        assert_eq!((result.cols, result.rows), (2, 4));
    }

    #[test]
    fn test_oversized_item_yields_zero_ups() {
        let machine = sheet_machine(700.0, 1000.0, 10.0);
        let result = compute_imposition(&machine, 800.0, 1100.0, 0.0, 0.0);

        assert_eq!(result.ups, 0);
        assert_eq!((result.cols, result.rows), (0, 0));
    }

    #[test]
    fn test_sub_millimeter_item_does_not_overflow() {
        // A degenerate but strictly positive item produces a grid whose
        // cols x rows product exceeds u32; the count must stay exact
        // rather than wrap or panic.
        let machine = sheet_machine(700.0, 1000.0, 10.0);
        let result = compute_imposition(&machine, 0.001, 0.001, 0.0, 0.0);

        assert!(result.ups > u32::MAX as u64);
        assert_eq!(result.ups, result.cols as u64 * result.rows as u64);
    }

    #[test]
    fn test_zero_size_item_yields_zero_ups() {
        let machine = sheet_machine(700.0, 1000.0, 10.0);
        let result = compute_imposition(&machine, 0.0, 50.0, 2.0, 2.0);
        assert_eq!(result.ups, 0);
    }

    #[test]
    fn test_roll_uses_reference_segment() {
        // 600mm roll with 10mm side margins: 580 wide, 1000 long segment.
        let machine = roll_machine(600.0, 10.0);
        let result = compute_imposition(&machine, 100.0, 100.0, 0.0, 0.0);

        assert_eq!(result.printable_width_mm, 580.0);
        assert_eq!(result.printable_height_mm, ROLL_SEGMENT_MM);
        assert_eq!((result.cols, result.rows), (5, 10));
        assert_eq!(result.ups, 50);
    }

    #[test]
    fn test_ups_monotonic_in_bleed_and_gap() {
        let machine = sheet_machine(700.0, 1000.0, 10.0);

        let mut prev = u64::MAX;
        for step in 0..=20 {
            let bleed = step as f64 * 0.5;
            let result = compute_imposition(&machine, 90.0, 50.0, bleed, 2.0);
            assert!(result.ups <= prev, "ups increased when bleed grew");
            prev = result.ups;
        }

        let mut prev = u64::MAX;
        for step in 0..=20 {
            let gap = step as f64 * 0.5;
            let result = compute_imposition(&machine, 90.0, 50.0, 2.0, gap);
            assert!(result.ups <= prev, "ups increased when gap grew");
            prev = result.ups;
        }
    }

    #[test]
    fn test_deterministic() {
        let machine = sheet_machine(700.0, 1000.0, 10.0);
        let a = compute_imposition(&machine, 90.0, 50.0, 2.0, 2.0);
        let b = compute_imposition(&machine, 90.0, 50.0, 2.0, 2.0);
        assert_eq!(a, b);
    }
}
