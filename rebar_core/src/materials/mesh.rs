//! Welded Wire Mesh Sheets
//!
//! Dimensional data for standard welded wire mesh sheets. The estimator
//! stocks one sheet size, 5 ft x 10 ft, and assumes a 6 in overlap
//! allowance on all sides when counting sheets, so each sheet effectively
//! covers 4.5 ft x 9.5 ft = 42.75 sq ft.

/// Sheet width in feet
pub const SHEET_WIDTH_FT: f64 = 5.0;

/// Sheet length in feet
pub const SHEET_LENGTH_FT: f64 = 10.0;

/// Overlap allowance on each side, in inches
pub const OVERLAP_IN: f64 = 6.0;

/// Effective coverage of one sheet after the overlap allowance, in sq ft
pub fn effective_coverage_sq_ft() -> f64 {
    let overlap_ft = OVERLAP_IN / 12.0;
    (SHEET_WIDTH_FT - overlap_ft) * (SHEET_LENGTH_FT - overlap_ft)
}

/// Display label for the stocked sheet size
pub fn sheet_label() -> String {
    format!("{}' x {}'", SHEET_WIDTH_FT as u32, SHEET_LENGTH_FT as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_coverage() {
        assert!((effective_coverage_sq_ft() - 42.75).abs() < 1e-12);
    }

    #[test]
    fn test_sheet_label() {
        assert_eq!(sheet_label(), "5' x 10'");
    }
}
