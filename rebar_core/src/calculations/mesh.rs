//! # Mesh Sheet Count
//!
//! Counts welded wire mesh sheets for a rectangular pour from the
//! stocked 5 ft x 10 ft sheet size with its overlap allowance.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::mesh::{calculate, MeshInput};
//!
//! let input = MeshInput {
//!     label: "Patio".to_string(),
//!     length_ft: 20.0,
//!     width_ft: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.sheets, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::mesh;

/// Input parameters for mesh sheet counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshInput {
    /// User label for this pour
    pub label: String,

    /// Plan length in feet
    pub length_ft: f64,

    /// Plan width in feet
    pub width_ft: f64,
}

/// Results of mesh sheet counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshResult {
    /// Whole sheets to order
    pub sheets: u32,

    /// Stocked sheet size label, e.g. "5' x 10'"
    pub sheet_size: String,

    /// Plan area covered, in square feet
    pub total_sq_ft: f64,
}

/// Count mesh sheets for a rectangular pour.
///
/// Each sheet covers its dimensions less the 6 in overlap allowance.
/// Degenerate geometry yields zero sheets rather than an error.
pub fn calculate(input: &MeshInput) -> CalcResult<MeshResult> {
    let total_sq_ft = input.length_ft * input.width_ft;
    let sheets = (total_sq_ft / mesh::effective_coverage_sq_ft())
        .ceil()
        .max(0.0) as u32;

    Ok(MeshResult {
        sheets,
        sheet_size: mesh::sheet_label(),
        total_sq_ft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_count() {
        let input = MeshInput {
            label: "Patio".to_string(),
            length_ft: 20.0,
            width_ft: 10.0,
        };
        // 200 sq ft / 42.75 effective = 4.68 -> 5 sheets
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_sq_ft, 200.0);
        assert_eq!(result.sheets, 5);
        assert_eq!(result.sheet_size, "5' x 10'");
    }

    #[test]
    fn test_exact_coverage() {
        let input = MeshInput {
            label: "Pad".to_string(),
            length_ft: 9.5,
            width_ft: 4.5,
        };
        // Exactly one sheet's effective coverage
        let result = calculate(&input).unwrap();
        assert_eq!(result.sheets, 1);
    }

    #[test]
    fn test_degenerate_geometry() {
        let input = MeshInput {
            label: "Empty".to_string(),
            length_ft: 0.0,
            width_ft: 10.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.sheets, 0);
    }
}
