//! # Column Reinforcement
//!
//! Derives vertical bars and ties for a rectangular column: vertical
//! bars are cut height-wise with a 40-diameter lap splice, ties wrap the
//! cover-reduced perimeter at a size-dependent spacing.
//!
//! ## Assumptions
//!
//! - Rectangular cross-section
//! - At least 4 vertical bars when the count is derived
//! - Ties always fit within one stock bar (never spliced)
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::column::{calculate, ColumnInput};
//! use rebar_core::cutlist::DEFAULT_STOCK_FT;
//!
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     width_ft: 1.0,
//!     length_ft: 1.0,
//!     height_ft: 10.0,
//!     cover_in: 1.5,
//!     pick: None,
//!     stock_ft: DEFAULT_STOCK_FT,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.pick.vertical_bars, 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::cutlist::{
    build_bar_list, total_bars, total_linear_ft, CutList, CutListItem,
    COLUMN_SPLICE_MULTIPLIER, DEFAULT_STOCK_FT, EPS,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::RebarSize;

/// Minimum vertical bars a derived column pick will carry
pub const MIN_VERTICAL_BARS: u32 = 4;

/// A column bar selection: vertical-bar size and count.
///
/// Derived from the cross-section, or supplied manually and accepted
/// without re-deriving. Manual picks are trusted as-is: the
/// [`MIN_VERTICAL_BARS`] floor applies only to derived picks, so a
/// caller that supplies fewer than 4 vertical bars gets exactly that
/// count back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBarPick {
    pub size: RebarSize,
    pub vertical_bars: u32,
}

impl ColumnBarPick {
    /// Derive a pick from the cross-section: size from the larger plan
    /// dimension, one vertical bar per 8 in of perimeter, never fewer
    /// than [`MIN_VERTICAL_BARS`].
    pub fn for_section(width_ft: f64, length_ft: f64) -> ColumnBarPick {
        let perimeter_in = 2.0 * (width_ft + length_ft) * 12.0;
        let from_perimeter = (perimeter_in / 8.0 - EPS).ceil().max(0.0) as u32;
        ColumnBarPick {
            size: RebarSize::for_column_section(width_ft, length_ft),
            vertical_bars: from_perimeter.max(MIN_VERTICAL_BARS),
        }
    }
}

/// Input parameters for column reinforcement.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "width_ft": 1.0,
///   "length_ft": 1.0,
///   "height_ft": 10.0,
///   "cover_in": 1.5,
///   "pick": { "size": "No5", "vertical_bars": 6 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label for this column (e.g., "C-1", "Porch Column")
    pub label: String,

    /// Cross-section width in feet
    pub width_ft: f64,

    /// Cross-section length in feet
    pub length_ft: f64,

    /// Column height in feet
    pub height_ft: f64,

    /// Concrete cover in inches (each face)
    pub cover_in: f64,

    /// Manual pick; `None` derives size and bar count from the section
    #[serde(default)]
    pub pick: Option<ColumnBarPick>,

    /// Stock bar length in feet
    #[serde(default = "default_stock_ft")]
    pub stock_ft: f64,
}

fn default_stock_ft() -> f64 {
    DEFAULT_STOCK_FT
}

impl ColumnInput {
    /// Validate the caller contract: positive stock length.
    pub fn validate(&self) -> CalcResult<()> {
        if self.stock_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "stock_ft",
                self.stock_ft.to_string(),
                "Stock bar length must be positive",
            ));
        }
        Ok(())
    }

    /// Clear vertical-bar height: column height less cover top and bottom
    pub fn clear_height_ft(&self) -> f64 {
        self.height_ft - 2.0 * self.cover_in / 12.0
    }

    /// Tie perimeter around the cover-reduced cross-section
    pub fn tie_perimeter_ft(&self) -> f64 {
        let cover_ft = 2.0 * self.cover_in / 12.0;
        2.0 * ((self.width_ft - cover_ft) + (self.length_ft - cover_ft))
    }
}

/// Results of column reinforcement design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnResult {
    /// The pick used, derived or passed through from the input
    pub pick: ColumnBarPick,

    /// Vertical bar pieces, cut height-wise
    pub vertical_list: Vec<CutListItem>,

    /// Tie pieces, each one cover-reduced perimeter long
    pub tie_list: Vec<CutListItem>,

    /// Total piece count, verticals plus ties
    pub total_bars: u32,

    /// Total linear feet of bar, verticals plus ties
    pub total_linear_ft: f64,
}

/// Design the reinforcement cage for a rectangular column.
///
/// Vertical bars use the 40-diameter lap splice when the clear height
/// exceeds stock. Tie count is `ceil(height / tie spacing)`; ties are
/// never spliced. Degenerate geometry (cover at or beyond half a
/// dimension, non-positive height) produces empty lists, not errors.
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    input.validate()?;

    let pick = input
        .pick
        .unwrap_or_else(|| ColumnBarPick::for_section(input.width_ft, input.length_ft));

    let clear_height_ft = input.clear_height_ft();
    let vertical_list = if clear_height_ft > 0.0 {
        let lap_splice_ft = COLUMN_SPLICE_MULTIPLIER * pick.size.diameter_in() / 12.0;
        build_bar_list(clear_height_ft, pick.vertical_bars, input.stock_ft, lap_splice_ft)
    } else {
        Vec::new()
    };

    let tie_perimeter_ft = input.tie_perimeter_ft();
    let tie_list = if tie_perimeter_ft > 0.0 && input.height_ft > 0.0 {
        let tie_spacing_in = pick.size.tie_spacing_in();
        let ties = (input.height_ft * 12.0 / tie_spacing_in - EPS).ceil() as u32;
        let mut list = CutList::new();
        for _ in 0..ties {
            list.add_piece(tie_perimeter_ft);
        }
        list.finish()
    } else {
        Vec::new()
    };

    let total_bars = total_bars(&vertical_list) + total_bars(&tie_list);
    let total_linear_ft = total_linear_ft(&vertical_list) + total_linear_ft(&tie_list);

    Ok(ColumnResult {
        pick,
        vertical_list,
        tie_list,
        total_bars,
        total_linear_ft,
    })
}
