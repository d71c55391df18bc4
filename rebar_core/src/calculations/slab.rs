//! # Slab / Footer Reinforcement
//!
//! Derives the bar mat for a rectangular slab, footer, or similar flat
//! member: a cut list per direction, grouped and totaled.
//!
//! ## Assumptions
//!
//! - Rectangular plan; both directions share one bar size
//! - Bars in the X direction span across the width, bars in the Y
//!   direction span across the length
//! - 30-diameter lap splices, stock bars 20 ft unless overridden
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::slab::{calculate, SlabInput};
//! use rebar_core::cutlist::DEFAULT_STOCK_FT;
//!
//! let input = SlabInput {
//!     label: "Garage Slab".to_string(),
//!     length_ft: 24.0,
//!     width_ft: 20.0,
//!     thickness_in: 6.0,
//!     cover_in: 3.0,
//!     pick: None, // derive size and spacing from thickness
//!     stock_ft: DEFAULT_STOCK_FT,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{} bars, {:.1} lin ft", result.total_bars, result.total_linear_ft);
//! ```

use serde::{Deserialize, Serialize};

use crate::cutlist::{
    build_cut_list, total_bars, total_linear_ft, CutListItem, DEFAULT_STOCK_FT,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::RebarSize;

/// Default bar spacing applied when deriving a pick, in inches
pub const DEFAULT_SPACING_IN: f64 = 12.0;

/// A slab bar selection: size plus per-direction spacing.
///
/// Either derived from slab thickness or supplied by the caller as a
/// manual override, which the engine accepts without re-deriving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPick {
    pub size: RebarSize,
    pub spacing_x_in: f64,
    pub spacing_y_in: f64,
}

impl BarPick {
    /// Derive a pick from slab thickness, with 12 in spacing both ways
    /// (the form layer's default for an empty spacing field).
    pub fn for_thickness(thickness_in: f64) -> BarPick {
        BarPick {
            size: RebarSize::for_slab_thickness(thickness_in),
            spacing_x_in: DEFAULT_SPACING_IN,
            spacing_y_in: DEFAULT_SPACING_IN,
        }
    }
}

/// Input parameters for slab/footer reinforcement.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Garage Slab",
///   "length_ft": 24.0,
///   "width_ft": 20.0,
///   "thickness_in": 6.0,
///   "cover_in": 3.0,
///   "pick": { "size": "No5", "spacing_x_in": 12.0, "spacing_y_in": 12.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label for this member (e.g., "Garage Slab", "F-3")
    pub label: String,

    /// Plan length in feet
    pub length_ft: f64,

    /// Plan width in feet
    pub width_ft: f64,

    /// Slab thickness in inches
    pub thickness_in: f64,

    /// Concrete cover in inches (each face)
    pub cover_in: f64,

    /// Manual bar pick; `None` derives size and spacing from thickness
    #[serde(default)]
    pub pick: Option<BarPick>,

    /// Stock bar length in feet
    #[serde(default = "default_stock_ft")]
    pub stock_ft: f64,
}

fn default_stock_ft() -> f64 {
    DEFAULT_STOCK_FT
}

impl SlabInput {
    /// Validate the caller contract: positive spacing and stock length.
    ///
    /// Geometry itself is not validated here; degenerate geometry
    /// produces empty lists rather than errors.
    pub fn validate(&self) -> CalcResult<()> {
        if self.stock_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "stock_ft",
                self.stock_ft.to_string(),
                "Stock bar length must be positive",
            ));
        }
        if let Some(pick) = &self.pick {
            if pick.spacing_x_in <= 0.0 {
                return Err(CalcError::invalid_input(
                    "spacing_x_in",
                    pick.spacing_x_in.to_string(),
                    "Bar spacing must be positive",
                ));
            }
            if pick.spacing_y_in <= 0.0 {
                return Err(CalcError::invalid_input(
                    "spacing_y_in",
                    pick.spacing_y_in.to_string(),
                    "Bar spacing must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results of slab/footer reinforcement design.
///
/// `total_bars` is the piece count over both lists; `total_linear_ft`
/// is the length-weighted sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabResult {
    /// The pick used, derived or passed through from the input
    pub pick: BarPick,

    /// Pieces spanning across the width (X direction)
    pub list_x: Vec<CutListItem>,

    /// Pieces spanning across the length (Y direction)
    pub list_y: Vec<CutListItem>,

    /// Total piece count, both directions
    pub total_bars: u32,

    /// Total linear feet of bar, both directions
    pub total_linear_ft: f64,
}

/// Design the bar mat for a rectangular slab or footer.
///
/// # Arguments
///
/// * `input` - Geometry, cover, and optional manual pick
///
/// # Returns
///
/// * `Ok(SlabResult)` - Grouped per-direction cut lists and totals
/// * `Err(CalcError)` - If spacing or stock length violate the contract
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    input.validate()?;

    let pick = input
        .pick
        .unwrap_or_else(|| BarPick::for_thickness(input.thickness_in));

    let list_x = build_cut_list(
        input.width_ft,
        pick.spacing_x_in,
        input.cover_in,
        input.stock_ft,
        pick.size,
    )?;
    let list_y = build_cut_list(
        input.length_ft,
        pick.spacing_y_in,
        input.cover_in,
        input.stock_ft,
        pick.size,
    )?;

    let total_bars = total_bars(&list_x) + total_bars(&list_y);
    let total_linear_ft = total_linear_ft(&list_x) + total_linear_ft(&list_y);

    Ok(SlabResult {
        pick,
        list_x,
        list_y,
        total_bars,
        total_linear_ft,
    })
}
