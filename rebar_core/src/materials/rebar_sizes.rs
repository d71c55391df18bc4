//! Standard Rebar Sizes
//!
//! Provides US bar-number designations with nominal diameter lookups.
//! Bar numbers count eighths of an inch: a #4 bar is 4/8 = 0.5 in
//! nominal diameter.
//!
//! ## Size Selection
//!
//! Alongside the diameter table, this module carries the stock selection
//! rules the estimator applies when the caller does not override the bar
//! size: slab bars from slab thickness, column bars from the larger
//! cross-section dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

/// Standard rebar size designation (#1 through #8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RebarSize {
    /// #1 (0.125" nominal diameter)
    No1,
    /// #2 (0.25")
    No2,
    /// #3 (0.375")
    No3,
    /// #4 (0.5")
    #[default]
    No4,
    /// #5 (0.625")
    No5,
    /// #6 (0.75")
    No6,
    /// #7 (0.875")
    No7,
    /// #8 (1.0")
    No8,
}

impl RebarSize {
    /// All sizes for UI selection, smallest first
    pub const ALL: [RebarSize; 8] = [
        RebarSize::No1,
        RebarSize::No2,
        RebarSize::No3,
        RebarSize::No4,
        RebarSize::No5,
        RebarSize::No6,
        RebarSize::No7,
        RebarSize::No8,
    ];

    /// Nominal bar diameter in inches.
    ///
    /// Fixed lookup table; one eighth of an inch per bar number.
    pub fn diameter_in(&self) -> f64 {
        match self {
            RebarSize::No1 => 0.125,
            RebarSize::No2 => 0.25,
            RebarSize::No3 => 0.375,
            RebarSize::No4 => 0.5,
            RebarSize::No5 => 0.625,
            RebarSize::No6 => 0.75,
            RebarSize::No7 => 0.875,
            RebarSize::No8 => 1.0,
        }
    }

    /// Display designation, e.g. "#4"
    pub fn designation(&self) -> &'static str {
        match self {
            RebarSize::No1 => "#1",
            RebarSize::No2 => "#2",
            RebarSize::No3 => "#3",
            RebarSize::No4 => "#4",
            RebarSize::No5 => "#5",
            RebarSize::No6 => "#6",
            RebarSize::No7 => "#7",
            RebarSize::No8 => "#8",
        }
    }

    /// Select a slab/footer bar size from member thickness.
    ///
    /// Under 5.5 in takes #4, 5.5 through 8 in takes #5, thicker takes #6.
    pub fn for_slab_thickness(thickness_in: f64) -> RebarSize {
        if thickness_in < 5.5 {
            RebarSize::No4
        } else if thickness_in <= 8.0 {
            RebarSize::No5
        } else {
            RebarSize::No6
        }
    }

    /// Select a column vertical-bar size from the larger cross-section
    /// dimension (feet): under 1 ft takes #4, under 2 ft #5, else #6.
    pub fn for_column_section(width_ft: f64, length_ft: f64) -> RebarSize {
        let max_dim_ft = width_ft.max(length_ft);
        if max_dim_ft < 1.0 {
            RebarSize::No4
        } else if max_dim_ft < 2.0 {
            RebarSize::No5
        } else {
            RebarSize::No6
        }
    }

    /// Column tie spacing in inches for this vertical-bar size,
    /// capped at 16 in.
    pub fn tie_spacing_in(&self) -> f64 {
        let by_size: f64 = match self {
            RebarSize::No4 => 12.0,
            RebarSize::No5 => 10.0,
            _ => 8.0,
        };
        by_size.min(16.0)
    }
}

impl fmt::Display for RebarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

impl FromStr for RebarSize {
    type Err = CalcError;

    /// Parse "#4" or "4"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#') {
            "1" => Ok(RebarSize::No1),
            "2" => Ok(RebarSize::No2),
            "3" => Ok(RebarSize::No3),
            "4" => Ok(RebarSize::No4),
            "5" => Ok(RebarSize::No5),
            "6" => Ok(RebarSize::No6),
            "7" => Ok(RebarSize::No7),
            "8" => Ok(RebarSize::No8),
            other => Err(CalcError::invalid_input(
                "rebar_size",
                other,
                "Expected a bar number #1 through #8",
            )),
        }
    }
}
