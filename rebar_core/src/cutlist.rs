//! # Cut List Builder
//!
//! The splice/quantity core of the engine: turns a required bar length,
//! spacing, and stock-bar length into a grouped list of (length, qty)
//! pieces ready for the shop.
//!
//! ## Splice Policy
//!
//! A bar longer than one stock length is cut as exactly two pieces with a
//! lap splice between them (30 bar diameters for slab/footer mats, 40 for
//! column verticals). Only one splice point is modeled: for a required
//! length beyond roughly twice the stock length the second piece itself
//! exceeds stock and cannot actually be cut. That matches the behavior
//! existing saved designs were produced with, so it is preserved rather
//! than generalized to a multi-splice solver.
//!
//! ## Grouping Rules
//!
//! Every emitted length is rounded up to the nearest inch, then merged
//! into an existing list item when within 0.1 ft of it; the finished list
//! is sorted ascending by length.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::cutlist::{build_cut_list, total_bars, total_linear_ft, DEFAULT_STOCK_FT};
//! use rebar_core::materials::RebarSize;
//!
//! let list = build_cut_list(10.0, 12.0, 3.0, DEFAULT_STOCK_FT, RebarSize::No4).unwrap();
//! assert_eq!(list.len(), 1);
//! assert_eq!(list[0].length_ft, 9.5);
//! assert_eq!(list[0].qty, 11);
//! assert_eq!(total_bars(&list), 11);
//! assert_eq!(total_linear_ft(&list), 104.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::RebarSize;

/// Default stock bar length in feet
pub const DEFAULT_STOCK_FT: f64 = 20.0;

/// Lap splice length multiplier (x bar diameter) for slab/footer mats
pub const SLAB_SPLICE_MULTIPLIER: f64 = 30.0;

/// Lap splice length multiplier (x bar diameter) for column verticals
pub const COLUMN_SPLICE_MULTIPLIER: f64 = 40.0;

/// Two list items closer than this are merged into one
pub const MERGE_TOLERANCE_FT: f64 = 0.1;

// Guards ceil() against float noise pushing an exact quotient over
pub(crate) const EPS: f64 = 1e-9;

/// One line of a grouped cut list: a piece length and how many to cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutListItem {
    /// Piece length in feet, always a whole number of inches
    pub length_ft: f64,
    /// Number of pieces at this length
    pub qty: u32,
}

/// Accumulates pieces into a grouped, merged cut list.
///
/// Pieces are rounded up to the nearest inch on entry and merged into an
/// existing item when within [`MERGE_TOLERANCE_FT`] of it. Merging is
/// idempotent: re-grouping a finished list changes nothing.
#[derive(Debug, Clone, Default)]
pub struct CutList {
    items: Vec<CutListItem>,
}

impl CutList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one piece, rounding up to the nearest inch and merging into an
    /// existing item when within tolerance.
    pub fn add_piece(&mut self, length_ft: f64) {
        let length_ft = round_up_to_inch(length_ft);
        for item in &mut self.items {
            if (item.length_ft - length_ft).abs() < MERGE_TOLERANCE_FT {
                item.qty += 1;
                return;
            }
        }
        self.items.push(CutListItem { length_ft, qty: 1 });
    }

    /// Finish the list: sorted ascending by length.
    pub fn finish(mut self) -> Vec<CutListItem> {
        self.items
            .sort_by(|a, b| a.length_ft.total_cmp(&b.length_ft));
        self.items
    }
}

/// Clear span in inches: the member span less cover on both sides.
///
/// Not clamped; cover beyond half the span yields a negative clear span,
/// which downstream treats as zero bars required.
pub fn clear_span_in(span_ft: f64, cover_in: f64) -> f64 {
    span_ft * 12.0 - 2.0 * cover_in
}

/// Round a length up to the nearest 1/12 ft (nearest inch).
pub fn round_up_to_inch(length_ft: f64) -> f64 {
    (length_ft * 12.0 - EPS).ceil() / 12.0
}

/// Total piece count across a cut list
pub fn total_bars(items: &[CutListItem]) -> u32 {
    items.iter().map(|item| item.qty).sum()
}

/// Total linear feet across a cut list
pub fn total_linear_ft(items: &[CutListItem]) -> f64 {
    items
        .iter()
        .map(|item| item.length_ft * item.qty as f64)
        .sum()
}

/// The one or two pieces a single bar is cut as.
///
/// Two-piece case holds one lap length back from the stock end and adds
/// it to the remainder, so the pieces overlap by exactly one lap:
/// `first = stock - lap`, `second = (required - first) + lap`.
fn pieces_for_bar(required_ft: f64, stock_ft: f64, lap_splice_ft: f64) -> (f64, Option<f64>) {
    if required_ft <= stock_ft {
        (required_ft, None)
    } else {
        let first = stock_ft - lap_splice_ft;
        let second = (required_ft - first) + lap_splice_ft;
        (first, Some(second))
    }
}

/// Cut `bars` identical bars of `required_ft` from `stock_ft` stock,
/// splicing each bar once when it exceeds stock, and group the pieces.
pub fn build_bar_list(
    required_ft: f64,
    bars: u32,
    stock_ft: f64,
    lap_splice_ft: f64,
) -> Vec<CutListItem> {
    let mut list = CutList::new();
    for _ in 0..bars {
        let (first, second) = pieces_for_bar(required_ft, stock_ft, lap_splice_ft);
        list.add_piece(first);
        if let Some(second) = second {
            list.add_piece(second);
        }
    }
    list.finish()
}

/// Build the grouped cut list for one reinforcement direction of a
/// slab or footer.
///
/// Bar count is `ceil(clear_span / spacing) + 1` (a bar at each edge);
/// every bar in a direction is cut to the same clear-span length. A
/// non-positive clear span (cover at or beyond half the span) yields an
/// empty list.
///
/// # Errors
///
/// Zero or negative `spacing_in` or `stock_ft` violate the caller
/// contract and return [`CalcError::InvalidInput`]; they are never
/// silently defaulted.
pub fn build_cut_list(
    span_ft: f64,
    spacing_in: f64,
    cover_in: f64,
    stock_ft: f64,
    size: RebarSize,
) -> CalcResult<Vec<CutListItem>> {
    if spacing_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "spacing_in",
            spacing_in.to_string(),
            "Bar spacing must be positive",
        ));
    }
    if stock_ft <= 0.0 {
        return Err(CalcError::invalid_input(
            "stock_ft",
            stock_ft.to_string(),
            "Stock bar length must be positive",
        ));
    }

    let clear_in = clear_span_in(span_ft, cover_in);
    if clear_in <= 0.0 {
        return Ok(Vec::new());
    }

    let bars = (clear_in / spacing_in - EPS).ceil() as u32 + 1;
    let required_ft = clear_in / 12.0;
    let lap_splice_ft = SLAB_SPLICE_MULTIPLIER * size.diameter_in() / 12.0;

    Ok(build_bar_list(required_ft, bars, stock_ft, lap_splice_ft))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_splice_example() {
        // 10 ft span, 12 in spacing, 3 in cover: clear span 114 in,
        // ceil(114/12)+1 = 11 bars of 9.5 ft, no splice needed
        let list = build_cut_list(10.0, 12.0, 3.0, 20.0, RebarSize::No4).unwrap();
        assert_eq!(list, vec![CutListItem { length_ft: 9.5, qty: 11 }]);
        assert_eq!(total_bars(&list), 11);
        assert!((total_linear_ft(&list) - 104.5).abs() < 1e-9);
    }

    #[test]
    fn test_forced_splice_example() {
        // 25 ft span over 20 ft stock with a #4 bar: lap = 30*0.5/12 = 1.25 ft,
        // so each of the 26 bars cuts as 18.75 + 7.5
        let list = build_cut_list(25.0, 12.0, 0.0, 20.0, RebarSize::No4).unwrap();
        assert_eq!(
            list,
            vec![
                CutListItem { length_ft: 7.5, qty: 26 },
                CutListItem { length_ft: 18.75, qty: 26 },
            ]
        );
        assert_eq!(total_bars(&list), 52);
    }

    #[test]
    fn test_rounding_to_whole_inches() {
        // 9.3 ft span, 1 in cover: clear span 109.6 in = 9.1333.. ft,
        // rounds up to 110 in
        let list = build_cut_list(9.3, 12.0, 1.0, 20.0, RebarSize::No4).unwrap();
        for item in &list {
            let inches = item.length_ft * 12.0;
            assert!(
                (inches - inches.round()).abs() < 1e-6,
                "length {} ft is not a whole number of inches",
                item.length_ft
            );
        }
        assert!((list[0].length_ft - 110.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_invariant() {
        let list = build_cut_list(25.0, 9.0, 2.0, 20.0, RebarSize::No5).unwrap();
        // No two items within the merge tolerance of each other
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert!((a.length_ft - b.length_ft).abs() >= MERGE_TOLERANCE_FT);
            }
        }
        // Re-grouping the finished list is a no-op
        let mut regrouped = CutList::new();
        for item in &list {
            for _ in 0..item.qty {
                regrouped.add_piece(item.length_ft);
            }
        }
        assert_eq!(regrouped.finish(), list);
    }

    #[test]
    fn test_list_sorted_ascending() {
        let list = build_cut_list(30.0, 10.0, 1.5, 20.0, RebarSize::No6).unwrap();
        for pair in list.windows(2) {
            assert!(pair[0].length_ft < pair[1].length_ft);
        }
    }

    #[test]
    fn test_degenerate_cover_yields_empty_list() {
        // 2 ft span with 12 in cover each side: negative clear span
        let list = build_cut_list(2.0, 12.0, 12.0, 20.0, RebarSize::No4).unwrap();
        assert!(list.is_empty());
        assert_eq!(total_bars(&list), 0);
    }

    #[test]
    fn test_zero_spacing_is_contract_violation() {
        let err = build_cut_list(10.0, 0.0, 3.0, 20.0, RebarSize::No4).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(build_cut_list(10.0, -6.0, 3.0, 20.0, RebarSize::No4).is_err());
    }

    #[test]
    fn test_zero_stock_is_contract_violation() {
        assert!(build_cut_list(10.0, 12.0, 3.0, 0.0, RebarSize::No4).is_err());
    }

    #[test]
    fn test_under_coverage_beyond_double_stock() {
        // 45 ft required from 20 ft stock: only one splice is modeled,
        // so the second piece absorbs the full remainder. Known
        // limitation, kept for compatibility with saved designs.
        let list = build_cut_list(45.0, 12.0, 0.0, 20.0, RebarSize::No4).unwrap();
        assert_eq!(list.len(), 2);
        assert!((list[0].length_ft - 18.75).abs() < 1e-9);
        // Second piece 45 - 18.75 + 1.25 = 27.5 ft: longer than stock,
        // so the bar is not actually cuttable as two pieces
        assert!((list[1].length_ft - 27.5).abs() < 1e-9);
        assert!(list[1].length_ft > 20.0);
    }

    #[test]
    fn test_exact_stock_length_does_not_splice() {
        // Required length exactly equal to stock is a single piece
        let list = build_cut_list(20.0, 12.0, 0.0, 20.0, RebarSize::No4).unwrap();
        assert_eq!(list, vec![CutListItem { length_ft: 20.0, qty: 21 }]);
    }
}
