//! # Fiber Dosage
//!
//! Sizes fiber reinforcement for a pour: dosage rate from the product
//! table, total weight from the pour volume, and a whole-bag count.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::fiber::{calculate, FiberInput};
//! use rebar_core::materials::{DutyLevel, FiberType};
//!
//! let input = FiberInput {
//!     label: "Shop Floor".to_string(),
//!     fiber_type: FiberType::Micro,
//!     duty: DutyLevel::Medium,
//!     cubic_yards: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_lb, 10.0);
//! assert_eq!(result.bags, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::{DutyLevel, FiberType};

/// Input parameters for fiber dosage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberInput {
    /// User label for this pour
    pub label: String,

    /// Fiber product family
    pub fiber_type: FiberType,

    /// Service duty level
    pub duty: DutyLevel,

    /// Pour volume in cubic yards
    pub cubic_yards: f64,
}

/// Results of fiber dosage sizing.
///
/// `bags` is `ceil(total_lb / bag_weight_lb)`, never negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberResult {
    pub fiber_type: FiberType,
    pub duty: DutyLevel,

    /// Pour volume the dosage was computed for, in cubic yards
    pub cubic_yards: f64,

    /// Dosage rate in lb per cubic yard
    pub dose_lb_per_yd3: f64,

    /// Total fiber weight for the pour, in pounds
    pub total_lb: f64,

    /// Weight of one bag of the selected product, in pounds
    pub bag_weight_lb: f64,

    /// Whole bags to order
    pub bags: u32,
}

/// Size the fiber order for a pour.
///
/// Degenerate volume (zero or negative) yields zero bags rather than an
/// error; volume validation belongs to the form layer.
pub fn calculate(input: &FiberInput) -> CalcResult<FiberResult> {
    Ok(dose(input.fiber_type, input.duty, input.cubic_yards))
}

/// Re-dose a previous result for a different product selection, keeping
/// the pour volume. This replaces the form layer's habit of holding the
/// "last calculated volume" in shared state when the product dropdown
/// changes.
pub fn recompute_with_product(
    prior: &FiberResult,
    fiber_type: FiberType,
    duty: DutyLevel,
) -> FiberResult {
    dose(fiber_type, duty, prior.cubic_yards)
}

fn dose(fiber_type: FiberType, duty: DutyLevel, cubic_yards: f64) -> FiberResult {
    let dose_lb_per_yd3 = fiber_type.dose_lb_per_yd3(duty);
    let total_lb = dose_lb_per_yd3 * cubic_yards;
    let bag_weight_lb = fiber_type.bag_weight_lb();
    let bags = (total_lb / bag_weight_lb).ceil().max(0.0) as u32;

    FiberResult {
        fiber_type,
        duty,
        cubic_yards,
        dose_lb_per_yd3,
        total_lb,
        bag_weight_lb,
        bags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_medium() {
        let input = FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Micro,
            duty: DutyLevel::Medium,
            cubic_yards: 10.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.dose_lb_per_yd3, 1.0);
        assert_eq!(result.total_lb, 10.0);
        assert_eq!(result.bag_weight_lb, 1.0);
        assert_eq!(result.bags, 10);
    }

    #[test]
    fn test_partial_bag_rounds_up() {
        let input = FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Steel,
            duty: DutyLevel::Heavy,
            cubic_yards: 10.0,
        };
        // 700 lb / 40 lb bags = 17.5 -> 18 bags
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_lb, 700.0);
        assert_eq!(result.bags, 18);
    }

    #[test]
    fn test_bag_invariant() {
        let input = FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Macro,
            duty: DutyLevel::Light,
            cubic_yards: 37.3,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(
            result.bags,
            (result.total_lb / result.bag_weight_lb).ceil() as u32
        );
    }

    #[test]
    fn test_degenerate_volume() {
        let input = FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Macro,
            duty: DutyLevel::Medium,
            cubic_yards: -2.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.bags, 0);
    }

    #[test]
    fn test_recompute_keeps_volume() {
        let input = FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Micro,
            duty: DutyLevel::Medium,
            cubic_yards: 10.0,
        };
        let first = calculate(&input).unwrap();
        let redone = recompute_with_product(&first, FiberType::Steel, DutyLevel::Heavy);
        assert_eq!(redone.cubic_yards, 10.0);
        assert_eq!(redone.total_lb, 700.0);
        assert_eq!(redone.bags, 18);
    }
}
