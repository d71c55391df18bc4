//! # Unit Types
//!
//! Type-safe wrappers for the units this engine works in, plus the
//! feet/inches/fraction conversions contractors enter dimensions with.
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Reinforcement estimating uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units (Primary)
//!
//! The engine works in US customary units throughout:
//! - Length: feet (ft), inches (in)
//! - Area: square feet (sq ft)
//! - Weight: pounds (lb)
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::{to_decimal_feet, Feet, FeetInches, Inches};
//!
//! let span = Feet(12.0);
//! let span_inches: Inches = span.into();
//! assert_eq!(span_inches.0, 144.0);
//!
//! // "10 ft 6 1/2 in" as entered on a form
//! let ft = to_decimal_feet(10.0, 6.0, 0.5);
//! assert!((ft - 10.541666).abs() < 1e-4);
//!
//! assert_eq!(FeetInches::from_decimal(9.5).to_string(), "9' 6\"");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area and Weight Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

// ============================================================================
// Form-Entry Conversions
// ============================================================================

/// Convert a feet / inches / inch-fraction entry to decimal feet.
///
/// `to_decimal_feet(10.0, 6.0, 0.5)` is "10 ft 6 1/2 in". No validation
/// is performed; out-of-range inches or fractions pass through as-is
/// (range checks are a form-layer concern).
pub fn to_decimal_feet(feet: f64, inches: f64, fraction: f64) -> f64 {
    feet + (inches + fraction) / 12.0
}

/// A decimal-feet length broken back out for display, e.g. `9' 6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: u32,
}

impl FeetInches {
    /// Split decimal feet into whole feet and rounded inches.
    ///
    /// Rounding the fractional part can yield 12 inches; that rolls over
    /// into the next whole foot.
    pub fn from_decimal(decimal_feet: f64) -> Self {
        let mut feet = decimal_feet.floor() as i64;
        let mut inches = ((decimal_feet - decimal_feet.floor()) * 12.0).round() as u32;
        if inches == 12 {
            feet += 1;
            inches = 0;
        }
        FeetInches { feet, inches }
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inches == 0 {
            write!(f, "{}'", self.feet)
        } else {
            write!(f, "{}' {}\"", self.feet, self.inches)
        }
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqFt);
impl_arithmetic!(Pounds);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_to_decimal_feet() {
        assert_eq!(to_decimal_feet(10.0, 6.0, 0.0), 10.5);
        assert!((to_decimal_feet(0.0, 3.0, 0.75) - 0.3125).abs() < 1e-12);
        // Out-of-range entries pass through untouched
        assert_eq!(to_decimal_feet(5.0, 24.0, 0.0), 7.0);
    }

    #[test]
    fn test_feet_inches_display() {
        assert_eq!(FeetInches::from_decimal(9.5).to_string(), "9' 6\"");
        assert_eq!(FeetInches::from_decimal(12.0).to_string(), "12'");
    }

    #[test]
    fn test_feet_inches_rollover() {
        // 9.99 ft rounds to 12 in, which must roll over to 10'
        let fi = FeetInches::from_decimal(9.99);
        assert_eq!(fi.feet, 10);
        assert_eq!(fi.inches, 0);
        assert_eq!(fi.to_string(), "10'");
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
