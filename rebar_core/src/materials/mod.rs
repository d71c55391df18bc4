//! # Materials Database
//!
//! Material definitions and property lookups for reinforcement estimating.
//!
//! ## Material Types
//!
//! - **Rebar**: #1 through #8 bar designations with nominal diameters
//! - **Fiber**: micro/macro/steel fiber dosage and bag-weight tables
//! - **Mesh**: stocked welded-wire sheet dimensions
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::materials::{DutyLevel, FiberType, RebarSize};
//!
//! let bar = RebarSize::for_slab_thickness(6.0);
//! assert_eq!(bar, RebarSize::No5);
//! assert_eq!(bar.diameter_in(), 0.625);
//!
//! let dose = FiberType::Steel.dose_lb_per_yd3(DutyLevel::Medium);
//! assert_eq!(dose, 50.0);
//! ```

pub mod fiber;
pub mod mesh;
pub mod rebar_sizes;

// Re-export rebar size types
pub use rebar_sizes::RebarSize;

// Re-export fiber types
pub use fiber::{DutyLevel, FiberType};
