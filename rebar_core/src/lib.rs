//! # rebar_core - Reinforcement Design Engine
//!
//! `rebar_core` is the computational heart of Barlist, deriving bar
//! sizes, spacing, splice points, and grouped cut lists for concrete
//! reinforcement, plus the parallel fiber-dosage and mesh-sheet sizing
//! paths. All inputs and outputs are JSON-serializable so the form,
//! persistence, and export layers can pass them around untouched.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Caller-owned results**: No persistence, identity, or caching here
//!
//! Every calculation is a pure function of its inputs: no I/O, no shared
//! mutable state, safe to call concurrently without coordination.
//!
//! ## Quick Start
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
//!     pick: None,
//!     stock_ft: DEFAULT_STOCK_FT,
//! };
//!
//! let result = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Known Limitation
//!
//! The splice policy models a single splice point per bar: a required
//! length beyond twice the stock length is emitted as two pieces of
//! which the second exceeds stock. Saved designs depend on those exact
//! numbers, so the policy is preserved as-is; see [`cutlist`].
//!
//! ## Modules
//!
//! - [`calculations`] - Slab, column, fiber, and mesh calculators
//! - [`cutlist`] - Splice and grouping core shared by the rebar paths
//! - [`materials`] - Rebar, fiber, and mesh lookup tables
//! - [`units`] - Type-safe unit wrappers and feet/inches conversions
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod cutlist;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run, CalculationItem, CalculationOutput};
pub use cutlist::{CutListItem, DEFAULT_STOCK_FT};
pub use errors::{CalcError, CalcResult};
pub use materials::RebarSize;
