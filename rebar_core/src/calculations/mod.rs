//! # Reinforcement Calculations
//!
//! This module contains all reinforcement calculation types. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`slab`] - Slab/footer bar mats (two orthogonal cut lists)
//! - [`column`] - Column verticals and ties
//! - [`fiber`] - Fiber dosage and bag count
//! - [`mesh`] - Welded wire mesh sheet count

pub mod column;
pub mod fiber;
pub mod mesh;
pub mod slab;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use column::{ColumnBarPick, ColumnInput, ColumnResult};
pub use fiber::{FiberInput, FiberResult};
pub use mesh::{MeshInput, MeshResult};
pub use slab::{BarPick, SlabInput, SlabResult};

/// Enum wrapper for all calculation inputs.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Slab/footer bar mat
    Slab(SlabInput),
    /// Column cage (verticals + ties)
    Column(ColumnInput),
    /// Fiber dosage
    Fiber(FiberInput),
    /// Mesh sheet count
    Mesh(MeshInput),
}

/// Enum wrapper for all calculation results, matched by variant rather
/// than by probing optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Slab(SlabResult),
    Column(ColumnResult),
    Fiber(FiberResult),
    Mesh(MeshResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Slab(s) => &s.label,
            CalculationItem::Column(c) => &c.label,
            CalculationItem::Fiber(f) => &f.label,
            CalculationItem::Mesh(m) => &m.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Slab(_) => "Slab",
            CalculationItem::Column(_) => "Column",
            CalculationItem::Fiber(_) => "Fiber",
            CalculationItem::Mesh(_) => "Mesh",
        }
    }
}

/// Run any calculation, returning the matching result variant.
pub fn run(item: &CalculationItem) -> CalcResult<CalculationOutput> {
    match item {
        CalculationItem::Slab(input) => slab::calculate(input).map(CalculationOutput::Slab),
        CalculationItem::Column(input) => column::calculate(input).map(CalculationOutput::Column),
        CalculationItem::Fiber(input) => fiber::calculate(input).map(CalculationOutput::Fiber),
        CalculationItem::Mesh(input) => mesh::calculate(input).map(CalculationOutput::Mesh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutlist::DEFAULT_STOCK_FT;
    use crate::materials::{DutyLevel, FiberType};

    #[test]
    fn test_run_dispatch() {
        let item = CalculationItem::Fiber(FiberInput {
            label: "Pour".to_string(),
            fiber_type: FiberType::Micro,
            duty: DutyLevel::Medium,
            cubic_yards: 10.0,
        });
        assert_eq!(item.calc_type(), "Fiber");
        assert_eq!(item.label(), "Pour");

        match run(&item).unwrap() {
            CalculationOutput::Fiber(result) => assert_eq!(result.bags, 10),
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let item = CalculationItem::Slab(SlabInput {
            label: "S-1".to_string(),
            length_ft: 10.0,
            width_ft: 10.0,
            thickness_in: 4.0,
            cover_in: 3.0,
            pick: None,
            stock_ft: DEFAULT_STOCK_FT,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"Slab"#));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.calc_type(), "Slab");
    }
}
