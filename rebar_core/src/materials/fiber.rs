//! Fiber Reinforcement Products
//!
//! Dosage and packaging data for concrete fiber reinforcement. Dosage
//! rates (lb per cubic yard) are a fixed 9-entry table keyed by fiber
//! type and duty level; bag weights are fixed per fiber type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiber reinforcement product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FiberType {
    /// Synthetic microfiber (shrinkage/crack control)
    #[default]
    Micro,
    /// Synthetic macrofiber (structural)
    Macro,
    /// Steel fiber
    Steel,
}

/// Service duty level the slab is dosed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DutyLevel {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl FiberType {
    /// All fiber types for UI selection
    pub const ALL: [FiberType; 3] = [FiberType::Micro, FiberType::Macro, FiberType::Steel];

    /// Dosage rate in lb per cubic yard for this fiber at a duty level
    pub fn dose_lb_per_yd3(&self, duty: DutyLevel) -> f64 {
        match (self, duty) {
            (FiberType::Micro, DutyLevel::Light) => 0.75,
            (FiberType::Micro, DutyLevel::Medium) => 1.0,
            (FiberType::Micro, DutyLevel::Heavy) => 1.5,
            (FiberType::Macro, DutyLevel::Light) => 3.0,
            (FiberType::Macro, DutyLevel::Medium) => 4.0,
            (FiberType::Macro, DutyLevel::Heavy) => 5.0,
            (FiberType::Steel, DutyLevel::Light) => 30.0,
            (FiberType::Steel, DutyLevel::Medium) => 50.0,
            (FiberType::Steel, DutyLevel::Heavy) => 70.0,
        }
    }

    /// Weight of one bag of this fiber product, in pounds
    pub fn bag_weight_lb(&self) -> f64 {
        match self {
            FiberType::Micro => 1.0,
            FiberType::Macro => 50.0,
            FiberType::Steel => 40.0,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FiberType::Micro => "Microfiber",
            FiberType::Macro => "Macrofiber",
            FiberType::Steel => "Steel Fiber",
        }
    }
}

impl DutyLevel {
    /// All duty levels for UI selection
    pub const ALL: [DutyLevel; 3] = [DutyLevel::Light, DutyLevel::Medium, DutyLevel::Heavy];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DutyLevel::Light => "Light",
            DutyLevel::Medium => "Medium",
            DutyLevel::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for FiberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for DutyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
