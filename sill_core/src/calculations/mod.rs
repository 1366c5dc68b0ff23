//! # Hydraulic Calculations
//!
//! This module contains the calculation types. Each calculation follows
//! the pattern:
//!
//! - `*Inputs` / `*Parameters` - Input values (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `evaluate(inputs, params) -> Result<*Result, CalcError>` - Pure
//!   calculation function
//!
//! ## Available Calculations
//!
//! - [`drop_sill`] - Drop-sill height range and design-parameter checks
//!   per standard sections B.4.1 through B.4.4

pub mod drop_sill;

// Re-export commonly used types
pub use drop_sill::{
    DesignParameters, DesignRecommendation, DropSillResult, FormulaResult, HydraulicInputs,
    ThresholdCheck,
};
