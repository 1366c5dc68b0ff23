//! # sill_core - Drop-Sill Height Calculation Engine
//!
//! `sill_core` evaluates the closed-form formulas of standard section B.4.1
//! to determine the allowable range and a recommended value for the height P
//! of a drop sill (stilling-basin step), and checks the auxiliary design
//! parameters of sections B.4.2 through B.4.4 against their ratio floors.
//! All inputs and outputs are JSON-serializable, so the engine can sit
//! behind a web form, a CLI, or a batch-scenario runner without change.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure `evaluate` call per input snapshot, no caching
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Partial-failure tolerant**: a formula with a near-singular
//!   denominator reports `Undefined` without aborting the other formulas
//!   or the parameter checks
//!
//! ## Quick Start
//!
//! ```rust
//! use sill_core::calculations::drop_sill::{evaluate, HydraulicInputs, DesignParameters};
//!
//! let inputs = HydraulicInputs::default();
//! let params = DesignParameters::default();
//!
//! let result = evaluate(&inputs, &params).unwrap();
//! println!("P1 = {:?}", result.p1);
//! println!("recommendation = {:?}", result.recommendation);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The drop-sill formula engine
//! - [`standard`] - Coefficients and limits of standard sections B.4.1-B.4.4
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod standard;

// Re-export commonly used types at crate root for convenience
pub use calculations::drop_sill::{
    evaluate, DesignParameters, DesignRecommendation, DropSillResult, FormulaResult,
    HydraulicInputs, ThresholdCheck,
};
pub use errors::{CalcError, CalcResult};
