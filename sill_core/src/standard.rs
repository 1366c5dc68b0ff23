//! # Standard Coefficients and Limits
//!
//! Empirical coefficients and design limits from sections B.4.1 through
//! B.4.4 of the hydraulic design standard.
//!
//! ## Formula Summary
//!
//! ```text
//! B.4.1-1:  P >= 0.186 * hk^2.75 / hds^1.75              (lower bound)
//! B.4.1-2:  P <  (2.24*hk - hds) / (1.48*hk/Pd - 0.84)   (upper bound)
//! B.4.1-3:  P >  (2.38*hk - hds) / (1.81*hk/Pd - 1.16)   (optimized lower bound)
//! ```
//!
//! ## Design Constraint Summary
//!
//! | Section | Parameter | Requirement        |
//! |---------|-----------|--------------------|
//! | B.4.2   | theta     | 0 to 10 degrees    |
//! | B.4.3   | R         | >= 2.5 * hdc       |
//! | B.4.4   | Lm        | >= 1.5 * hdc       |

// ============================================================================
// Code Section References
// ============================================================================

/// Standard section references for the drop-sill formulas and constraints.
///
/// These constants provide traceable references back to the governing
/// sections of the design standard.
pub mod code_ref {
    /// Minimum sill height (basic energy dissipation)
    pub const FORMULA_1: &str = "B.4.1-1";
    /// Maximum sill height (gate-sill influence)
    pub const FORMULA_2: &str = "B.4.1-2";
    /// Optimized minimum sill height
    pub const FORMULA_3: &str = "B.4.1-3";
    /// Top-surface inclination range
    pub const THETA_RANGE: &str = "B.4.2";
    /// Reverse-curve radius floor
    pub const RADIUS_FLOOR: &str = "B.4.3";
    /// Sill length floor
    pub const LENGTH_FLOOR: &str = "B.4.4";
}

// ============================================================================
// Formula B.4.1-1
// ============================================================================

/// Leading coefficient of formula B.4.1-1
pub const F1_COEFFICIENT: f64 = 0.186;
/// Exponent on hk in formula B.4.1-1
pub const F1_HK_EXPONENT: f64 = 2.75;
/// Exponent on hds in formula B.4.1-1
pub const F1_HDS_EXPONENT: f64 = 1.75;

// ============================================================================
// Formula B.4.1-2
// ============================================================================

/// Numerator coefficient on hk in formula B.4.1-2
pub const F2_HK_COEFFICIENT: f64 = 2.24;
/// Denominator coefficient on hk/Pd in formula B.4.1-2
pub const F2_RATIO_COEFFICIENT: f64 = 1.48;
/// Denominator constant in formula B.4.1-2
pub const F2_OFFSET: f64 = 0.84;

// ============================================================================
// Formula B.4.1-3
// ============================================================================

/// Numerator coefficient on hk in formula B.4.1-3
pub const F3_HK_COEFFICIENT: f64 = 2.38;
/// Denominator coefficient on hk/Pd in formula B.4.1-3
pub const F3_RATIO_COEFFICIENT: f64 = 1.81;
/// Denominator constant in formula B.4.1-3
pub const F3_OFFSET: f64 = 1.16;

// ============================================================================
// Guards and Design Limits
// ============================================================================

/// Near-singular denominator tolerance for formulas B.4.1-2 and B.4.1-3.
///
/// A denominator within this band of zero would blow the computed bound up
/// to an untrustworthy magnitude, so the formula reports no value at all
/// rather than a misleading large number.
pub const DENOMINATOR_EPSILON: f64 = 0.001;

/// Minimum top-surface inclination, degrees (B.4.2)
pub const THETA_MIN_DEG: i32 = 0;
/// Maximum top-surface inclination, degrees (B.4.2)
pub const THETA_MAX_DEG: i32 = 10;

/// Reverse-curve radius floor as a multiple of hdc (B.4.3)
pub const RADIUS_HDC_RATIO: f64 = 2.5;
/// Sill length floor as a multiple of hdc (B.4.4)
pub const LENGTH_HDC_RATIO: f64 = 1.5;
