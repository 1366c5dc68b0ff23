//! # Drop-Sill Height Calculation
//!
//! Evaluates the three closed-form formulas of standard section B.4.1 to
//! bracket the drop-sill height P, derives a recommended design value, and
//! checks the auxiliary design parameters of sections B.4.2 through B.4.4.
//!
//! ## Assumptions
//!
//! - All depths and offsets are non-negative metres (enforced by `validate`)
//! - Formulas 2 and 3 refuse to report a value when their denominator is
//!   within 0.001 of zero; the result is `Undefined`, never infinity or NaN
//! - The three formulas and three parameter checks are independent: one
//!   `Undefined` formula does not abort the others
//!
//! ## Example
//!
//! ```rust
//! use sill_core::calculations::drop_sill::{evaluate, HydraulicInputs, DesignParameters};
//!
//! let inputs = HydraulicInputs {
//!     hk: 1.0,
//!     hdc: 0.8,
//!     hds: 2.0,
//!     pd: 1.5,
//! };
//! let params = DesignParameters {
//!     theta_deg: 5,
//!     r: 2.0,
//!     lm: 1.2,
//! };
//!
//! let result = evaluate(&inputs, &params).unwrap();
//! assert!(result.p1.is_defined());
//! assert!(result.all_checks_pass());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::standard;

/// Hydraulic measurements for one design scenario.
///
/// All values are depths/offsets in metres and must be non-negative and
/// finite. A fresh snapshot is built for every evaluation; nothing is
/// mutated or cached between calls.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hk": 1.0,
///   "hdc": 0.8,
///   "hds": 2.0,
///   "pd": 1.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydraulicInputs {
    /// Critical depth above the sill (m)
    pub hk: f64,

    /// Contracted depth above the sill (m)
    pub hdc: f64,

    /// Tailwater depth downstream of the sill (m)
    pub hds: f64,

    /// Vertical offset between the gate-sill crest and the downstream
    /// riverbed (m)
    pub pd: f64,
}

impl Default for HydraulicInputs {
    fn default() -> Self {
        HydraulicInputs {
            hk: 1.0,
            hdc: 0.8,
            hds: 2.0,
            pd: 1.5,
        }
    }
}

impl HydraulicInputs {
    /// Validate input values.
    ///
    /// Zero depths are accepted; the formulas handle them by reporting
    /// `Undefined` rather than dividing by zero.
    pub fn validate(&self) -> CalcResult<()> {
        validate_non_negative("hk", self.hk)?;
        validate_non_negative("hdc", self.hdc)?;
        validate_non_negative("hds", self.hds)?;
        validate_non_negative("pd", self.pd)?;
        Ok(())
    }
}

/// Auxiliary design parameters checked against the floors of sections
/// B.4.2 through B.4.4.
///
/// ## JSON Example
///
/// ```json
/// {
///   "theta_deg": 5,
///   "r": 2.0,
///   "lm": 1.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Top-surface inclination of the sill, whole degrees.
    ///
    /// An out-of-range value is a failed advisory check, not a validation
    /// error, so input surfaces wider than the standard 0-10 degree slider
    /// still get a full evaluation.
    pub theta_deg: i32,

    /// Reverse-curve radius at the base of the sill (m)
    pub r: f64,

    /// Horizontal length of the sill's flat top (m)
    pub lm: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        DesignParameters {
            theta_deg: 5,
            r: 2.0,
            lm: 1.2,
        }
    }
}

impl DesignParameters {
    /// Validate parameter values.
    pub fn validate(&self) -> CalcResult<()> {
        validate_non_negative("r", self.r)?;
        validate_non_negative("lm", self.lm)?;
        Ok(())
    }
}

fn validate_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// Outcome of one B.4.1 formula.
///
/// `Undefined` covers both the explicit zero-divisor guards (hds = 0 in
/// formula 1, Pd = 0 in formulas 2/3) and a denominator within 0.001 of
/// zero. A defined value is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FormulaResult {
    /// The formula produced a finite bound (m)
    Value(f64),
    /// The formula cannot be computed for these inputs
    Undefined,
}

impl FormulaResult {
    /// The computed bound, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            FormulaResult::Value(v) => Some(*v),
            FormulaResult::Undefined => None,
        }
    }

    /// True when the formula produced a value
    pub fn is_defined(&self) -> bool {
        matches!(self, FormulaResult::Value(_))
    }

    /// Wrap a computed value, mapping any non-finite outcome to `Undefined`.
    fn from_computed(value: f64) -> Self {
        if value.is_finite() {
            FormulaResult::Value(value)
        } else {
            FormulaResult::Undefined
        }
    }
}

/// Recommended design value derived from the three bounds.
///
/// The three variants map to three distinct messages in any renderer:
/// a usable design value, a constraint conflict (check the inputs), or an
/// incomplete evaluation (some formula could not be computed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignRecommendation {
    /// All bounds are defined and compatible; `p` satisfies
    /// P1 <= p = max(P1, P3) < P2
    Recommended { p: f64 },
    /// All bounds are defined but max(P1, P3) >= P2
    Conflict,
    /// At least one formula is `Undefined`
    Incomplete,
}

/// One auxiliary design-parameter check (sections B.4.2 to B.4.4).
///
/// `actual` and `required` are pre-formatted display strings so a renderer
/// can show the comparison without re-deriving the floors.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Reverse-curve radius",
///   "actual": "R = 2.00 m",
///   "required": "≥ 2.00 m (2.5·hdc)",
///   "passed": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCheck {
    /// Parameter name (e.g., "Reverse-curve radius")
    pub label: String,

    /// The supplied value, formatted for display
    pub actual: String,

    /// The requirement, formatted for display
    pub required: String,

    /// Whether the parameter meets the requirement (boundaries inclusive)
    pub passed: bool,
}

/// Complete result of one drop-sill evaluation.
///
/// Every field is computed on every call: a formula reporting `Undefined`
/// never suppresses the other formulas or the parameter checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "p1": { "type": "Value", "value": 0.0553 },
///   "p2": { "type": "Value", "value": 1.6364 },
///   "p3": { "type": "Value", "value": 8.1429 },
///   "recommendation": { "type": "Conflict" },
///   "checks": [
///     { "label": "Top-surface inclination", "actual": "θ = 5°", "required": "0° ~ 10°", "passed": true },
///     { "label": "Reverse-curve radius", "actual": "R = 2.00 m", "required": "≥ 2.00 m (2.5·hdc)", "passed": true },
///     { "label": "Sill length", "actual": "Lm = 1.20 m", "required": "≥ 1.20 m (1.5·hdc)", "passed": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSillResult {
    /// Minimum sill height per B.4.1-1 (P >= P1)
    pub p1: FormulaResult,

    /// Maximum sill height per B.4.1-2 (P < P2)
    pub p2: FormulaResult,

    /// Optimized minimum sill height per B.4.1-3 (P > P3)
    pub p3: FormulaResult,

    /// Recommended design value, or why none exists
    pub recommendation: DesignRecommendation,

    /// The three design-parameter checks, in B.4.2 to B.4.4 order
    pub checks: [ThresholdCheck; 3],
}

impl DropSillResult {
    /// Render the defined bounds as display lines, e.g. `"P ≥ 0.0553 m"`.
    ///
    /// Undefined formulas are skipped, matching the partial-failure model:
    /// the range summary shows whatever bounds exist.
    pub fn bounds(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(p1) = self.p1.value() {
            lines.push(format!("P ≥ {:.4} m  ({})", p1, standard::code_ref::FORMULA_1));
        }
        if let Some(p2) = self.p2.value() {
            lines.push(format!("P < {:.4} m  ({})", p2, standard::code_ref::FORMULA_2));
        }
        if let Some(p3) = self.p3.value() {
            lines.push(format!("P > {:.4} m  ({})", p3, standard::code_ref::FORMULA_3));
        }
        lines
    }

    /// True when all three design-parameter checks pass
    pub fn all_checks_pass(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// Formula B.4.1-1: minimum sill height for basic energy dissipation.
///
/// P1 = 0.186 * hk^2.75 / hds^1.75. With hds = 0 the quotient is not
/// finite and the result is `Undefined`.
pub fn formula_b411(hk: f64, hds: f64) -> FormulaResult {
    let p1 = standard::F1_COEFFICIENT * hk.powf(standard::F1_HK_EXPONENT)
        / hds.powf(standard::F1_HDS_EXPONENT);
    FormulaResult::from_computed(p1)
}

/// Formula B.4.1-2: maximum sill height accounting for gate-sill influence.
///
/// P2 = (2.24*hk - hds) / (1.48*hk/Pd - 0.84), `Undefined` when Pd = 0 or
/// the denominator is within 0.001 of zero.
pub fn formula_b412(hk: f64, hds: f64, pd: f64) -> FormulaResult {
    ratio_bound(
        hk,
        hds,
        pd,
        standard::F2_HK_COEFFICIENT,
        standard::F2_RATIO_COEFFICIENT,
        standard::F2_OFFSET,
    )
}

/// Formula B.4.1-3: optimized minimum sill height.
///
/// P3 = (2.38*hk - hds) / (1.81*hk/Pd - 1.16), with the same guards as
/// formula B.4.1-2.
pub fn formula_b413(hk: f64, hds: f64, pd: f64) -> FormulaResult {
    ratio_bound(
        hk,
        hds,
        pd,
        standard::F3_HK_COEFFICIENT,
        standard::F3_RATIO_COEFFICIENT,
        standard::F3_OFFSET,
    )
}

/// Shared shape of formulas B.4.1-2 and B.4.1-3:
/// (a*hk - hds) / (b*hk/Pd - c)
fn ratio_bound(hk: f64, hds: f64, pd: f64, a: f64, b: f64, c: f64) -> FormulaResult {
    if pd == 0.0 {
        return FormulaResult::Undefined;
    }
    let denominator = b * (hk / pd) - c;
    if !denominator.is_finite() || denominator.abs() <= standard::DENOMINATOR_EPSILON {
        return FormulaResult::Undefined;
    }
    FormulaResult::from_computed((a * hk - hds) / denominator)
}

/// Derive the recommended design value from the three bounds.
///
/// P1 is a hard lower bound, P3 the optimized lower bound, P2 the upper
/// bound. The candidate takes the stricter of the two minimums, never an
/// average, and must stay under P2.
pub fn recommend(p1: FormulaResult, p2: FormulaResult, p3: FormulaResult) -> DesignRecommendation {
    let (Some(p1), Some(p2), Some(p3)) = (p1.value(), p2.value(), p3.value()) else {
        return DesignRecommendation::Incomplete;
    };

    let p_rec = p1.max(p3);
    if p_rec < p2 {
        DesignRecommendation::Recommended { p: p_rec }
    } else {
        DesignRecommendation::Conflict
    }
}

/// Check the auxiliary design parameters of sections B.4.2 through B.4.4.
///
/// All three checks always run; none short-circuits the others. The floors
/// for R and Lm scale with hdc, so hdc = 0 makes both floors zero and any
/// non-negative value passes. Boundaries are inclusive.
pub fn check_thresholds(params: &DesignParameters, hdc: f64) -> [ThresholdCheck; 3] {
    let r_min = standard::RADIUS_HDC_RATIO * hdc;
    let lm_min = standard::LENGTH_HDC_RATIO * hdc;

    [
        ThresholdCheck {
            label: "Top-surface inclination".to_string(),
            actual: format!("θ = {}°", params.theta_deg),
            required: format!(
                "{}° ~ {}°",
                standard::THETA_MIN_DEG,
                standard::THETA_MAX_DEG
            ),
            passed: (standard::THETA_MIN_DEG..=standard::THETA_MAX_DEG)
                .contains(&params.theta_deg),
        },
        ThresholdCheck {
            label: "Reverse-curve radius".to_string(),
            actual: format!("R = {:.2} m", params.r),
            required: format!("≥ {:.2} m ({}·hdc)", r_min, standard::RADIUS_HDC_RATIO),
            passed: params.r >= r_min,
        },
        ThresholdCheck {
            label: "Sill length".to_string(),
            actual: format!("Lm = {:.2} m", params.lm),
            required: format!("≥ {:.2} m ({}·hdc)", lm_min, standard::LENGTH_HDC_RATIO),
            passed: params.lm >= lm_min,
        },
    ]
}

/// Evaluate one complete drop-sill scenario.
///
/// Validates the inputs, then computes the three B.4.1 bounds, the design
/// recommendation, and the three parameter checks. Each piece is computed
/// independently: an `Undefined` formula still leaves the other formulas
/// and all checks in the result.
///
/// # Arguments
///
/// * `inputs` - Hydraulic measurements for this scenario
/// * `params` - Auxiliary design parameters
///
/// # Returns
///
/// * `Ok(DropSillResult)` - The complete structured result
/// * `Err(CalcError)` - If any input is negative or non-finite
pub fn evaluate(
    inputs: &HydraulicInputs,
    params: &DesignParameters,
) -> CalcResult<DropSillResult> {
    inputs.validate()?;
    params.validate()?;

    let p1 = formula_b411(inputs.hk, inputs.hds);
    let p2 = formula_b412(inputs.hk, inputs.hds, inputs.pd);
    let p3 = formula_b413(inputs.hk, inputs.hds, inputs.pd);

    Ok(DropSillResult {
        p1,
        p2,
        p3,
        recommendation: recommend(p1, p2, p3),
        checks: check_thresholds(params, inputs.hdc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_inputs() -> HydraulicInputs {
        HydraulicInputs {
            hk: 1.0,
            hdc: 0.8,
            hds: 2.0,
            pd: 1.5,
        }
    }

    fn test_params() -> DesignParameters {
        DesignParameters {
            theta_deg: 5,
            r: 2.0,
            lm: 1.2,
        }
    }

    #[test]
    fn test_formula_1_reference_value() {
        // P1 = 0.186 * 1^2.75 / 2^1.75 = 0.0553
        let p1 = formula_b411(1.0, 2.0);
        assert!((p1.value().unwrap() - 0.0553).abs() < 0.0001);
    }

    #[test]
    fn test_formula_1_monotonic() {
        let base = formula_b411(1.0, 2.0).value().unwrap();
        // Increasing in hk
        assert!(formula_b411(1.5, 2.0).value().unwrap() > base);
        // Decreasing in hds
        assert!(formula_b411(1.0, 3.0).value().unwrap() < base);
    }

    #[test]
    fn test_formula_1_zero_tailwater() {
        assert_eq!(formula_b411(1.0, 0.0), FormulaResult::Undefined);
        // 0/0 must also land in Undefined, not NaN
        assert_eq!(formula_b411(0.0, 0.0), FormulaResult::Undefined);
    }

    #[test]
    fn test_formula_2_reference_value() {
        // D2 = 1.48*(1/1.5) - 0.84 = 0.1467, P2 = (2.24 - 2)/0.1467 = 1.636
        let p2 = formula_b412(1.0, 2.0, 1.5);
        assert!((p2.value().unwrap() - 1.636).abs() < 0.01);
    }

    #[test]
    fn test_formula_2_near_singular() {
        // Pd = 1.48/0.84 puts the denominator at exactly zero
        let pd = 1.48 / 0.84;
        assert_eq!(formula_b412(1.0, 2.0, pd), FormulaResult::Undefined);
    }

    #[test]
    fn test_formula_2_zero_offset() {
        assert_eq!(formula_b412(1.0, 2.0, 0.0), FormulaResult::Undefined);
    }

    #[test]
    fn test_formula_3_reference_value() {
        // D3 = 1.81*(1/1.5) - 1.16 = 0.0467, P3 = (2.38 - 2)/0.0467 = 8.14
        let p3 = formula_b413(1.0, 2.0, 1.5);
        assert!((p3.value().unwrap() - 8.14).abs() < 0.01);
    }

    #[test]
    fn test_formula_3_near_singular() {
        let pd = 1.81 / 1.16;
        assert_eq!(formula_b413(1.0, 2.0, pd), FormulaResult::Undefined);
    }

    #[test]
    fn test_recommend_takes_stricter_minimum() {
        let rec = recommend(
            FormulaResult::Value(1.0),
            FormulaResult::Value(5.0),
            FormulaResult::Value(2.0),
        );
        // max(P1, P3) = 2.0, not an average of the two minimums
        assert_eq!(rec, DesignRecommendation::Recommended { p: 2.0 });
    }

    #[test]
    fn test_recommend_conflict() {
        // max(P1, P3) = 6.0 >= P2 = 5.0
        let rec = recommend(
            FormulaResult::Value(1.0),
            FormulaResult::Value(5.0),
            FormulaResult::Value(6.0),
        );
        assert_eq!(rec, DesignRecommendation::Conflict);

        // Equality also conflicts: the upper bound is strict
        let rec = recommend(
            FormulaResult::Value(1.0),
            FormulaResult::Value(5.0),
            FormulaResult::Value(5.0),
        );
        assert_eq!(rec, DesignRecommendation::Conflict);
    }

    #[test]
    fn test_recommend_incomplete() {
        let rec = recommend(
            FormulaResult::Value(1.0),
            FormulaResult::Undefined,
            FormulaResult::Value(2.0),
        );
        assert_eq!(rec, DesignRecommendation::Incomplete);
    }

    #[test]
    fn test_thresholds_boundaries_inclusive() {
        // r_min = 2.5*0.8 = 2.0, lm_min = 1.5*0.8 = 1.2: exact equality passes
        let checks = check_thresholds(&test_params(), 0.8);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_thresholds_failures() {
        let params = DesignParameters {
            theta_deg: 11,
            r: 1.9,
            lm: 1.0,
        };
        let checks = check_thresholds(&params, 0.8);
        assert!(!checks[0].passed);
        assert!(!checks[1].passed);
        assert!(!checks[2].passed);
    }

    #[test]
    fn test_thresholds_zero_hdc() {
        // hdc = 0 makes both floors zero; no division by hdc anywhere
        let params = DesignParameters {
            theta_deg: 0,
            r: 0.0,
            lm: 0.0,
        };
        let checks = check_thresholds(&params, 0.0);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_evaluate_defaults() {
        let result = evaluate(&test_inputs(), &test_params()).unwrap();

        assert!((result.p1.value().unwrap() - 0.0553).abs() < 0.0001);
        assert!((result.p2.value().unwrap() - 1.636).abs() < 0.01);
        assert!((result.p3.value().unwrap() - 8.14).abs() < 0.01);

        // max(P1, P3) = 8.14 >= P2 = 1.64 for the seed scenario
        assert_eq!(result.recommendation, DesignRecommendation::Conflict);
        assert!(result.all_checks_pass());
        assert_eq!(result.bounds().len(), 3);
    }

    #[test]
    fn test_evaluate_partial_failure() {
        let inputs = HydraulicInputs {
            pd: 0.0,
            ..test_inputs()
        };
        let result = evaluate(&inputs, &test_params()).unwrap();

        // Formula 1 and the checks survive the dead formulas 2 and 3
        assert!(result.p1.is_defined());
        assert_eq!(result.p2, FormulaResult::Undefined);
        assert_eq!(result.p3, FormulaResult::Undefined);
        assert_eq!(result.recommendation, DesignRecommendation::Incomplete);
        assert!(result.all_checks_pass());
        assert_eq!(result.bounds().len(), 1);
    }

    #[test]
    fn test_evaluate_idempotent() {
        let first = evaluate(&test_inputs(), &test_params()).unwrap();
        let second = evaluate(&test_inputs(), &test_params()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_rejects_negative_input() {
        let inputs = HydraulicInputs {
            hds: -2.0,
            ..test_inputs()
        };
        assert!(evaluate(&inputs, &test_params()).is_err());

        let params = DesignParameters {
            r: -1.0,
            ..test_params()
        };
        assert!(evaluate(&test_inputs(), &params).is_err());
    }

    #[test]
    fn test_evaluate_rejects_non_finite_input() {
        let inputs = HydraulicInputs {
            hk: f64::NAN,
            ..test_inputs()
        };
        assert!(evaluate(&inputs, &test_params()).is_err());
    }

    #[test]
    fn test_serialization() {
        let result = evaluate(&test_inputs(), &test_params()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: DropSillResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);

        let inputs = test_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        let roundtrip: HydraulicInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, roundtrip);
    }
}
