//! # Drop-Sill Calculator CLI
//!
//! Terminal front-end for the B.4.1 drop-sill height calculation.
//! Collects the hydraulic inputs and design parameters, runs one
//! evaluation, and prints a sectioned report plus the structured JSON
//! result for downstream tooling.

use std::io::{self, BufRead, Write};

use sill_core::calculations::drop_sill::{
    evaluate, DesignParameters, DesignRecommendation, FormulaResult, HydraulicInputs,
};
use sill_core::standard;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_theta(prompt: &str, default: i32) -> i32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Drop-Sill Calculator - Standard B.4.1 ~ B.4.4");
    println!("=============================================");
    println!();

    let seed_inputs = HydraulicInputs::default();
    let seed_params = DesignParameters::default();

    let inputs = HydraulicInputs {
        hk: prompt_f64("hk  - critical depth above sill (m) [1.0]: ", seed_inputs.hk),
        hdc: prompt_f64("hdc - contracted depth above sill (m) [0.8]: ", seed_inputs.hdc),
        hds: prompt_f64("hds - tailwater depth after sill (m) [2.0]: ", seed_inputs.hds),
        pd: prompt_f64("Pd  - gate-sill/riverbed offset (m) [1.5]: ", seed_inputs.pd),
    };
    let params = DesignParameters {
        theta_deg: prompt_theta("θ   - top-surface inclination (°) [5]: ", seed_params.theta_deg),
        r: prompt_f64("R   - reverse-curve radius (m) [2.0]: ", seed_params.r),
        lm: prompt_f64("Lm  - sill length (m) [1.2]: ", seed_params.lm),
    };

    println!();

    match evaluate(&inputs, &params) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  SILL HEIGHT CALCULATION");
            println!("═══════════════════════════════════════");
            println!();
            print_formula(standard::code_ref::FORMULA_1, "minimum height", result.p1);
            print_formula(standard::code_ref::FORMULA_2, "upper limit", result.p2);
            print_formula(standard::code_ref::FORMULA_3, "optimized minimum", result.p3);
            println!();
            println!("Allowable range for P:");
            let bounds = result.bounds();
            if bounds.is_empty() {
                println!("  (no formula could be computed)");
            }
            for line in &bounds {
                println!("  {}", line);
            }
            println!();
            match result.recommendation {
                DesignRecommendation::Recommended { p } => {
                    println!("Recommended sill height: P = {:.4} m", p);
                }
                DesignRecommendation::Conflict => {
                    println!("Constraint conflict - the bounds admit no value; check the inputs");
                }
                DesignRecommendation::Incomplete => {
                    println!("Some formulas could not be computed; check the inputs");
                }
            }
            println!();
            println!("Design Parameter Checks:");
            for check in &result.checks {
                println!(
                    "  {} {}: {} (required {})",
                    status_icon(check.passed),
                    check.label,
                    check.actual,
                    check.required
                );
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  PARAMETERS: {}",
                if result.all_checks_pass() { "PASS" } else { "REVIEW" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for tooling/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_formula(code: &str, role: &str, result: FormulaResult) {
    match result.value() {
        Some(p) => println!("  {} ({}): {:.4} m", code, role, p),
        None => println!("  {} ({}): cannot compute for these inputs", code, role),
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
