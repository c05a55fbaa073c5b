//! Pearson's r with a two-sided p-value.
//!
//! p-value via Student's t with n−2 degrees of freedom,
//! t = r · sqrt((n−2) / (1 − r²)).

use statrs::distribution::{ContinuousCDF, StudentsT};

use segloan_core::errors::CorrelationError;

/// Correlation coefficient and its two-sided significance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonResult {
    pub correlation: f64,
    pub p_value: f64,
}

/// Compute Pearson's correlation coefficient between two equal-length
/// vectors, with a two-sided p-value.
///
/// Requires n ≥ 3 (the t-test needs positive degrees of freedom) and
/// non-zero variance in both vectors. |r| = 1 gives p = 0.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<PearsonResult, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(CorrelationError::TooFewObservations { n });
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || !var_x.is_finite() {
        return Err(CorrelationError::ZeroVariance {
            vector: "x".to_string(),
        });
    }
    if var_y <= 0.0 || !var_y.is_finite() {
        return Err(CorrelationError::ZeroVariance {
            vector: "y".to_string(),
        });
    }

    let r = (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0);

    let df = n_f - 2.0;
    let denom = 1.0 - r * r;
    let p_value = if denom <= f64::EPSILON {
        0.0 // perfectly linear
    } else {
        let t = r * (df / denom).sqrt();
        match StudentsT::new(0.0, 1.0, df) {
            Ok(t_dist) => {
                let p = 2.0 * (1.0 - t_dist.cdf(t.abs()));
                p.clamp(0.0, 1.0)
            }
            Err(_) => f64::NAN,
        }
    };

    Ok(PearsonResult {
        correlation: r,
        p_value,
    })
}
