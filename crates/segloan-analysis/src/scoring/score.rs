//! The borrowability formula.

/// Compute the borrowability score for one segment.
///
/// `q_s`: relative borrowing frequency (SEGBO count over the PHOIBLE
/// inventory count).
/// `f_s`: baseline relative frequency (corrected PHOIBLE count over the
/// PHOIBLE inventory count).
///
/// score = q_s / f_s / (1 − f_s), optionally divided by 6 when the
/// dormant `divide_by_six` model variant is enabled.
///
/// `f_s = 1` makes the second factor zero and the result `inf`; the
/// model leaves this unguarded (known limitation, Laplace smoothing is
/// the intended mitigation).
pub fn borrowability_score(q_s: f64, f_s: f64, divide_by_six: bool) -> f64 {
    if divide_by_six {
        q_s / f_s / (1.0 - f_s) / 6.0
    } else {
        q_s / f_s / (1.0 - f_s)
    }
}
