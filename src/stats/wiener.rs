use super::correlation::Correlation;

/// `det(R) = R00 R11 - R01 R10`
pub fn determinant(r: &[[f64; 2]; 2]) -> f64 {
    r[0][0] * r[1][1] - r[0][1] * r[1][0]
}

/// Solves `R w = p` using the explicit inverse of the 2x2 matrix `R`.
///
/// A singular `R` is not special cased. The division by a zero
/// determinant yields infinite or NaN weights.
pub fn optimal_weights(correlation: &Correlation) -> [f64; 2] {
    let r = &correlation.r;
    let p = &correlation.p;
    let det = determinant(r);
    [
        (r[1][1] * p[0] - r[0][1] * p[1]) / det,
        (-r[1][0] * p[0] + r[0][0] * p[1]) / det,
    ]
}
