use serde::Serialize;

/// Estimated correlation matrix `R` of the regressor `x(n) = [v(n), v(n-1)]`
/// and cross correlation vector `p` between `x(n)` and `u(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    /// `R`, row major
    pub r: [[f64; 2]; 2],
    pub p: [f64; 2],
}

impl Correlation {
    /// Estimates `R` and `p` from the noise `v` and the AR process `u`.
    ///
    /// Both off diagonal entries of `R` are accumulated separately.
    ///
    /// # Panics
    ///
    /// Panics if `v` and `u` have different lengths.
    pub fn estimate(v: &[f64], u: &[f64]) -> Self {
        assert_eq!(v.len(), u.len(), "Noise and signal lengths differ.");

        let mut r = [[0.0; 2]; 2];
        let mut p = [0.0; 2];
        for i in 1..v.len() {
            let x1 = v[i];
            let x2 = v[i - 1];

            r[0][0] += x1 * x1;
            r[0][1] += x1 * x2;
            r[1][0] += x2 * x1;
            r[1][1] += x2 * x2;

            p[0] += x1 * u[i];
            p[1] += x2 * u[i];
        }

        // N - 1 is computed in floating point, so N = 1 gives 0/0
        // and N = 0 gives -0.
        let scale = (v.len() as f64) - 1.0;
        for row in r.iter_mut() {
            for value in row.iter_mut() {
                *value /= scale;
            }
        }
        for value in p.iter_mut() {
            *value /= scale;
        }

        Correlation { r, p }
    }

    /// `|R01 - R10|`
    pub fn asymmetry(&self) -> f64 {
        (self.r[0][1] - self.r[1][0]).abs()
    }
}
