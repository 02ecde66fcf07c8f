use super::noise::NoiseSource;

/// The coefficients `[a1, a2]` of `u(n) = a1 u(n-1) + a2 u(n-2) + v(n)`.
pub const AR_COEFFS: [f64; 2] = [0.75, -0.5];

/// Draws `sample_count` noise samples from `noise`.
pub fn generate_noise<N: NoiseSource + ?Sized>(sample_count: usize, noise: &mut N) -> Vec<f64> {
    let mut v = vec![0.0; sample_count];
    noise.fill(&mut v[..]);
    v
}

/// Generates the AR process driven by the noise sequence `v`.
/// The result has the same length as `v`.
///
/// `u1` and `u2` are assigned to the first two samples. If `v` is
/// shorter than two samples, only the initial values that fit are kept
/// and the recursion does not run. `v(0)` and `v(1)` are not used.
pub fn generate_ar(v: &[f64], u1: f64, u2: f64) -> Vec<f64> {
    let sample_count = v.len();
    let mut u = vec![0.0; sample_count];
    if sample_count > 0 {
        u[0] = u1;
    }
    if sample_count > 1 {
        u[1] = u2;
    }

    let [a1, a2] = AR_COEFFS;
    for i in 2..sample_count {
        u[i] = a1 * u[i - 1] + a2 * u[i - 2] + v[i];
    }
    u
}

/// A noise sequence and the AR process it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct ArSignal {
    /// Noise, `v(n)`
    pub v: Vec<f64>,
    /// AR process, `u(n)`
    pub u: Vec<f64>,
}

impl ArSignal {
    pub fn generate<N: NoiseSource + ?Sized>(
        sample_count: usize,
        u1: f64,
        u2: f64,
        noise: &mut N,
    ) -> Self {
        let v = generate_noise(sample_count, noise);
        let u = generate_ar(&v[..], u1, u2);
        ArSignal { v, u }
    }

    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }
}
