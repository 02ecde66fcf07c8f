use serde::Serialize;

use super::lms_filter::LmsFilter;

/// Weights and squared error recorded at every step of an LMS run.
/// All three sequences have the length of the input and start at 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LmsTrace {
    pub w1: Vec<f64>,
    pub w2: Vec<f64>,
    pub mse: Vec<f64>,
}

impl LmsTrace {
    /// Predicts `u(n)` from the regressor `[v(n), v(n-1)]` for `n = 1..N-1`,
    /// adapting the weights with step size `mu` after every sample.
    ///
    /// # Panics
    ///
    /// Panics if `v` and `u` have different lengths.
    pub fn run(v: &[f64], u: &[f64], mu: f64) -> Self {
        assert_eq!(v.len(), u.len(), "Noise and signal lengths differ.");
        let sample_count = v.len();

        let mut w1 = vec![0.0; sample_count];
        let mut w2 = vec![0.0; sample_count];
        let mut mse = vec![0.0; sample_count];

        let mut filter = LmsFilter::new(mu);
        for i in 1..sample_count {
            let e = filter.update([v[i], v[i - 1]], u[i]);
            let [h1, h2] = filter.weights();
            w1[i] = h1;
            w2[i] = h2;
            mse[i] = e * e;
        }

        LmsTrace { w1, w2, mse }
    }

    pub fn len(&self) -> usize {
        self.mse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mse.is_empty()
    }

    /// The weights after the last update.
    pub fn final_weights(&self) -> Option<[f64; 2]> {
        match (self.w1.last(), self.w2.last()) {
            (Some(w1), Some(w2)) => Some([*w1, *w2]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::{ArSignal, UniformNoise};

    #[test]
    fn test_reference_values() {
        let v = [0.1, 0.2, 0.3, 0.4, 0.5];
        let u = [0.0, 0.0, 0.3, 0.625, 0.81875];
        let trace = LmsTrace::run(&v, &u, 0.1);

        let w1 = [0.0, 0.0, 0.009, 0.033784, 0.07338514];
        let w2 = [0.0, 0.0, 0.006, 0.024588, 0.056268912];
        let mse = [0.0, 0.0, 0.09, 0.38390416, 0.62730011571984];
        let epsilon = 1e-9;
        for i in 0..5 {
            assert!((trace.w1[i] - w1[i]).abs() <= epsilon);
            assert!((trace.w2[i] - w2[i]).abs() <= epsilon);
            assert!((trace.mse[i] - mse[i]).abs() <= epsilon);
        }
    }

    #[test]
    fn test_lengths_and_initial_values() {
        for sample_count in 2..20 {
            let mut noise = UniformNoise::seeded(sample_count as u64);
            let signal = ArSignal::generate(sample_count, 1.0, 1.0, &mut noise);
            let trace = LmsTrace::run(&signal.v, &signal.u, 0.05);
            assert_eq!(trace.w1.len(), sample_count);
            assert_eq!(trace.w2.len(), sample_count);
            assert_eq!(trace.mse.len(), sample_count);
            assert_eq!(trace.w1[0], 0.0);
            assert_eq!(trace.w2[0], 0.0);
            assert_eq!(trace.mse[0], 0.0);
        }
    }

    #[test]
    fn test_zero_step_size_does_not_learn() {
        let mut noise = UniformNoise::seeded(5);
        let signal = ArSignal::generate(300, 0.2, 0.4, &mut noise);
        let trace = LmsTrace::run(&signal.v, &signal.u, 0.0);
        for i in 0..signal.len() {
            assert_eq!(trace.w1[i], 0.0);
            assert_eq!(trace.w2[i], 0.0);
        }
        for i in 1..signal.len() {
            assert_eq!(trace.mse[i], signal.u[i] * signal.u[i]);
        }
    }

    #[test]
    fn test_empty_and_single_sample() {
        let trace = LmsTrace::run(&[], &[], 0.1);
        assert!(trace.is_empty());
        assert_eq!(trace.final_weights(), None);

        let trace = LmsTrace::run(&[0.3], &[2.0], 0.1);
        assert_eq!(trace.mse, vec![0.0]);
        assert_eq!(trace.final_weights(), Some([0.0, 0.0]));
    }
}
