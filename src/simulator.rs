use serde::Serialize;
use tracing::{debug, warn};

use crate::ar::{ArSignal, NoiseSource, UniformNoise};
use crate::common::F64ArrayExt;
use crate::lms::LmsTrace;
use crate::params::Params;
use crate::stats::{determinant, optimal_weights, Correlation};

/// The result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub params: Params,
    /// Squared prediction error per step
    pub mse: Vec<f64>,
    /// First LMS weight per step
    pub w1: Vec<f64>,
    /// Second LMS weight per step
    pub w2: Vec<f64>,
    /// Optimal weights, solution of `R w = p`
    pub w_opt: [f64; 2],
    pub correlation: Correlation,
}

/// Key figures of a simulation run. Non-finite values are passed through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// LMS weights after the last step
    pub final_weights: [f64; 2],
    /// Euclidean distance between the final LMS weights and the optimal weights
    pub weight_error: f64,
    /// Mean squared error averaged over the last 10% of the steps
    pub steady_state_mse: f64,
    /// Largest absolute LMS weight over the run. Not finite if the weights diverged.
    pub peak_weight: f64,
}

/// Runs a simulation with fresh, unseeded noise. Calling this twice
/// with the same parameters gives different results.
pub fn simulate(params: &Params) -> Simulation {
    simulate_with_noise(params, &mut UniformNoise::new())
}

/// Runs a simulation with noise drawn from `noise`.
pub fn simulate_with_noise<N: NoiseSource + ?Sized>(params: &Params, noise: &mut N) -> Simulation {
    let signal = ArSignal::generate(params.sample_count, params.u1, params.u2, noise);
    let correlation = Correlation::estimate(&signal.v, &signal.u);
    let w_opt = optimal_weights(&correlation);
    let trace = LmsTrace::run(&signal.v, &signal.u, params.mu);

    debug!(
        n = params.sample_count,
        mu = params.mu,
        det = determinant(&correlation.r),
        w_opt1 = w_opt[0],
        w_opt2 = w_opt[1],
        "simulated lms on ar process"
    );
    if !w_opt.all_finite() {
        warn!(
            n = params.sample_count,
            "correlation matrix is singular, optimal weights are not finite"
        );
    }
    let peak = peak_weight(&trace.w1, &trace.w2);
    if !peak.is_finite() {
        warn!(mu = params.mu, peak, "lms weights diverged");
    }

    let LmsTrace { w1, w2, mse } = trace;
    Simulation {
        params: *params,
        mse,
        w1,
        w2,
        w_opt,
        correlation,
    }
}

impl Simulation {
    pub fn len(&self) -> usize {
        self.mse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mse.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let final_weights = [
            self.w1.last().copied().unwrap_or(0.0),
            self.w2.last().copied().unwrap_or(0.0),
        ];
        let d1 = final_weights[0] - self.w_opt[0];
        let d2 = final_weights[1] - self.w_opt[1];
        Summary {
            final_weights,
            weight_error: (d1 * d1 + d2 * d2).sqrt(),
            steady_state_mse: self.mse.tail_mean(0.1),
            peak_weight: peak_weight(&self.w1, &self.w2),
        }
    }
}

fn peak_weight(w1: &[f64], w2: &[f64]) -> f64 {
    let (peak1, peak2) = (w1.peak_level(), w2.peak_level());
    if peak1.is_nan() || peak2.is_nan() {
        return f64::NAN;
    }
    peak1.max(peak2)
}
