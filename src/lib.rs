//! An interactive demonstration of the [LMS](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! (least mean squares) adaptive filter applied to a second order
//! [autoregressive](https://en.wikipedia.org/wiki/Autoregressive_model) process.
//!
//! Given a sample count `N`, two initial values `u1`, `u2` and a step size `mu`,
//! a simulation run
//! * draws `N` samples of uniform noise `v(n)` in `[0, 1)`,
//! * generates the AR process `u(n) = 0.75 u(n-1) - 0.5 u(n-2) + v(n)`,
//! * estimates the correlation matrix `R` and the cross correlation vector `p`
//! of the regressor `x(n) = [v(n), v(n-1)]` and solves `R w = p` for the optimal weights,
//! * runs a 2 tap LMS filter over the same data, recording the squared
//! error and both weights at every step.
//!
//! The results can be turned into chart data (see [`chart`]) and the same
//! algorithm can be emitted as GNU Octave source code (see [`codegen`]).
//!
//! Degenerate input is not guarded against. `N < 2` or a singular `R`
//! produce infinite or NaN values that flow through to the results.
//!
//! # Examples
//!
//! ```
//! use lms_ar::ar::UniformNoise;
//! use lms_ar::{simulate_with_noise, Params};
//!
//! let params = Params::new(500, 0.0, 0.0, 0.1);
//! let mut noise = UniformNoise::seeded(123);
//! let simulation = simulate_with_noise(&params, &mut noise);
//!
//! assert_eq!(simulation.mse.len(), 500);
//! assert_eq!(simulation.w1[0], 0.0);
//! assert!(simulation.w_opt[0].is_finite());
//! ```

pub mod ar;
pub mod chart;
pub mod codegen;
pub mod common;
pub mod lms;
mod params;
mod simulator;
pub mod stats;

pub use params::{ParamError, Params, RawParams};
pub use simulator::{simulate, simulate_with_noise, Simulation, Summary};
