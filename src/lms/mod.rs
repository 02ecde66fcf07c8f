//! [Least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! adaptive filter with two taps.
//!
//! # Examples
//! ## System identification
//!
//! The desired signal is a fixed two tap FIR filter applied to the input.
//! The expected result is convergence to the same coefficients.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use lms_ar::lms::LmsFilter;
//!
//! let sample_count = 5000;
//! let mut rng = StdRng::seed_from_u64(123);
//! let x: Vec<f64> = (0..sample_count).map(|_| rng.gen_range(-1.0..1.0)).collect();
//!
//! let mut filter = LmsFilter::new(0.1);
//! for i in 1..sample_count {
//!     let d = 0.8 * x[i] - 0.3 * x[i - 1];
//!     filter.update([x[i], x[i - 1]], d);
//! }
//!
//! assert!((filter.weights()[0] - 0.8).abs() < 1e-3);
//! assert!((filter.weights()[1] + 0.3).abs() < 1e-3);
//! ```

mod lms_filter;
mod trace;

pub use lms_filter::LmsFilter;
pub use trace::LmsTrace;
