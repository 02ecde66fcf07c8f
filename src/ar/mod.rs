//! Generation of the noise driven second order autoregressive process
//!
//! `u(n) = 0.75 u(n-1) - 0.5 u(n-2) + v(n)`
//!
//! where `v(n)` is uniform noise in `[0, 1)` and `u(0)`, `u(1)` are
//! given initial values.
//!
//! # Examples
//!
//! ```
//! use lms_ar::ar::{generate_ar, FixedNoise, NoiseSource};
//!
//! let mut noise = FixedNoise::new(&[0.1, 0.2, 0.3, 0.4]);
//! let mut v = vec![0.0; 4];
//! noise.fill(&mut v);
//!
//! let u = generate_ar(&v, 0.0, 0.0);
//! assert_eq!(u.len(), 4);
//! assert!((u[2] - 0.3).abs() < 1e-12);
//! assert!((u[3] - 0.625).abs() < 1e-12);
//! ```

mod noise;
mod signal_generator;

pub use noise::{FixedNoise, NoiseSource, UniformNoise};
pub use signal_generator::{generate_ar, generate_noise, ArSignal, AR_COEFFS};
