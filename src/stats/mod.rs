//! Second order statistics of the regressor `x(n) = [v(n), v(n-1)]`
//! and the corresponding optimal ([Wiener](https://en.wikipedia.org/wiki/Wiener_filter))
//! weights.
//!
//! The estimates are plain sums over `n = 1..N-1` normalized by `N - 1`.
//! Nothing is guarded: `N = 1` divides by zero, and a singular correlation
//! matrix gives non-finite optimal weights.

mod correlation;
mod wiener;

pub use correlation::Correlation;
pub use wiener::{determinant, optimal_weights};
