//! Generation of [GNU Octave](https://www.gnu.org/software/octave/) source code
//! implementing the same simulation.
//!
//! The generator only interpolates the raw parameter strings into a fixed
//! template. No computed values end up in the generated code.
//!
//! The generated code uses Octave's 1-based indexing. `for i = 2:N` visits
//! the same samples as the 0-based `1..N` loops of [`crate::simulate`], and
//! the AR recursion starts at the 3rd sample in both.
//!
//! # Examples
//!
//! ```
//! use lms_ar::codegen::octave_source;
//! use lms_ar::RawParams;
//!
//! let source = octave_source(&RawParams::new("100", "0", "0.5", "0.05"));
//! assert!(source.starts_with("function lms_ar(N, u_init, mu)"));
//! assert!(source.ends_with("lms_ar(N, u_init, mu);"));
//! assert!(source.contains("u_init = [0, 0.5];"));
//! ```

mod octave;

pub use octave::{octave_source, write_source, CodegenError, DEFAULT_FILE_NAME};
