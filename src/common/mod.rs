//! Common utilities.

mod f64_array_ext;

pub use f64_array_ext::F64ArrayExt;
