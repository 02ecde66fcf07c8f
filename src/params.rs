use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("missing parameter: {0}")]
    Missing(&'static str),

    #[error("parameter {name} is not a number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("sample count must be a non-negative integer: {0:?}")]
    InvalidSampleCount(String),
}

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Params {
    /// Number of samples, `N`
    pub sample_count: usize,
    /// Initial value `u(0)`
    pub u1: f64,
    /// Initial value `u(1)`
    pub u2: f64,
    /// LMS step size. Not range checked.
    pub mu: f64,
}

impl Params {
    pub fn new(sample_count: usize, u1: f64, u2: f64, mu: f64) -> Self {
        Params {
            sample_count,
            u1,
            u2,
            mu,
        }
    }

    /// Builds parameters from plain numbers, e.g. values handed over by a
    /// front end that only knows floating point numbers. `sample_count`
    /// must be a whole, non-negative number.
    pub fn try_from_numbers(
        sample_count: f64,
        u1: f64,
        u2: f64,
        mu: f64,
    ) -> Result<Self, ParamError> {
        let sample_count = checked_sample_count(sample_count, || sample_count.to_string())?;
        Ok(Params::new(sample_count, u1, u2, mu))
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(50, 0.0, 0.0, 0.1)
    }
}

/// Parameters exactly as entered by the user. The code generator
/// interpolates these strings verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawParams {
    pub n: String,
    pub u1: String,
    pub u2: String,
    pub mu: String,
}

impl Default for RawParams {
    fn default() -> Self {
        RawParams {
            n: "50".into(),
            u1: "0".into(),
            u2: "0".into(),
            mu: "0.1".into(),
        }
    }
}

impl RawParams {
    pub fn new(n: &str, u1: &str, u2: &str, mu: &str) -> Self {
        RawParams {
            n: n.into(),
            u1: u1.into(),
            u2: u2.into(),
            mu: mu.into(),
        }
    }

    /// Parses the strings. Only checks that every value is a number and
    /// that `N` is a whole, non-negative number.
    pub fn parse(&self) -> Result<Params, ParamError> {
        Ok(Params {
            sample_count: parse_sample_count(&self.n)?,
            u1: parse_number("u1", &self.u1)?,
            u2: parse_number("u2", &self.u2)?,
            mu: parse_number("mu", &self.mu)?,
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, ParamError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParamError::Missing(name));
    }
    trimmed.parse::<f64>().map_err(|_| ParamError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

fn parse_sample_count(value: &str) -> Result<usize, ParamError> {
    let n = parse_number("N", value)?;
    checked_sample_count(n, || value.to_string())
}

fn checked_sample_count<F: FnOnce() -> String>(n: f64, raw: F) -> Result<usize, ParamError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n >= (usize::MAX as f64) {
        return Err(ParamError::InvalidSampleCount(raw()));
    }
    Ok(n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let params = RawParams::new("200", "0.5", "-1", "1e-2").parse().unwrap();
        assert_eq!(params, Params::new(200, 0.5, -1.0, 0.01));

        let params = RawParams::new(" 50.0 ", "0", "0", "-3").parse().unwrap();
        assert_eq!(params.sample_count, 50);
        assert_eq!(params.mu, -3.0);
    }

    #[test]
    fn test_default_parses_to_default() {
        assert_eq!(RawParams::default().parse(), Ok(Params::default()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            RawParams::new("", "0", "0", "0.1").parse(),
            Err(ParamError::Missing("N"))
        );
        assert_eq!(
            RawParams::new("10", "abc", "0", "0.1").parse(),
            Err(ParamError::InvalidNumber {
                name: "u1",
                value: "abc".into()
            })
        );
        for n in ["12.5", "-3", "inf", "NaN"].iter() {
            assert_eq!(
                RawParams::new(n, "0", "0", "0.1").parse(),
                Err(ParamError::InvalidSampleCount(n.to_string()))
            );
        }
    }

    #[test]
    fn test_from_numbers() {
        assert_eq!(
            Params::try_from_numbers(20.0, 1.0, 2.0, 0.5),
            Ok(Params::new(20, 1.0, 2.0, 0.5))
        );
        assert_eq!(
            Params::try_from_numbers(2.5, 0.0, 0.0, 0.1),
            Err(ParamError::InvalidSampleCount("2.5".into()))
        );
        assert!(Params::try_from_numbers(f64::NAN, 0.0, 0.0, 0.1).is_err());
    }

    #[test]
    fn test_sample_count_overflow() {
        // usize::MAX as f64 rounds up to 2^64
        let too_large = 2f64.powi(64);
        assert_eq!(
            Params::try_from_numbers(too_large, 0.0, 0.0, 0.1),
            Err(ParamError::InvalidSampleCount(too_large.to_string()))
        );
        assert_eq!(
            RawParams::new("18446744073709551616", "0", "0", "0.1").parse(),
            Err(ParamError::InvalidSampleCount("18446744073709551616".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        let error = RawParams::new("10", "0", "0", "fast").parse().unwrap_err();
        assert_eq!(error.to_string(), "parameter mu is not a number: \"fast\"");
    }
}
