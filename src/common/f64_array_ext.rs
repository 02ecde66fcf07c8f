//! `[f64]` extensions.

/// `[f64]` extensions.
pub trait F64ArrayExt {
    /// Returns the maximum absolute value. NaN if any element is NaN.
    fn peak_level(&self) -> f64;
    /// Returns the arithmetic mean.
    fn mean(&self) -> f64;
    /// Returns the arithmetic mean of the last `fraction` of the elements,
    /// using at least one element.
    fn tail_mean(&self, fraction: f64) -> f64;
    /// Returns true if no element is infinite or NaN.
    fn all_finite(&self) -> bool;
}

impl F64ArrayExt for [f64] {
    fn peak_level(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        };

        let mut max: f64 = 0.0;
        for sample in self.iter() {
            let value = sample.abs();
            if value.is_nan() {
                return f64::NAN;
            }
            if value > max {
                max = value
            }
        }
        max
    }

    fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        };
        self.iter().sum::<f64>() / (self.len() as f64)
    }

    fn tail_mean(&self, fraction: f64) -> f64 {
        let count = ((self.len() as f64) * fraction).ceil() as usize;
        let count = count.max(1).min(self.len());
        self[self.len() - count..].mean()
    }

    fn all_finite(&self) -> bool {
        self.iter().all(|value| value.is_finite())
    }
}
