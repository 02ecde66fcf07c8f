/// A two tap adaptive [least mean squares filter](https://en.wikipedia.org/wiki/Least_mean_squares_filter).
/// Using the same notation as in the linked description.
#[derive(Debug, Clone, PartialEq)]
pub struct LmsFilter {
    /// FIR filter coefficients
    w: [f64; 2],
    /// Step size
    μ: f64,
}

impl LmsFilter {
    pub fn new(mu: f64) -> Self {
        LmsFilter { w: [0.0; 2], μ: mu }
    }

    pub fn weights(&self) -> [f64; 2] {
        self.w
    }

    pub fn step_size(&self) -> f64 {
        self.μ
    }

    /// The filter output `y = wᵀx` for the regressor `x`.
    pub fn predict(&self, x: [f64; 2]) -> f64 {
        self.w[0] * x[0] + self.w[1] * x[1]
    }

    /// Filters the regressor `x = [x(n), x(n-1)]`, adapts the coefficients
    /// towards the desired output `d` and returns the error `e = d - y`.
    ///
    /// The update is not normalized or clamped. A step size that is large
    /// compared to the input power makes the weights grow without bound.
    pub fn update(&mut self, x: [f64; 2], d: f64) -> f64 {
        let y = self.predict(x);
        let e = d - y;
        self.w[0] += self.μ * x[0] * e;
        self.w[1] += self.μ * x[1] * e;
        e
    }

    pub fn reset(&mut self) {
        self.w = [0.0; 2];
    }
}
