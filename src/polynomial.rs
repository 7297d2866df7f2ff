/// Polynomial in the local segment parameter, coefficients ordered from the constant term up.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |result, c| result * x + c)
    }

    /// Derivative of given order. Orders above the degree give the zero polynomial.
    pub fn derivative(&self, order: usize) -> Polynomial {
        let coefficients = self.coefficients
            .iter()
            .enumerate()
            .skip(order)
            .map(|(power, c)| c * falling_factorial(power, order))
            .collect();
        Polynomial { coefficients }
    }
}

/// `power * (power - 1) * ... * (power - order + 1)`
fn falling_factorial(power: usize, order: usize) -> f64 {
    (0..order).fold(1.0, |multiplier, k| multiplier * (power - k) as f64)
}
