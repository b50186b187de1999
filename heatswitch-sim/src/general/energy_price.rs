/// Unit energy price compounding at a fixed annual rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscalatingPrice {
    /// Price in €/kWh in the first simulated year.
    pub base: f64,
    /// Annual escalation as a fraction (0.03 for 3 %).
    pub rate: f64,
}

impl EscalatingPrice {
    pub fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    /// Price in the 0-based simulated year `year`. Year 0 is unescalated.
    pub fn at(&self, year: usize) -> f64 {
        self.base * (1.0 + self.rate).powf(year as f64)
    }

    /// Prices for the first `years` simulated years.
    pub fn path(&self, years: usize) -> Vec<f64> {
        (0..years).map(|year| self.at(year)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_year_is_base_price() {
        let price = EscalatingPrice::new(0.10, 0.03);
        assert_eq!(price.at(0), 0.10);
    }

    #[test]
    fn test_compounding() {
        let price = EscalatingPrice::new(0.30, 0.02);
        assert_relative_eq!(price.at(1), 0.306, epsilon = 1e-12);
        assert_relative_eq!(price.at(10), 0.30 * 1.02_f64.powi(10), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let path = EscalatingPrice::new(0.25, 0.0).path(5);
        assert_eq!(path, vec![0.25; 5]);
    }

    #[test]
    fn test_negative_rate_falls() {
        let path = EscalatingPrice::new(1.0, -0.1).path(3);
        assert_relative_eq!(path[2], 0.81, epsilon = 1e-12);
    }
}
