//! CO2 emissions of the delivered energy and the stepped split of the CO2
//! cost between landlord and tenant (CO2KostAufG).

use std::cmp::Ordering;

/// Floor area assumed when none is given, in m².
pub const DEFAULT_AREA_M2: f64 = 100.0;

/// Lower bounds of the specific-emission steps in kg CO2/m²a.
const SHARE_THRESHOLDS: [f64; 9] = [12.0, 17.0, 22.0, 27.0, 32.0, 37.0, 42.0, 47.0, 52.0];

/// Landlord share for each step, below the first bound up to at or above the last.
const LANDLORD_SHARES: [f64; 10] = [0.0, 0.10, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 0.90];

/// Energy that has to be bought to cover `heat_demand`.
///
/// `divisor` is the conversion efficiency as a fraction or the seasonal
/// performance factor. A divisor that is zero, negative or not finite gives zero.
pub fn delivered_energy(heat_demand: f64, divisor: f64) -> f64 {
    if divisor.is_finite() && divisor > 0.0 {
        heat_demand / divisor
    } else {
        0.0
    }
}

/// Annual emissions in t CO2 for `energy` kWh at `factor` kg/kWh.
pub fn annual_tons(energy: f64, factor: f64) -> f64 {
    energy * factor / 1000.0
}

/// Specific emissions in kg CO2/m²a.
pub fn specific_emissions(tons: f64, area: f64) -> f64 {
    tons * 1000.0 / effective_area(area)
}

pub fn effective_area(area: f64) -> f64 {
    if area > 0.0 { area } else { DEFAULT_AREA_M2 }
}

/// Fraction of the CO2 cost borne by the landlord for a specific emission.
///
/// A NaN intensity is below no bound and lands on the top step.
pub fn landlord_share(kg_per_m2: f64) -> f64 {
    let step = SHARE_THRESHOLDS
        .iter()
        .take_while(|&threshold| kg_per_m2.partial_cmp(threshold) != Some(Ordering::Less))
        .count();
    LANDLORD_SHARES[step]
}

/// CO2 figures of one technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionProfile {
    pub delivered_energy: f64,
    pub tons_per_year: f64,
    pub kg_per_m2: f64,
    pub landlord_share: f64,
}

impl EmissionProfile {
    pub fn new(delivered_energy: f64, emission_factor: f64, area: f64) -> Self {
        let tons_per_year = annual_tons(delivered_energy, emission_factor);
        let kg_per_m2 = specific_emissions(tons_per_year, area);
        Self {
            delivered_energy,
            tons_per_year,
            kg_per_m2,
            landlord_share: landlord_share(kg_per_m2),
        }
    }

    /// CO2 cost of one year at `carbon_price` €/t, split between landlord and tenant.
    pub fn carbon_cost(&self, carbon_price: f64) -> CarbonCost {
        let total = self.tons_per_year * carbon_price;
        CarbonCost {
            total,
            landlord: total * self.landlord_share,
            tenant: total * (1.0 - self.landlord_share),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarbonCost {
    pub total: f64,
    pub landlord: f64,
    pub tenant: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(11.999, 0.0)]
    #[case(12.0, 0.10)]
    #[case(16.99, 0.10)]
    #[case(17.0, 0.20)]
    #[case(22.0, 0.30)]
    #[case(26.5, 0.30)]
    #[case(27.0, 0.40)]
    #[case(32.0, 0.50)]
    #[case(37.0, 0.60)]
    #[case(41.99, 0.60)]
    #[case(42.0, 0.70)]
    #[case(47.0, 0.80)]
    #[case(51.99, 0.80)]
    #[case(52.0, 0.90)]
    #[case(500.0, 0.90)]
    fn test_landlord_share_steps(#[case] kg_per_m2: f64, #[case] share: f64) {
        assert_eq!(landlord_share(kg_per_m2), share);
    }

    #[test]
    fn test_landlord_share_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        for i in 0..=1200 {
            let share = landlord_share(i as f64 * 0.05);
            assert!((0.0..=0.9).contains(&share));
            assert!(share >= previous);
            previous = share;
        }
    }

    #[test]
    fn test_landlord_share_of_nan_is_top_step() {
        assert_eq!(landlord_share(f64::NAN), 0.9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_divisor_gives_no_energy(#[case] divisor: f64) {
        assert_eq!(delivered_energy(30000.0, divisor), 0.0);
    }

    #[test]
    fn test_delivered_energy() {
        assert_relative_eq!(delivered_energy(30000.0, 0.9), 33333.333333, epsilon = 1e-6);
        assert_eq!(delivered_energy(30000.0, 3.0), 10000.0);
    }

    #[test]
    fn test_area_defaults_when_not_positive() {
        assert_eq!(effective_area(0.0), DEFAULT_AREA_M2);
        assert_eq!(effective_area(-20.0), DEFAULT_AREA_M2);
        assert_eq!(effective_area(f64::NAN), DEFAULT_AREA_M2);
        assert_eq!(specific_emissions(1.0, 0.0), 10.0);
    }

    #[test]
    fn test_oil_profile() {
        // 30 MWh heat at 90 % with heating oil on 500 m²
        let energy = delivered_energy(30000.0, 0.9);
        let profile = EmissionProfile::new(energy, 0.266, 500.0);
        assert_relative_eq!(profile.tons_per_year, 8.866667, epsilon = 1e-6);
        assert_relative_eq!(profile.kg_per_m2, 17.733333, epsilon = 1e-6);
        assert_eq!(profile.landlord_share, 0.20);
    }

    #[test]
    fn test_carbon_cost_split_adds_up() {
        let profile = EmissionProfile::new(40000.0, 0.266, 200.0);
        let cost = profile.carbon_cost(100.0);
        assert_relative_eq!(cost.total, 1064.0, epsilon = 1e-9);
        assert_eq!(profile.landlord_share, 0.90);
        assert_relative_eq!(cost.landlord + cost.tenant, cost.total, epsilon = 1e-9);
    }

    #[test]
    fn test_renewable_electricity_has_no_carbon_cost() {
        let profile = EmissionProfile::new(10000.0, 0.0, 500.0);
        assert_eq!(profile.carbon_cost(292.5), CarbonCost::default());
    }
}
