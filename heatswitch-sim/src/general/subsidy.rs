//! Funding rate and eligible-cost ceilings of the federal heating subsidy
//! (BEG EM), residential and non-residential branch.

use heatswitch_model::{BuildingClass, SubsidyBonuses, SubsidyInput, SubsidyResult};
use tracing::debug;

use crate::errors::SubsidyError;

const BASE_PERCENT: f64 = 30.0;
const CLIMATE_SPEED_BONUS: f64 = 20.0;
const INCOME_BONUS: f64 = 30.0;
const EFFICIENCY_BONUS: f64 = 5.0;
const MAX_RESIDENTIAL_PERCENT: f64 = 70.0;

/// Residential cost ceiling in € for a number of dwellings.
///
/// 30,000 for the first dwelling, 15,000 for each of the 2nd to 6th, 8,000 for
/// every further one. A missing or non-positive count is one dwelling.
pub fn residential_cost_ceiling(units: f64) -> f64 {
    let units = if units.is_finite() && units > 0.0 { units } else { 1.0 };
    if units <= 1.0 {
        30000.0
    } else if units <= 6.0 {
        30000.0 + (units - 1.0) * 15000.0
    } else {
        30000.0 + 5.0 * 15000.0 + (units - 6.0) * 8000.0
    }
}

/// Non-residential maximum eligible amount in € for a net floor area in m².
///
/// 30,000 up to 150 m², then 200 €/m² up to 400 m², 120 €/m² up to 1000 m² and
/// 80 €/m² beyond. Without a usable area nothing is eligible.
pub fn non_residential_funding_ceiling(area: f64) -> f64 {
    if !area.is_finite() || area <= 0.0 {
        return 0.0;
    }
    let mut ceiling = 30000.0;
    if area > 150.0 {
        ceiling += (area.min(400.0) - 150.0) * 200.0;
    }
    if area > 400.0 {
        ceiling += (area.min(1000.0) - 400.0) * 120.0;
    }
    if area > 1000.0 {
        ceiling += (area - 1000.0) * 80.0;
    }
    ceiling
}

/// Funding rate in percentage points.
pub fn funding_percent(building_class: BuildingClass, bonuses: &SubsidyBonuses) -> f64 {
    match building_class {
        BuildingClass::Residential => {
            let mut percent = BASE_PERCENT;
            if bonuses.climate_speed {
                percent += CLIMATE_SPEED_BONUS;
            }
            if bonuses.income {
                percent += INCOME_BONUS;
            }
            if bonuses.efficiency {
                percent += EFFICIENCY_BONUS;
            }
            percent.min(MAX_RESIDENTIAL_PERCENT)
        }
        BuildingClass::NonResidential => {
            if bonuses.non_residential_efficiency {
                BASE_PERCENT + EFFICIENCY_BONUS
            } else {
                BASE_PERCENT
            }
        }
    }
}

/// Estimate the grant for an investment.
///
/// Fails when the investment is not a positive finite amount.
pub fn calculate_subsidy(input: &SubsidyInput) -> Result<SubsidyResult, SubsidyError> {
    let investment = input.investment;
    if !investment.is_finite() || investment <= 0.0 {
        return Err(SubsidyError::InvalidInvestment(investment));
    }

    let percent = funding_percent(input.building_class, &input.bonuses);
    let (ceiling, cost_ceiling, funding_ceiling) = match input.building_class {
        BuildingClass::Residential => {
            let ceiling = residential_cost_ceiling(input.units);
            (ceiling, Some(ceiling), None)
        }
        BuildingClass::NonResidential => {
            let ceiling = non_residential_funding_ceiling(input.area);
            (ceiling, None, Some(ceiling))
        }
    };

    let basis = investment.min(ceiling);
    let capped_basis = (basis < investment).then_some(basis);
    let funding_amount = basis * percent / 100.0;
    debug!(
        building_class = ?input.building_class,
        investment,
        percent,
        ceiling,
        funding_amount,
        "subsidy estimated"
    );

    Ok(SubsidyResult {
        building_class: input.building_class,
        investment,
        funding_percent: percent,
        funding_amount,
        remaining_investment: investment - funding_amount,
        capped_basis,
        cost_ceiling,
        funding_ceiling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(
        building_class: BuildingClass,
        investment: f64,
        area: f64,
        units: f64,
    ) -> SubsidyInput {
        SubsidyInput {
            building_class,
            investment,
            area,
            units,
            bonuses: SubsidyBonuses::default(),
        }
    }

    #[rstest]
    #[case(1.0, 30000.0)]
    #[case(2.0, 45000.0)]
    #[case(4.0, 75000.0)]
    #[case(6.0, 105000.0)]
    #[case(7.0, 113000.0)]
    #[case(10.0, 137000.0)]
    #[case(0.0, 30000.0)]
    #[case(-3.0, 30000.0)]
    #[case(f64::NAN, 30000.0)]
    fn test_residential_ceiling(#[case] units: f64, #[case] ceiling: f64) {
        assert_eq!(residential_cost_ceiling(units), ceiling);
    }

    #[rstest]
    #[case(100.0, 30000.0)]
    #[case(150.0, 30000.0)]
    #[case(400.0, 80000.0)]
    #[case(500.0, 92000.0)]
    #[case(1000.0, 152000.0)]
    #[case(1500.0, 192000.0)]
    #[case(0.0, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    fn test_non_residential_ceiling(#[case] area: f64, #[case] ceiling: f64) {
        assert_eq!(non_residential_funding_ceiling(area), ceiling);
    }

    #[rstest]
    #[case(false, false, false, 30.0)]
    #[case(true, false, false, 50.0)]
    #[case(false, true, false, 60.0)]
    #[case(false, false, true, 35.0)]
    #[case(true, true, false, 70.0)]
    #[case(true, true, true, 70.0)]
    fn test_residential_percent(
        #[case] climate_speed: bool,
        #[case] income: bool,
        #[case] efficiency: bool,
        #[case] percent: f64,
    ) {
        let bonuses = SubsidyBonuses {
            climate_speed,
            income,
            efficiency,
            non_residential_efficiency: false,
        };
        assert_eq!(funding_percent(BuildingClass::Residential, &bonuses), percent);
    }

    #[test]
    fn test_non_residential_ignores_residential_bonuses() {
        let bonuses = SubsidyBonuses {
            climate_speed: true,
            income: true,
            efficiency: true,
            non_residential_efficiency: false,
        };
        assert_eq!(funding_percent(BuildingClass::NonResidential, &bonuses), 30.0);
        let bonuses = SubsidyBonuses {
            non_residential_efficiency: true,
            ..SubsidyBonuses::default()
        };
        assert_eq!(funding_percent(BuildingClass::NonResidential, &bonuses), 35.0);
        assert_eq!(funding_percent(BuildingClass::Residential, &bonuses), 30.0);
    }

    #[test]
    fn test_residential_below_ceiling() {
        let result =
            calculate_subsidy(&request(BuildingClass::Residential, 60000.0, 500.0, 4.0)).unwrap();
        assert_eq!(result.funding_percent, 30.0);
        assert_eq!(result.cost_ceiling, Some(75000.0));
        assert_eq!(result.funding_ceiling, None);
        assert_eq!(result.funding_amount, 18000.0);
        assert_eq!(result.remaining_investment, 42000.0);
        assert_eq!(result.capped_basis, None);
    }

    #[test]
    fn test_non_residential_capped() {
        let input = request(BuildingClass::NonResidential, 200000.0, 500.0, 0.0);
        let result = calculate_subsidy(&input).unwrap();
        assert_eq!(result.funding_ceiling, Some(92000.0));
        assert_eq!(result.capped_basis, Some(92000.0));
        assert_eq!(result.funding_amount, 27600.0);
        assert_eq!(result.remaining_investment, 200000.0 - 27600.0);
        assert!(result.is_capped());
    }

    #[test]
    fn test_non_residential_without_area_funds_nothing() {
        let result =
            calculate_subsidy(&request(BuildingClass::NonResidential, 50000.0, 0.0, 0.0)).unwrap();
        assert_eq!(result.funding_amount, 0.0);
        assert_eq!(result.capped_basis, Some(0.0));
        assert_eq!(result.remaining_investment, 50000.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10000.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_investment_is_rejected(#[case] investment: f64) {
        let result =
            calculate_subsidy(&request(BuildingClass::Residential, investment, 100.0, 1.0));
        assert!(matches!(result, Err(SubsidyError::InvalidInvestment(_))));
    }

    #[test]
    fn test_funding_never_exceeds_capped_basis() {
        for investment in [1.0, 9999.5, 30000.0, 75000.0, 75001.0, 250000.0] {
            for units in [1.0, 3.0, 8.0] {
                let mut input = request(BuildingClass::Residential, investment, 0.0, units);
                input.bonuses.income = true;
                input.bonuses.climate_speed = true;
                let result = calculate_subsidy(&input).unwrap();
                let basis = investment.min(residential_cost_ceiling(units));
                assert!(result.funding_amount <= result.funding_percent / 100.0 * basis + 1e-9);
                assert_eq!(result.remaining_investment, investment - result.funding_amount);
            }
        }
    }
}
