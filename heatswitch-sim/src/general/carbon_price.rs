use std::sync::LazyLock;

use heatswitch_model::CarbonPriceScenario;
use indexmap::IndexMap;
use tracing::warn;

/// CO2 price of one calendar year in €/t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub year: i32,
    pub price: f64,
}

const FIRST_YEAR: i32 = 2024;
const LAST_YEAR: i32 = 2044;
const PRICE_FIRST_YEAR: f64 = 45.0;
const PRICE_SECOND_YEAR: f64 = 55.0;

/// Trajectories 2024..=2044. All start at 45 and 55 €/t and rise by a fixed step afterwards.
static SCENARIO_PRICES: LazyLock<IndexMap<CarbonPriceScenario, Vec<PricePoint>>> =
    LazyLock::new(|| {
        let mut table = IndexMap::new();
        table.insert(CarbonPriceScenario::VeryLow, trajectory(2.0));
        table.insert(CarbonPriceScenario::Low, trajectory(5.0));
        table.insert(CarbonPriceScenario::Expert, trajectory(12.5));
        table.insert(CarbonPriceScenario::High, trajectory(17.5));
        table.insert(CarbonPriceScenario::VeryHigh, trajectory(22.5));
        table
    });

fn trajectory(annual_step: f64) -> Vec<PricePoint> {
    (FIRST_YEAR..=LAST_YEAR)
        .map(|year| {
            let price = match year - FIRST_YEAR {
                0 => PRICE_FIRST_YEAR,
                offset => PRICE_SECOND_YEAR + annual_step * (offset - 1) as f64,
            };
            PricePoint { year, price }
        })
        .collect()
}

/// Defined trajectory of a scenario.
pub fn scenario_trajectory(scenario: CarbonPriceScenario) -> &'static [PricePoint] {
    SCENARIO_PRICES
        .get(&scenario)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Price of a calendar year. Any year outside the table keeps the last price.
pub fn price_for_year(trajectory: &[PricePoint], year: i32) -> f64 {
    trajectory
        .iter()
        .find(|point| point.year == year)
        .or(trajectory.last())
        .map_or(0.0, |point| point.price)
}

/// Carbon price for each simulated year, starting at `start_year`.
///
/// An unknown scenario name yields zeros: the carbon price is one driver among
/// several and the comparison stays meaningful without it.
pub fn scenario_prices(scenario: &str, start_year: i32, years: usize) -> Vec<f64> {
    let Some(scenario) = CarbonPriceScenario::from_name(scenario) else {
        warn!(scenario, "unknown carbon price scenario, pricing CO2 at zero");
        return vec![0.0; years];
    };
    let trajectory = scenario_trajectory(scenario);
    (0..years)
        .map(|offset| price_for_year(trajectory, start_year.saturating_add(offset as i32)))
        .collect()
}
