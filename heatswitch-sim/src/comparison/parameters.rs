use chrono::Datelike;
use heatswitch_model::{SimulationInput, TechPair};
use tracing::debug;

use crate::general::emissions::effective_area;
use crate::general::energy_price::EscalatingPrice;

/// Upper bound on the simulated horizon in years.
pub const MAX_HORIZON_YEARS: usize = 100;

/// Normalised simulation parameters: SI-ish units, fractions instead of
/// percentages and every defensive default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub start_year: i32,
    pub years: usize,
    pub scenario: String,

    // Building
    pub heat_demand: f64, // kWh/year
    pub area: f64,        // m², never zero

    // Conversion
    pub efficiency_fossil: f64,    // fraction
    pub performance_factor: f64,   // JAZ
    pub emission_factor: TechPair, // kg CO2/kWh delivered

    // Prices in €/kWh with annual escalation as fraction
    pub price_fossil: EscalatingPrice,
    pub price_electricity: EscalatingPrice,

    // Costs in €
    pub maintenance: TechPair, // per year
    pub investment: TechPair,  // fossil gross, heat pump net of subsidy
}

impl SimulationParameters {
    pub fn from_input(input: &SimulationInput, start_year: i32) -> Self {
        let years = horizon_years(input.years);
        let area = effective_area(input.area);
        if area != input.area {
            debug!(area = input.area, used = area, "floor area defaulted");
        }

        Self {
            start_year,
            years,
            scenario: input.scenario.clone(),

            heat_demand: input.heat_demand,
            area,

            efficiency_fossil: input.efficiency_fossil / 100.0,
            performance_factor: input.performance_factor,
            emission_factor: TechPair::new(
                input.carrier_fossil.emission_factor(),
                input.carrier_heat_pump.emission_factor(),
            ),

            price_fossil: EscalatingPrice::new(
                input.price_fossil / 100.0,
                input.price_increase_fossil / 100.0,
            ),
            price_electricity: EscalatingPrice::new(
                input.price_electricity / 100.0,
                input.price_increase_electricity / 100.0,
            ),

            maintenance: TechPair::new(input.maintenance_fossil, input.maintenance_heat_pump),
            investment: TechPair::new(input.invest_fossil, input.heat_pump_net_investment()),
        }
    }
}

/// Whole number of simulated years, at least one.
pub fn horizon_years(years: f64) -> usize {
    if !years.is_finite() || years < 1.0 {
        debug!(years, "horizon defaulted to one year");
        return 1;
    }
    (years.round() as usize).clamp(1, MAX_HORIZON_YEARS)
}

/// Calendar year used when the request does not fix one.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
