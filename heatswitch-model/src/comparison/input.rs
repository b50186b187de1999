use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::building::carrier::{ElectricCarrier, FossilCarrier};
use crate::subsidy::SubsidyResult;

/// Named CO2 price trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./comparison.ts")]
pub enum CarbonPriceScenario {
    #[schema(rename = "Sehr niedrig")]
    #[serde(rename = "Sehr niedrig")]
    VeryLow,
    #[schema(rename = "Niedrig")]
    #[serde(rename = "Niedrig")]
    Low,
    /// Consensus trajectory of the expert survey.
    #[schema(rename = "Experten")]
    #[serde(rename = "Experten")]
    Expert,
    #[schema(rename = "Hoch")]
    #[serde(rename = "Hoch")]
    High,
    #[schema(rename = "Sehr hoch")]
    #[serde(rename = "Sehr hoch")]
    VeryHigh,
}

impl CarbonPriceScenario {
    pub const ALL: [CarbonPriceScenario; 5] = [
        CarbonPriceScenario::VeryLow,
        CarbonPriceScenario::Low,
        CarbonPriceScenario::Expert,
        CarbonPriceScenario::High,
        CarbonPriceScenario::VeryHigh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CarbonPriceScenario::VeryLow => "Sehr niedrig",
            CarbonPriceScenario::Low => "Niedrig",
            CarbonPriceScenario::Expert => "Experten",
            CarbonPriceScenario::High => "Hoch",
            CarbonPriceScenario::VeryHigh => "Sehr hoch",
        }
    }

    /// Resolve a scenario from its wire name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == name)
    }
}

/// One comparison request: a fossil baseline against a heat pump.
///
/// Prices are given in ct/kWh and rates, efficiency in percent, exactly as the
/// form collects them. Normalisation happens in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct SimulationInput {
    /// Useful heat demand in kWh/year.
    pub heat_demand: f64,
    /// Heated floor area in m².
    pub area: f64,
    /// Number of dwellings.
    pub units: f64,
    /// Horizon in years, rounded and clamped to at least 1.
    pub years: f64,
    /// Carbon price trajectory name. Unknown names price CO2 at zero.
    pub scenario: String,

    pub carrier_fossil: FossilCarrier,
    #[serde(rename = "carrierHP")]
    pub carrier_heat_pump: ElectricCarrier,

    /// Fossil system investment in €.
    pub invest_fossil: f64,
    /// Fossil conversion efficiency in %.
    #[serde(rename = "effFossil")]
    pub efficiency_fossil: f64,
    /// Fossil price in ct/kWh in the first year.
    #[serde(rename = "priceFossil0")]
    pub price_fossil: f64,
    /// Fossil price escalation in %/year.
    #[serde(rename = "incFossil")]
    pub price_increase_fossil: f64,
    /// Fossil maintenance in €/year.
    #[serde(rename = "maintFossil")]
    pub maintenance_fossil: f64,

    /// Heat pump investment in €.
    #[serde(rename = "investHP")]
    pub invest_heat_pump: f64,
    /// Subsidy granted on the heat pump investment in €.
    #[serde(rename = "subsidyHP")]
    pub subsidy_heat_pump: f64,
    /// Seasonal performance factor (JAZ).
    #[serde(rename = "jaz")]
    pub performance_factor: f64,
    /// Electricity price in ct/kWh in the first year.
    #[serde(rename = "priceEl0")]
    pub price_electricity: f64,
    /// Electricity price escalation in %/year.
    #[serde(rename = "incEl")]
    pub price_increase_electricity: f64,
    /// Heat pump maintenance in €/year.
    #[serde(rename = "maintHP")]
    pub maintenance_heat_pump: f64,

    /// Calendar year of the first simulated year. Defaults to the current year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
}

impl SimulationInput {
    /// Heat pump investment net of subsidy.
    pub fn heat_pump_net_investment(&self) -> f64 {
        self.invest_heat_pump - self.subsidy_heat_pump
    }

    /// Take over a computed subsidy, rounded to whole euros.
    pub fn apply_subsidy(&mut self, subsidy: &SubsidyResult) {
        self.subsidy_heat_pump = subsidy.funding_amount.round();
    }
}

impl Default for SimulationInput {
    /// Oil-heated multi-family house with four dwellings.
    fn default() -> Self {
        Self {
            heat_demand: 30000.0,
            area: 500.0,
            units: 4.0,
            years: 20.0,
            scenario: CarbonPriceScenario::Expert.name().to_string(),

            carrier_fossil: FossilCarrier::HeatingOil,
            carrier_heat_pump: ElectricCarrier::GridMix,

            invest_fossil: 30000.0,
            efficiency_fossil: 90.0,
            price_fossil: 10.0,
            price_increase_fossil: 3.0,
            maintenance_fossil: 800.0,

            invest_heat_pump: 60000.0,
            subsidy_heat_pump: 15000.0,
            performance_factor: 3.0,
            price_electricity: 30.0,
            price_increase_electricity: 2.0,
            maintenance_heat_pump: 600.0,

            start_year: None,
        }
    }
}
