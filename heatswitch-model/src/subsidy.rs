use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::comparison::input::SimulationInput;

/// Funding programme branch selected by building use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./subsidy.ts")]
pub enum BuildingClass {
    #[schema(rename = "wohn")]
    #[serde(rename = "wohn")]
    Residential,
    #[schema(rename = "nichtwohn")]
    #[serde(rename = "nichtwohn")]
    NonResidential,
}

/// Bonus flags. Residential flags are ignored for non-residential buildings and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[serde(default)]
#[ts(export, export_to = "./subsidy.ts")]
pub struct SubsidyBonuses {
    /// Replacement of a working fossil heating (+20 points).
    #[serde(rename = "wohnKlimaBonus")]
    pub climate_speed: bool,
    /// Low household income (+30 points).
    #[serde(rename = "wohnEinkommensBonus")]
    pub income: bool,
    /// Natural refrigerant or ground source (+5 points).
    #[serde(rename = "wohnEffizienzBonus")]
    pub efficiency: bool,
    /// Efficiency bonus of the non-residential branch (+5 points).
    #[serde(rename = "nwgEffizienzBonus")]
    pub non_residential_efficiency: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./subsidy.ts")]
pub struct SubsidyInput {
    #[serde(rename = "art")]
    pub building_class: BuildingClass,
    /// Investment in €.
    #[serde(rename = "invest")]
    pub investment: f64,
    /// Net floor area in m², used by the non-residential ceiling.
    #[serde(default)]
    pub area: f64,
    /// Number of dwellings, used by the residential ceiling.
    #[serde(default)]
    pub units: f64,
    #[serde(flatten)]
    pub bonuses: SubsidyBonuses,
}

impl SubsidyInput {
    /// Subsidy request for the heat pump of a comparison.
    pub fn for_comparison(
        input: &SimulationInput,
        building_class: BuildingClass,
        bonuses: SubsidyBonuses,
    ) -> Self {
        Self {
            building_class,
            investment: input.invest_heat_pump,
            area: input.area,
            units: input.units,
            bonuses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./subsidy.ts")]
pub struct SubsidyResult {
    #[serde(rename = "art")]
    pub building_class: BuildingClass,
    #[serde(rename = "invest")]
    pub investment: f64,
    /// Funding rate in percentage points.
    #[serde(rename = "foerderProzent")]
    pub funding_percent: f64,
    #[serde(rename = "foerderEuro")]
    pub funding_amount: f64,
    /// Investment minus funding.
    #[serde(rename = "restInvest")]
    pub remaining_investment: f64,
    /// Eligible basis, present only when the ceiling capped the investment.
    #[serde(rename = "begrenztAuf")]
    pub capped_basis: Option<f64>,
    /// Residential cost ceiling.
    #[serde(rename = "kostenobergrenze")]
    pub cost_ceiling: Option<f64>,
    /// Non-residential maximum eligible amount.
    #[serde(rename = "foerderhoechstbetragNWG")]
    pub funding_ceiling: Option<f64>,
}

impl SubsidyResult {
    pub fn is_capped(&self) -> bool {
        self.capped_basis.is_some()
    }
}
