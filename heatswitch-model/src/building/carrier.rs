use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Fuel burnt by the fossil baseline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./carrier.ts")]
pub enum FossilCarrier {
    #[schema(rename = "Erdgas")]
    #[serde(rename = "Erdgas")]
    NaturalGas,
    #[schema(rename = "Flüssiggas")]
    #[serde(rename = "Flüssiggas")]
    LiquefiedPetroleumGas,
    #[schema(rename = "Heizöl")]
    #[serde(rename = "Heizöl")]
    HeatingOil,
    #[schema(rename = "Pellets")]
    #[serde(rename = "Pellets")]
    Pellets,
}

impl FossilCarrier {
    pub const ALL: [FossilCarrier; 4] = [
        FossilCarrier::NaturalGas,
        FossilCarrier::LiquefiedPetroleumGas,
        FossilCarrier::HeatingOil,
        FossilCarrier::Pellets,
    ];

    /// CO2 emitted per kWh of delivered energy, in kg/kWh.
    pub fn emission_factor(&self) -> f64 {
        match self {
            FossilCarrier::NaturalGas => 0.201,
            FossilCarrier::LiquefiedPetroleumGas => 0.239,
            FossilCarrier::HeatingOil => 0.266,
            FossilCarrier::Pellets => 0.036,
        }
    }

    /// Name used on the wire and in reports.
    pub fn label(&self) -> &'static str {
        match self {
            FossilCarrier::NaturalGas => "Erdgas",
            FossilCarrier::LiquefiedPetroleumGas => "Flüssiggas",
            FossilCarrier::HeatingOil => "Heizöl",
            FossilCarrier::Pellets => "Pellets",
        }
    }
}

/// Electricity supply of the heat pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./carrier.ts")]
pub enum ElectricCarrier {
    /// Grid mix.
    #[schema(rename = "Strom Stromix")]
    #[serde(rename = "Strom Stromix")]
    GridMix,
    /// Certified renewable tariff, accounted as emission free.
    #[schema(rename = "Strom Erneuerbar")]
    #[serde(rename = "Strom Erneuerbar")]
    Renewable,
}

impl ElectricCarrier {
    pub const ALL: [ElectricCarrier; 2] = [ElectricCarrier::GridMix, ElectricCarrier::Renewable];

    /// CO2 emitted per kWh of electricity, in kg/kWh.
    pub fn emission_factor(&self) -> f64 {
        match self {
            ElectricCarrier::GridMix => 0.107,
            ElectricCarrier::Renewable => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElectricCarrier::GridMix => "Strom Stromix",
            ElectricCarrier::Renewable => "Strom Erneuerbar",
        }
    }
}
