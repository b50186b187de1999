use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// A value for each of the two compared technologies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct TechPair {
    pub fossil: f64,
    pub heat_pump: f64,
}

impl TechPair {
    pub fn new(fossil: f64, heat_pump: f64) -> Self {
        Self { fossil, heat_pump }
    }

    /// Fossil minus heat pump. Positive when the heat pump is cheaper.
    pub fn difference(&self) -> f64 {
        self.fossil - self.heat_pump
    }
}

/// A yearly series for each of the two compared technologies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct TechSeries {
    pub fossil: Vec<f64>,
    pub heat_pump: Vec<f64>,
}

impl TechSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fossil: Vec::with_capacity(capacity),
            heat_pump: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: TechPair) {
        self.fossil.push(value.fossil);
        self.heat_pump.push(value.heat_pump);
    }

    pub fn len(&self) -> usize {
        self.fossil.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fossil.is_empty()
    }

    /// Both values at a 0-based index.
    pub fn get(&self, index: usize) -> Option<TechPair> {
        Some(TechPair::new(
            *self.fossil.get(index)?,
            *self.heat_pump.get(index)?,
        ))
    }

    pub fn last(&self) -> Option<TechPair> {
        Some(TechPair::new(*self.fossil.last()?, *self.heat_pump.last()?))
    }
}

/// Stakeholder perspective on the heating costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "./comparison.ts")]
pub enum Role {
    /// Self-using owner, bears every cost component.
    Owner,
    /// Bears the investment, maintenance and the landlord's CO2 share.
    Landlord,
    /// Bears the energy bill and the remaining CO2 share.
    Tenant,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Landlord, Role::Tenant];
}

/// Outcome of the payback scan for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "./comparison.ts")]
pub enum Payback {
    /// The role bears no extra investment for the heat pump.
    NotApplicable,
    /// The heat pump does not catch up within the horizon.
    NotAchieved,
    /// First 1-based year at which the heat pump's cumulative cost is no higher.
    Year(u32),
}

impl Payback {
    pub fn year(&self) -> Option<u32> {
        match self {
            Payback::Year(year) => Some(*year),
            _ => None,
        }
    }
}

/// Per-technology values for each role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct RoleCosts {
    pub owner: TechPair,
    pub landlord: TechPair,
    pub tenant: TechPair,
}

/// A single amount for each role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct RoleAmounts {
    pub owner: f64,
    pub landlord: f64,
    pub tenant: f64,
}

/// One simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct YearRecord {
    /// 1-based position within the horizon.
    pub year_index: u32,
    /// Calendar year.
    pub year: i32,
    /// CO2 price in €/t.
    pub carbon_price: f64,
    /// Specific emissions in kg CO2/m²a for this year.
    pub emission_intensity: TechPair,
    /// Fraction of the CO2 cost borne by the landlord.
    pub landlord_share: TechPair,
    pub fuel_cost: TechPair,
    pub carbon_cost: TechPair,
    pub annual_cost: RoleCosts,
    /// Running sum of (fossil - heat pump) annual cost.
    pub cumulative_savings: RoleAmounts,
}

/// Totals, payback and cumulative series of one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct RoleOutcome {
    pub role: Role,
    /// Cumulative cost at the end of the horizon.
    pub total: TechPair,
    /// Fossil total minus heat pump total.
    pub savings: f64,
    pub payback: Payback,
    /// Cumulative cost including the upfront investment, one entry per year.
    pub cumulative: TechSeries,
}

/// Static emission figures of one technology, derived from first-year consumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct TechnologyEmissions {
    /// Final energy (fuel or electricity) in kWh/year.
    pub delivered_energy: f64,
    pub tons_per_year: f64,
    /// Nominal specific emissions in kg CO2/m²a.
    pub kg_per_m2: f64,
    /// Landlord share matching the nominal specific emissions.
    pub landlord_share: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct EmissionSummary {
    pub fossil: TechnologyEmissions,
    pub heat_pump: TechnologyEmissions,
}

/// Full comparison over the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "./comparison.ts")]
pub struct SimulationResult {
    pub start_year: i32,
    /// Horizon actually simulated.
    pub years: u32,
    pub heat_pump_net_investment: f64,
    /// Net heat pump investment minus fossil investment.
    pub extra_investment: f64,
    pub emissions: EmissionSummary,
    pub owner: RoleOutcome,
    pub landlord: RoleOutcome,
    pub tenant: RoleOutcome,
    pub rows: Vec<YearRecord>,
}

impl SimulationResult {
    pub fn role(&self, role: Role) -> &RoleOutcome {
        match role {
            Role::Owner => &self.owner,
            Role::Landlord => &self.landlord,
            Role::Tenant => &self.tenant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payback_wire_format() {
        assert_eq!(
            serde_json::to_string(&Payback::NotApplicable).unwrap(),
            "\"not_applicable\""
        );
        assert_eq!(
            serde_json::to_string(&Payback::NotAchieved).unwrap(),
            "\"not_achieved\""
        );
        assert_eq!(serde_json::to_string(&Payback::Year(7)).unwrap(), "{\"year\":7}");
        assert_eq!(Payback::Year(7).year(), Some(7));
        assert_eq!(Payback::NotAchieved.year(), None);
    }

    #[test]
    fn test_series_accessors() {
        let mut series = TechSeries::with_capacity(2);
        assert!(series.is_empty());
        series.push(TechPair::new(1.0, 2.0));
        series.push(TechPair::new(3.0, 4.0));
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(0), Some(TechPair::new(1.0, 2.0)));
        assert_eq!(series.last(), Some(TechPair::new(3.0, 4.0)));
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn test_difference_sign() {
        assert_eq!(TechPair::new(10.0, 4.0).difference(), 6.0);
    }
}
