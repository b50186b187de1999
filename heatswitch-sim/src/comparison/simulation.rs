use heatswitch_model::{
    EmissionSummary, Role, RoleAmounts, RoleCosts, SimulationInput, SimulationResult, TechPair,
    TechnologyEmissions, YearRecord,
};
use tracing::debug;

use crate::comparison::parameters::{SimulationParameters, current_year};
use crate::general::carbon_price::scenario_prices;
use crate::general::emissions::{EmissionProfile, delivered_energy};
use crate::general::finance::{
    RoleLedger, RolePolicy, TechnologyYear, YearCostComponents, aggregate_role,
};

/// Compare fossil and heat pump heating over the requested horizon.
///
/// Without an explicit `start_year` the horizon starts in the current calendar year.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let start_year = input.start_year.unwrap_or_else(current_year);
    simulate_from(input, start_year)
}

/// Same as [`simulate`] with the first simulated calendar year fixed.
pub fn simulate_from(input: &SimulationInput, start_year: i32) -> SimulationResult {
    let params = SimulationParameters::from_input(input, start_year);
    run_simulation(&params)
}

/// Emission figures of both technologies for one year of consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EmissionPair {
    fossil: EmissionProfile,
    heat_pump: EmissionProfile,
}

impl EmissionPair {
    fn from_parameters(params: &SimulationParameters) -> Self {
        let fossil_energy = delivered_energy(params.heat_demand, params.efficiency_fossil);
        let heat_pump_energy = delivered_energy(params.heat_demand, params.performance_factor);
        Self {
            fossil: EmissionProfile::new(fossil_energy, params.emission_factor.fossil, params.area),
            heat_pump: EmissionProfile::new(
                heat_pump_energy,
                params.emission_factor.heat_pump,
                params.area,
            ),
        }
    }

    fn summary(&self) -> EmissionSummary {
        EmissionSummary {
            fossil: technology_emissions(&self.fossil),
            heat_pump: technology_emissions(&self.heat_pump),
        }
    }
}

fn technology_emissions(profile: &EmissionProfile) -> TechnologyEmissions {
    TechnologyEmissions {
        delivered_energy: profile.delivered_energy,
        tons_per_year: profile.tons_per_year,
        kg_per_m2: profile.kg_per_m2,
        landlord_share: profile.landlord_share,
    }
}

pub fn run_simulation(params: &SimulationParameters) -> SimulationResult {
    debug!(
        start_year = params.start_year,
        years = params.years,
        scenario = %params.scenario,
        "running heating comparison"
    );

    // Nominal figures from first-year consumption, reported next to the yearly ones.
    let nominal = EmissionPair::from_parameters(params);
    let carbon_prices = scenario_prices(&params.scenario, params.start_year, params.years);
    let fossil_prices = params.price_fossil.path(params.years);
    let electricity_prices = params.price_electricity.path(params.years);

    let mut yearly_emissions = Vec::with_capacity(params.years);
    let mut components = Vec::with_capacity(params.years);
    for (offset, &carbon_price) in carbon_prices.iter().enumerate() {
        let emissions = EmissionPair::from_parameters(params);
        let fuel = TechPair::new(
            emissions.fossil.delivered_energy * fossil_prices[offset],
            emissions.heat_pump.delivered_energy * electricity_prices[offset],
        );
        components.push(YearCostComponents {
            fossil: TechnologyYear {
                fuel: fuel.fossil,
                maintenance: params.maintenance.fossil,
                carbon: emissions.fossil.carbon_cost(carbon_price),
            },
            heat_pump: TechnologyYear {
                fuel: fuel.heat_pump,
                maintenance: params.maintenance.heat_pump,
                carbon: emissions.heat_pump.carbon_cost(carbon_price),
            },
        });
        yearly_emissions.push(emissions);
    }

    let [owner, landlord, tenant] = Role::ALL.map(|role| {
        aggregate_role(&RolePolicy::for_role(role), params.investment, &components)
    });

    let rows = (0..params.years)
        .map(|index| {
            year_record(
                index,
                params.start_year,
                carbon_prices[index],
                &yearly_emissions[index],
                &components[index],
                [&owner, &landlord, &tenant],
            )
        })
        .collect();

    let extra_investment = owner.extra_investment();
    debug!(
        extra_investment,
        owner_payback = ?owner.payback,
        landlord_payback = ?landlord.payback,
        "heating comparison finished"
    );

    SimulationResult {
        start_year: params.start_year,
        years: params.years as u32,
        heat_pump_net_investment: params.investment.heat_pump,
        extra_investment,
        emissions: nominal.summary(),
        owner: owner.to_outcome(),
        landlord: landlord.to_outcome(),
        tenant: tenant.to_outcome(),
        rows,
    }
}

fn year_record(
    index: usize,
    start_year: i32,
    carbon_price: f64,
    emissions: &EmissionPair,
    components: &YearCostComponents,
    [owner, landlord, tenant]: [&RoleLedger; 3],
) -> YearRecord {
    let annual = |ledger: &RoleLedger| ledger.annual.get(index).unwrap_or_default();
    let savings = |ledger: &RoleLedger| {
        ledger
            .cumulative_savings
            .get(index)
            .copied()
            .unwrap_or_default()
    };

    YearRecord {
        year_index: index as u32 + 1,
        year: start_year.saturating_add(index as i32),
        carbon_price,
        emission_intensity: TechPair::new(
            emissions.fossil.kg_per_m2,
            emissions.heat_pump.kg_per_m2,
        ),
        landlord_share: TechPair::new(
            emissions.fossil.landlord_share,
            emissions.heat_pump.landlord_share,
        ),
        fuel_cost: TechPair::new(components.fossil.fuel, components.heat_pump.fuel),
        carbon_cost: TechPair::new(
            components.fossil.carbon.total,
            components.heat_pump.carbon.total,
        ),
        annual_cost: RoleCosts {
            owner: annual(owner),
            landlord: annual(landlord),
            tenant: annual(tenant),
        },
        cumulative_savings: RoleAmounts {
            owner: savings(owner),
            landlord: savings(landlord),
            tenant: savings(tenant),
        },
    }
}
