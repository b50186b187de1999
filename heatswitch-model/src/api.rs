use utoipa::OpenApi;

use crate::building::carrier::{ElectricCarrier, FossilCarrier};
use crate::comparison::input::{CarbonPriceScenario, SimulationInput};
use crate::comparison::result::{
    EmissionSummary, Payback, Role, RoleAmounts, RoleCosts, RoleOutcome, SimulationResult,
    TechPair, TechSeries, TechnologyEmissions, YearRecord,
};
use crate::subsidy::{BuildingClass, SubsidyBonuses, SubsidyInput, SubsidyResult};

/// Schema components of the request/response boundary.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "heatswitch",
        description = "Heating life-cycle cost comparison and subsidy estimate"
    ),
    components(schemas(
        FossilCarrier,
        ElectricCarrier,
        CarbonPriceScenario,
        SimulationInput,
        TechPair,
        TechSeries,
        Role,
        Payback,
        RoleCosts,
        RoleAmounts,
        YearRecord,
        RoleOutcome,
        TechnologyEmissions,
        EmissionSummary,
        SimulationResult,
        BuildingClass,
        SubsidyBonuses,
        SubsidyInput,
        SubsidyResult,
    ))
)]
pub struct ApiDoc;
