//! Boundary data model of the heating comparison: requests, results and the
//! fixed per-carrier emission factors. Types export OpenAPI schemas and
//! TypeScript bindings for the web frontend.

pub mod api;
pub mod building;
pub mod comparison;
pub mod subsidy;

pub use api::ApiDoc;
pub use building::carrier::{ElectricCarrier, FossilCarrier};
pub use comparison::input::{CarbonPriceScenario, SimulationInput};
pub use comparison::result::{
    EmissionSummary, Payback, Role, RoleAmounts, RoleCosts, RoleOutcome, SimulationResult,
    TechPair, TechSeries, TechnologyEmissions, YearRecord,
};
pub use subsidy::{BuildingClass, SubsidyBonuses, SubsidyInput, SubsidyResult};
