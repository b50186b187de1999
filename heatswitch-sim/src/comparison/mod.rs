pub mod parameters;
pub mod simulation;

pub use parameters::SimulationParameters;
pub use simulation::{simulate, simulate_from};
