pub mod comparison;
pub mod errors;
pub mod general;
pub mod service;

// Re-export commonly used items for convenience
pub use comparison::{simulate, simulate_from};
pub use errors::{RequestError, SubsidyError};
pub use general::calculate_subsidy;
