pub mod carbon_price;
pub mod emissions;
pub mod energy_price;
pub mod finance;
pub mod subsidy;

pub use finance::{RoleLedger, RolePolicy, aggregate_role, payback_year};
pub use subsidy::calculate_subsidy;
