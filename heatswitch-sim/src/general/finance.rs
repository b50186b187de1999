use heatswitch_model::{Payback, Role, RoleOutcome, TechPair, TechSeries};

use crate::general::emissions::CarbonCost;

/// Running cost components of one technology in one year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TechnologyYear {
    pub fuel: f64,
    pub maintenance: f64,
    pub carbon: CarbonCost,
}

/// Cost components of both technologies in one simulated year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearCostComponents {
    pub fossil: TechnologyYear,
    pub heat_pump: TechnologyYear,
}

/// Which part of the CO2 cost a role pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonPortion {
    All,
    LandlordShare,
    TenantShare,
}

/// The cost components a role bears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePolicy {
    pub role: Role,
    pub capital: bool,
    pub fuel: bool,
    pub maintenance: bool,
    pub carbon: CarbonPortion,
}

impl RolePolicy {
    pub const OWNER: RolePolicy = RolePolicy {
        role: Role::Owner,
        capital: true,
        fuel: true,
        maintenance: true,
        carbon: CarbonPortion::All,
    };

    pub const LANDLORD: RolePolicy = RolePolicy {
        role: Role::Landlord,
        capital: true,
        fuel: false,
        maintenance: true,
        carbon: CarbonPortion::LandlordShare,
    };

    pub const TENANT: RolePolicy = RolePolicy {
        role: Role::Tenant,
        capital: false,
        fuel: true,
        maintenance: false,
        carbon: CarbonPortion::TenantShare,
    };

    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Owner => Self::OWNER,
            Role::Landlord => Self::LANDLORD,
            Role::Tenant => Self::TENANT,
        }
    }

    /// Cost of one technology-year as seen by this role.
    pub fn annual_cost(&self, year: &TechnologyYear) -> f64 {
        let mut cost = 0.0;
        if self.fuel {
            cost += year.fuel;
        }
        if self.maintenance {
            cost += year.maintenance;
        }
        cost += match self.carbon {
            CarbonPortion::All => year.carbon.total,
            CarbonPortion::LandlordShare => year.carbon.landlord,
            CarbonPortion::TenantShare => year.carbon.tenant,
        };
        cost
    }

    /// Investment the role carries before the first year.
    pub fn upfront(&self, investment: TechPair) -> TechPair {
        if self.capital {
            investment
        } else {
            TechPair::default()
        }
    }
}

/// Yearly costs of one role for both technologies.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleLedger {
    pub policy: RolePolicy,
    pub upfront: TechPair,
    pub annual: TechSeries,
    /// Cumulative cost seeded with the upfront investment.
    pub cumulative: TechSeries,
    /// Running sum of (fossil - heat pump) annual cost.
    pub cumulative_savings: Vec<f64>,
    pub payback: Payback,
}

impl RoleLedger {
    pub fn extra_investment(&self) -> f64 {
        self.upfront.heat_pump - self.upfront.fossil
    }

    pub fn total(&self) -> TechPair {
        self.cumulative.last().unwrap_or(self.upfront)
    }

    /// Fossil total minus heat pump total. Positive when the heat pump is cheaper.
    pub fn savings(&self) -> f64 {
        self.total().difference()
    }

    pub fn to_outcome(&self) -> RoleOutcome {
        RoleOutcome {
            role: self.policy.role,
            total: self.total(),
            savings: self.savings(),
            payback: self.payback,
            cumulative: self.cumulative.clone(),
        }
    }
}

/// Accumulate the costs of one role over all simulated years.
///
/// `investment` holds the fossil investment and the net heat pump investment;
/// the policy decides whether the role carries it.
pub fn aggregate_role(
    policy: &RolePolicy,
    investment: TechPair,
    years: &[YearCostComponents],
) -> RoleLedger {
    let upfront = policy.upfront(investment);
    let mut annual = TechSeries::with_capacity(years.len());
    let mut cumulative = TechSeries::with_capacity(years.len());
    let mut cumulative_savings = Vec::with_capacity(years.len());

    let mut running = upfront;
    let mut savings = 0.0;
    for year in years {
        let cost = TechPair::new(
            policy.annual_cost(&year.fossil),
            policy.annual_cost(&year.heat_pump),
        );
        running.fossil += cost.fossil;
        running.heat_pump += cost.heat_pump;
        savings += cost.difference();

        annual.push(cost);
        cumulative.push(running);
        cumulative_savings.push(savings);
    }

    let payback = payback_year(upfront.heat_pump - upfront.fossil, &cumulative);
    RoleLedger {
        policy: *policy,
        upfront,
        annual,
        cumulative,
        cumulative_savings,
        payback,
    }
}

/// First 1-based year in which the heat pump's cumulative cost is no higher
/// than the fossil one. Only meaningful when the heat pump costs more upfront.
pub fn payback_year(extra_investment: f64, cumulative: &TechSeries) -> Payback {
    if extra_investment.is_nan() || extra_investment <= 0.0 {
        return Payback::NotApplicable;
    }
    cumulative
        .fossil
        .iter()
        .zip(&cumulative.heat_pump)
        .position(|(fossil, heat_pump)| heat_pump <= fossil)
        .map_or(Payback::NotAchieved, |index| Payback::Year(index as u32 + 1))
}
