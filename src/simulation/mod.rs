//! Month-stepping projection of account balances for a planned purchase,
//! with alerting and a bounded risk index.

pub mod engine;
pub mod time;
pub mod types;

pub use engine::{simulate, simulate_from};
pub use types::{MonthlyPayment, ProjectedPoint, SimulationResult};

use crate::config::Config;
use crate::domain::PlannedPurchase;
use crate::registry::AccountRegistry;

/// Binds a registry snapshot and the user configuration to the engine, so
/// callers only supply the purchase and the monthly net estimate.
pub struct Simulator<'a> {
    registry: &'a AccountRegistry,
    config: &'a Config,
}

impl<'a> Simulator<'a> {
    pub fn new(registry: &'a AccountRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Runs a projection over the configured default horizon.
    pub fn run(&self, purchase: &PlannedPurchase, monthly_net: f64) -> SimulationResult {
        self.run_for_months(purchase, monthly_net, self.config.default_horizon_months)
    }

    pub fn run_for_months(
        &self,
        purchase: &PlannedPurchase,
        monthly_net: f64,
        months: u32,
    ) -> SimulationResult {
        engine::simulate(
            self.registry.accounts(),
            purchase,
            monthly_net,
            months,
            self.config.low_balance_threshold,
        )
    }
}
