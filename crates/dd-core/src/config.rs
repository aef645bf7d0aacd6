//! Run configuration.

use crate::{DdError, DdResult};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from command-line arguments by the application crate and
/// passed to the day loop.  The defaults describe a neighbourhood of ten
/// houses plus the store, served by one robot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of graph nodes including the depot.
    pub node_count: usize,

    /// Probability of an extra random connection between any two nodes when
    /// a distance matrix is generated.  In [0, 1].
    pub connectivity: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of simulated days.
    pub days: u64,

    /// Packages a robot can carry on one run.
    pub robot_capacity: u32,

    /// Robots sharing the day's orders.
    pub robot_count: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            node_count:     11,
            connectivity:   0.1,
            seed:           0,
            days:           3,
            robot_capacity: 3,
            robot_count:    1,
        }
    }
}

impl SimConfig {
    /// Reject configurations the day loop cannot run.
    pub fn validate(&self) -> DdResult<()> {
        if self.node_count < 2 {
            return Err(DdError::Config(format!(
                "node_count must be at least 2 (depot + one stop), got {}",
                self.node_count
            )));
        }
        if !(0.0..=1.0).contains(&self.connectivity) {
            return Err(DdError::Config(format!(
                "connectivity must be in [0, 1], got {}",
                self.connectivity
            )));
        }
        if self.robot_capacity == 0 {
            return Err(DdError::Config("robot_capacity must be positive".into()));
        }
        if self.robot_count == 0 {
            return Err(DdError::Config("robot_count must be positive".into()));
        }
        Ok(())
    }
}
