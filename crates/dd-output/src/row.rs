//! Plain data row types written by output backends.

/// One routed stop.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRow {
    pub day:       u64,
    pub robot_id:  u32,
    /// Task index within the robot's queue for the day.
    pub task:      usize,
    pub from_node: u32,
    pub to_node:   u32,
    pub quantity:  u32,
    /// Path distance; `-1` when unreachable.
    pub distance:  f64,
    pub reachable: bool,
    /// Space-separated node ids, e.g. `0 3 4`.
    pub path:      String,
}

/// Totals for one simulated day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummaryRow {
    pub day:         u64,
    pub tasks:       u64,
    pub legs:        u64,
    pub packages:    u64,
    pub distance:    f64,
    /// Legs whose stop could not be reached.
    pub unreachable: u64,
}
