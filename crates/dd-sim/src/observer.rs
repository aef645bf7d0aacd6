//! Simulation observer trait for printing and data collection.

use dd_core::{Order, RobotId};
use dd_dispatch::DeliveryLeg;

use crate::{DaySummary, RunSummary};

/// Callbacks invoked by [`DeliverySim::run`][crate::DeliverySim::run] at key
/// points in the day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: route printer
///
/// ```rust,ignore
/// struct RoutePrinter;
///
/// impl SimObserver for RoutePrinter {
///     fn on_leg(&mut self, _day: u64, _task: usize, leg: &DeliveryLeg) {
///         println!("{leg}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the day's orders are drawn, before any batching.
    /// `orders` has one entry per node, depot first.
    fn on_day_start(&mut self, _day: u64, _orders: &[Order]) {}

    /// Called when `robot` starts task `task` of the day.
    fn on_task_start(&mut self, _day: u64, _robot: RobotId, _task: usize) {}

    /// Called for every routed stop.
    fn on_leg(&mut self, _day: u64, _task: usize, _leg: &DeliveryLeg) {}

    /// Called once all robots have emptied their queues for the day.
    fn on_day_end(&mut self, _summary: &DaySummary) {}

    /// Called once after the final day.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopSimObserver;

impl SimObserver for NoopSimObserver {}
