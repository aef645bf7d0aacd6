//! A single delivery run and the legs it produces.

use std::fmt;

use tracing::warn;

use dd_core::{NodeId, Order, RobotId};
use dd_graph::{Graph, ShortestPath, Verbosity};

use crate::DispatchResult;

// ── Task ──────────────────────────────────────────────────────────────────────

/// An ordered group of stops delivered by one robot on one run.
///
/// Created by [`batch_orders`](crate::batch_orders); never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    robot:  RobotId,
    orders: Vec<Order>,
}

impl Task {
    pub(crate) fn new(robot: RobotId, orders: Vec<Order>) -> Self {
        debug_assert!(!orders.is_empty());
        Self { robot, orders }
    }

    pub fn robot(&self) -> RobotId {
        self.robot
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Total packages carried on this run.
    pub fn load(&self) -> u32 {
        self.orders.iter().map(|o| o.quantity).sum()
    }

    pub fn is_over_capacity(&self, capacity: u32) -> bool {
        self.load() > capacity
    }

    /// Route each stop from the previous one, starting at the depot.
    ///
    /// The robot does not return to the depot between stops and the stop
    /// order is kept as given.  If a stop is unreachable the leg is recorded
    /// as such and the robot stays where it is.
    pub fn plan_route(&self, graph: &Graph) -> DispatchResult<Vec<DeliveryLeg>> {
        let mut at = NodeId::DEPOT;
        let mut legs = Vec::with_capacity(self.orders.len());

        for &order in &self.orders {
            let route = graph.shortest_path(at, order.node, Verbosity::PathOnly)?;
            if route.reachable {
                at = order.node;
            } else {
                warn!(robot = %self.robot, from = %at, to = %order.node, "stop unreachable");
            }
            legs.push(DeliveryLeg { robot: self.robot, order, route });
        }
        Ok(legs)
    }
}

// ── DeliveryLeg ───────────────────────────────────────────────────────────────

/// One stop of a task: the order delivered and the path taken to reach it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryLeg {
    pub robot: RobotId,
    pub order: Order,
    /// Path from the previous stop (or depot) to `order.node`.
    pub route: ShortestPath,
}

impl DeliveryLeg {
    pub fn from(&self) -> NodeId {
        self.route.source
    }

    pub fn reachable(&self) -> bool {
        self.route.reachable
    }
}

impl fmt::Display for DeliveryLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.route.reachable {
            return write!(
                f,
                "Robot {} cannot reach node {} from node {}",
                self.robot, self.order.node, self.route.source
            );
        }
        write!(
            f,
            "Robot {} delivers {}: {}",
            self.robot,
            self.order,
            self.route.path_string()
        )
    }
}
