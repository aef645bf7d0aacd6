//! Greedy capacity batching and the per-day task queue.
//!
//! # Batching
//!
//! One left-to-right pass over the orders.  An order joins the current group
//! unless that would push the group past the robot's capacity, in which case
//! the group is closed as a [`Task`] and the order starts a new one.  This
//! is not bin-packing: it never reorders stops and does not minimise the
//! number of tasks.
//!
//! A single order larger than the capacity cannot fit any group.  What
//! happens then is chosen by [`OversizePolicy`].

use std::collections::VecDeque;

use tracing::{debug, warn};

use dd_core::Order;
use dd_graph::Graph;

use crate::{DispatchError, DispatchObserver, DispatchResult, Robot, Task};

/// Handling of an order whose quantity alone exceeds the robot's capacity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OversizePolicy {
    /// Deliver it as its own over-capacity task and log a warning.
    #[default]
    Accept,
    /// Fail with [`DispatchError::OrderExceedsCapacity`].
    Reject,
}

/// Split `orders` into capacity-respecting tasks for `robot`.
///
/// Zero-quantity orders (including the depot's) are skipped.
pub fn batch_orders(
    orders: &[Order],
    robot:  &Robot,
    policy: OversizePolicy,
) -> DispatchResult<Vec<Task>> {
    if policy == OversizePolicy::Reject {
        let capacity = robot.capacity();
        if let Some(order) = orders.iter().find(|o| o.quantity > capacity) {
            return Err(DispatchError::OrderExceedsCapacity {
                robot:    robot.id(),
                node:     order.node,
                quantity: order.quantity,
                capacity,
            });
        }
    }
    Ok(group_orders(orders, robot))
}

/// Greedy pass shared by both policies; oversized orders become their own task.
fn group_orders(orders: &[Order], robot: &Robot) -> Vec<Task> {
    let capacity = robot.capacity();
    let mut tasks = Vec::new();
    let mut group: Vec<Order> = Vec::new();
    let mut weight = 0u32;

    for &order in orders.iter().filter(|o| !o.is_empty()) {
        if order.quantity > capacity {
            warn!(
                robot = %robot.id(),
                node = %order.node,
                quantity = order.quantity,
                capacity,
                "order exceeds robot capacity; delivering as an oversized task"
            );
        }

        // Saturates so an oversized group never absorbs the next order.
        if !group.is_empty() && weight.saturating_add(order.quantity) > capacity {
            tasks.push(Task::new(robot.id(), std::mem::take(&mut group)));
            weight = 0;
        }
        group.push(order);
        weight = weight.saturating_add(order.quantity);
    }

    if !group.is_empty() {
        tasks.push(Task::new(robot.id(), group));
    }
    tasks
}

// ── TaskQueue ─────────────────────────────────────────────────────────────────

/// One robot's tasks for one day.
///
/// Built from the day's orders, performed once, then empty.
#[derive(Debug, Default)]
pub struct TaskQueue {
    inner: VecDeque<Task>,
}

impl TaskQueue {
    /// Batch `orders` for `robot`, accepting oversized orders.
    pub fn new(orders: &[Order], robot: &Robot) -> Self {
        Self { inner: group_orders(orders, robot).into() }
    }

    pub fn with_policy(
        orders: &[Order],
        robot:  &Robot,
        policy: OversizePolicy,
    ) -> DispatchResult<Self> {
        Ok(Self { inner: batch_orders(orders, robot, policy)?.into() })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Tasks still queued, in delivery order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.inner.iter()
    }

    /// Remove and return every queued task.
    pub fn drain(&mut self) -> Vec<Task> {
        self.inner.drain(..).collect()
    }

    /// Route every queued task on `graph`, reporting to `observer`.
    ///
    /// The queue is empty afterwards, even on error.  Returns the number of
    /// tasks performed; calling again returns 0.
    pub fn perform_tasks<O: DispatchObserver>(
        &mut self,
        graph:    &Graph,
        observer: &mut O,
    ) -> DispatchResult<usize> {
        let tasks = self.drain();
        for (index, task) in tasks.iter().enumerate() {
            debug!(robot = %task.robot(), index, stops = task.orders().len(), load = task.load(), "performing task");
            observer.on_task_start(index, task);
            for leg in task.plan_route(graph)? {
                observer.on_leg(index, &leg);
            }
            observer.on_task_end(index, task);
        }
        Ok(tasks.len())
    }
}
