//! The [`DeliverySim`] day loop.

use tracing::{debug, info};

use dd_core::{DayRng, Order, RobotId, SimConfig};
use dd_dispatch::{DeliveryLeg, DispatchObserver, Robot, Task, TaskQueue};
use dd_graph::Graph;

use crate::{SimError, SimObserver, SimResult};

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Totals for one simulated day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DaySummary {
    pub day:         u64,
    pub tasks:       usize,
    pub legs:        usize,
    /// Packages delivered (reachable legs only).
    pub packages:    u64,
    /// Distance travelled over reachable legs.
    pub distance:    f64,
    pub unreachable: usize,
}

/// Totals for a whole run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub days:        u64,
    pub tasks:       usize,
    pub legs:        usize,
    pub packages:    u64,
    pub distance:    f64,
    pub unreachable: usize,
}

impl RunSummary {
    fn add(&mut self, day: &DaySummary) {
        self.days += 1;
        self.tasks += day.tasks;
        self.legs += day.legs;
        self.packages += day.packages;
        self.distance += day.distance;
        self.unreachable += day.unreachable;
    }
}

// ── DeliverySim ───────────────────────────────────────────────────────────────

/// Runs the configured number of days over one neighbourhood graph.
pub struct DeliverySim {
    config:   SimConfig,
    graph:    Graph,
    robots:   Vec<Robot>,
    next_day: u64,
}

impl DeliverySim {
    /// Validate `config` against `graph` and create the robot fleet
    /// (ids `0..robot_count`, all with `robot_capacity`).
    pub fn new(config: SimConfig, graph: Graph) -> SimResult<Self> {
        config.validate()?;
        if graph.node_count() != config.node_count {
            return Err(SimError::NodeCountMismatch {
                expected: config.node_count,
                got:      graph.node_count(),
            });
        }
        let robots = (0..config.robot_count)
            .map(|i| Robot::new(RobotId(i), config.robot_capacity))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { config, graph, robots, next_day: 0 })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Index of the day the next [`step_day`](Self::step_day) will simulate.
    pub fn next_day(&self) -> u64 {
        self.next_day
    }

    /// Simulate every remaining day.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut total = RunSummary::default();
        while self.next_day < self.config.days {
            let day = self.step_day(observer)?;
            total.add(&day);
        }
        info!(
            days = total.days,
            tasks = total.tasks,
            packages = total.packages,
            distance = total.distance,
            "simulation complete"
        );
        observer.on_sim_end(&total);
        Ok(total)
    }

    /// Simulate one day: draw orders, batch per robot, perform every queue.
    pub fn step_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DaySummary> {
        let day = self.next_day;
        self.next_day += 1;

        self.graph.update_orders(DayRng::day_seed(self.config.seed, day));
        let orders = self.graph.order_list();
        debug!(day, packages = self.graph.total_orders(), "orders drawn");
        observer.on_day_start(day, &orders);

        let mut summary = DaySummary { day, ..DaySummary::default() };
        let per_robot = split_orders(&orders, self.robots.len());

        for (robot, robot_orders) in self.robots.iter().zip(&per_robot) {
            let mut queue = TaskQueue::new(robot_orders, robot);
            let mut adapter = DayAdapter {
                day,
                robot: robot.id(),
                observer: &mut *observer,
                summary: &mut summary,
            };
            queue.perform_tasks(&self.graph, &mut adapter)?;
        }

        debug!(day, tasks = summary.tasks, legs = summary.legs, "day complete");
        observer.on_day_end(&summary);
        Ok(summary)
    }
}

/// Deal the non-empty orders round-robin across `robots` lists, keeping
/// node order within each list.
fn split_orders(orders: &[Order], robots: usize) -> Vec<Vec<Order>> {
    let mut lists = vec![Vec::new(); robots];
    for (i, &order) in orders.iter().filter(|o| !o.is_empty()).enumerate() {
        lists[i % robots].push(order);
    }
    lists
}

// ── Dispatch → Sim observer bridge ────────────────────────────────────────────

struct DayAdapter<'a, O: SimObserver> {
    day:      u64,
    robot:    RobotId,
    observer: &'a mut O,
    summary:  &'a mut DaySummary,
}

impl<O: SimObserver> DispatchObserver for DayAdapter<'_, O> {
    fn on_task_start(&mut self, index: usize, _task: &Task) {
        self.observer.on_task_start(self.day, self.robot, index);
    }

    fn on_leg(&mut self, index: usize, leg: &DeliveryLeg) {
        self.summary.legs += 1;
        if leg.reachable() {
            self.summary.packages += u64::from(leg.order.quantity);
            self.summary.distance += leg.route.distance;
        } else {
            self.summary.unreachable += 1;
        }
        self.observer.on_leg(self.day, index, leg);
    }

    fn on_task_end(&mut self, _index: usize, _task: &Task) {
        self.summary.tasks += 1;
    }
}
