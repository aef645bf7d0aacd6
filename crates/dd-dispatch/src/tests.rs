//! Unit tests for dd-dispatch.

#[cfg(test)]
mod helpers {
    use dd_core::{Order, RobotId};
    use dd_graph::Graph;

    use crate::Robot;

    pub fn orders(pairs: &[(u32, u32)]) -> Vec<Order> {
        pairs.iter().copied().map(Order::from).collect()
    }

    pub fn robot(capacity: u32) -> Robot {
        Robot::new(RobotId(0), capacity).unwrap()
    }

    /// Five nodes on a street, depot at one end:
    ///
    ///   0 —1.0— 1 —1.0— 2 —1.0— 3 —1.0— 4
    pub fn street() -> Graph {
        let mut m = vec![vec![0.0; 5]; 5];
        for i in 0..4 {
            m[i][i + 1] = 1.0;
            m[i + 1][i] = 1.0;
        }
        Graph::from_matrix(&m).unwrap()
    }
}

// ── Robot ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod robot {
    use dd_core::RobotId;

    use crate::{DispatchError, Robot};

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            Robot::new(RobotId(2), 0),
            Err(DispatchError::ZeroCapacity(RobotId(2)))
        ));
    }

    #[test]
    fn accessors() {
        let r = Robot::new(RobotId(1), 5).unwrap();
        assert_eq!(r.id(), RobotId(1));
        assert_eq!(r.capacity(), 5);
    }
}

// ── Batching ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batching {
    use dd_core::{NodeId, RobotId};

    use super::helpers::{orders, robot};
    use crate::{DispatchError, OversizePolicy, batch_orders};

    #[test]
    fn greedy_boundary() {
        let tasks = batch_orders(
            &orders(&[(1, 2), (2, 1), (3, 0), (4, 3)]),
            &robot(3),
            OversizePolicy::Accept,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].orders(), orders(&[(1, 2), (2, 1)]).as_slice());
        assert_eq!(tasks[1].orders(), orders(&[(4, 3)]).as_slice());
        assert!(tasks.iter().all(|t| t.robot() == RobotId(0)));
    }

    #[test]
    fn depot_and_zero_orders_dropped() {
        let tasks = batch_orders(
            &orders(&[(0, 0), (1, 0), (2, 1), (3, 0)]),
            &robot(3),
            OversizePolicy::Accept,
        )
        .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].orders(), orders(&[(2, 1)]).as_slice());
    }

    #[test]
    fn no_orders_no_tasks() {
        let tasks = batch_orders(&orders(&[(0, 0), (1, 0)]), &robot(3), OversizePolicy::Accept)
            .unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn exact_fill_stays_in_group() {
        let tasks = batch_orders(
            &orders(&[(1, 1), (2, 1), (3, 1), (4, 1)]),
            &robot(2),
            OversizePolicy::Accept,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].load(), 2);
        assert_eq!(tasks[1].load(), 2);
    }

    #[test]
    fn stop_order_preserved() {
        let input = orders(&[(1, 2), (2, 2), (3, 1), (4, 2), (5, 1)]);
        let tasks = batch_orders(&input, &robot(3), OversizePolicy::Accept).unwrap();
        let flat: Vec<_> = tasks.iter().flat_map(|t| t.orders().iter().copied()).collect();
        assert_eq!(flat, input);
        assert!(tasks.iter().all(|t| !t.is_over_capacity(3)));
    }

    #[test]
    fn oversized_order_accepted_alone() {
        let tasks = batch_orders(
            &orders(&[(1, 1), (2, 5), (3, 1)]),
            &robot(3),
            OversizePolicy::Accept,
        )
        .unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].orders(), orders(&[(2, 5)]).as_slice());
        assert!(tasks[1].is_over_capacity(3));
    }

    #[test]
    fn huge_order_does_not_absorb_the_next() {
        let tasks = batch_orders(
            &orders(&[(1, u32::MAX), (2, 1)]),
            &robot(3),
            OversizePolicy::Accept,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].orders(), orders(&[(1, u32::MAX)]).as_slice());
        assert_eq!(tasks[1].orders(), orders(&[(2, 1)]).as_slice());
    }

    #[test]
    fn oversized_order_rejected() {
        let err = batch_orders(&orders(&[(1, 1), (2, 5)]), &robot(3), OversizePolicy::Reject)
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::OrderExceedsCapacity { node: NodeId(2), quantity: 5, capacity: 3, .. }
        ));
    }
}

// ── Routing a task ────────────────────────────────────────────────────────────

#[cfg(test)]
mod legs {
    use dd_core::NodeId;
    use dd_graph::Graph;

    use super::helpers::{orders, robot, street};
    use crate::{OversizePolicy, batch_orders};

    #[test]
    fn first_stop_from_depot_then_chained() {
        let g = street();
        let tasks =
            batch_orders(&orders(&[(2, 1), (4, 1)]), &robot(3), OversizePolicy::Accept).unwrap();
        let legs = tasks[0].plan_route(&g).unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].from(), NodeId::DEPOT);
        assert_eq!(legs[0].route.distance, 2.0);
        assert_eq!(legs[1].from(), NodeId(2));
        assert_eq!(legs[1].route.path, vec![NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn leg_display_pluralises() {
        let g = street();
        let tasks =
            batch_orders(&orders(&[(1, 2), (3, 1)]), &robot(3), OversizePolicy::Accept).unwrap();
        let legs = tasks[0].plan_route(&g).unwrap();
        assert_eq!(legs[0].to_string(), "Robot 0 delivers 2 packages to node 1: 0 -> 1");
        assert_eq!(legs[1].to_string(), "Robot 0 delivers 1 package to node 3: 1 -> 2 -> 3");
    }

    #[test]
    fn unreachable_stop_keeps_position() {
        // 0 → 1 only; node 2 is isolated.
        let m = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ];
        let g = Graph::from_matrix(&m).unwrap();
        let tasks = batch_orders(
            &orders(&[(1, 1), (2, 1), (1, 1)]),
            &robot(5),
            OversizePolicy::Accept,
        )
        .unwrap();
        let legs = tasks[0].plan_route(&g).unwrap();
        assert!(legs[0].reachable());
        assert!(!legs[1].reachable());
        assert_eq!(legs[1].to_string(), "Robot 0 cannot reach node 2 from node 1");
        // Still at node 1.
        assert_eq!(legs[2].from(), NodeId(1));
        assert_eq!(legs[2].route.distance, 0.0);
    }

    #[test]
    fn stop_outside_graph_is_an_error() {
        let g = street();
        let tasks =
            batch_orders(&orders(&[(9, 1)]), &robot(3), OversizePolicy::Accept).unwrap();
        assert!(tasks[0].plan_route(&g).is_err());
    }
}

// ── TaskQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use dd_core::NodeId;

    use super::helpers::{orders, robot, street};
    use crate::{
        ConsoleObserver, NoopObserver, OversizePolicy, RecordingObserver, TaskQueue,
    };

    #[test]
    fn built_from_orders() {
        let q = TaskQueue::new(&orders(&[(0, 0), (1, 2), (2, 1), (3, 0), (4, 3)]), &robot(3));
        assert_eq!(q.len(), 2);
        assert_eq!(q.tasks().map(|t| t.load()).collect::<Vec<_>>(), vec![3, 3]);
    }

    #[test]
    fn new_keeps_oversized_orders() {
        let q = TaskQueue::new(&orders(&[(1, 1), (2, 5), (3, 1)]), &robot(3));
        assert_eq!(q.len(), 3);
        assert_eq!(q.tasks().map(|t| t.load()).collect::<Vec<_>>(), vec![1, 5, 1]);
    }

    #[test]
    fn perform_drains_queue() {
        let g = street();
        let mut q = TaskQueue::new(&orders(&[(1, 2), (2, 1), (4, 3)]), &robot(3));
        let mut obs = RecordingObserver::default();

        assert_eq!(q.perform_tasks(&g, &mut obs).unwrap(), 2);
        assert!(q.is_empty());
        assert_eq!(obs.tasks, 2);
        assert_eq!(obs.legs.len(), 3);
        assert_eq!(obs.legs[2].0, 1);
        assert_eq!(obs.legs[2].1.from(), NodeId::DEPOT);

        // Second call is a no-op.
        assert_eq!(q.perform_tasks(&g, &mut obs).unwrap(), 0);
        assert_eq!(obs.legs.len(), 3);
    }

    #[test]
    fn explicit_drain() {
        let mut q = TaskQueue::new(&orders(&[(1, 1), (2, 1)]), &robot(1));
        let drained = q.drain();
        assert_eq!(drained.len(), 2);
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }

    #[test]
    fn console_and_noop_observers_perform() {
        let g = street();
        let mut q = TaskQueue::new(&orders(&[(1, 1)]), &robot(1));
        assert_eq!(q.perform_tasks(&g, &mut ConsoleObserver).unwrap(), 1);
        let mut q = TaskQueue::new(&orders(&[(1, 1)]), &robot(1));
        assert_eq!(q.perform_tasks(&g, &mut NoopObserver).unwrap(), 1);
    }

    #[test]
    fn reject_policy_surfaces_error() {
        assert!(TaskQueue::with_policy(&orders(&[(1, 4)]), &robot(3), OversizePolicy::Reject).is_err());
        let q = TaskQueue::with_policy(&orders(&[(1, 4)]), &robot(3), OversizePolicy::Accept).unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn failed_perform_still_empties_queue() {
        let g = street();
        let mut q = TaskQueue::new(&orders(&[(9, 1)]), &robot(1));
        assert!(q.perform_tasks(&g, &mut NoopObserver).is_err());
        assert!(q.is_empty());
    }
}
