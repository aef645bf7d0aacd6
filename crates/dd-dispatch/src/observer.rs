//! Callbacks for [`TaskQueue::perform_tasks`][crate::TaskQueue::perform_tasks].

use crate::{DeliveryLeg, Task};

/// Receives each task and leg as the queue is performed.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `index` is the task's position in the
/// queue at the time it was performed.
pub trait DispatchObserver {
    fn on_task_start(&mut self, _index: usize, _task: &Task) {}

    fn on_leg(&mut self, _index: usize, _leg: &DeliveryLeg) {}

    fn on_task_end(&mut self, _index: usize, _task: &Task) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Prints one line per leg to stdout.
///
/// ```text
/// Robot 0 delivers 2 packages to node 1: 0 -> 1
/// Robot 0 delivers 1 package to node 2: 1 -> 2
/// ```
pub struct ConsoleObserver;

impl DispatchObserver for ConsoleObserver {
    fn on_leg(&mut self, _index: usize, leg: &DeliveryLeg) {
        println!("{leg}");
    }
}

/// Collects `(task index, leg)` pairs in the order they were reported.
#[derive(Default)]
pub struct RecordingObserver {
    pub legs:  Vec<(usize, DeliveryLeg)>,
    pub tasks: usize,
}

impl DispatchObserver for RecordingObserver {
    fn on_leg(&mut self, index: usize, leg: &DeliveryLeg) {
        self.legs.push((index, leg.clone()));
    }

    fn on_task_end(&mut self, _index: usize, _task: &Task) {
        self.tasks += 1;
    }
}
