//! `dd-dispatch`: turn a day's orders into capacity-bounded delivery runs.
//!
//! # Flow
//!
//! ```text
//! Graph::order_list()          [(0,0), (1,2), (2,1), (3,0), (4,3)]
//!        │
//!        ▼  batch_orders (greedy, capacity 3)
//! TaskQueue                    [Task[(1,2),(2,1)], Task[(4,3)]]
//!        │
//!        ▼  perform_tasks(&graph, observer)
//! DeliveryLeg per stop         depot → 1, 1 → 2 | depot → 4
//! ```
//!
//! The queue is drained by `perform_tasks`; a second call does nothing.

pub mod error;
pub mod observer;
pub mod queue;
pub mod robot;
pub mod task;

#[cfg(test)]
mod tests;

pub use dd_core::Order;

pub use error::{DispatchError, DispatchResult};
pub use observer::{ConsoleObserver, DispatchObserver, NoopObserver, RecordingObserver};
pub use queue::{OversizePolicy, TaskQueue, batch_orders};
pub use robot::Robot;
pub use task::{DeliveryLeg, Task};
