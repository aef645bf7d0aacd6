//! `dd-sim`: day loop orchestrator for the rust_dd delivery simulator.
//!
//! # Day loop
//!
//! ```text
//! for day in 0..config.days:
//!   ① Orders   — graph.update_orders(DayRng::day_seed(seed, day))
//!   ② Split    — non-empty orders dealt round-robin across robots
//!   ③ Batch    — one TaskQueue per robot (greedy, capacity-bounded)
//!   ④ Perform  — each queue routes its tasks from the depot and drains
//!   ⑤ Report   — SimObserver::on_day_end(DaySummary)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dd_core::SimConfig;
//! use dd_sim::{DeliverySim, NoopSimObserver, generate_distance_matrix};
//!
//! let config = SimConfig::default();
//! let matrix = generate_distance_matrix(config.node_count, config.connectivity, config.seed)?;
//! let mut sim = DeliverySim::new(config, matrix.to_graph()?)?;
//! let summary = sim.run(&mut NoopSimObserver)?;
//! ```

pub mod error;
pub mod matrix;
pub mod observer;
pub mod sim;


pub use error::{SimError, SimResult};
pub use matrix::{DistanceMatrix, generate_distance_matrix, load_matrix_csv, load_matrix_reader};
pub use observer::{NoopSimObserver, SimObserver};
pub use sim::{DaySummary, DeliverySim, RunSummary};
