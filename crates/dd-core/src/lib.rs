//! `dd-core`: foundational types for the `rust_dd` delivery simulator.
//!
//! This crate is a dependency of every other `dd-*` crate.  It has no `dd-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `RobotId`                                   |
//! | [`order`]   | `Order`, `MAX_ORDER_QUANTITY`                         |
//! | [`rng`]     | `DayRng` (seeded per simulated day)                   |
//! | [`config`]  | `SimConfig`                                           |
//! | [`error`]   | `DdError`, `DdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod order;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{DdError, DdResult};
pub use ids::{NodeId, RobotId};
pub use order::{MAX_ORDER_QUANTITY, Order};
pub use rng::DayRng;
