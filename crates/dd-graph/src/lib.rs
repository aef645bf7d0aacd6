//! `dd-graph`: neighbourhood graph, order state, and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Graph` (node arena), `Node`, `Edge`, `GraphBuilder`        |
//! | [`router`]  | `ShortestPath`, `Verbosity`, Dijkstra                       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use network::{EPSILON, Edge, Graph, GraphBuilder, Node};
pub use router::{ShortestPath, UNREACHABLE, Verbosity};
