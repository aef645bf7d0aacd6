//! Per-stop delivery demand.

use std::fmt;

use crate::NodeId;

/// Upper bound (inclusive) of a randomly generated per-stop order count.
pub const MAX_ORDER_QUANTITY: u32 = 2;

/// A `(node, quantity)` demand.  Quantity 0 means nothing is delivered there.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub node:     NodeId,
    pub quantity: u32,
}

impl Order {
    #[inline]
    pub fn new(node: NodeId, quantity: u32) -> Self {
        Self { node, quantity }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Unit noun matching `quantity` ("package" / "packages").
    pub fn unit_noun(&self) -> &'static str {
        if self.quantity == 1 { "package" } else { "packages" }
    }
}

impl From<(u32, u32)> for Order {
    fn from((node, quantity): (u32, u32)) -> Self {
        Self::new(NodeId(node), quantity)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to node {}", self.quantity, self.unit_noun(), self.node)
    }
}
