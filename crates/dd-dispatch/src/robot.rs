use dd_core::RobotId;

use crate::{DispatchError, DispatchResult};

/// A delivery robot with a fixed carrying capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    id:       RobotId,
    capacity: u32,
}

impl Robot {
    /// Fails with `ZeroCapacity` if `capacity == 0`.
    pub fn new(id: RobotId, capacity: u32) -> DispatchResult<Self> {
        if capacity == 0 {
            return Err(DispatchError::ZeroCapacity(id));
        }
        Ok(Self { id, capacity })
    }

    pub fn id(&self) -> RobotId {
        self.id
    }

    /// Packages carried per run.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
