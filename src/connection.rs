//! Spring connections between bodies.

use crate::canvas::Canvas;
use crate::object::{BodyId, Forgettable, sealed};
use crate::utils::SlotId;
use crate::world::World;
use glam::Vec2;
use rapier2d::prelude::ImpulseJointHandle;
use serde::{Deserialize, Serialize};

/// Stable identifier for a connection managed by a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub(crate) SlotId);

/// Book-keeping the world holds per connection.
pub(crate) struct ConnectionRecord {
    pub(crate) joint: ImpulseJointHandle,
    pub(crate) body_a: BodyId,
    pub(crate) body_b: BodyId,
    /// Anchor offsets from each body's center, in its unrotated frame.
    pub(crate) point_a: Vec2,
    pub(crate) point_b: Vec2,
}

/// Handle to a spring connecting two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub(crate) id: ConnectionId,
}

impl Connection {
    /// Draws the spring as a line between its two anchor points, each
    /// following its own body's position and rotation. Does nothing once the
    /// connection has been forgotten.
    pub fn show(&self, world: &World, canvas: &mut dyn Canvas) {
        if let Some((from, to)) = world.connection_anchors(self.id) {
            canvas.line(from, to);
        }
    }
}

impl sealed::Sealed for Connection {
    fn target(&self) -> sealed::Target {
        sealed::Target::Connection(self.id)
    }
}

impl Forgettable for Connection {}
