//! State behind per-canvas mouse interaction: which surfaces listen for
//! mouse events, and the body currently tethered to the cursor.

use crate::canvas::SurfaceId;
use crate::object::BodyId;
use rapier2d::prelude::{ImpulseJointHandle, RigidBodyHandle};
use std::collections::HashSet;

/// A body being dragged: an invisible kinematic anchor follows the cursor
/// and a stiff spring ties the body to it.
pub(crate) struct Grab {
    pub(crate) surface: SurfaceId,
    pub(crate) body: BodyId,
    pub(crate) anchor: RigidBodyHandle,
    pub(crate) joint: ImpulseJointHandle,
}

#[derive(Default)]
pub(crate) struct MouseState {
    /// Surfaces whose mouse events move bodies. Registration is idempotent.
    pub(crate) surfaces: HashSet<SurfaceId>,
    pub(crate) grab: Option<Grab>,
}
