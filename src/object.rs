//! Handles to the physical objects a sketch can create. Handles are small
//! copyable tokens; all state lives in the [`World`] and is reached through
//! its accessors, so a handle left over after `forget` simply stops resolving.

use crate::canvas::Canvas;
use crate::connection::ConnectionId;
use crate::utils::SlotId;
use crate::world::World;
use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;
use serde::{Deserialize, Serialize};

/// Stable identifier for a body managed by a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub(crate) SlotId);

/// What a body looks like and collides as.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BodyKind {
    Ball,
    Block,
    Barrier,
    Sign { text: String },
}

/// Book-keeping the world holds per body.
pub(crate) struct BodyRecord {
    pub(crate) handle: RigidBodyHandle,
    pub(crate) kind: BodyKind,
    /// Width and height; balls store their diameter in both lanes.
    pub(crate) size: Vec2,
    pub(crate) connections: Vec<ConnectionId>,
}

pub(crate) mod sealed {
    use super::BodyId;
    use crate::connection::ConnectionId;

    pub enum Target {
        Body(BodyId),
        Connection(ConnectionId),
        Nothing,
    }

    pub trait Sealed {
        fn target(&self) -> Target;
    }
}

/// Anything the world simulates: balls, blocks, barriers, and signs.
///
/// Only this crate's handle types implement the trait, which keeps the set
/// of simulated shapes closed at compile time.
pub trait PhysicalObject: sealed::Sealed + Copy {
    /// The world-level identity behind this handle.
    fn id(&self) -> BodyId;

    /// Draws this object in its current pose. Does nothing if the object
    /// has been forgotten.
    fn show(&self, world: &World, canvas: &mut dyn Canvas);
}

/// Anything that can be removed from a world: every [`PhysicalObject`],
/// connections, and `Option`s of either (`None` is a harmless no-op).
pub trait Forgettable: sealed::Sealed {}

impl<F: Forgettable> sealed::Sealed for Option<F> {
    fn target(&self) -> sealed::Target {
        match self {
            Some(inner) => inner.target(),
            None => sealed::Target::Nothing,
        }
    }
}

impl<F: Forgettable> Forgettable for Option<F> {}

macro_rules! body_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            pub(crate) id: BodyId,
        }

        impl sealed::Sealed for $name {
            fn target(&self) -> sealed::Target {
                sealed::Target::Body(self.id)
            }
        }

        impl Forgettable for $name {}
    };
}

body_handle!(
    /// A circular body that rolls and bounces.
    Ball
);
body_handle!(
    /// A rectangular body that tumbles and stacks.
    Block
);
body_handle!(
    /// A rectangular body pinned in place, for floors, walls, and platforms.
    Barrier
);
body_handle!(
    /// A block sized to a piece of text, drawn as that text.
    Sign
);

impl PhysicalObject for Ball {
    fn id(&self) -> BodyId {
        self.id
    }

    fn show(&self, world: &World, canvas: &mut dyn Canvas) {
        if let Some((center, angle)) = world.pose(self.id) {
            if let Some(size) = world.dimensions(*self) {
                canvas.ellipse(center, size, angle);
            }
        }
    }
}

impl PhysicalObject for Block {
    fn id(&self) -> BodyId {
        self.id
    }

    fn show(&self, world: &World, canvas: &mut dyn Canvas) {
        if let Some((center, angle)) = world.pose(self.id) {
            if let Some(size) = world.dimensions(*self) {
                canvas.rect(center, size, angle);
            }
        }
    }
}

impl PhysicalObject for Barrier {
    fn id(&self) -> BodyId {
        self.id
    }

    fn show(&self, world: &World, canvas: &mut dyn Canvas) {
        if let Some((center, angle)) = world.pose(self.id) {
            if let Some(size) = world.dimensions(*self) {
                canvas.rect(center, size, angle);
            }
        }
    }
}

impl PhysicalObject for Sign {
    fn id(&self) -> BodyId {
        self.id
    }

    fn show(&self, world: &World, canvas: &mut dyn Canvas) {
        if let Some((center, angle)) = world.pose(self.id) {
            if let Some(text) = world.text(*self) {
                canvas.text(text, center, angle);
            }
        }
    }
}
