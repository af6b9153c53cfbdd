//! Optional creation parameters for bodies and connections. Unset fields
//! fall back to the defaults in [`config`](crate::config).

use glam::Vec2;
use rapier2d::prelude::RigidBodyBuilder;
use serde::{Deserialize, Serialize};

/// Escape hatch applied to the solver-level body builder right before
/// insertion, after all named options. Passed through without validation.
pub type BodyTweak = fn(RigidBodyBuilder) -> RigidBodyBuilder;

/// Optional physical properties for a new ball, block, barrier, or sign.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyOptions {
    /// Initial rotation in radians.
    pub angle: Option<f32>,
    /// Surface friction against other bodies.
    pub friction: Option<f32>,
    /// Drag slowing linear and angular motion every step.
    pub friction_air: Option<f32>,
    /// Bounciness in `[0, 1]`.
    pub restitution: Option<f32>,
    /// Mass per square pixel.
    pub density: Option<f32>,
    /// Start pinned in place. Barriers ignore this and are always frozen.
    pub frozen: Option<bool>,
    #[serde(skip)]
    pub tweak: Option<BodyTweak>,
}

impl BodyOptions {
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_friction_air(mut self, friction_air: f32) -> Self {
        self.friction_air = Some(friction_air);
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = Some(restitution);
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = Some(frozen);
        self
    }

    pub fn with_tweak(mut self, tweak: BodyTweak) -> Self {
        self.tweak = Some(tweak);
        self
    }
}

/// Optional parameters for a spring connection between two bodies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectOptions {
    /// Rest length in pixels. Defaults to the distance between the two
    /// anchors at creation time.
    pub length: Option<f32>,
    /// Spring strength in `[0, 1]`; `0` exerts no pull, `1` is rigid-ish.
    pub stiffness: Option<f32>,
    /// Oscillation damping; defaults to a value that settles quickly.
    pub damping: Option<f32>,
    /// Anchor offset from the first body's center, in its unrotated frame.
    pub point_a: Option<Vec2>,
    /// Anchor offset from the second body's center, in its unrotated frame.
    pub point_b: Option<Vec2>,
}

impl ConnectOptions {
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn with_point_a(mut self, point_a: Vec2) -> Self {
        self.point_a = Some(point_a);
        self
    }

    pub fn with_point_b(mut self, point_b: Vec2) -> Self {
        self.point_b = Some(point_b);
        self
    }
}
