//! Global configuration constants and the world configuration struct.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gravity pointing straight down the canvas (y grows downward), in
/// conventional units where `1.0` is ordinary sketch gravity.
pub const NORMAL_GRAVITY: [f32; 2] = [0.0, 1.0];

/// Pixels per second squared applied per unit of conventional gravity.
pub const DEFAULT_GRAVITY_SCALE: f32 = 900.0;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Canvas dimensions assumed until a real canvas is attached.
pub const DEFAULT_CANVAS_SIZE: [f32; 2] = [600.0, 600.0];

/// Default surface friction for new bodies.
pub const DEFAULT_FRICTION: f32 = 0.1;

/// Default per-step air drag for new bodies.
pub const DEFAULT_FRICTION_AIR: f32 = 0.01;

/// Default bounciness for new bodies.
pub const DEFAULT_RESTITUTION: f32 = 0.0;

/// Default collider density (mass per square pixel).
pub const DEFAULT_DENSITY: f32 = 0.001;

/// Solver stiffness corresponding to a unit spring stiffness of `1.0`.
pub const SPRING_STIFFNESS_SCALE: f32 = 20_000.0;

/// Default spring damping, tuned so default springs settle within a second.
pub const DEFAULT_SPRING_DAMPING: f32 = 60.0;

/// Stiffness of the invisible spring that tethers a grabbed body to the cursor.
pub const MOUSE_TETHER_STIFFNESS: f32 = 2_000.0;

/// Damping of the mouse tether spring.
pub const MOUSE_TETHER_DAMPING: f32 = 60.0;

/// Steps drained in a single update beyond which a backlog warning is logged.
pub const STEP_BACKLOG_WARN_THRESHOLD: u32 = 30;

/// How simulation time advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SteppingMode {
    /// `World::update` drains wall-clock time through a fixed-step accumulator.
    #[default]
    Automatic,
    /// Time advances only through explicit `World::manual_tick` calls.
    Manual,
}

/// Construction-time configuration for a [`World`](crate::World).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Canvas dimensions in pixels, replaced when a canvas is attached.
    pub canvas_size: Vec2,
    /// Gravity in conventional units; `(0, 1)` pulls down the canvas.
    pub gravity: Vec2,
    /// Pixels per second squared per unit of gravity.
    pub gravity_scale: f32,
    /// Fixed integration timestep in seconds.
    pub time_step: f32,
    pub stepping: SteppingMode,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::from_array(DEFAULT_CANVAS_SIZE),
            gravity: Vec2::from_array(NORMAL_GRAVITY),
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            time_step: DEFAULT_TIME_STEP,
            stepping: SteppingMode::default(),
        }
    }
}

impl WorldConfig {
    /// Default configuration with manual stepping, handy for tests and
    /// frame-locked sketches.
    pub fn manual() -> Self {
        Self {
            stepping: SteppingMode::Manual,
            ..Self::default()
        }
    }

    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_size = Vec2::new(width, height);
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }
}
