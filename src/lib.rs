//! sketchbody – physics-backed shapes for creative-coding sketches.
//!
//! Create a [`World`], ask it for balls, blocks, barriers, and signs, spring
//! them together, and draw them each frame through whatever [`Canvas`] your
//! sketch renders with. The heavy lifting is delegated to the `rapier2d`
//! solver; this crate is the thin, sketch-friendly layer on top.
//!
//! ```
//! use sketchbody::{BodyOptions, Recorder, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::manual());
//! let mut canvas = Recorder::new(600.0, 600.0);
//! world.attach_canvas(&canvas);
//!
//! let ball = world.make_ball(300.0, 100.0, 40.0, BodyOptions::default());
//! for _ in 0..60 {
//!     world.manual_tick();
//! }
//! world.show(&ball, &mut canvas);
//! assert!(world.y(ball).unwrap() > 100.0);
//! ```

pub mod canvas;
pub mod config;
pub mod connection;
pub mod mouse;
pub mod object;
pub mod options;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use canvas::{Canvas, DrawOp, Recorder, SurfaceId};
pub use config::{SteppingMode, WorldConfig};
pub use connection::Connection;
pub use object::{Ball, Barrier, Block, Forgettable, PhysicalObject, Sign};
pub use options::{BodyOptions, ConnectOptions};
pub use world::World;
