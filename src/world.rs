//! The simulation world: owns the solver state, the per-body and
//! per-connection book-keeping, and every operation a sketch calls.

use glam::Vec2;
use log::warn;
use rapier2d::prelude::*;

use crate::canvas::{Canvas, SurfaceId};
use crate::config::{
    DEFAULT_DENSITY, DEFAULT_FRICTION, DEFAULT_FRICTION_AIR, DEFAULT_RESTITUTION,
    DEFAULT_SPRING_DAMPING, DEFAULT_TIME_STEP, MOUSE_TETHER_DAMPING, MOUSE_TETHER_STIFFNESS,
    SPRING_STIFFNESS_SCALE, STEP_BACKLOG_WARN_THRESHOLD, SteppingMode, WorldConfig,
};
use crate::connection::{Connection, ConnectionId, ConnectionRecord};
use crate::mouse::{Grab, MouseState};
use crate::object::{
    Ball, Barrier, Block, BodyId, BodyKind, BodyRecord, Forgettable, PhysicalObject, Sign, sealed,
};
use crate::options::{BodyOptions, ConnectOptions};
use crate::utils::logging::{ScopedTimer, warn_on_step_backlog};
use crate::utils::math::{glam_vector, na_point, na_vector, point_in_oriented_box, rotate};
use crate::utils::Arena;

/// A physics simulation plus the shape and spring handles a sketch created
/// in it. Each `World` is fully independent; tests and multi-view sketches
/// can run several side by side.
pub struct World {
    gravity: Vec2,
    gravity_scale: f32,
    time_step: f32,
    stepping: SteppingMode,
    canvas_size: Vec2,
    default_surface: Option<SurfaceId>,

    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    integration_parameters: IntegrationParameters,

    records: Arena<BodyRecord>,
    connections: Arena<ConnectionRecord>,
    mouse: MouseState,

    accumulator: f32,
    steps_taken: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let time_step = if config.time_step <= 0.0 {
            warn!(
                "non-positive time step {} clamped to {}",
                config.time_step, DEFAULT_TIME_STEP
            );
            DEFAULT_TIME_STEP
        } else {
            config.time_step
        };

        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = time_step;

        Self {
            gravity: config.gravity,
            gravity_scale: config.gravity_scale,
            time_step,
            stepping: config.stepping,
            canvas_size: config.canvas_size,
            default_surface: None,
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            integration_parameters,
            records: Arena::new(),
            connections: Arena::new(),
            mouse: MouseState::default(),
            accumulator: 0.0,
            steps_taken: 0,
        }
    }

    // ------------------------------------------------------------------
    // Stepping
    // ------------------------------------------------------------------

    pub fn stepping_mode(&self) -> SteppingMode {
        self.stepping
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Total fixed steps executed since the world was created.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Frame driver for [`SteppingMode::Automatic`] worlds: call once per
    /// frame with the elapsed wall-clock seconds. Drains zero or more fixed
    /// steps through an accumulator, so simulation time stays decoupled from
    /// an uneven draw rate. A no-op in [`SteppingMode::Manual`] worlds.
    pub fn update(&mut self, dt: f32) {
        if self.stepping == SteppingMode::Manual {
            return;
        }

        self.accumulator += dt;
        let mut drained = 0u32;
        while self.accumulator >= self.time_step {
            self.accumulator -= self.time_step;
            self.step_once();
            drained += 1;
        }
        warn_on_step_backlog(drained, STEP_BACKLOG_WARN_THRESHOLD);
    }

    /// Advances the simulation by exactly one fixed step, for sketches that
    /// want stepping locked to their draw loop. Works in any mode, but warns
    /// in [`SteppingMode::Automatic`] where it doubles up with [`update`].
    ///
    /// [`update`]: World::update
    pub fn manual_tick(&mut self) {
        if self.stepping == SteppingMode::Automatic {
            warn!("manual_tick called on an automatically stepped world");
        }
        self.step_once();
    }

    fn step_once(&mut self) {
        let _timer = ScopedTimer::new("world::step");
        let gravity = na_vector(self.gravity * self.gravity_scale);
        self.pipeline.step(
            &gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
        self.steps_taken += 1;
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    /// Creates a circular body centered at `(x, y)`.
    pub fn make_ball(&mut self, x: f32, y: f32, diameter: f32, options: BodyOptions) -> Ball {
        let radius = diameter / 2.0;
        let id = self.insert_body(
            BodyKind::Ball,
            Vec2::new(x, y),
            Vec2::splat(diameter),
            ColliderBuilder::ball(radius),
            options,
            false,
        );
        Ball { id }
    }

    /// Creates a rectangular body centered at `(x, y)`.
    pub fn make_block(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        options: BodyOptions,
    ) -> Block {
        let id = self.insert_body(
            BodyKind::Block,
            Vec2::new(x, y),
            Vec2::new(width, height),
            ColliderBuilder::cuboid(width / 2.0, height / 2.0),
            options,
            false,
        );
        Block { id }
    }

    /// Creates a rectangular body pinned in place, for floors and walls.
    /// Any `frozen` setting in `options` is overridden.
    pub fn make_barrier(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        options: BodyOptions,
    ) -> Barrier {
        let id = self.insert_body(
            BodyKind::Barrier,
            Vec2::new(x, y),
            Vec2::new(width, height),
            ColliderBuilder::cuboid(width / 2.0, height / 2.0),
            options,
            true,
        );
        Barrier { id }
    }

    /// Creates a block sized to `text` under the canvas's current text
    /// settings, centered at `(x, y)`, drawn as that text.
    pub fn make_sign(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        canvas: &dyn Canvas,
        options: BodyOptions,
    ) -> Sign {
        let size = Vec2::new(canvas.text_width(text), canvas.text_size());
        let id = self.insert_body(
            BodyKind::Sign {
                text: text.to_owned(),
            },
            Vec2::new(x, y),
            size,
            ColliderBuilder::cuboid(size.x / 2.0, size.y / 2.0),
            options,
            false,
        );
        Sign { id }
    }

    fn insert_body(
        &mut self,
        kind: BodyKind,
        position: Vec2,
        size: Vec2,
        collider: ColliderBuilder,
        options: BodyOptions,
        force_frozen: bool,
    ) -> BodyId {
        let frozen = force_frozen || options.frozen.unwrap_or(false);
        let body_type = if frozen {
            RigidBodyType::Fixed
        } else {
            RigidBodyType::Dynamic
        };

        // Per-step air friction maps onto the solver's per-second
        // damping coefficients.
        let damping = options.friction_air.unwrap_or(DEFAULT_FRICTION_AIR) / self.time_step;

        let mut builder = RigidBodyBuilder::new(body_type)
            .translation(na_vector(position))
            .rotation(options.angle.unwrap_or(0.0))
            .linear_damping(damping)
            .angular_damping(damping);
        if let Some(tweak) = options.tweak {
            builder = tweak(builder);
        }

        let handle = self.bodies.insert(builder);
        let collider = collider
            .friction(options.friction.unwrap_or(DEFAULT_FRICTION))
            .restitution(options.restitution.unwrap_or(DEFAULT_RESTITUTION))
            .density(options.density.unwrap_or(DEFAULT_DENSITY));
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        BodyId(self.records.insert(BodyRecord {
            handle,
            kind,
            size,
            connections: Vec::new(),
        }))
    }

    // ------------------------------------------------------------------
    // Connections
    // ------------------------------------------------------------------

    /// Springs `a` and `b` together. Anchors default to the body centers;
    /// the rest length defaults to the distance between the anchors right
    /// now. Returns `None` when either endpoint has been forgotten.
    pub fn connect(
        &mut self,
        a: impl PhysicalObject,
        b: impl PhysicalObject,
        options: ConnectOptions,
    ) -> Option<Connection> {
        let point_a = options.point_a.unwrap_or(Vec2::ZERO);
        let point_b = options.point_b.unwrap_or(Vec2::ZERO);

        let (handle_a, anchor_a) = self.anchor_world(a.id(), point_a)?;
        let (handle_b, anchor_b) = self.anchor_world(b.id(), point_b)?;

        let rest_length = options
            .length
            .unwrap_or_else(|| anchor_a.distance(anchor_b));
        let stiffness = options.stiffness.unwrap_or(1.0) * SPRING_STIFFNESS_SCALE;
        let damping = options.damping.unwrap_or(DEFAULT_SPRING_DAMPING);

        let joint = SpringJointBuilder::new(rest_length, stiffness, damping)
            .local_anchor1(na_point(point_a))
            .local_anchor2(na_point(point_b))
            .build();
        let joint = self
            .impulse_joints
            .insert(handle_a, handle_b, joint, true);

        let id = ConnectionId(self.connections.insert(ConnectionRecord {
            joint,
            body_a: a.id(),
            body_b: b.id(),
            point_a,
            point_b,
        }));
        for body in [a.id(), b.id()] {
            if let Some(record) = self.records.get_mut(body.0) {
                record.connections.push(id);
            }
        }
        Some(Connection { id })
    }

    fn anchor_world(&self, body: BodyId, offset: Vec2) -> Option<(RigidBodyHandle, Vec2)> {
        let record = self.records.get(body.0)?;
        let rb = self.bodies.get(record.handle)?;
        let center = glam_vector(rb.translation());
        let angle = rb.rotation().angle();
        Some((record.handle, center + rotate(offset, angle)))
    }

    /// Current world-space endpoints of a connection's line, each offset
    /// following its own body's pose.
    pub(crate) fn connection_anchors(&self, id: ConnectionId) -> Option<(Vec2, Vec2)> {
        let record = self.connections.get(id.0)?;
        let (_, from) = self.anchor_world(record.body_a, record.point_a)?;
        let (_, to) = self.anchor_world(record.body_b, record.point_b)?;
        Some((from, to))
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections the object currently participates in.
    pub fn connections_of(&self, obj: impl PhysicalObject) -> Vec<Connection> {
        self.records
            .get(obj.id().0)
            .map(|record| {
                record
                    .connections
                    .iter()
                    .map(|&id| Connection { id })
                    .collect()
            })
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------

    /// Removes a shape or connection from the world. Forgetting a shape
    /// first forgets every connection attached to it. Accepts `Option`s so
    /// `forget(None::<Ball>)` is a harmless no-op, as is forgetting the same
    /// handle twice.
    pub fn forget(&mut self, target: impl Forgettable) {
        match target.target() {
            sealed::Target::Body(id) => self.forget_body(id),
            sealed::Target::Connection(id) => self.forget_connection(id),
            sealed::Target::Nothing => {}
        }
    }

    fn forget_body(&mut self, id: BodyId) {
        let Some(record) = self.records.remove(id.0) else {
            return;
        };

        if self.mouse.grab.as_ref().is_some_and(|grab| grab.body == id) {
            self.release_grab();
        }
        for connection in record.connections {
            self.forget_connection(connection);
        }
        self.bodies.remove(
            record.handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    fn forget_connection(&mut self, id: ConnectionId) {
        let Some(record) = self.connections.remove(id.0) else {
            return;
        };

        for body in [record.body_a, record.body_b] {
            if let Some(endpoint) = self.records.get_mut(body.0) {
                if let Some(at) = endpoint.connections.iter().position(|&c| c == id) {
                    endpoint.connections.remove(at);
                }
            }
        }
        self.impulse_joints.remove(record.joint, true);
    }

    /// Whether a handle still refers to something in the world.
    pub fn is_active(&self, target: impl Forgettable) -> bool {
        match target.target() {
            sealed::Target::Body(id) => self.records.contains(id.0),
            sealed::Target::Connection(id) => self.connections.contains(id.0),
            sealed::Target::Nothing => false,
        }
    }

    pub fn body_count(&self) -> usize {
        self.records.len()
    }

    // ------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------

    /// Sets the gravity vector in conventional units, where `(0, 1)` pulls
    /// straight down the canvas with ordinary strength.
    pub fn change_gravity(&mut self, x: f32, y: f32) {
        self.gravity = Vec2::new(x, y);
        self.wake_all();
    }

    pub fn normal_gravity(&mut self) {
        self.change_gravity(0.0, 1.0);
    }

    pub fn inverted_gravity(&mut self) {
        self.change_gravity(0.0, -1.0);
    }

    pub fn zero_gravity(&mut self) {
        self.change_gravity(0.0, 0.0);
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn wake_all(&mut self) {
        for (_, rb) in self.bodies.iter_mut() {
            rb.wake_up(true);
        }
    }

    /// Adopts the canvas's size for off-canvas checks and its surface as the
    /// default mouse surface. Call again whenever the canvas is resized.
    pub fn attach_canvas(&mut self, canvas: &dyn Canvas) {
        self.canvas_size = canvas.size();
        if self.default_surface.is_none() {
            self.default_surface = Some(canvas.surface());
        }
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_size = Vec2::new(width, height);
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    // ------------------------------------------------------------------
    // Mouse interaction
    // ------------------------------------------------------------------

    /// Enables drag forces for a canvas's surface, falling back to the
    /// default surface when called without one. Idempotent per surface.
    /// Returns whether the surface was newly registered; an unresolvable
    /// surface is a silent no-op.
    pub fn mouse_interaction(&mut self, canvas: Option<&dyn Canvas>) -> bool {
        let surface = match canvas {
            Some(canvas) => Some(canvas.surface()),
            None => self.default_surface,
        };
        match surface {
            Some(surface) => self.mouse.surfaces.insert(surface),
            None => false,
        }
    }

    pub fn mouse_enabled(&self, surface: SurfaceId) -> bool {
        self.mouse.surfaces.contains(&surface)
    }

    /// Feed a press event. Hit-tests the unfrozen shapes and tethers the
    /// first hit to the cursor with a stiff invisible spring. Events for
    /// surfaces without mouse interaction are ignored.
    pub fn mouse_pressed(&mut self, surface: SurfaceId, position: Vec2) {
        if !self.mouse.surfaces.contains(&surface) {
            return;
        }
        self.release_grab();

        let Some(body) = self.body_at(position) else {
            return;
        };
        let Some(record) = self.records.get(body.0) else {
            return;
        };
        let Some(rb) = self.bodies.get(record.handle) else {
            return;
        };
        let center = glam_vector(rb.translation());
        let angle = rb.rotation().angle();
        let local = rotate(position - center, -angle);
        let body_handle = record.handle;

        let anchor = self.bodies.insert(
            RigidBodyBuilder::kinematic_position_based().translation(na_vector(position)),
        );
        let joint = SpringJointBuilder::new(0.0, MOUSE_TETHER_STIFFNESS, MOUSE_TETHER_DAMPING)
            .local_anchor1(na_point(Vec2::ZERO))
            .local_anchor2(na_point(local))
            .build();
        let joint = self.impulse_joints.insert(anchor, body_handle, joint, true);

        self.mouse.grab = Some(Grab {
            surface,
            body,
            anchor,
            joint,
        });
    }

    /// Feed a move event; retargets the tether while a grab is live.
    pub fn mouse_moved(&mut self, surface: SurfaceId, position: Vec2) {
        let Some(grab) = self.mouse.grab.as_ref() else {
            return;
        };
        if grab.surface != surface {
            return;
        }
        if let Some(anchor) = self.bodies.get_mut(grab.anchor) {
            anchor.set_next_kinematic_translation(na_vector(position));
        }
    }

    /// Feed a release event; severs the tether if this surface holds one.
    pub fn mouse_released(&mut self, surface: SurfaceId) {
        if self
            .mouse
            .grab
            .as_ref()
            .is_some_and(|grab| grab.surface == surface)
        {
            self.release_grab();
        }
    }

    fn release_grab(&mut self) {
        let Some(grab) = self.mouse.grab.take() else {
            return;
        };
        self.impulse_joints.remove(grab.joint, true);
        self.bodies.remove(
            grab.anchor,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// First unfrozen shape containing `position`, if any.
    fn body_at(&self, position: Vec2) -> Option<BodyId> {
        for (slot, record) in self.records.iter() {
            let Some(rb) = self.bodies.get(record.handle) else {
                continue;
            };
            if rb.body_type() != RigidBodyType::Dynamic {
                continue;
            }
            let center = glam_vector(rb.translation());
            let hit = match record.kind {
                BodyKind::Ball => position.distance(center) <= record.size.x / 2.0,
                _ => point_in_oriented_box(position, center, record.size, rb.rotation().angle()),
            };
            if hit {
                return Some(BodyId(slot));
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub(crate) fn pose(&self, id: BodyId) -> Option<(Vec2, f32)> {
        let record = self.records.get(id.0)?;
        let rb = self.bodies.get(record.handle)?;
        Some((glam_vector(rb.translation()), rb.rotation().angle()))
    }

    fn rigid_body(&self, id: BodyId) -> Option<&RigidBody> {
        let record = self.records.get(id.0)?;
        self.bodies.get(record.handle)
    }

    fn rigid_body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        let record = self.records.get(id.0)?;
        self.bodies.get_mut(record.handle)
    }

    pub fn position(&self, obj: impl PhysicalObject) -> Option<Vec2> {
        self.pose(obj.id()).map(|(center, _)| center)
    }

    pub fn x(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.position(obj).map(|p| p.x)
    }

    pub fn y(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.position(obj).map(|p| p.y)
    }

    pub fn set_position(&mut self, obj: impl PhysicalObject, position: Vec2) {
        if let Some(rb) = self.rigid_body_mut(obj.id()) {
            rb.set_translation(na_vector(position), true);
        }
    }

    pub fn set_x(&mut self, obj: impl PhysicalObject, x: f32) {
        if let Some(position) = self.position(obj) {
            self.set_position(obj, Vec2::new(x, position.y));
        }
    }

    pub fn set_y(&mut self, obj: impl PhysicalObject, y: f32) {
        if let Some(position) = self.position(obj) {
            self.set_position(obj, Vec2::new(position.x, y));
        }
    }

    /// Linear velocity in pixels per second.
    pub fn velocity(&self, obj: impl PhysicalObject) -> Option<Vec2> {
        self.rigid_body(obj.id()).map(|rb| glam_vector(rb.linvel()))
    }

    pub fn velocity_x(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.velocity(obj).map(|v| v.x)
    }

    pub fn velocity_y(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.velocity(obj).map(|v| v.y)
    }

    pub fn set_velocity(&mut self, obj: impl PhysicalObject, velocity: Vec2) {
        if let Some(rb) = self.rigid_body_mut(obj.id()) {
            rb.set_linvel(na_vector(velocity), true);
        }
    }

    pub fn set_velocity_x(&mut self, obj: impl PhysicalObject, x: f32) {
        if let Some(velocity) = self.velocity(obj) {
            self.set_velocity(obj, Vec2::new(x, velocity.y));
        }
    }

    pub fn set_velocity_y(&mut self, obj: impl PhysicalObject, y: f32) {
        if let Some(velocity) = self.velocity(obj) {
            self.set_velocity(obj, Vec2::new(velocity.x, y));
        }
    }

    /// Rotation in radians.
    pub fn angle(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.pose(obj.id()).map(|(_, angle)| angle)
    }

    pub fn set_angle(&mut self, obj: impl PhysicalObject, angle: f32) {
        if let Some(rb) = self.rigid_body_mut(obj.id()) {
            rb.set_rotation(Rotation::new(angle), true);
        }
    }

    pub fn size(&self, obj: impl PhysicalObject) -> Option<Vec2> {
        self.dimensions(obj)
    }

    pub fn width(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.dimensions(obj).map(|size| size.x)
    }

    pub fn height(&self, obj: impl PhysicalObject) -> Option<f32> {
        self.dimensions(obj).map(|size| size.y)
    }

    pub(crate) fn dimensions(&self, obj: impl PhysicalObject) -> Option<Vec2> {
        self.records.get(obj.id().0).map(|record| record.size)
    }

    pub fn diameter(&self, ball: Ball) -> Option<f32> {
        self.width(ball)
    }

    pub fn radius(&self, ball: Ball) -> Option<f32> {
        self.diameter(ball).map(|d| d / 2.0)
    }

    /// The text a sign displays.
    pub fn text(&self, sign: Sign) -> Option<&str> {
        match self.records.get(sign.id.0).map(|record| &record.kind) {
            Some(BodyKind::Sign { text }) => Some(text),
            _ => None,
        }
    }

    /// Whether the shape is currently pinned in place.
    pub fn is_frozen(&self, obj: impl PhysicalObject) -> bool {
        self.rigid_body(obj.id())
            .is_some_and(|rb| rb.body_type() == RigidBodyType::Fixed)
    }

    /// Pins the shape in place; it stops responding to gravity and impacts
    /// from the next step on.
    pub fn freeze(&mut self, obj: impl PhysicalObject) {
        if let Some(rb) = self.rigid_body_mut(obj.id()) {
            rb.set_body_type(RigidBodyType::Fixed, true);
        }
    }

    /// Releases a frozen shape back into the simulation.
    pub fn unfreeze(&mut self, obj: impl PhysicalObject) {
        if let Some(rb) = self.rigid_body_mut(obj.id()) {
            rb.set_body_type(RigidBodyType::Dynamic, true);
        }
    }

    /// True when the shape's bounding box, grown by `buffer` pixels, lies
    /// entirely outside the canvas along either axis. Touching the edge
    /// counts as on-canvas. Forgotten shapes are off-canvas.
    pub fn is_off_canvas(&self, obj: impl PhysicalObject, buffer: f32) -> bool {
        let (Some((center, _)), Some(size)) = (self.pose(obj.id()), self.dimensions(obj)) else {
            return true;
        };
        let half = size / 2.0;
        center.x + half.x + buffer < 0.0
            || center.x - half.x - buffer > self.canvas_size.x
            || center.y + half.y + buffer < 0.0
            || center.y - half.y - buffer > self.canvas_size.y
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Draws a shape on `canvas` in its current pose. Equivalent to
    /// `obj.show(world, canvas)`.
    pub fn show(&self, obj: &impl PhysicalObject, canvas: &mut dyn Canvas) {
        obj.show(self, canvas);
    }
}
