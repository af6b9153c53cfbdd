//! Conversions between the public `glam` vectors and the solver's `nalgebra`
//! types, plus small geometry helpers shared by hit-testing and drawing.

use glam::Vec2;
use rapier2d::na;

pub fn na_vector(v: Vec2) -> na::Vector2<f32> {
    na::Vector2::new(v.x, v.y)
}

pub fn na_point(v: Vec2) -> na::Point2<f32> {
    na::Point2::new(v.x, v.y)
}

pub fn glam_vector(v: &na::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Rotates `v` by `angle` radians around the origin.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// True when `point` lies inside an axis-aligned box of `size` centered at
/// the origin after undoing the box's rotation.
pub fn point_in_oriented_box(point: Vec2, center: Vec2, size: Vec2, angle: f32) -> bool {
    let local = rotate(point - center, -angle);
    local.x.abs() <= size.x * 0.5 && local.y.abs() <= size.y * 0.5
}
