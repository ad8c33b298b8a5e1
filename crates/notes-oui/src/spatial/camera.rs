//! First-person perspective camera
//!
//! The camera is described by a position, the point it looks at and an up
//! vector. Two update modes are provided:
//! - [`FirstPersonCamera::update_walk`] reads the built-in walk controls
//!   (WASD to move, arrow keys and mouse to look)
//! - [`FirstPersonCamera::update_pro`] takes explicit per-tick movement and
//!   rotation deltas computed by the caller

use crossterm::event::KeyCode;

use super::{Point3D, Vector3D};
use crate::input::InputFrame;

/// Units moved per tick by the walk controls
pub const WALK_MOVE_SPEED: f32 = 0.09;
/// Radians turned per tick by the arrow keys
pub const WALK_ROTATION_SPEED: f32 = 0.03;
/// Radians turned per unit of mouse movement
pub const MOUSE_SENSITIVITY: f32 = 0.003;

#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    pub position: Point3D,
    pub target: Point3D,
    pub up: Vector3D,
    /// Vertical field of view in degrees
    pub fovy: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Point3D::new(0.0, 2.0, 4.0), Point3D::new(0.0, 2.0, 0.0), 60.0)
    }
}

impl FirstPersonCamera {
    pub fn new(position: Point3D, target: Point3D, fovy: f32) -> Self {
        Self {
            position,
            target,
            up: Vector3D::UP,
            fovy,
        }
    }

    /// Unit vector from the position towards the target
    pub fn forward(&self) -> Vector3D {
        (self.target - self.position).normalize()
    }

    /// Unit vector pointing to the right of the view direction
    pub fn right(&self) -> Vector3D {
        self.forward().cross(&self.up).normalize()
    }

    /// Move along the view direction; `in_world_plane` keeps the height constant
    pub fn move_forward(&mut self, distance: f32, in_world_plane: bool) {
        let mut forward = self.forward();
        if in_world_plane {
            forward.y = 0.0;
            forward = forward.normalize();
        }
        self.translate(forward * distance);
    }

    /// Strafe sideways; `in_world_plane` keeps the height constant
    pub fn move_right(&mut self, distance: f32, in_world_plane: bool) {
        let mut right = self.right();
        if in_world_plane {
            right.y = 0.0;
            right = right.normalize();
        }
        self.translate(right * distance);
    }

    pub fn move_up(&mut self, distance: f32) {
        self.translate(self.up.normalize() * distance);
    }

    /// Turn left (positive) or right (negative) around the up vector
    pub fn yaw(&mut self, angle: f32) {
        let view = self.target - self.position;
        self.target = self.position + view.rotate_around(&self.up, angle);
    }

    /// Look up (positive) or down (negative); never flips over the poles
    pub fn pitch(&mut self, angle: f32) {
        let up = self.up.normalize();
        let view = self.target - self.position;

        let max_up = up.angle(&view) - 0.001;
        let max_down = -(-up).angle(&view) + 0.001;
        let angle = angle.min(max_up).max(max_down);

        let right = self.right();
        self.target = self.position + view.rotate_around(&right, angle);
    }

    /// Tilt the up vector around the view direction
    pub fn roll(&mut self, angle: f32) {
        let forward = self.forward();
        self.up = self.up.rotate_around(&forward, angle);
    }

    /// Built-in first-person walk mode
    pub fn update_walk(&mut self, input: &InputFrame) {
        let (dx, dy) = input.mouse_delta();
        self.yaw(-dx * MOUSE_SENSITIVITY);
        self.pitch(-dy * MOUSE_SENSITIVITY);

        if input.is_held(KeyCode::Down) {
            self.pitch(-WALK_ROTATION_SPEED);
        }
        if input.is_held(KeyCode::Up) {
            self.pitch(WALK_ROTATION_SPEED);
        }
        if input.is_held(KeyCode::Right) {
            self.yaw(-WALK_ROTATION_SPEED);
        }
        if input.is_held(KeyCode::Left) {
            self.yaw(WALK_ROTATION_SPEED);
        }

        if input.is_held(KeyCode::Char('w')) {
            self.move_forward(WALK_MOVE_SPEED, true);
        }
        if input.is_held(KeyCode::Char('a')) {
            self.move_right(-WALK_MOVE_SPEED, true);
        }
        if input.is_held(KeyCode::Char('s')) {
            self.move_forward(-WALK_MOVE_SPEED, true);
        }
        if input.is_held(KeyCode::Char('d')) {
            self.move_right(WALK_MOVE_SPEED, true);
        }
    }

    /// Explicit update mode
    ///
    /// `movement` is (forward, right, up) in world units and `rotation` is
    /// (yaw, pitch, roll) in degrees, both for this tick.
    pub fn update_pro(&mut self, movement: Vector3D, rotation: Vector3D) {
        self.pitch(-rotation.y.to_radians());
        self.yaw(-rotation.x.to_radians());
        self.roll(rotation.z.to_radians());

        self.move_forward(movement.x, true);
        self.move_right(movement.y, true);
        self.move_up(movement.z);
    }

    /// Keep the camera inside the square `[-half_extent, half_extent]` on X and Z,
    /// dragging the target along so the view direction is unchanged
    pub fn confine(&mut self, half_extent: f32) {
        let x = self.position.x.clamp(-half_extent, half_extent);
        let z = self.position.z.clamp(-half_extent, half_extent);
        let offset = Vector3D::new(x - self.position.x, 0.0, z - self.position.z);
        self.translate(offset);
    }

    fn translate(&mut self, offset: Vector3D) {
        self.position += offset;
        self.target += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let cam = FirstPersonCamera::default();
        let forward = cam.forward();
        assert!(approx(forward.z, -1.0));
        assert!(approx(cam.right().x, 1.0));
    }

    #[test]
    fn test_move_forward_stays_on_plane() {
        let mut cam = FirstPersonCamera::default();
        cam.target = Point3D::new(0.0, 5.0, 0.0); // looking up and ahead
        cam.move_forward(1.0, true);
        assert!(approx(cam.position.y, 2.0));
        assert!(cam.position.z < 4.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = FirstPersonCamera::default();
        cam.pitch(10.0);
        let forward = cam.forward();
        assert!(forward.y > 0.99);
        assert!(forward.z < 0.0);
    }

    #[test]
    fn test_walk_moves_with_held_key() {
        let mut cam = FirstPersonCamera::default();
        let input = InputFrame::default().with_held(KeyCode::Char('w'));
        cam.update_walk(&input);
        assert!(approx(cam.position.z, 4.0 - WALK_MOVE_SPEED));
        assert!(approx(cam.target.z, -WALK_MOVE_SPEED));
    }

    #[test]
    fn test_pro_update_strafes_right() {
        let mut cam = FirstPersonCamera::default();
        cam.update_pro(Vector3D::new(0.0, 0.1, 0.0), Vector3D::ZERO);
        assert!(approx(cam.position.x, 0.1));
        assert!(approx(cam.position.z, 4.0));
    }

    #[test]
    fn test_confine_drags_target() {
        let mut cam = FirstPersonCamera::new(
            Point3D::new(170.0, 2.0, -200.0),
            Point3D::new(170.0, 2.0, -204.0),
            60.0,
        );
        cam.confine(160.0);
        assert_eq!(cam.position, Point3D::new(160.0, 2.0, -160.0));
        assert_eq!(cam.target, Point3D::new(160.0, 2.0, -164.0));
    }
}
