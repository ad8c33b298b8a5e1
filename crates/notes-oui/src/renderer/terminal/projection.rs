//! 3D to 2D projection for terminal rendering

use crate::spatial::{FirstPersonCamera, Point3D, Vector3D};

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: f32 = 0.5;

/// Projection settings for 3D to 2D conversion
#[derive(Debug, Clone)]
pub struct Projection {
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Aspect ratio (width / height) of the visible area
    pub aspect: f32,
}

impl Projection {
    pub fn new(aspect: f32) -> Self {
        Self {
            near: 0.1,
            far: 1000.0,
            aspect,
        }
    }

    /// Aspect ratio of a terminal of `width` x `height` cells
    pub fn for_cells(width: u32, height: u32) -> Self {
        Self::new(width as f32 * CELL_ASPECT / height.max(1) as f32)
    }

    /// Transform a world point into camera space (x right, y up, z forward)
    pub fn to_view(&self, point: Point3D, camera: &FirstPersonCamera) -> Point3D {
        let forward = camera.forward();
        let right = camera.right();
        let up = right.cross(&forward);
        let relative: Vector3D = point - camera.position;

        Point3D::new(relative.dot(&right), relative.dot(&up), relative.dot(&forward))
    }

    /// Project a camera-space point to normalized device coordinates
    ///
    /// Points behind the near plane or beyond the far plane yield `None`.
    /// Coordinates outside -1..1 are returned as-is so callers can clip.
    pub fn view_to_ndc(&self, view: Point3D, fov_degrees: f32) -> Option<(f32, f32, f32)> {
        if view.z <= self.near || view.z >= self.far {
            return None;
        }

        let tan_half_fov = (fov_degrees.to_radians() / 2.0).tan();
        let x_ndc = view.x / (view.z * tan_half_fov * self.aspect);
        let y_ndc = view.y / (view.z * tan_half_fov);

        // Depth value for z-ordering (normalized 0-1)
        let depth = (view.z - self.near) / (self.far - self.near);

        Some((x_ndc, y_ndc, depth))
    }

    /// Convert normalized device coordinates to cell coordinates
    ///
    /// The result is not clamped; off-screen coordinates are clipped when drawn.
    pub fn ndc_to_screen(&self, x_ndc: f32, y_ndc: f32, width: u32, height: u32) -> (i32, i32) {
        let x = ((x_ndc + 1.0) / 2.0 * width as f32).round() as i32;
        let y = ((1.0 - y_ndc) / 2.0 * height as f32).round() as i32;
        (x, y)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at_origin() -> FirstPersonCamera {
        FirstPersonCamera::new(Point3D::ORIGIN, Point3D::new(0.0, 0.0, -1.0), 90.0)
    }

    #[test]
    fn test_perspective_projection() {
        let proj = Projection::new(1.0);
        let camera = camera_at_origin();

        let project = |p: Point3D| proj.view_to_ndc(proj.to_view(p, &camera), camera.fovy);

        // Point directly in front should project to center
        let (x, y, _) = project(Point3D::new(0.0, 0.0, -5.0)).unwrap();
        assert!(x.abs() < 0.001);
        assert!(y.abs() < 0.001);

        // 45 degrees off-axis lands on the right edge for a 90 degree fov
        let (x, _, _) = project(Point3D::new(4.99, 0.0, -5.0)).unwrap();
        assert!(x > 0.99);
    }

    #[test]
    fn test_behind_camera() {
        let proj = Projection::default();
        let camera = camera_at_origin();

        // Point behind camera should not be visible
        let view = proj.to_view(Point3D::new(0.0, 0.0, 5.0), &camera);
        assert!(view.z < 0.0);
        assert!(proj.view_to_ndc(view, camera.fovy).is_none());
    }

    #[test]
    fn test_screen_coordinates() {
        let proj = Projection::default();

        // NDC (0, 0) should be center of screen
        assert_eq!(proj.ndc_to_screen(0.0, 0.0, 100, 50), (50, 25));

        // NDC (-1, 1) should be top-left
        assert_eq!(proj.ndc_to_screen(-1.0, 1.0, 100, 50), (0, 0));

        // Off-screen points are not clamped
        assert_eq!(proj.ndc_to_screen(2.0, 0.0, 100, 50), (150, 25));
    }

    #[test]
    fn test_cell_aspect() {
        let proj = Projection::for_cells(80, 20);
        assert!((proj.aspect - 2.0).abs() < 0.0001);
    }
}
