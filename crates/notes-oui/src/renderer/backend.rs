//! Render backend trait definition

use crate::spatial::{FirstPersonCamera, Point3D};
use super::surface::{Color, SurfaceCapabilities};

/// Error type for rendering operations
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Backend initialization failed
    InitError(String),
    /// Frame rendering failed
    FrameError(String),
    /// Terminal-specific error
    TerminalError(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InitError(msg) => write!(f, "Init error: {}", msg),
            RenderError::FrameError(msg) => write!(f, "Frame error: {}", msg),
            RenderError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Immediate-mode drawing surface
///
/// World-space primitives (`draw_cube`, `draw_plane`) are seen through the
/// camera last passed to `set_camera`. Screen-space primitives use surface
/// units with the origin in the top-left corner.
pub trait RenderBackend: Send + Sync {
    /// Get surface capabilities
    fn capabilities(&self) -> SurfaceCapabilities;

    /// Begin a new render frame
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// End frame and present to display
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Clear the render surface with a color
    fn clear(&mut self, color: Color);

    /// Get current camera
    fn camera(&self) -> &FirstPersonCamera;

    /// Set the camera used for world-space primitives
    fn set_camera(&mut self, camera: FirstPersonCamera);

    /// Draw an axis-aligned cube centered on `center`
    fn draw_cube(&mut self, center: Point3D, size: f32, color: Color);

    /// Draw a horizontal plane centered on `center`, `size` is (x, z) extent
    fn draw_plane(&mut self, center: Point3D, size: (f32, f32), color: Color);

    /// Draw text at a screen-space position
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);

    /// Fill a screen-space rectangle
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Outline a screen-space rectangle
    fn draw_rect_lines(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
}
