//! Backend that records draw calls instead of presenting them
//!
//! Used to run the frame loop headlessly: a test drives the app with scripted
//! input and inspects what the last frame would have drawn.

use crate::spatial::{FirstPersonCamera, Point3D};
use super::backend::{RenderBackend, RenderError};
use super::surface::{Color, SurfaceCapabilities};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Cube {
        center: Point3D,
        size: f32,
        color: Color,
    },
    Plane {
        center: Point3D,
        size: (f32, f32),
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    RectLines {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
}

/// Render backend that keeps the draw calls of the current frame
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    width: u32,
    height: u32,
    camera: FirstPersonCamera,
    commands: Vec<DrawCommand>,
    frames_presented: usize,
}

impl RecordingBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            camera: FirstPersonCamera::default(),
            commands: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Draw calls since the last `begin_frame`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text drawn in the current frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check if any text drawn this frame contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }

    /// Cubes drawn in the current frame as (center, color)
    pub fn cubes(&self) -> Vec<(Point3D, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Cube { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new(120, 40)
    }
}

impl RenderBackend for RecordingBackend {
    fn capabilities(&self) -> SurfaceCapabilities {
        SurfaceCapabilities {
            width: self.width,
            height: self.height,
            supports_depth: false,
            resizable: false,
        }
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.commands.clear();
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    fn set_camera(&mut self, camera: FirstPersonCamera) {
        self.camera = camera;
    }

    fn draw_cube(&mut self, center: Point3D, size: f32, color: Color) {
        self.commands.push(DrawCommand::Cube { center, size, color });
    }

    fn draw_plane(&mut self, center: Point3D, size: (f32, f32), color: Color) {
        self.commands.push(DrawCommand::Plane { center, size, color });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_rect_lines(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(DrawCommand::RectLines {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_discards_previous_commands() {
        let mut backend = RecordingBackend::default();
        backend.begin_frame().unwrap();
        backend.draw_text(1, 2, "first", Color::White);
        backend.end_frame().unwrap();
        assert!(backend.has_text("first"));

        backend.begin_frame().unwrap();
        backend.draw_cube(Point3D::ORIGIN, 1.0, Color::PURPLE);
        backend.end_frame().unwrap();

        assert!(!backend.has_text("first"));
        assert_eq!(backend.cubes(), vec![(Point3D::ORIGIN, Color::PURPLE)]);
        assert_eq!(backend.frames_presented(), 2);
    }
}
