//! Terminal backend implementation

use std::io::{self, Write};
use crossterm::{
    cursor, queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::spatial::{FirstPersonCamera, Point3D};
use crate::renderer::{Color, RenderBackend, RenderError, SurfaceCapabilities};
use super::Projection;

/// Spacing of the grid lines drawn on planes, in world units
const PLANE_GRID_STEP: f32 = 4.0;

/// Cell in the terminal buffer
#[derive(Clone, PartialEq)]
struct Cell {
    symbol: String,
    fg: Color,
    bg: Color,
    depth: f32,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            symbol: " ".to_string(),
            fg: Color::White,
            bg,
            depth: f32::MAX,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::Black)
    }
}

/// Terminal rendering backend with depth buffer
pub struct TerminalBackend {
    /// Terminal width
    width: u32,
    /// Terminal height
    height: u32,
    /// Follow terminal size changes
    resizable: bool,
    /// Render buffer
    buffer: Vec<Cell>,
    /// Previous frame buffer for diff rendering
    prev_buffer: Vec<Cell>,
    /// Force a full redraw on the next frame
    dirty: bool,
    /// Projection settings
    projection: Projection,
    /// Camera for world-space primitives
    camera: FirstPersonCamera,
    /// Clear color
    clear_color: Color,
}

impl TerminalBackend {
    /// Create a backend sized to the current terminal
    pub fn new(resizable: bool) -> Result<Self, RenderError> {
        let (width, height) = terminal::size()
            .map_err(|e| RenderError::InitError(e.to_string()))?;

        Ok(Self::with_size(width as u32, height as u32, resizable))
    }

    /// Create a backend with a fixed initial size
    pub fn with_size(width: u32, height: u32, resizable: bool) -> Self {
        let size = (width as usize) * (height as usize);

        Self {
            width,
            height,
            resizable,
            buffer: vec![Cell::default(); size],
            prev_buffer: vec![Cell::default(); size],
            dirty: true,
            projection: Projection::for_cells(width, height),
            camera: FirstPersonCamera::default(),
            clear_color: Color::Black,
        }
    }

    /// Refresh terminal size
    pub fn refresh_size(&mut self) -> Result<(), RenderError> {
        let (width, height) = terminal::size()
            .map_err(|e| RenderError::TerminalError(e.to_string()))?;

        self.resize(width as u32, height as u32);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            let size = (width as usize) * (height as usize);
            self.buffer = vec![Cell::default(); size];
            self.prev_buffer = vec![Cell::default(); size];
            self.projection = Projection::for_cells(width, height);
            self.dirty = true;
        }
    }

    /// Get buffer index for coordinates
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a cell in the buffer with depth test
    fn set_cell(&mut self, x: i32, y: i32, symbol: &str, fg: Color, depth: f32) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.buffer[idx];
            if depth < cell.depth {
                cell.symbol = symbol.to_string();
                cell.fg = fg;
                cell.depth = depth;
            }
        }
    }

    /// Set a cell without depth test (for HUD elements)
    fn set_cell_hud(&mut self, x: i32, y: i32, symbol: String, fg: Color) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.buffer[idx];
            cell.symbol = symbol;
            cell.fg = fg;
            cell.depth = 0.0; // HUD is always on top
        }
    }

    /// Project a camera-space point to cell coordinates plus depth
    fn view_to_screen(&self, view: Point3D) -> Option<(i32, i32, f32)> {
        let (x_ndc, y_ndc, depth) = self.projection.view_to_ndc(view, self.camera.fovy)?;
        let (x, y) = self.projection.ndc_to_screen(x_ndc, y_ndc, self.width, self.height);
        Some((x, y, depth))
    }

    /// Project a camera-space point to unrounded cell coordinates plus depth
    fn view_to_screen_f32(&self, view: Point3D) -> Option<(f32, f32, f32)> {
        let (x_ndc, y_ndc, depth) = self.projection.view_to_ndc(view, self.camera.fovy)?;
        let x = (x_ndc + 1.0) / 2.0 * self.width as f32;
        let y = (1.0 - y_ndc) / 2.0 * self.height as f32;
        Some((x, y, depth))
    }

    /// Draw a world-space line, clipped against the near plane and the surface
    fn draw_line(&mut self, from: Point3D, to: Point3D, color: Color) {
        let mut a = self.projection.to_view(from, &self.camera);
        let mut b = self.projection.to_view(to, &self.camera);
        let near = self.projection.near + 0.001;

        if a.z < near && b.z < near {
            return;
        }
        if a.z < near {
            a = clip_to_depth(b, a, near);
        } else if b.z < near {
            b = clip_to_depth(a, b, near);
        }

        let (Some(start), Some(end)) = (self.view_to_screen_f32(a), self.view_to_screen_f32(b)) else {
            return;
        };
        let max = ((self.width as f32 - 1.0).max(0.0), (self.height as f32 - 1.0).max(0.0));
        if let Some((start, end)) = clip_to_rect(start, end, max) {
            let round = |(x, y, d): (f32, f32, f32)| (x.round() as i32, y.round() as i32, d);
            self.raster_line(round(start), round(end), color);
        }
    }

    /// Bresenham's line algorithm with interpolated depth
    fn raster_line(&mut self, (x1, y1, d1): (i32, i32, f32), (x2, y2, d2): (i32, i32, f32), color: Color) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x1;
        let mut y = y1;
        let steps = dx.max(-dy) as f32;
        let symbol = if dx > -dy * 2 { "─" } else if -dy > dx * 2 { "│" } else { "·" };

        loop {
            let t = if steps > 0.0 {
                (x - x1).abs().max((y - y1).abs()) as f32 / steps
            } else {
                0.0
            };
            let depth = d1 + (d2 - d1) * t;
            self.set_cell(x, y, symbol, color, depth);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill the screen-space bounding box of a set of projected points
    fn fill_projected(&mut self, corners: &[Point3D], color: Color, depth: f32) {
        let projected: Vec<(i32, i32)> = corners
            .iter()
            .filter_map(|corner| {
                let view = self.projection.to_view(*corner, &self.camera);
                self.view_to_screen(view).map(|(x, y, _)| (x, y))
            })
            .collect();

        if projected.len() != corners.len() {
            return;
        }

        let min_x = projected.iter().map(|p| p.0).min().unwrap_or(0).max(0);
        let max_x = projected.iter().map(|p| p.0).max().unwrap_or(-1).min(self.width as i32 - 1);
        let min_y = projected.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = projected.iter().map(|p| p.1).max().unwrap_or(-1).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.set_cell(x, y, "█", color, depth);
            }
        }
    }
}

/// Point on the segment from `inside` to `outside` where view depth equals `z`
fn clip_to_depth(inside: Point3D, outside: Point3D, z: f32) -> Point3D {
    let t = (inside.z - z) / (inside.z - outside.z);
    Point3D::new(
        inside.x + (outside.x - inside.x) * t,
        inside.y + (outside.y - inside.y) * t,
        z,
    )
}

type ScreenPoint = (f32, f32, f32);

/// Liang-Barsky clipping of a screen-space segment to `[0, max.0] x [0, max.1]`
fn clip_to_rect(start: ScreenPoint, end: ScreenPoint, max: (f32, f32)) -> Option<(ScreenPoint, ScreenPoint)> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let mut t0: f32 = 0.0;
    let mut t1: f32 = 1.0;

    for (p, q) in [
        (-dx, start.0),
        (dx, max.0 - start.0),
        (-dy, start.1),
        (dy, max.1 - start.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f32| {
        (
            start.0 + dx * t,
            start.1 + dy * t,
            start.2 + (end.2 - start.2) * t,
        )
    };
    Some((at(t0), at(t1)))
}

impl RenderBackend for TerminalBackend {
    fn capabilities(&self) -> SurfaceCapabilities {
        SurfaceCapabilities {
            width: self.width,
            height: self.height,
            supports_depth: true,
            resizable: self.resizable,
        }
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if self.resizable {
            self.refresh_size()?;
        }

        // Swap buffers
        std::mem::swap(&mut self.buffer, &mut self.prev_buffer);

        // Clear buffer
        for cell in &mut self.buffer {
            *cell = Cell::blank(self.clear_color);
        }

        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let mut stdout = io::stdout();

        // Diff render - only update changed cells
        for y in 0..self.height as i32 {
            let mut x = 0;
            while x < self.width as i32 {
                let Some(idx) = self.index(x, y) else { break };
                let cell = &self.buffer[idx];
                let prev = &self.prev_buffer[idx];

                if self.dirty || cell.symbol != prev.symbol || cell.fg != prev.fg || cell.bg != prev.bg {
                    queue!(
                        stdout,
                        cursor::MoveTo(x as u16, y as u16),
                        SetForegroundColor(cell.fg.to_crossterm()),
                        SetBackgroundColor(cell.bg.to_crossterm()),
                        Print(&cell.symbol)
                    ).map_err(|e| RenderError::FrameError(e.to_string()))?;
                }
                x += 1;
            }
        }

        stdout.flush()
            .map_err(|e| RenderError::FrameError(e.to_string()))?;
        self.dirty = false;

        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        for cell in &mut self.buffer {
            *cell = Cell::blank(color);
        }
    }

    fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    fn set_camera(&mut self, camera: FirstPersonCamera) {
        self.camera = camera;
    }

    fn draw_cube(&mut self, center: Point3D, size: f32, color: Color) {
        let h = size / 2.0;
        let corners: Vec<Point3D> = [
            (-h, -h, -h), (h, -h, -h), (h, h, -h), (-h, h, -h),
            (-h, -h, h), (h, -h, h), (h, h, h), (-h, h, h),
        ]
        .iter()
        .map(|(x, y, z)| Point3D::new(center.x + x, center.y + y, center.z + z))
        .collect();

        let view = self.projection.to_view(center, &self.camera);
        if let Some((_, _, depth)) = self.view_to_screen(view) {
            self.fill_projected(&corners, color, depth);
        }
    }

    fn draw_plane(&mut self, center: Point3D, size: (f32, f32), color: Color) {
        let half_x = size.0 / 2.0;
        let half_z = size.1 / 2.0;

        let mut offset = -half_x;
        while offset <= half_x {
            let x = center.x + offset;
            self.draw_line(
                Point3D::new(x, center.y, center.z - half_z),
                Point3D::new(x, center.y, center.z + half_z),
                color,
            );
            offset += PLANE_GRID_STEP;
        }

        let mut offset = -half_z;
        while offset <= half_z {
            let z = center.z + offset;
            self.draw_line(
                Point3D::new(center.x - half_x, center.y, z),
                Point3D::new(center.x + half_x, center.y, z),
                color,
            );
            offset += PLANE_GRID_STEP;
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let mut column = x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            self.set_cell_hud(column, y, ch.to_string(), color);
            if width == 2 {
                // Covered by the wide glyph; an empty symbol prints nothing
                self.set_cell_hud(column + 1, y, String::new(), color);
            }
            column += width;
            if column >= self.width as i32 {
                break;
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for row in y..y + height {
            for column in x..x + width {
                if let Some(idx) = self.index(column, row) {
                    let cell = &mut self.buffer[idx];
                    cell.symbol = " ".to_string();
                    cell.bg = color;
                    cell.depth = 0.0;
                }
            }
        }
    }

    fn draw_rect_lines(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width < 2 || height < 2 {
            return;
        }

        let right = x + width - 1;
        let bottom = y + height - 1;
        for column in x..=right {
            let (top, base) = if column == x {
                ("┌", "└")
            } else if column == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            self.set_cell_hud(column, y, top.to_string(), color);
            self.set_cell_hud(column, bottom, base.to_string(), color);
        }
        for row in y + 1..bottom {
            self.set_cell_hud(x, row, "│".to_string(), color);
            self.set_cell_hud(right, row, "│".to_string(), color);
        }
    }
}
