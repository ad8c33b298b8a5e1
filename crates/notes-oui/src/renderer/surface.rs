//! Rendering surface capabilities and color types

/// Rendering surface capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCapabilities {
    /// Width in surface units (terminal columns)
    pub width: u32,
    /// Height in surface units (terminal rows)
    pub height: u32,
    /// Supports depth-tested 3D rendering
    pub supports_depth: bool,
    /// Whether the surface follows size changes of the display
    pub resizable: bool,
}

impl Default for SurfaceCapabilities {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            supports_depth: false,
            resizable: false,
        }
    }
}

/// Color representation supporting multiple formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Reset to default
    #[default]
    Reset,
    /// Standard ANSI color
    Black,
    DarkGrey,
    Red,
    Green,
    Blue,
    White,
    Grey,
    /// True color RGB
    Rgb(u8, u8, u8),
}

impl Color {
    /// Scene palette
    pub const RAY_WHITE: Self = Color::Rgb(245, 245, 245);
    pub const LIGHT_GRAY: Self = Color::Rgb(200, 200, 200);
    pub const PURPLE: Self = Color::Rgb(200, 122, 255);
    pub const VIOLET: Self = Color::Rgb(135, 60, 190);
    pub const SKY_BLUE: Self = Color::Rgb(102, 191, 255);
    pub const PANEL_BLUE: Self = Color::Rgb(0, 121, 241);
    pub const DARK_BLUE: Self = Color::Rgb(0, 82, 172);

    /// Convert to crossterm color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        match self {
            Color::Reset => crossterm::style::Color::Reset,
            Color::Black => crossterm::style::Color::Black,
            Color::DarkGrey => crossterm::style::Color::DarkGrey,
            Color::Red => crossterm::style::Color::Red,
            Color::Green => crossterm::style::Color::Green,
            Color::Blue => crossterm::style::Color::Blue,
            Color::White => crossterm::style::Color::White,
            Color::Grey => crossterm::style::Color::Grey,
            Color::Rgb(r, g, b) => crossterm::style::Color::Rgb {
                r: *r,
                g: *g,
                b: *b,
            },
        }
    }

    /// Blend two colors with alpha (0.0 = self, 1.0 = other)
    pub fn blend(&self, other: &Color, alpha: f32) -> Color {
        match (self.to_rgb(), other.to_rgb()) {
            (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
                let r = (r1 as f32 * (1.0 - alpha) + r2 as f32 * alpha) as u8;
                let g = (g1 as f32 * (1.0 - alpha) + g2 as f32 * alpha) as u8;
                let b = (b1 as f32 * (1.0 - alpha) + b2 as f32 * alpha) as u8;
                Color::Rgb(r, g, b)
            }
            _ => {
                if alpha > 0.5 {
                    *other
                } else {
                    *self
                }
            }
        }
    }

    /// Fade towards `background`; `alpha` is the remaining opacity of `self`
    pub fn fade(&self, background: &Color, alpha: f32) -> Color {
        self.blend(background, 1.0 - alpha.clamp(0.0, 1.0))
    }

    /// Convert to RGB tuple if possible
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Black => Some((0, 0, 0)),
            Color::White => Some((255, 255, 255)),
            Color::Red => Some((255, 0, 0)),
            Color::Green => Some((0, 255, 0)),
            Color::Blue => Some((0, 0, 255)),
            Color::Grey => Some((128, 128, 128)),
            Color::DarkGrey => Some((64, 64, 64)),
            Color::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_half() {
        let faded = Color::White.fade(&Color::Black, 0.5);
        assert_eq!(faded, Color::Rgb(127, 127, 127));
    }

    #[test]
    fn test_fade_opaque_keeps_color() {
        assert_eq!(Color::SKY_BLUE.fade(&Color::RAY_WHITE, 1.0), Color::SKY_BLUE);
    }

    #[test]
    fn test_reset_does_not_blend() {
        assert_eq!(Color::Reset.blend(&Color::Red, 0.2), Color::Reset);
        assert_eq!(Color::Reset.blend(&Color::Red, 0.8), Color::Red);
    }
}
