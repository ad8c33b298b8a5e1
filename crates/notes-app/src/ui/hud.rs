//! Overlay panels drawn on top of the scene

use notes_oui::{Color, FirstPersonCamera, RenderBackend};

use crate::state::Session;
use super::world::BACKGROUND;

const PROMPT: &str = "Press E to read";
const PROMPT_COLOR: Color = Color::DARK_BLUE;

const TEXT_COLOR: Color = Color::Black;
const PANEL_BORDER: Color = Color::PANEL_BLUE;

const CONTROLS_X: i32 = 1;
const CONTROLS_Y: i32 = 1;
const CONTROLS_WIDTH: i32 = 46;
const CONTROLS_HEIGHT: i32 = 9;

const DEBUG_WIDTH: i32 = 40;
const DEBUG_HEIGHT: i32 = 8;

pub fn render_hud(session: &Session, backend: &mut dyn RenderBackend) {
    if session.nearest_note.is_some() {
        render_prompt(backend);
    }

    if session.controls_visible {
        render_controls(session.advanced_controls, backend);
    }

    if session.debug {
        let camera = backend.camera().clone();
        render_debug(&camera, session.nearest_note, backend);
    }
}

fn render_prompt(backend: &mut dyn RenderBackend) {
    let caps = backend.capabilities();
    let x = (caps.width as f32 / 2.37) as i32;
    let y = (caps.height as f32 / 1.5) as i32;
    backend.draw_text(x, y, PROMPT, PROMPT_COLOR);
}

/// Lines of the controls panel
pub fn controls_lines(advanced: bool) -> [&'static str; 7] {
    let (title, movement, look) = if advanced {
        ("Controls(advanced):", "- Move keys: WASD or arrow keys", "- Look around: mouse")
    } else {
        ("Controls:", "- Move keys: WASD", "- Look around: arrow keys")
    };

    [
        title,
        movement,
        look,
        "- Turn advanced on/off (off by default): Q",
        "- Show controls on/off: C",
        "- Interact: E",
        "- Exit game or menus: Escape",
    ]
}

fn render_controls(advanced: bool, backend: &mut dyn RenderBackend) {
    draw_panel(backend, CONTROLS_X, CONTROLS_Y, CONTROLS_WIDTH, CONTROLS_HEIGHT);

    for (row, line) in controls_lines(advanced).iter().enumerate() {
        backend.draw_text(CONTROLS_X + 2, CONTROLS_Y + 1 + row as i32, line, TEXT_COLOR);
    }
}

fn render_debug(camera: &FirstPersonCamera, nearest_note: Option<usize>, backend: &mut dyn RenderBackend) {
    let x = backend.capabilities().width as i32 - DEBUG_WIDTH - 1;
    let y = 1;
    draw_panel(backend, x, y, DEBUG_WIDTH, DEBUG_HEIGHT);

    let nearest = nearest_note.map_or_else(|| "-1".to_string(), |i| i.to_string());
    let lines = [
        "Camera status:".to_string(),
        status_line("Position:", &camera.position.to_string()),
        status_line("Target:", &camera.target.to_string()),
        status_line("Up:", &format!("{:6.3}, {:6.3}, {:6.3}", camera.up.x, camera.up.y, camera.up.z)),
        "Misc Info:".to_string(),
        status_line("nearestNote:", &nearest),
    ];

    for (row, line) in lines.iter().enumerate() {
        backend.draw_text(x + 2, y + 1 + row as i32, line, TEXT_COLOR);
    }
}

fn status_line(name: &str, value: &str) -> String {
    format!(" - {} {}", name, value)
}

fn draw_panel(backend: &mut dyn RenderBackend, x: i32, y: i32, width: i32, height: i32) {
    backend.draw_rect(x, y, width, height, Color::SKY_BLUE.fade(&BACKGROUND, 0.5));
    backend.draw_rect_lines(x, y, width, height, PANEL_BORDER);
}
