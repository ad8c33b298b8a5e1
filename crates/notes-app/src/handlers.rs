//! Per-tick input handling

use crossterm::event::KeyCode;
use notes_oui::{FirstPersonCamera, InputFrame, Vector3D};

use crate::config::ControlsConfig;
use crate::state::{Mode, Session};

/// How close the camera must be to a note to read it
pub const INTERACT_DISTANCE: f32 = 1.0;

/// Edge length of the square ground plane
pub const GROUND_SIZE: f32 = 320.0;

/// Advance the session by one tick, return false to close the window
pub fn handle_tick(
    session: &mut Session,
    input: &InputFrame,
    camera: &mut FirstPersonCamera,
    controls: &ControlsConfig,
) -> bool {
    session.tick = session.tick.wrapping_add(1);

    match session.mode {
        Mode::Reading => {
            if input.is_pressed(KeyCode::Esc) {
                session.cancel();
                tracing::debug!("closed note");
            }
            true
        }
        Mode::Exploring => handle_exploring(session, input, camera, controls),
    }
}

fn handle_exploring(
    session: &mut Session,
    input: &InputFrame,
    camera: &mut FirstPersonCamera,
    controls: &ControlsConfig,
) -> bool {
    if input.is_pressed(KeyCode::Esc) {
        tracing::info!(seen = session.notes.seen_count(), total = session.notes.len(), "leaving");
        return false;
    }

    if session.debug && input.is_pressed(KeyCode::Char('v')) {
        session.mode = Mode::Reading;
    }

    if input.is_pressed(KeyCode::Char('q')) {
        session.toggle_advanced();
        tracing::debug!(advanced = session.advanced_controls, "toggled advanced controls");
    }

    if input.is_pressed(KeyCode::Char('e')) && session.interact() {
        tracing::info!(note = ?session.nearest_note, seen = session.notes.seen_count(), "reading note");
    }

    if input.is_pressed(KeyCode::Char('c')) {
        session.toggle_controls();
    }

    if session.advanced_controls {
        update_pro(camera, input, controls);
    } else {
        camera.up = Vector3D::UP;
        camera.update_walk(input);
        camera.up = Vector3D::UP;
    }
    camera.confine(GROUND_SIZE / 2.0);

    if !session.is_reading() {
        session.nearest_note = session
            .notes
            .find_near_interactable(camera.position, INTERACT_DISTANCE);
    }

    true
}

fn update_pro(camera: &mut FirstPersonCamera, input: &InputFrame, controls: &ControlsConfig) {
    let axis = |positive: bool, negative: bool| -> f32 {
        let speed = controls.pro_move_speed;
        (if positive { speed } else { 0.0 }) - (if negative { speed } else { 0.0 })
    };
    let held = |a: KeyCode, b: KeyCode| input.is_held(a) || input.is_held(b);

    let movement = Vector3D::new(
        axis(
            held(KeyCode::Char('w'), KeyCode::Up),
            held(KeyCode::Char('s'), KeyCode::Down),
        ),
        axis(
            held(KeyCode::Char('d'), KeyCode::Right),
            held(KeyCode::Char('a'), KeyCode::Left),
        ),
        0.0,
    );

    let (dx, dy) = input.mouse_delta();
    let rotation = Vector3D::new(
        dx * controls.pro_look_sensitivity,
        dy * controls.pro_look_sensitivity,
        0.0,
    );

    camera.update_pro(movement, rotation);
}
