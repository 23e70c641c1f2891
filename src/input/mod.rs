use macroquad::prelude::*;
use crate::rendering::canvas_extent;
use crate::session::Session;
use crate::ui::Button;

/// Pointer-paint state: `pressed` is set on pointer-down over the canvas,
/// cleared on pointer-up, and observed on pointer-move. `last_cell` keeps a
/// drag stroke from re-toggling the cell it is currently over.
#[derive(Default)]
pub struct PaintState {
    pressed: bool,
    last_cell: Option<(u32, u32)>,
}

/// Toggle cells under the pointer while the left button is held down.
/// Works in both run states, independent of the step loop.
pub fn handle_mouse_paint(session: &mut Session, paint: &mut PaintState, mouse_pos: (f32, f32)) {
    let (height, width) = session.dimensions();
    let canvas_width = canvas_extent(width);
    let canvas_height = canvas_extent(height);

    if is_mouse_button_released(MouseButton::Left) {
        paint.pressed = false;
        paint.last_cell = None;
    }
    if is_mouse_button_pressed(MouseButton::Left)
        && mouse_pos.0 < canvas_width
        && mouse_pos.1 < canvas_height
    {
        paint.pressed = true;
    }
    if !paint.pressed {
        return;
    }

    if let Some((row, col)) =
        session.pointer_to_cell(mouse_pos.0, mouse_pos.1, canvas_width, canvas_height)
    {
        if paint.last_cell != Some((row, col)) {
            session.toggle_cell(row, col);
            paint.last_cell = Some((row, col));
        }
    }
}

/// Route panel button clicks to session operations.
/// Button order matches `ui::create_buttons`.
pub fn process_button_clicks(
    session: &mut Session,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    now: f64,
) {
    for (idx, btn) in buttons.iter().enumerate() {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => session.play(now),
            1 => session.pause(),
            2 => session.reset(),
            3 => session.randomize(),
            _ => {}
        }
    }
}

/// Keyboard shortcuts for run control
pub fn process_keyboard_input(session: &mut Session, now: f64) {
    if is_key_pressed(KeyCode::Space) {
        if session.is_running() {
            session.pause();
        } else {
            session.play(now);
        }
    }
    if is_key_pressed(KeyCode::C) {
        session.reset();
    }
    if is_key_pressed(KeyCode::R) {
        session.randomize();
    }
}
