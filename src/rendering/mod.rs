use macroquad::prelude::*;
use crate::session::Session;
use crate::ui::{Button, Checkbox, Dropdown, PANEL_WIDTH, panel_x};

/// Cell edge length in pixels; cells sit on a 1px gridline pitch
pub const CELL_SIZE: f32 = 16.0;

const GRID_COLOR: Color = Color::new(0.125, 0.063, 0.063, 1.0); // #201010
const DEAD_COLOR: Color = Color::new(0.251, 0.125, 0.063, 1.0); // #402010
const ALIVE_COLOR: Color = Color::new(0.988, 0.259, 0.490, 1.0); // #fc427d

/// Canvas extent along one axis holding `cells` cells: one gridline between
/// and around every cell
pub fn canvas_extent(cells: u32) -> f32 {
    (CELL_SIZE + 1.0) * cells as f32 + 1.0
}

/// Top-left pixel of the cell at (row, col), inside its gridlines
pub fn cell_origin(row: u32, col: u32) -> (f32, f32) {
    (
        col as f32 * (CELL_SIZE + 1.0) + 1.0,
        row as f32 * (CELL_SIZE + 1.0) + 1.0,
    )
}

/// Draw gridlines at fixed pixel pitch across the whole canvas
fn draw_grid_lines(height: u32, width: u32) {
    let extent_x = canvas_extent(width);
    let extent_y = canvas_extent(height);

    for col in 0..=width {
        let x = col as f32 * (CELL_SIZE + 1.0) + 1.0;
        draw_line(x, 0.0, x, extent_y, 1.0, GRID_COLOR);
    }
    for row in 0..=height {
        let y = row as f32 * (CELL_SIZE + 1.0) + 1.0;
        draw_line(0.0, y, extent_x, y, 1.0, GRID_COLOR);
    }
}

/// Fill one rectangle per cell, colored by state, reading the engine's
/// buffer through the session
fn draw_cells(session: &Session) {
    let (height, width) = session.dimensions();
    let cells = session.cells();
    let engine = session.engine();

    for row in 0..height {
        for col in 0..width {
            let color = if cells[engine.index_of(row, col)].is_alive() {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };
            let (x, y) = cell_origin(row, col);
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        }
    }
}

/// Draw the whole canvas: gridlines first, cells on top. Pure function of the
/// session state; drawing twice with unchanged state shows the same frame.
pub fn draw_session(session: &Session) {
    let (height, width) = session.dimensions();
    draw_grid_lines(height, width);
    draw_cells(session);
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: buttons, checkbox, interval dropdown, and status
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    checkbox: &Checkbox,
    dropdown: &Dropdown,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    checkbox.draw(mouse_pos);

    let px = panel_x() + 10.0;

    let controls = [
        ("Controls:", 330.0, 14.0, WHITE),
        ("LMB: Toggle cells", 345.0, 12.0, GRAY),
        ("Space: Play/Pause", 358.0, 12.0, GRAY),
        ("C: Reset", 371.0, 12.0, GRAY),
        ("R: Random", 384.0, 12.0, GRAY),
        ("Up/Down: Interval", 397.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (height, width) = session.dimensions();
    let labels = [
        (
            format!("Grid: {width}x{height}"),
            430.0,
            12.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
        ("Interval:".to_owned(), 460.0, 16.0, WHITE),
        (
            format!("{:.0} ms", session.interval_ms()),
            480.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:".to_owned(), 510.0, 16.0, WHITE),
        (
            format!("{}", session.generation()),
            530.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:".to_owned(), 565.0, 16.0, WHITE),
        (
            if session.is_running() { "Running" } else { "Paused" }.to_owned(),
            585.0,
            16.0,
            if session.is_running() {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Dropdown last so an open menu sits on top of everything
    dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_extent_matches_pitch() {
        assert_eq!(canvas_extent(80), 17.0 * 80.0 + 1.0);
        assert_eq!(canvas_extent(40), 17.0 * 40.0 + 1.0);
        assert_eq!(canvas_extent(0), 1.0);
    }

    #[test]
    fn test_cell_origin_offsets_past_gridline() {
        assert_eq!(cell_origin(0, 0), (1.0, 1.0));
        assert_eq!(cell_origin(2, 3), (3.0 * 17.0 + 1.0, 2.0 * 17.0 + 1.0));
    }
}
