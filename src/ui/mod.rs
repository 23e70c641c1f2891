mod button;
mod checkbox;
mod dropdown;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// X position where the control panel starts (right side of the window)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Frame-interval presets offered by the dropdown, in milliseconds
pub const INTERVALS_MS: &[(f64, &str)] = &[
    (30.0, "30 ms"),
    (60.0, "60 ms"),
    (125.0, "125 ms"),
    (250.0, "250 ms"),
    (500.0, "500 ms"),
];

/// Index of the 60 ms default in `INTERVALS_MS`
pub const DEFAULT_INTERVAL_INDEX: usize = 1;

/// Create the control buttons with the standard panel layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    vec![
        Button::new(px, 130.0, width, BUTTON_HEIGHT, "Play"),
        Button::new(px, 180.0, width, BUTTON_HEIGHT, "Pause"),
        Button::new(px, 230.0, width, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 280.0, width, BUTTON_HEIGHT, "Random"),
    ]
}
