use macroquad::prelude::*;

const BOX_SIZE: f32 = 18.0;

/// Checkbox UI component: a toggle box with a label to its right
#[derive(Clone)]
pub struct Checkbox {
    x: f32,
    y: f32,
    label: String,
    checked: bool,
}

impl Checkbox {
    pub fn new(x: f32, y: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            checked: false,
        }
    }

    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn box_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BOX_SIZE, BOX_SIZE)
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.box_bounds().contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Handle interaction; returns true if the checked state flipped
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left) {
            self.checked = !self.checked;
            return true;
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let border = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            WHITE
        };

        draw_rectangle(self.x, self.y, BOX_SIZE, BOX_SIZE, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle_lines(self.x, self.y, BOX_SIZE, BOX_SIZE, 2.0, border);

        if self.checked {
            draw_rectangle(
                self.x + 4.0,
                self.y + 4.0,
                BOX_SIZE - 8.0,
                BOX_SIZE - 8.0,
                Color::from_rgba(0, 255, 150, 255),
            );
        }

        draw_text(
            &self.label,
            self.x + BOX_SIZE + 8.0,
            self.y + BOX_SIZE - 4.0,
            16.0,
            WHITE,
        );
    }
}
