use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn main_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ROW_HEIGHT)
    }

    fn item_bounds(&self, index: usize) -> Rect {
        Rect::new(
            self.x,
            self.y + ROW_HEIGHT * (index as f32 + 1.0),
            self.width,
            ROW_HEIGHT,
        )
    }

    /// Handle interaction and return true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let mouse = vec2(mouse_pos.0, mouse_pos.1);

        if self.main_bounds().contains(mouse) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            self.is_open = false;
            for i in 0..self.items.len() {
                if self.item_bounds(i).contains(mouse) {
                    let changed = self.selected != i;
                    self.selected = i;
                    return changed;
                }
            }
        }

        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let mouse = vec2(mouse_pos.0, mouse_pos.1);

        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let main = self.main_bounds();
        let main_color = if main.contains(mouse) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(main.x, main.y, main.w, main.h, main_color);
        draw_rectangle_lines(main.x, main.y, main.w, main.h, 2.0, WHITE);
        draw_text(&self.items[self.selected], main.x + 5.0, main.y + 21.0, 16.0, WHITE);
        draw_text("v", main.x + main.w - 18.0, main.y + 21.0, 14.0, WHITE);

        if self.is_open {
            for (i, item) in self.items.iter().enumerate() {
                let row = self.item_bounds(i);
                let row_color = if row.contains(mouse) {
                    Color::from_rgba(100, 149, 237, 255)
                } else if i == self.selected {
                    Color::from_rgba(50, 100, 150, 255)
                } else {
                    Color::from_rgba(45, 45, 45, 255)
                };
                draw_rectangle(row.x, row.y, row.w, row.h, row_color);
                draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));
                draw_text(item, row.x + 5.0, row.y + 21.0, 16.0, WHITE);
            }

            draw_rectangle_lines(
                self.x,
                self.y + ROW_HEIGHT,
                self.width,
                ROW_HEIGHT * self.items.len() as f32,
                2.0,
                WHITE,
            );
        }
    }
}
