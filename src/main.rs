use macroquad::prelude::*;
use life_canvas::{
    Session,
    input::{self, PaintState},
    rendering,
    ui::{self, Checkbox, Dropdown},
};

// Grid dimensions are fixed for the session's lifetime
const GRID_HEIGHT: u32 = 40;
const GRID_WIDTH: u32 = 80;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Canvas".to_owned(),
        window_width: (rendering::canvas_extent(GRID_WIDTH) + ui::PANEL_WIDTH) as i32,
        window_height: rendering::canvas_extent(GRID_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut session = Session::new(GRID_HEIGHT, GRID_WIDTH);
    let mut paint = PaintState::default();

    let interval_items: Vec<String> = ui::INTERVALS_MS
        .iter()
        .map(|(_, name)| name.to_string())
        .collect();
    let mut interval_dropdown = Dropdown::new(
        ui::panel_x() + 10.0,
        30.0,
        ui::PANEL_WIDTH - 20.0,
        "Interval",
        interval_items,
    );
    interval_dropdown.set_selected(ui::DEFAULT_INTERVAL_INDEX);
    let mut wrap_checkbox = Checkbox::new(ui::panel_x() + 10.0, 85.0, "Wrap edges");

    loop {
        let now = get_time();
        let mouse_pos = mouse_position();

        // Keep panel widgets pinned to the right edge
        let px = ui::panel_x() + 10.0;
        interval_dropdown.set_position(px, 30.0);
        wrap_checkbox.set_position(px, 85.0);
        let buttons = ui::create_buttons();

        // An open dropdown menu overlaps the widgets below it, so a click that
        // lands in the menu must not also reach them this frame
        let menu_was_open = interval_dropdown.is_open();
        if interval_dropdown.update(mouse_pos) {
            session.set_interval_ms(ui::INTERVALS_MS[interval_dropdown.selected()].0);
        }
        // Up/Down step through the interval presets (Up = faster)
        if is_key_pressed(KeyCode::Up) && interval_dropdown.selected() > 0 {
            interval_dropdown.set_selected(interval_dropdown.selected() - 1);
            session.set_interval_ms(ui::INTERVALS_MS[interval_dropdown.selected()].0);
        }
        if is_key_pressed(KeyCode::Down)
            && interval_dropdown.selected() + 1 < interval_dropdown.item_count()
        {
            interval_dropdown.set_selected(interval_dropdown.selected() + 1);
            session.set_interval_ms(ui::INTERVALS_MS[interval_dropdown.selected()].0);
        }

        if !menu_was_open {
            if wrap_checkbox.update(mouse_pos) {
                session.set_wrap(wrap_checkbox.is_checked());
            }
            input::process_button_clicks(&mut session, &buttons, mouse_pos, now);
        }
        input::process_keyboard_input(&mut session, now);
        input::handle_mouse_paint(&mut session, &mut paint, mouse_pos);

        session.tick(now);

        clear_background(BLACK);
        rendering::draw_session(&session);
        rendering::draw_controls(
            &session,
            &buttons,
            &wrap_checkbox,
            &interval_dropdown,
            mouse_pos,
        );

        next_frame().await;
    }
}
