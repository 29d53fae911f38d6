use crate::{
    theme,
    window::{TextStyle, Window},
};
use anyhow::anyhow;
use coord_2d::Coord;
use sdl2::{event::Event, mouse::MouseButton, pixels::Color, rect::Rect};
use standing_wave_window_utils::text::Anchor;

/// A push button. A click is a press and release both inside the button.
pub struct ToggleButton {
    text: String,
    rect: Rect,
    pressed: bool,
    mouse_position: Coord,
}

impl ToggleButton {
    pub const HEIGHT_PX: u32 = 40;

    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            rect: Rect::new(0, 0, 1, Self::HEIGHT_PX),
            pressed: false,
            mouse_position: Coord::new(-1, -1),
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn contains(&self, coord: Coord) -> bool {
        self.rect.contains_point((coord.x, coord.y))
    }

    /// Returns true when the event completes a click.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::MouseMotion { x, y, .. } => {
                self.mouse_position = Coord::new(x, y);
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.mouse_position = Coord::new(x, y);
                self.pressed = self.contains(self.mouse_position);
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.mouse_position = Coord::new(x, y);
                let clicked = self.pressed && self.contains(self.mouse_position);
                self.pressed = false;
                return clicked;
            }
            _ => (),
        }
        false
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        let background: Color = if self.pressed {
            theme::PRIMARY_PRESSED
        } else if self.contains(self.mouse_position) {
            theme::PRIMARY_HOVER
        } else {
            theme::PRIMARY
        };
        window.canvas.set_draw_color(background);
        window.canvas.fill_rect(self.rect).map_err(|e| anyhow!("{e}"))?;
        let centre = self.rect.center();
        window.text(
            TextStyle::Body,
            self.text.as_str(),
            Color::WHITE,
            (centre.x(), centre.y()),
            Anchor::Centre,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mouse_button(down: bool, x: i32, y: i32) -> Event {
        if down {
            Event::MouseButtonDown {
                timestamp: 0,
                window_id: 0,
                which: 0,
                mouse_btn: MouseButton::Left,
                clicks: 1,
                x,
                y,
            }
        } else {
            Event::MouseButtonUp {
                timestamp: 0,
                window_id: 0,
                which: 0,
                mouse_btn: MouseButton::Left,
                clicks: 1,
                x,
                y,
            }
        }
    }

    fn button() -> ToggleButton {
        let mut button = ToggleButton::new("play");
        button.set_rect(Rect::new(20, 300, 200, ToggleButton::HEIGHT_PX));
        button
    }

    #[test]
    fn click_inside() {
        let mut button = button();
        assert!(!button.handle_event(&mouse_button(true, 50, 310)));
        assert!(button.handle_event(&mouse_button(false, 60, 320)));
    }

    #[test]
    fn release_outside_is_not_a_click() {
        let mut button = button();
        button.handle_event(&mouse_button(true, 50, 310));
        assert!(!button.handle_event(&mouse_button(false, 600, 320)));
    }

    #[test]
    fn press_outside_is_not_a_click() {
        let mut button = button();
        button.handle_event(&mouse_button(true, 5, 5));
        assert!(!button.handle_event(&mouse_button(false, 50, 310)));
    }
}
