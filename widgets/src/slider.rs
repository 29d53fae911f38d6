use crate::{
    theme,
    window::{TextStyle, Window},
};
use anyhow::anyhow;
use coord_2d::Coord;
use sdl2::{
    event::Event, gfx::primitives::DrawRenderer, mouse::MouseButton,
    rect::Rect,
};
use standing_wave_core::ParameterRange;
use standing_wave_window_utils::text::Anchor;

const TRACK_OFFSET_Y_PX: i32 = 40;
const TRACK_HEIGHT_PX: u32 = 4;
const HANDLE_RADIUS_PX: i16 = 8;

/// A horizontal slider over a stepped range. Click or drag to set the value, or scroll over it
/// to move one step at a time.
pub struct Slider {
    title: String,
    range: ParameterRange,
    value: f64,
    rect: Rect,
    dragging: bool,
    mouse_position: Coord,
}

impl Slider {
    pub const HEIGHT_PX: u32 = 64;

    pub fn new(title: &str, range: ParameterRange, value: f64) -> Self {
        Self {
            title: title.to_string(),
            range,
            value: range.quantize(value),
            rect: Rect::new(0, 0, 1, Self::HEIGHT_PX),
            dragging: false,
            mouse_position: Coord::new(-1, -1),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = self.range.quantize(value);
    }

    /// The area the slider occupies. Set by whoever lays out the page.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn track_rect(&self) -> Rect {
        let inset = HANDLE_RADIUS_PX as i32;
        Rect::new(
            self.rect.x() + inset,
            self.rect.y() + TRACK_OFFSET_Y_PX,
            (self.rect.width() as i32 - (2 * inset)).max(1) as u32,
            TRACK_HEIGHT_PX,
        )
    }

    fn contains(&self, coord: Coord) -> bool {
        self.rect.contains_point((coord.x, coord.y))
    }

    /// The value under horizontal pixel position `x`.
    pub fn value_at_x(&self, x: i32) -> f64 {
        let track = self.track_rect();
        let value_01 = (x - track.x()) as f64 / track.width() as f64;
        self.range.value_from_01(value_01)
    }

    pub fn handle_x(&self) -> i32 {
        let track = self.track_rect();
        track.x() + (self.range.value_to_01(self.value) * track.width() as f64).round() as i32
    }

    fn update_value(&mut self, value: f64) -> Option<f64> {
        let value = self.range.quantize(value);
        if value == self.value {
            None
        } else {
            self.value = value;
            Some(value)
        }
    }

    /// Returns the new value if the event changed it.
    pub fn handle_event(&mut self, event: &Event) -> Option<f64> {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.mouse_position = Coord::new(x, y);
                if self.contains(self.mouse_position) {
                    self.dragging = true;
                    return self.update_value(self.value_at_x(x));
                }
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => self.dragging = false,
            Event::MouseMotion {
                mousestate, x, y, ..
            } => {
                self.mouse_position = Coord::new(x, y);
                if self.dragging && mousestate.left() {
                    return self.update_value(self.value_at_x(x));
                }
            }
            Event::MouseWheel { y, .. } => {
                if y != 0 && self.contains(self.mouse_position) {
                    return self.update_value(
                        self.value + (y.signum() as f64 * self.range.step),
                    );
                }
            }
            _ => (),
        }
        None
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        window.text(
            TextStyle::Body,
            self.title.as_str(),
            theme::TEXT,
            (self.rect.x(), self.rect.y()),
            Anchor::TopLeft,
        )?;
        window.text(
            TextStyle::Small,
            format!("{:.2}", self.value).as_str(),
            theme::PRIMARY,
            (self.rect.right(), self.rect.y() + 2),
            Anchor::TopRight,
        )?;
        let track = self.track_rect();
        window.canvas.set_draw_color(theme::TRACK);
        window.canvas.fill_rect(track).map_err(|e| anyhow!("{e}"))?;
        let handle_x = self.handle_x();
        window.canvas.set_draw_color(theme::PRIMARY);
        window
            .canvas
            .fill_rect(Rect::new(
                track.x(),
                track.y(),
                (handle_x - track.x()).max(1) as u32,
                TRACK_HEIGHT_PX,
            ))
            .map_err(|e| anyhow!("{e}"))?;
        let handle_y = track.y() + (TRACK_HEIGHT_PX as i32 / 2);
        window
            .canvas
            .filled_circle(
                handle_x as i16,
                handle_y as i16,
                HANDLE_RADIUS_PX,
                theme::PRIMARY,
            )
            .map_err(|e| anyhow!("{e}"))?;
        let range_label_y = track.y() + HANDLE_RADIUS_PX as i32 + 2;
        window.text(
            TextStyle::Small,
            format!("{:.2}", self.range.min).as_str(),
            theme::MUTED_TEXT,
            (track.x(), range_label_y),
            Anchor::TopLeft,
        )?;
        window.text(
            TextStyle::Small,
            format!("{:.2}", self.range.max).as_str(),
            theme::MUTED_TEXT,
            (track.right(), range_label_y),
            Anchor::TopRight,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdl2::mouse::MouseState;

    fn slider() -> Slider {
        let mut slider = Slider::new("A", ParameterRange::AMPLITUDE, 1.0);
        // Track runs from x = 18 to x = 208, 190px for 19 steps.
        slider.set_rect(Rect::new(10, 100, 206, Slider::HEIGHT_PX));
        slider
    }

    fn button_down(x: i32, y: i32) -> Event {
        Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x,
            y,
        }
    }

    #[test]
    fn track_ends_map_to_range_ends() {
        let slider = slider();
        assert_eq!(slider.value_at_x(18), 0.1);
        assert_eq!(slider.value_at_x(208), 2.0);
        assert_eq!(slider.value_at_x(-500), 0.1);
        assert_eq!(slider.value_at_x(5000), 2.0);
    }

    #[test]
    fn click_sets_value() {
        let mut slider = slider();
        assert_eq!(slider.handle_event(&button_down(208, 130)), Some(2.0));
        assert_eq!(slider.value(), 2.0);
        // Clicking on the same value again isn't a change.
        assert_eq!(slider.handle_event(&button_down(208, 130)), None);
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut slider = slider();
        assert_eq!(slider.handle_event(&button_down(208, 20)), None);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn drag_follows_pointer_until_release() {
        let mut slider = slider();
        slider.handle_event(&button_down(18, 130));
        assert_eq!(slider.value(), 0.1);
        let motion = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(1),
            x: 208,
            y: 400,
            xrel: 190,
            yrel: 300,
        };
        assert_eq!(slider.handle_event(&motion), Some(2.0));
        slider.handle_event(&Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 208,
            y: 400,
        });
        assert!(!slider.dragging);
    }

    #[test]
    fn handle_tracks_value() {
        let mut slider = slider();
        slider.set_value(0.1);
        assert_eq!(slider.handle_x(), 18);
        slider.set_value(2.0);
        assert_eq!(slider.handle_x(), 208);
    }
}
