use sdl2::rect::Rect;
use standing_wave_widgets::{Slider, ToggleButton};

const PADDING_PX: i32 = 24;
const HINT_HEIGHT_PX: u32 = 48;

/// Where everything goes on the page: a sidebar of controls down the left, and the heading,
/// chart and hint stacked in the remaining space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub sidebar: Rect,
    pub sidebar_header: (i32, i32),
    pub sliders: [Rect; 3],
    pub button: Rect,
    pub title: (i32, i32),
    pub caption: (i32, i32),
    pub chart: Rect,
    pub hint: Rect,
}

impl Layout {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let width = width_px as i32;
        let height = height_px as i32;
        let sidebar_width = (width / 4).clamp(220, 320);
        let sidebar = Rect::new(0, 0, sidebar_width as u32, height_px.max(1));
        let control_width = (sidebar_width - (2 * PADDING_PX)) as u32;
        let slider_spacing = Slider::HEIGHT_PX as i32 + 16;
        let sliders_top = 80;
        let sliders = [0, 1, 2].map(|i| {
            Rect::new(
                PADDING_PX,
                sliders_top + (i * slider_spacing),
                control_width,
                Slider::HEIGHT_PX,
            )
        });
        let button = Rect::new(
            PADDING_PX,
            sliders_top + (3 * slider_spacing) + 8,
            control_width,
            ToggleButton::HEIGHT_PX,
        );
        let main_left = sidebar_width + (2 * PADDING_PX);
        let main_width = (width - main_left - (2 * PADDING_PX)).max(1);
        let chart_top = 110;
        let available_height =
            (height - chart_top - HINT_HEIGHT_PX as i32 - (2 * PADDING_PX))
                .max(100);
        // Keep the chart twice as wide as it is tall.
        let chart_height = available_height.min(main_width / 2).max(1);
        let chart_width = (chart_height * 2).min(main_width);
        let chart = Rect::new(
            main_left,
            chart_top,
            chart_width as u32,
            chart_height as u32,
        );
        let hint = Rect::new(
            main_left,
            chart.bottom() + PADDING_PX,
            chart_width as u32,
            HINT_HEIGHT_PX,
        );
        Self {
            sidebar,
            sidebar_header: (PADDING_PX, PADDING_PX),
            sliders,
            button,
            title: (main_left, PADDING_PX),
            caption: (main_left, PADDING_PX + 46),
            chart,
            hint,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_window_fits() {
        let layout = Layout::new(1280, 720);
        let window = Rect::new(0, 0, 1280, 720);
        assert!(window.contains_rect(layout.chart));
        assert!(window.contains_rect(layout.hint));
        assert_eq!(layout.chart.width(), layout.chart.height() * 2);
        assert!(layout.chart.left() >= layout.sidebar.right());
    }

    #[test]
    fn controls_stack_without_overlap() {
        let layout = Layout::new(1280, 720);
        for pair in layout.sliders.windows(2) {
            assert!(pair[0].bottom() <= pair[1].top());
        }
        assert!(layout.sliders[2].bottom() <= layout.button.top());
        for slider in layout.sliders {
            assert!(layout.sidebar.contains_rect(slider));
        }
        assert!(layout.sidebar.contains_rect(layout.button));
    }

    #[test]
    fn narrow_window_shrinks_chart() {
        let layout = Layout::new(800, 720);
        assert!(layout.chart.right() <= 800);
        assert_eq!(layout.sidebar.width(), 220);
    }
}
