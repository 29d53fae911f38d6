use crate::{chart, layout::Layout};
use anyhow::anyhow;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Scancode,
};
use standing_wave_core::{
    ControlEvent, ParameterRange, Ui, View, WaveParameters,
};
use standing_wave_widgets::{Slider, TextStyle, ToggleButton, Window, theme};
use standing_wave_window_utils::text::Anchor;
use std::time::Duration;

pub const TITLE: &str = "驻波（Standing Wave）演示";
pub const CAPTION: &str = "使用两个反向传播的简谐波叠加展示驻波的形成";
pub const SIDEBAR_HEADER: &str = "参数设置";
pub const AMPLITUDE_LABEL: &str = "振幅 A";
pub const FREQUENCY_LABEL: &str = "频率 f (Hz)";
pub const SPEED_LABEL: &str = "波速 v (m/s)";
pub const PLAY_PAUSE_LABEL: &str = "播放/暂停";

/// What a window event means for the page.
#[derive(Default)]
struct Translated {
    control_events: Vec<ControlEvent>,
    needs_repaint: bool,
}

/// The whole page in a single window. Controls in a sidebar, the chart in a placeholder.
pub struct SdlUi {
    window: Window,
    amplitude: Slider,
    frequency: Slider,
    speed: Slider,
    play_pause: ToggleButton,
    last_view: Option<View>,
}

impl SdlUi {
    pub fn new(window: Window, params: &WaveParameters) -> Self {
        Self {
            window,
            amplitude: Slider::new(
                AMPLITUDE_LABEL,
                ParameterRange::AMPLITUDE,
                params.amplitude,
            ),
            frequency: Slider::new(
                FREQUENCY_LABEL,
                ParameterRange::FREQUENCY,
                params.frequency,
            ),
            speed: Slider::new(SPEED_LABEL, ParameterRange::SPEED, params.speed),
            play_pause: ToggleButton::new(PLAY_PAUSE_LABEL),
            last_view: None,
        }
    }

    fn layout(&mut self) -> anyhow::Result<Layout> {
        let (width_px, height_px) = self.window.size_px()?;
        let layout = Layout::new(width_px, height_px);
        let [amplitude, frequency, speed] = layout.sliders;
        self.amplitude.set_rect(amplitude);
        self.frequency.set_rect(frequency);
        self.speed.set_rect(speed);
        self.play_pause.set_rect(layout.button);
        Ok(layout)
    }

    fn translate(&mut self, event: &Event) -> Translated {
        let mut translated = Translated::default();
        match *event {
            Event::Quit { .. }
            | Event::KeyDown {
                scancode: Some(Scancode::Escape),
                ..
            } => translated.control_events.push(ControlEvent::Quit),
            Event::KeyDown {
                scancode: Some(Scancode::Space),
                repeat: false,
                ..
            } => translated
                .control_events
                .push(ControlEvent::TogglePlayback),
            Event::Window {
                win_event:
                    WindowEvent::Exposed
                    | WindowEvent::Resized(..)
                    | WindowEvent::SizeChanged(..),
                ..
            } => translated.needs_repaint = true,
            _ => (),
        }
        if let Some(value) = self.amplitude.handle_event(event) {
            translated
                .control_events
                .push(ControlEvent::SetAmplitude(value));
        }
        if let Some(value) = self.frequency.handle_event(event) {
            translated
                .control_events
                .push(ControlEvent::SetFrequency(value));
        }
        if let Some(value) = self.speed.handle_event(event) {
            translated.control_events.push(ControlEvent::SetSpeed(value));
        }
        if self.play_pause.handle_event(event) {
            translated
                .control_events
                .push(ControlEvent::TogglePlayback);
        }
        if matches!(event, Event::MouseMotion { .. }) {
            // Hover highlighting on the button.
            translated.needs_repaint = true;
        }
        translated
    }

    fn translate_all(&mut self, events: Vec<Event>) -> anyhow::Result<Translated> {
        self.layout()?;
        let mut all = Translated::default();
        for event in &events {
            let Translated {
                control_events,
                needs_repaint,
            } = self.translate(event);
            all.control_events.extend(control_events);
            all.needs_repaint |= needs_repaint;
        }
        Ok(all)
    }

    fn draw_sidebar(&mut self, layout: &Layout) -> anyhow::Result<()> {
        self.window.canvas.set_draw_color(theme::SIDEBAR_BACKGROUND);
        self.window
            .canvas
            .fill_rect(layout.sidebar)
            .map_err(|e| anyhow!("{e}"))?;
        self.window.text(
            TextStyle::Heading,
            SIDEBAR_HEADER,
            theme::TEXT,
            layout.sidebar_header,
            Anchor::TopLeft,
        )?;
        self.amplitude.render(&mut self.window)?;
        self.frequency.render(&mut self.window)?;
        self.speed.render(&mut self.window)?;
        self.play_pause.render(&mut self.window)?;
        Ok(())
    }

    fn draw_hint(&mut self, layout: &Layout, hint: &str) -> anyhow::Result<()> {
        self.window.canvas.set_draw_color(theme::INFO_BACKGROUND);
        self.window
            .canvas
            .fill_rect(layout.hint)
            .map_err(|e| anyhow!("{e}"))?;
        self.window.text(
            TextStyle::Body,
            hint,
            theme::INFO_TEXT,
            (layout.hint.left() + 16, layout.hint.center().y()),
            Anchor::CentreLeft,
        )
    }

    /// Redraws the page around the most recent view.
    fn draw(&mut self) -> anyhow::Result<()> {
        let layout = self.layout()?;
        self.window.canvas.set_draw_color(theme::BACKGROUND);
        self.window.canvas.clear();
        self.draw_sidebar(&layout)?;
        self.window.text(
            TextStyle::Heading,
            TITLE,
            theme::TEXT,
            layout.title,
            Anchor::TopLeft,
        )?;
        self.window.text(
            TextStyle::Small,
            CAPTION,
            theme::MUTED_TEXT,
            layout.caption,
            Anchor::TopLeft,
        )?;
        // Taken out for the duration of the draw so the window can be borrowed mutably.
        if let Some(view) = self.last_view.take() {
            let result = chart::draw_figure(&mut self.window, layout.chart, &view.figure)
                .and_then(|()| match view.hint {
                    Some(hint) => self.draw_hint(&layout, hint),
                    None => Ok(()),
                });
            self.last_view = Some(view);
            result?;
        }
        self.window.present();
        Ok(())
    }
}

impl Ui for SdlUi {
    fn present(&mut self, view: View) -> anyhow::Result<()> {
        self.amplitude.set_value(view.params.amplitude);
        self.frequency.set_value(view.params.frequency);
        self.speed.set_value(view.params.speed);
        // Replacing the previous view drops its figure.
        self.last_view = Some(view);
        self.draw()
    }

    fn poll_events(&mut self) -> anyhow::Result<Vec<ControlEvent>> {
        let events = self.window.event_pump.poll_iter().collect::<Vec<_>>();
        // Anything that needs repainting is repainted by the next frame.
        Ok(self.translate_all(events)?.control_events)
    }

    fn wait_for_events(&mut self) -> anyhow::Result<Vec<ControlEvent>> {
        loop {
            let mut events = vec![self.window.event_pump.wait_event()];
            events.extend(self.window.event_pump.poll_iter());
            let translated = self.translate_all(events)?;
            if !translated.control_events.is_empty() {
                return Ok(translated.control_events);
            }
            if translated.needs_repaint {
                self.draw()?;
            }
        }
    }

    fn sleep(&mut self, duration: Duration) {
        self.window.wait_since_present(duration);
    }
}
