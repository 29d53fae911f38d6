use anyhow::anyhow;
use sdl2::{
    EventPump,
    pixels::Color,
    render::{BlendMode, Canvas, TextureCreator},
    video::{Window as SdlWindow, WindowContext},
};
use standing_wave_window_utils::{
    font::{Font, font_candidates, load_first_font},
    text::{Anchor, render_text, render_text_vertical, text_size},
};
use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub fullscreen: bool,
    pub font_path: Option<PathBuf>,
    pub font_size: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Heading,
    Body,
    Small,
}

/// The same font at the sizes used around the page. Any of them may be missing if no font
/// could be loaded, in which case text in that style is skipped.
pub struct Fonts {
    heading: Option<Font<'static, 'static>>,
    body: Option<Font<'static, 'static>>,
    small: Option<Font<'static, 'static>>,
}

impl Fonts {
    fn load(config: &WindowConfig) -> Self {
        let candidates = font_candidates(config.font_path.as_deref());
        let size = config.font_size.max(6);
        Self {
            heading: load_first_font(&candidates, size + (size * 3 / 4)),
            body: load_first_font(&candidates, size),
            small: load_first_font(&candidates, size - (size / 4)),
        }
    }

    fn get(&self, style: TextStyle) -> Option<&Font<'static, 'static>> {
        match style {
            TextStyle::Heading => self.heading.as_ref(),
            TextStyle::Body => self.body.as_ref(),
            TextStyle::Small => self.small.as_ref(),
        }
    }
}

pub struct Window {
    pub canvas: Canvas<SdlWindow>,
    pub event_pump: EventPump,
    pub texture_creator: TextureCreator<WindowContext>,
    pub prev_present: Instant,
    fonts: Fonts,
}

impl Window {
    pub fn new(config: &WindowConfig) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let mut window_builder = video_subsystem.window(
            config.title.as_str(),
            config.width_px,
            config.height_px,
        );
        window_builder.position_centered().resizable();
        if config.fullscreen {
            window_builder.fullscreen_desktop();
        }
        let window = window_builder.build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        canvas.set_blend_mode(BlendMode::Blend);
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "Opened {}x{} window{}",
            config.width_px,
            config.height_px,
            if config.fullscreen { " (fullscreen)" } else { "" }
        );
        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
            prev_present: Instant::now(),
            fonts: Fonts::load(config),
        })
    }

    pub fn size_px(&self) -> anyhow::Result<(u32, u32)> {
        self.canvas.output_size().map_err(|e| anyhow!("{e}"))
    }

    pub fn has_font(&self) -> bool {
        self.fonts.get(TextStyle::Body).is_some()
    }

    /// Size the text would take up. Zero when there's no font to draw it with.
    pub fn text_size(
        &self,
        style: TextStyle,
        text: &str,
    ) -> anyhow::Result<(u32, u32)> {
        match self.fonts.get(style) {
            Some(font) => text_size(font, text),
            None => Ok((0, 0)),
        }
    }

    pub fn text(
        &mut self,
        style: TextStyle,
        text: &str,
        colour: Color,
        position: (i32, i32),
        anchor: Anchor,
    ) -> anyhow::Result<()> {
        if let Some(font) = self.fonts.get(style) {
            render_text(
                &mut self.canvas,
                &self.texture_creator,
                font,
                text,
                colour,
                position,
                anchor,
            )?;
        }
        Ok(())
    }

    pub fn text_vertical(
        &mut self,
        style: TextStyle,
        text: &str,
        colour: Color,
        centre: (i32, i32),
    ) -> anyhow::Result<()> {
        if let Some(font) = self.fonts.get(style) {
            render_text_vertical(
                &mut self.canvas,
                &self.texture_creator,
                font,
                text,
                colour,
                centre,
            )?;
        }
        Ok(())
    }

    pub fn present(&mut self) {
        self.canvas.present();
        self.prev_present = Instant::now();
    }

    /// Sleeps until `period` has passed since the last present.
    pub fn wait_since_present(&self, period: Duration) {
        if let Some(period_to_sleep) =
            (self.prev_present + period).checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }
}
