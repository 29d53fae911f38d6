mod chart;
mod layout;
mod ui;

use clap::Parser;
use standing_wave_core::{Session, SessionConfig, SpatialGrid, WaveParameters};
use standing_wave_widgets::{Window, WindowConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "standing_wave")]
#[command(
    about = "Interactive demonstration of a standing wave formed by two counter-propagating waves"
)]
struct Args {
    #[arg(long, default_value_t = 1280)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    #[arg(long)]
    fullscreen: bool,
    /// TrueType font with CJK glyphs. Defaults to SimHei.ttf in the working directory or next to
    /// the executable.
    #[arg(long)]
    font: Option<PathBuf>,
    #[arg(long, default_value_t = 16)]
    font_size: u16,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let window = Window::new(&WindowConfig {
        title: "驻波演示".to_string(),
        width_px: args.width,
        height_px: args.height,
        fullscreen: args.fullscreen,
        font_path: args.font,
        font_size: args.font_size,
    })?;
    if !window.has_font() {
        log::warn!(
            "Running without text. Pass --font with the path to a font that has Chinese glyphs."
        );
    }
    let params = WaveParameters::default();
    let mut ui = ui::SdlUi::new(window, &params);
    let mut session =
        Session::new(params, SpatialGrid::default(), SessionConfig::default());
    log::info!("Starting with {:?}", session.params());
    session.run(&mut ui)?;
    log::info!("Quit at t = {:.2}", session.state().phase());
    Ok(())
}
