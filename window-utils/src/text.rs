use anyhow::anyhow;
use sdl2::{
    pixels::Color,
    rect::Rect,
    render::{Canvas, TextureCreator},
    ttf::Font,
    video::{Window, WindowContext},
};

/// Which point of the text's bounding box is placed at the requested position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    Centre,
    CentreRight,
    BottomCentre,
}

pub fn anchored_rect(x: i32, y: i32, width: u32, height: u32, anchor: Anchor) -> Rect {
    let (w, h) = (width as i32, height as i32);
    let (left, top) = match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::TopCentre => (x - (w / 2), y),
        Anchor::TopRight => (x - w, y),
        Anchor::CentreLeft => (x, y - (h / 2)),
        Anchor::Centre => (x - (w / 2), y - (h / 2)),
        Anchor::CentreRight => (x - w, y - (h / 2)),
        Anchor::BottomCentre => (x - (w / 2), y - h),
    };
    Rect::new(left, top, width, height)
}

pub fn text_size(font: &Font, text: &str) -> anyhow::Result<(u32, u32)> {
    if text.is_empty() {
        return Ok((0, font.height().max(0) as u32));
    }
    font.size_of(text).map_err(|e| anyhow!("{e}"))
}

/// Draws a line of text. The texture holding the rendered glyphs only lives for the duration of
/// this call.
pub fn render_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    colour: Color,
    (x, y): (i32, i32),
    anchor: Anchor,
) -> anyhow::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let text_surface = font
        .render(text)
        .blended(colour)
        .map_err(|e| anyhow!("{e}"))?;
    let text_texture = text_surface.as_texture(texture_creator)?;
    let query = text_texture.query();
    let rect = anchored_rect(x, y, query.width, query.height, anchor);
    canvas
        .copy(&text_texture, None, Some(rect))
        .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

/// Draws a line of text rotated a quarter turn anticlockwise, centred on `(x, y)`.
pub fn render_text_vertical(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    colour: Color,
    (x, y): (i32, i32),
) -> anyhow::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let text_surface = font
        .render(text)
        .blended(colour)
        .map_err(|e| anyhow!("{e}"))?;
    let text_texture = text_surface.as_texture(texture_creator)?;
    let query = text_texture.query();
    // The destination is the unrotated rectangle. Rotation happens about its centre.
    let rect = anchored_rect(x, y, query.width, query.height, Anchor::Centre);
    canvas
        .copy_ex(&text_texture, None, Some(rect), -90.0, None, false, false)
        .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}
