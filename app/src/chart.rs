//! Draws a [`Figure`] into the chart placeholder. The placeholder is a fixed region of the page
//! which is cleared and redrawn each frame, so there is only ever one chart on screen.

use anyhow::anyhow;
use itertools::Itertools;
use line_2d::Coord;
use sdl2::{
    gfx::primitives::DrawRenderer, pixels::Color, rect::Rect, render::Canvas,
    video::Window as SdlWindow,
};
use standing_wave_core::figure::{
    AxisRange, Figure, LegendEntry, LegendSwatch, LineStyle, Rgb,
};
use standing_wave_widgets::{TextStyle, Window, theme};
use standing_wave_window_utils::text::Anchor;

const MARGIN_LEFT_PX: i32 = 64;
const MARGIN_RIGHT_PX: i32 = 12;
const MARGIN_TOP_PX: i32 = 12;
const MARGIN_BOTTOM_PX: i32 = 52;
const TICK_LENGTH_PX: i32 = 5;
const LEGEND_SWATCH_WIDTH_PX: i32 = 28;

fn colour(Rgb { r, g, b }: Rgb) -> Color {
    Color::RGB(r, g, b)
}

/// Lengths in pixels of the drawn and skipped parts of a broken line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DashPattern {
    on: usize,
    off: usize,
}

impl DashPattern {
    fn for_style(style: LineStyle) -> Option<Self> {
        match style {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(Self { on: 7, off: 4 }),
            LineStyle::Dotted => Some(Self { on: 1, off: 3 }),
        }
    }

    fn is_on(&self, step: usize) -> bool {
        step % (self.on + self.off) < self.on
    }
}

/// The part of the chart inside the axes, and the mapping from data to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub rect: Rect,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl PlotArea {
    pub fn new(chart: Rect, x_range: AxisRange, y_range: AxisRange) -> Self {
        let width = (chart.width() as i32 - MARGIN_LEFT_PX - MARGIN_RIGHT_PX).max(2);
        let height = (chart.height() as i32 - MARGIN_TOP_PX - MARGIN_BOTTOM_PX).max(2);
        Self {
            rect: Rect::new(
                chart.x() + MARGIN_LEFT_PX,
                chart.y() + MARGIN_TOP_PX,
                width as u32,
                height as u32,
            ),
            x_range,
            y_range,
        }
    }

    pub fn x_px(&self, x: f64) -> i32 {
        let span = (self.rect.width() - 1) as f64;
        self.rect.x() + (self.x_range.normalize(x) * span).round() as i32
    }

    /// Pixel rows grow downwards so the top of the y range is the top of the plot.
    pub fn y_px(&self, y: f64) -> i32 {
        let span = (self.rect.height() - 1) as f64;
        let y_px = self.rect.y() + ((1.0 - self.y_range.normalize(y)) * span).round() as i32;
        y_px.clamp(self.rect.top(), self.rect.bottom() - 1)
    }

    pub fn to_px(&self, x: f64, y: f64) -> Coord {
        Coord::new(self.x_px(x), self.y_px(y))
    }
}

/// Rasterizes a polyline as squares of side `width_px` centred on each pixel of the line. Breaks
/// in a dashed line carry on across vertices.
fn draw_polyline(
    canvas: &mut Canvas<SdlWindow>,
    coords: &[Coord],
    colour: Color,
    width_px: u32,
    style: LineStyle,
) -> anyhow::Result<()> {
    let pattern = DashPattern::for_style(style);
    let width_px = width_px.max(1);
    let half_width = width_px as i32 / 2;
    let mut rects = Vec::new();
    let mut step = 0;
    for (i, (&start, &end)) in coords.iter().tuple_windows().enumerate() {
        // Each segment starts where the previous one ended.
        let skip = if i == 0 { 0 } else { 1 };
        for Coord { x, y } in line_2d::coords_between(start, end).skip(skip) {
            if pattern.is_none_or(|p| p.is_on(step)) {
                rects.push(Rect::new(
                    x - half_width,
                    y - half_width,
                    width_px,
                    width_px,
                ));
            }
            step += 1;
        }
    }
    canvas.set_draw_color(colour);
    canvas.fill_rects(&rects).map_err(|e| anyhow!("{e}"))
}

fn draw_grid_and_axes(
    window: &mut Window,
    area: &PlotArea,
    figure: &Figure,
) -> anyhow::Result<()> {
    let grid_colour = colour(figure.grid_lines.colour);
    let x_ticks = figure.x_axis.range.ticks(figure.x_axis.tick_step);
    let y_ticks = figure.y_axis.range.ticks(figure.y_axis.tick_step);
    let rect = area.rect;
    for &x in &x_ticks {
        let x_px = area.x_px(x);
        draw_polyline(
            &mut window.canvas,
            &[Coord::new(x_px, rect.top()), Coord::new(x_px, rect.bottom() - 1)],
            grid_colour,
            1,
            figure.grid_lines.style,
        )?;
    }
    for &y in &y_ticks {
        let y_px = area.y_px(y);
        draw_polyline(
            &mut window.canvas,
            &[Coord::new(rect.left(), y_px), Coord::new(rect.right() - 1, y_px)],
            grid_colour,
            1,
            figure.grid_lines.style,
        )?;
    }
    window.canvas.set_draw_color(theme::TEXT);
    window.canvas.draw_rect(rect).map_err(|e| anyhow!("{e}"))?;
    for &x in &x_ticks {
        let x_px = area.x_px(x);
        window
            .canvas
            .draw_line((x_px, rect.bottom()), (x_px, rect.bottom() + TICK_LENGTH_PX))
            .map_err(|e| anyhow!("{e}"))?;
        window.text(
            TextStyle::Small,
            format!("{x}").as_str(),
            theme::TEXT,
            (x_px, rect.bottom() + TICK_LENGTH_PX + 2),
            Anchor::TopCentre,
        )?;
        window.canvas.set_draw_color(theme::TEXT);
    }
    for &y in &y_ticks {
        let y_px = area.y_px(y);
        window
            .canvas
            .draw_line((rect.left() - TICK_LENGTH_PX, y_px), (rect.left(), y_px))
            .map_err(|e| anyhow!("{e}"))?;
        window.text(
            TextStyle::Small,
            format!("{y}").as_str(),
            theme::TEXT,
            (rect.left() - TICK_LENGTH_PX - 4, y_px),
            Anchor::CentreRight,
        )?;
        window.canvas.set_draw_color(theme::TEXT);
    }
    window.text(
        TextStyle::Body,
        figure.x_axis.label,
        theme::TEXT,
        (rect.center().x(), rect.bottom() + MARGIN_BOTTOM_PX - 2),
        Anchor::BottomCentre,
    )?;
    window.text_vertical(
        TextStyle::Body,
        figure.y_axis.label,
        theme::TEXT,
        (rect.left() - MARGIN_LEFT_PX + 12, rect.center().y()),
    )?;
    Ok(())
}

fn draw_nodes(
    window: &mut Window,
    area: &PlotArea,
    figure: &Figure,
) -> anyhow::Result<()> {
    if let Some(nodes) = figure.nodes.as_ref() {
        let y_px = area.y_px(0.0);
        for &x in &nodes.positions {
            window
                .canvas
                .filled_circle(
                    area.x_px(x) as i16,
                    y_px as i16,
                    nodes.radius_px as i16,
                    colour(nodes.colour),
                )
                .map_err(|e| anyhow!("{e}"))?;
        }
    }
    for annotation in &figure.annotations {
        let Coord { x, y } = area.to_px(annotation.x, annotation.y);
        window.text(
            TextStyle::Small,
            annotation.text.as_str(),
            theme::TEXT,
            (x, y),
            Anchor::BottomCentre,
        )?;
    }
    Ok(())
}

fn draw_legend_swatch(
    window: &mut Window,
    entry: &LegendEntry,
    left: i32,
    centre_y: i32,
) -> anyhow::Result<()> {
    match entry.swatch {
        LegendSwatch::Line {
            colour: line_colour,
            style,
            width_px,
        } => draw_polyline(
            &mut window.canvas,
            &[
                Coord::new(left, centre_y),
                Coord::new(left + LEGEND_SWATCH_WIDTH_PX, centre_y),
            ],
            colour(line_colour),
            width_px,
            style,
        ),
        LegendSwatch::Marker {
            colour: marker_colour,
        } => window
            .canvas
            .filled_circle(
                (left + (LEGEND_SWATCH_WIDTH_PX / 2)) as i16,
                centre_y as i16,
                4,
                colour(marker_colour),
            )
            .map_err(|e| anyhow!("{e}")),
    }
}

fn draw_legend(
    window: &mut Window,
    area: &PlotArea,
    figure: &Figure,
) -> anyhow::Result<()> {
    let entries = figure.legend();
    if entries.is_empty() {
        return Ok(());
    }
    let padding = 8;
    let gap = 8;
    let mut label_width = 0;
    let mut row_height = 16;
    for entry in &entries {
        let (w, h) = window.text_size(TextStyle::Small, entry.label)?;
        label_width = label_width.max(w as i32);
        row_height = row_height.max(h as i32 + 4);
    }
    let width = padding + LEGEND_SWATCH_WIDTH_PX + gap + label_width + padding;
    let height = (2 * padding) + (row_height * entries.len() as i32);
    // Upper right corner, just inside the axes.
    let legend = Rect::new(
        area.rect.right() - width - padding,
        area.rect.top() + padding,
        width as u32,
        height as u32,
    );
    window.canvas.set_draw_color(Color::RGBA(255, 255, 255, 230));
    window.canvas.fill_rect(legend).map_err(|e| anyhow!("{e}"))?;
    window.canvas.set_draw_color(theme::TRACK);
    window.canvas.draw_rect(legend).map_err(|e| anyhow!("{e}"))?;
    for (i, entry) in entries.iter().enumerate() {
        let centre_y = legend.top() + padding + (row_height * i as i32) + (row_height / 2);
        let left = legend.left() + padding;
        draw_legend_swatch(window, entry, left, centre_y)?;
        window.text(
            TextStyle::Small,
            entry.label,
            theme::TEXT,
            (left + LEGEND_SWATCH_WIDTH_PX + gap, centre_y),
            Anchor::CentreLeft,
        )?;
    }
    Ok(())
}

/// Replaces whatever is in the `chart` region with `figure`.
pub fn draw_figure(
    window: &mut Window,
    chart: Rect,
    figure: &Figure,
) -> anyhow::Result<()> {
    window.canvas.set_draw_color(theme::BACKGROUND);
    window.canvas.fill_rect(chart).map_err(|e| anyhow!("{e}"))?;
    let area = PlotArea::new(chart, figure.x_axis.range, figure.y_axis.range);
    draw_grid_and_axes(window, &area, figure)?;
    for curve in &figure.curves {
        let coords = curve
            .points
            .iter()
            .map(|&(x, y)| area.to_px(x, y))
            .dedup()
            .collect::<Vec<_>>();
        draw_polyline(
            &mut window.canvas,
            &coords,
            colour(curve.colour),
            curve.width_px,
            curve.style,
        )?;
    }
    draw_nodes(window, &area, figure)?;
    draw_legend(window, &area, figure)?;
    Ok(())
}
