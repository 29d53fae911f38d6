//! A description of the chart drawn for a single frame. Building a [`Figure`] is pure, so
//! everything about what appears on the chart can be checked without a window. Turning a figure
//! into pixels is the job of the application crate.

use crate::{
    grid::SpatialGrid, nodes::locate_nodes, params::WaveParameters,
    sampler::sample_waves,
};

pub const RIGHTWARD_LABEL: &str = "波 1（→）";
pub const LEFTWARD_LABEL: &str = "波 2（←）";
pub const TOTAL_LABEL: &str = "叠加结果：驻波";
pub const NODES_LABEL: &str = "节点";
pub const X_AXIS_LABEL: &str = "位置 x";
pub const Y_AXIS_LABEL: &str = "位移 y";

/// Height above the zero line at which node positions are written.
pub const NODE_ANNOTATION_OFFSET: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: &'static str,
    pub colour: Rgb,
    pub style: LineStyle,
    pub width_px: u32,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeMarkers {
    pub label: &'static str,
    pub colour: Rgb,
    pub radius_px: u32,
    pub positions: Vec<f64>,
}

/// Text anchored by the centre of its bottom edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `value` onto `[0, 1]` across the range. Values outside the range map outside `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Evenly spaced tick positions from `min` to `max` inclusive.
    pub fn ticks(&self, step: f64) -> Vec<f64> {
        let count = (self.span() / step).round() as usize;
        (0..=count).map(|i| self.min + (i as f64 * step)).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: &'static str,
    pub range: AxisRange,
    pub tick_step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendSwatch {
    Line {
        colour: Rgb,
        style: LineStyle,
        width_px: u32,
    },
    Marker {
        colour: Rgb,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub swatch: LegendSwatch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    pub colour: Rgb,
    pub style: LineStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub curves: Vec<Curve>,
    /// Absent when the wave has no nodes, in which case nothing is drawn for them.
    pub nodes: Option<NodeMarkers>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_position: LegendPosition,
    pub grid_lines: GridLines,
}

impl Figure {
    pub const X_RANGE: AxisRange = AxisRange::new(0.0, 10.0);
    pub const Y_RANGE: AxisRange = AxisRange::new(-4.0, 4.0);

    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut entries = self
            .curves
            .iter()
            .map(|curve| LegendEntry {
                label: curve.label,
                swatch: LegendSwatch::Line {
                    colour: curve.colour,
                    style: curve.style,
                    width_px: curve.width_px,
                },
            })
            .collect::<Vec<_>>();
        if let Some(nodes) = self.nodes.as_ref() {
            entries.push(LegendEntry {
                label: nodes.label,
                swatch: LegendSwatch::Marker {
                    colour: nodes.colour,
                },
            });
        }
        entries
    }
}

fn curve(
    label: &'static str,
    colour: Rgb,
    style: LineStyle,
    width_px: u32,
    xs: &[f64],
    ys: Vec<f64>,
) -> Curve {
    Curve {
        label,
        colour,
        style,
        width_px,
        points: xs.iter().copied().zip(ys).collect(),
    }
}

/// Describes the chart for the wave at time `t`. The axes never depend on the parameters so the
/// picture stays comparable as the amplitude changes.
pub fn build_figure(
    params: &WaveParameters,
    t: f64,
    grid: &SpatialGrid,
) -> Figure {
    let samples = sample_waves(params, t, grid);
    let xs = grid.xs();
    let curves = vec![
        curve(
            RIGHTWARD_LABEL,
            Rgb::BLUE,
            LineStyle::Dashed,
            1,
            xs,
            samples.rightward,
        ),
        curve(
            LEFTWARD_LABEL,
            Rgb::RED,
            LineStyle::Dashed,
            1,
            xs,
            samples.leftward,
        ),
        curve(TOTAL_LABEL, Rgb::BLACK, LineStyle::Solid, 2, xs, samples.total),
    ];
    let positions = locate_nodes(params.wave_number(), grid.upper_bound());
    let annotations = positions
        .iter()
        .map(|&x| Annotation {
            text: format!("{x:.2}"),
            x,
            y: NODE_ANNOTATION_OFFSET,
        })
        .collect();
    let nodes = if positions.is_empty() {
        None
    } else {
        Some(NodeMarkers {
            label: NODES_LABEL,
            colour: Rgb::BLACK,
            radius_px: 4,
            positions,
        })
    };
    Figure {
        curves,
        nodes,
        annotations,
        x_axis: Axis {
            label: X_AXIS_LABEL,
            range: Figure::X_RANGE,
            tick_step: 2.0,
        },
        y_axis: Axis {
            label: Y_AXIS_LABEL,
            range: Figure::Y_RANGE,
            tick_step: 1.0,
        },
        legend_position: LegendPosition::UpperRight,
        grid_lines: GridLines {
            colour: Rgb::new(176, 176, 176),
            style: LineStyle::Dotted,
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn three_labelled_curves() {
        let figure =
            build_figure(&WaveParameters::default(), 0.5, &SpatialGrid::default());
        let labels = figure.curves.iter().map(|c| c.label).collect::<Vec<_>>();
        assert_eq!(labels, vec![RIGHTWARD_LABEL, LEFTWARD_LABEL, TOTAL_LABEL]);
        assert_eq!(figure.curves[0].style, LineStyle::Dashed);
        assert_eq!(figure.curves[1].style, LineStyle::Dashed);
        assert_eq!(figure.curves[2].style, LineStyle::Solid);
        assert!(figure.curves[2].width_px > figure.curves[0].width_px);
        assert!(figure.curves.iter().all(|c| c.points.len() == 400));
    }

    #[test]
    fn axes_are_fixed() {
        let grid = SpatialGrid::default();
        for amplitude in [0.1, 1.0, 2.0] {
            let params = WaveParameters {
                amplitude,
                ..WaveParameters::default()
            };
            let figure = build_figure(&params, 3.0, &grid);
            assert_eq!(figure.x_axis.range, AxisRange::new(0.0, 10.0));
            assert_eq!(figure.y_axis.range, AxisRange::new(-4.0, 4.0));
        }
    }

    #[test]
    fn node_annotations() {
        let figure =
            build_figure(&WaveParameters::default(), 0.0, &SpatialGrid::default());
        let texts = figure
            .annotations
            .iter()
            .map(|a| a.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec![
                "0.00", "1.00", "2.00", "3.00", "4.00", "5.00", "6.00", "7.00",
                "8.00", "9.00", "10.00"
            ]
        );
        assert!(figure.annotations.iter().all(|a| a.y == NODE_ANNOTATION_OFFSET));
        assert_eq!(figure.nodes.as_ref().map(|n| n.positions.len()), Some(11));
    }

    #[test]
    fn no_nodes_means_no_markers() {
        let params = WaveParameters {
            speed: 0.0,
            ..WaveParameters::default()
        };
        let figure = build_figure(&params, 0.0, &SpatialGrid::default());
        assert!(figure.nodes.is_none());
        assert!(figure.annotations.is_empty());
        assert_eq!(figure.legend().len(), 3);
    }

    #[test]
    fn legend_lists_nodes_when_present() {
        let figure =
            build_figure(&WaveParameters::default(), 0.0, &SpatialGrid::default());
        let legend = figure.legend();
        assert_eq!(legend.len(), 4);
        assert_eq!(legend[3].label, NODES_LABEL);
        assert_eq!(
            legend[3].swatch,
            LegendSwatch::Marker {
                colour: Rgb::BLACK
            }
        );
    }

    #[test]
    fn axis_ticks() {
        assert_eq!(
            Figure::X_RANGE.ticks(2.0),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
        assert_eq!(Figure::Y_RANGE.ticks(1.0).len(), 9);
        assert_eq!(Figure::Y_RANGE.normalize(0.0), 0.5);
    }
}
