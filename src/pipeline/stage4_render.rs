use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::figures::LegendPosition;
use crate::model::Scheme;
use crate::pipeline::{FigureData, PipelineError};

macro_rules! hexcolour {
    ($colour:expr) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const GRID: RGBColor = hexcolour!(0xEEEEEE);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Diamond,
    Square,
    Hexagon,
    Bar,
    Triangle,
    Circle,
    Cross,
}

const DELTA_MARKERS: &[MarkerShape] = &[
    MarkerShape::Triangle,
    MarkerShape::Cross,
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::Diamond,
];

pub fn scheme_style(scheme: Scheme) -> (RGBColor, MarkerShape) {
    match scheme {
        Scheme::SdJwt => (hexcolour!(0xF2BB66), MarkerShape::Diamond),
        Scheme::CsdJwt => (hexcolour!(0x779ECB), MarkerShape::Square),
        Scheme::Merkle => (hexcolour!(0xB84631), MarkerShape::Hexagon),
        Scheme::BbsPlus => (hexcolour!(0x666666), MarkerShape::Bar),
    }
}

/// Roughly ten markers per line.
fn marker_every(n: usize) -> usize {
    (n / 10).max(1)
}

fn label_position(pos: LegendPosition) -> SeriesLabelPosition {
    match pos {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

fn backend_err<E: std::fmt::Display>(err: E) -> String {
    err.to_string()
}

struct Line {
    label: String,
    colour: RGBColor,
    marker: MarkerShape,
    points: Vec<(f64, f64)>,
}

fn collect_lines(data: &FigureData) -> Vec<Line> {
    let log_y = data.def.log_y;
    let keep = |points: Vec<(f64, f64)>| -> Vec<(f64, f64)> {
        // Log axes cannot place non-positive samples.
        points
            .into_iter()
            .filter(|&(_, y)| !log_y || y > 0.0)
            .collect()
    };

    let mut lines = Vec::with_capacity(data.lines.len() + data.deltas.len());
    for series in &data.lines {
        let (colour, marker) = scheme_style(series.scheme);
        lines.push(Line {
            label: series.scheme.column().to_string(),
            colour,
            marker,
            points: keep(series.points()),
        });
    }

    let shared_x = match data.def.kind {
        crate::figures::FigureKind::DeltaFamily { .. } => Some(data.def.x),
        crate::figures::FigureKind::Series { .. } => None,
    };
    for (i, delta) in data.deltas.iter().enumerate() {
        let points = match shared_x {
            // Buckets differ in disclosure step; spread each over the shared axis.
            Some(axis) => spread_points(&delta.series.values, axis.min, axis.max),
            None => delta.series.points(),
        };
        lines.push(Line {
            label: delta.label.clone(),
            colour: hexcolour!(delta.color),
            marker: DELTA_MARKERS[i % DELTA_MARKERS.len()],
            points: keep(points),
        });
    }
    lines
}

/// Places `values` at evenly spaced positions from `min` in steps of
/// `(max - min) / (n - 1)`.
pub fn spread_points(values: &[f64], min: f64, max: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 {
        (max - min) / (n - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (min + step * i as f64, v))
        .collect()
}

fn draw_markers<'a, DB, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    line: &Line,
) -> Result<(), String>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let every = marker_every(line.points.len());
    let points = line.points.iter().step_by(every).copied().collect::<Vec<_>>();
    let fill = line.colour.filled();
    let stroke = line.colour.stroke_width(2);

    let drawn = match line.marker {
        MarkerShape::Circle => chart.draw_series(points.iter().map(|&p| Circle::new(p, 4, fill))),
        MarkerShape::Triangle => {
            chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, 5, fill)))
        }
        MarkerShape::Cross => chart.draw_series(points.iter().map(|&p| Cross::new(p, 4, stroke))),
        MarkerShape::Square => chart.draw_series(
            points
                .iter()
                .map(|&p| EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], fill)),
        ),
        MarkerShape::Diamond => chart.draw_series(points.iter().map(|&p| {
            EmptyElement::at(p) + Polygon::new(vec![(0, -5), (5, 0), (0, 5), (-5, 0)], fill)
        })),
        MarkerShape::Hexagon => chart.draw_series(points.iter().map(|&p| {
            EmptyElement::at(p)
                + Polygon::new(
                    vec![(-2, -5), (2, -5), (5, 0), (2, 5), (-2, 5), (-5, 0)],
                    fill,
                )
        })),
        MarkerShape::Bar => chart.draw_series(points.iter().map(|&p| {
            EmptyElement::at(p) + PathElement::new(vec![(0, -5), (0, 5)], stroke)
        })),
    };
    drawn.map(|_| ()).map_err(backend_err)
}

fn draw_body<'a, DB, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    data: &FigureData,
) -> Result<(), String>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let def = data.def;
    chart
        .configure_mesh()
        .x_desc(def.x.label)
        .y_desc(def.y.label)
        .light_line_style(GRID)
        .bold_line_style(GRID)
        .draw()
        .map_err(backend_err)?;

    for line in collect_lines(data) {
        let colour = line.colour;
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                colour.stroke_width(2),
            ))
            .map_err(backend_err)?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
            });
        draw_markers(chart, &line)?;
    }

    chart
        .configure_series_labels()
        .position(label_position(def.legend))
        .background_style(WHITE.mix(0.6))
        .border_style(BLACK.mix(0.4))
        .draw()
        .map_err(backend_err)?;
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &FigureData,
) -> Result<(), String> {
    let def = data.def;
    root.fill(&WHITE).map_err(backend_err)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60);

    if def.log_y {
        let mut chart = builder
            .build_cartesian_2d(def.x.min..def.x.max, (def.y.min..def.y.max).log_scale())
            .map_err(backend_err)?;
        draw_body(&mut chart, data)?;
    } else {
        let mut chart = builder
            .build_cartesian_2d(def.x.min..def.x.max, def.y.min..def.y.max)
            .map_err(backend_err)?;
        draw_body(&mut chart, data)?;
    }

    root.present().map_err(backend_err)
}

pub fn render_svg_string(data: &FigureData, opts: &RenderOptions) -> Result<String, PipelineError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (opts.width, opts.height)).into_drawing_area();
        draw(&root, data).map_err(|msg| PipelineError::Render {
            figure: data.def.stem.to_string(),
            msg,
        })?;
    }
    Ok(buf)
}

pub fn render_to_file(
    data: &FigureData,
    path: &Path,
    opts: &RenderOptions,
) -> Result<(), PipelineError> {
    let svg = render_svg_string(data, opts)?;
    fs::write(path, svg).map_err(|e| PipelineError::io(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_render.rs"]
mod tests;
