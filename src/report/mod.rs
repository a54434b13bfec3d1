use serde::Serialize;

use crate::figures::{FigureKind, FigureSet};
use crate::model::{IndexDomain, Unit};
use crate::pipeline::FigureData;

pub mod json;
pub mod text;

pub const TOOL_NAME: &str = "csd-jwt-plots";

#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
    /// Index value (claim or disclosure count) where `max` occurs.
    pub argmax: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureSummary {
    pub stem: String,
    pub file: String,
    pub unit: Unit,
    pub domain: String,
    /// What the x axis counts: "claims" or "disclosed claims".
    pub x_axis: String,
    pub log_y: bool,
    pub lines: Vec<SeriesStats>,
    pub deltas: Vec<SeriesStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFigure {
    pub stem: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSummary {
    pub tool: String,
    pub version: String,
    pub set: String,
    pub figures: Vec<FigureSummary>,
    pub skipped: Vec<SkippedFigure>,
}

impl SetSummary {
    pub fn new(set: FigureSet) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            set: set.dir_name().to_string(),
            figures: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl FigureSummary {
    pub fn from_data(data: &FigureData) -> Self {
        let def = data.def;
        let domain = match def.kind {
            FigureKind::Series { domain, .. } => domain.domain().to_string(),
            FigureKind::DeltaFamily { buckets, .. } => {
                let names: Vec<String> = buckets.iter().map(|b| b.to_string()).collect();
                format!("buckets {}", names.join(","))
            }
        };
        let lines = data
            .lines
            .iter()
            .map(|s| series_stats(s.scheme.column(), &s.domain, &s.values))
            .collect();
        let deltas = data
            .deltas
            .iter()
            .map(|d| series_stats(&d.label, &d.series.domain, &d.series.values))
            .collect();
        Self {
            stem: def.stem.to_string(),
            file: def.file_name(),
            unit: def.unit,
            domain,
            x_axis: def.index_noun().to_string(),
            log_y: def.log_y,
            lines,
            deltas,
        }
    }
}

pub fn series_stats(label: &str, domain: &IndexDomain, values: &[f64]) -> SeriesStats {
    if values.is_empty() {
        return SeriesStats {
            label: label.to_string(),
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            last: 0.0,
            argmax: domain.start,
        };
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut argmax = 0usize;
    let mut sum = 0.0;
    for (i, &v) in values.iter().enumerate() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
            argmax = i;
        }
        sum += v;
    }
    SeriesStats {
        label: label.to_string(),
        min,
        max,
        mean: sum / values.len() as f64,
        last: values[values.len() - 1],
        argmax: domain.value(argmax),
    }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
