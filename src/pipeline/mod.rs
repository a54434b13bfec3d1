use std::fs;
use std::path::{Path, PathBuf};

use crate::figures::{FigureDef, FigureKind, FigureSet, builtin_figures};
use crate::input::InputError;
use crate::model::{DeltaSeries, ScaledSeries, Scheme, TransformError};
use crate::report::{FigureSummary, SetSummary, SkippedFigure};

pub mod stage1_load;
pub mod stage2_scale;
pub mod stage3_delta;
pub mod stage4_render;
pub mod stage5_report;

use stage1_load::{Stage1Output, run_stage1};
use stage2_scale::{run_stage2, scale};
use stage3_delta::{delta, delta_family, find_scheme};
use stage4_render::{RenderOptions, render_to_file};
use stage5_report::write_reports;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("{path}: column {scheme}: {source}")]
    Table {
        path: PathBuf,
        scheme: Scheme,
        #[source]
        source: TransformError,
    },
    #[error("figure {figure} needs scheme {scheme}")]
    MissingScheme { figure: String, scheme: Scheme },
    #[error("rendering {figure} failed: {msg}")]
    Render { figure: String, msg: String },
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serializing summary failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the figure could not be built because an input table is
    /// absent from the CSV directory.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, PipelineError::Input(InputError::MissingInput(_)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDelta {
    pub label: String,
    pub color: u32,
    pub series: DeltaSeries,
}

/// Everything the renderer needs for one chart.
#[derive(Debug, Clone)]
pub struct FigureData {
    pub def: &'static FigureDef,
    pub lines: Vec<ScaledSeries>,
    pub deltas: Vec<LabeledDelta>,
}

/// Palette for the per-bucket delta lines, indexed by `bucket / 10 - 1`.
pub const BUCKET_COLOURS: &[u32] = &[
    0x666666, 0x836953, 0xC19A6B, 0xAEC6CF, 0x779ECB, 0x00CED1, 0xB19CD9, 0xFFB347, 0xF49AC2,
    0xC23B22,
];

pub fn bucket_colour(bucket: u32) -> u32 {
    let idx = (bucket / 10).saturating_sub(1) as usize;
    BUCKET_COLOURS[idx.min(BUCKET_COLOURS.len() - 1)]
}

pub fn prepare_figure(csv_dir: &Path, def: &'static FigureDef) -> Result<FigureData, PipelineError> {
    match run_stage1(csv_dir, def)? {
        Stage1Output::Series { series } => {
            let lines = run_stage2(&series, def.unit);
            let mut deltas = Vec::new();
            if let FigureKind::Series {
                delta: Some(delta_def),
                ..
            } = def.kind
            {
                let baseline = require_scheme(&lines, delta_def.baseline, def)?;
                let alternative = require_scheme(&lines, delta_def.alternative, def)?;
                deltas.push(LabeledDelta {
                    label: delta_def.label.to_string(),
                    color: delta_def.color,
                    series: delta(baseline, alternative)?,
                });
            }
            Ok(FigureData { def, lines, deltas })
        }
        Stage1Output::Family { buckets } => {
            let pairs = buckets
                .iter()
                .map(|p| {
                    (
                        p.bucket,
                        scale(&p.baseline, def.unit),
                        scale(&p.alternative, def.unit),
                    )
                })
                .collect::<Vec<_>>();
            let mut family = delta_family(&pairs)?;
            family.sort_by(|a, b| b.bucket.cmp(&a.bucket));
            let deltas = family
                .into_iter()
                .map(|b| LabeledDelta {
                    label: format!("{} Claims", b.bucket),
                    color: bucket_colour(b.bucket),
                    series: b.delta,
                })
                .collect();
            Ok(FigureData {
                def,
                lines: Vec::new(),
                deltas,
            })
        }
    }
}

fn require_scheme<'a>(
    lines: &'a [ScaledSeries],
    scheme: Scheme,
    def: &FigureDef,
) -> Result<&'a ScaledSeries, PipelineError> {
    find_scheme(lines, scheme).ok_or_else(|| PipelineError::MissingScheme {
        figure: def.stem.to_string(),
        scheme,
    })
}

#[derive(Debug, Clone)]
pub struct SetParams {
    pub csv_dir: PathBuf,
    pub out_dir: PathBuf,
    pub render: RenderOptions,
    pub strict: bool,
}

/// Renders every figure of `set` into `params.out_dir` and writes the set
/// summary next to them.
pub fn run_set(set: FigureSet, params: &SetParams) -> Result<SetSummary, PipelineError> {
    fs::create_dir_all(&params.out_dir).map_err(|e| PipelineError::io(&params.out_dir, e))?;

    let mut summary = SetSummary::new(set);
    for def in builtin_figures(set) {
        let data = match prepare_figure(&params.csv_dir, def) {
            Ok(data) => data,
            Err(err) if err.is_missing_input() && !params.strict => {
                tracing::warn!(figure = def.stem, "skipping figure: {}", err);
                summary.skipped.push(SkippedFigure {
                    stem: def.stem.to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        let path = params.out_dir.join(def.file_name());
        render_to_file(&data, &path, &params.render)?;
        tracing::info!(figure = def.stem, path = %path.display(), "rendered figure");
        summary.figures.push(FigureSummary::from_data(&data));
    }

    write_reports(&summary, &params.out_dir)?;
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
