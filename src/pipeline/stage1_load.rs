use std::path::Path;

use crate::figures::{FigureDef, FigureKind};
use crate::input::{MeasurementTable, bucket_table, load_table};
use crate::model::{IndexDomain, MeasurementSeries, Scheme};
use crate::pipeline::PipelineError;

#[derive(Debug, Clone)]
pub struct BucketPair {
    pub bucket: u32,
    pub baseline: MeasurementSeries,
    pub alternative: MeasurementSeries,
}

#[derive(Debug, Clone)]
pub enum Stage1Output {
    Series {
        series: Vec<MeasurementSeries>,
    },
    Family {
        buckets: Vec<BucketPair>,
    },
}

pub fn run_stage1(csv_dir: &Path, def: &FigureDef) -> Result<Stage1Output, PipelineError> {
    match def.kind {
        FigureKind::Series { table, domain, .. } => {
            let domain = domain.domain();
            let table = load_table(csv_dir, table)?;
            let series = select_series(&table, def.schemes, domain)?;
            Ok(Stage1Output::Series { series })
        }
        FigureKind::DeltaFamily {
            metric,
            buckets,
            baseline,
            alternative,
        } => {
            let mut pairs = Vec::with_capacity(buckets.len());
            for &bucket in buckets {
                let table = load_table(csv_dir, &bucket_table(bucket, metric))?;
                let domain = IndexDomain::disclosed(bucket);
                pairs.push(BucketPair {
                    bucket,
                    baseline: scheme_series(&table, baseline, domain)?,
                    alternative: scheme_series(&table, alternative, domain)?,
                });
            }
            Ok(Stage1Output::Family { buckets: pairs })
        }
    }
}

/// Pulls the requested scheme columns out of `table`, each checked against
/// `domain`.
pub fn select_series(
    table: &MeasurementTable,
    schemes: &[Scheme],
    domain: IndexDomain,
) -> Result<Vec<MeasurementSeries>, PipelineError> {
    schemes
        .iter()
        .map(|&scheme| scheme_series(table, scheme, domain))
        .collect()
}

pub fn scheme_series(
    table: &MeasurementTable,
    scheme: Scheme,
    domain: IndexDomain,
) -> Result<MeasurementSeries, PipelineError> {
    let samples = table.column(scheme.column())?;
    MeasurementSeries::new(scheme, domain, samples).map_err(|source| PipelineError::Table {
        path: table.path.clone(),
        scheme,
        source,
    })
}
