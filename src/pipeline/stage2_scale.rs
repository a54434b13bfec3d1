use crate::model::{MeasurementSeries, ScaledSeries, Unit};

/// Divides every sample by `divisor`. The divisor is one of the fixed unit
/// constants; zero or negative values are not guarded against.
pub fn scale_samples(samples: &[f64], divisor: f64) -> Vec<f64> {
    samples.iter().map(|&v| v / divisor).collect()
}

pub fn scale(series: &MeasurementSeries, unit: Unit) -> ScaledSeries {
    ScaledSeries {
        scheme: series.scheme,
        domain: series.domain,
        unit,
        values: scale_samples(&series.samples, unit.divisor()),
    }
}

pub fn run_stage2(series: &[MeasurementSeries], unit: Unit) -> Vec<ScaledSeries> {
    series.iter().map(|s| scale(s, unit)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scale.rs"]
mod tests;
