use crate::model::{DeltaSeries, ScaledSeries, Scheme, TransformError};

/// Element-wise `a[i] - b[i]`.
pub fn delta_values(a: &[f64], b: &[f64]) -> Result<Vec<f64>, TransformError> {
    if a.len() != b.len() {
        return Err(TransformError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

/// Baseline minus alternative on a shared index domain.
pub fn delta(
    baseline: &ScaledSeries,
    alternative: &ScaledSeries,
) -> Result<DeltaSeries, TransformError> {
    let values = delta_values(&baseline.values, &alternative.values)?;
    if baseline.domain != alternative.domain {
        return Err(TransformError::IndexMisaligned {
            left: baseline.domain,
            right: alternative.domain,
        });
    }
    Ok(DeltaSeries {
        baseline: baseline.scheme,
        alternative: alternative.scheme,
        domain: baseline.domain,
        unit: baseline.unit,
        values,
    })
}

pub fn find_scheme(series: &[ScaledSeries], scheme: Scheme) -> Option<&ScaledSeries> {
    series.iter().find(|s| s.scheme == scheme)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketDelta {
    pub bucket: u32,
    pub delta: DeltaSeries,
}

/// Computes one delta per claim bucket. Buckets are independent; the first
/// misaligned pair aborts the family.
pub fn delta_family(
    pairs: &[(u32, ScaledSeries, ScaledSeries)],
) -> Result<Vec<BucketDelta>, TransformError> {
    pairs
        .iter()
        .map(|(bucket, baseline, alternative)| {
            delta(baseline, alternative).map(|delta| BucketDelta {
                bucket: *bucket,
                delta,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_delta.rs"]
mod tests;
