use serde::Serialize;

use crate::model::scheme::Scheme;
use crate::model::units::Unit;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("series does not fit index domain: expected {expected} samples, got {actual}")]
    DomainMismatch { expected: usize, actual: usize },
    #[error("series are indexed on different domains: {left} vs {right}")]
    IndexMisaligned { left: IndexDomain, right: IndexDomain },
}

/// Arithmetic progression of claim counts a series is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexDomain {
    pub start: u32,
    pub step: u32,
    pub len: usize,
}

pub const MAX_CLAIMS: u32 = 100;
pub const DISCLOSURE_STEPS: usize = 10;

impl IndexDomain {
    pub const fn new(start: u32, step: u32, len: usize) -> Self {
        Self { start, step, len }
    }

    /// 1..=100, one sample per claim count.
    pub const fn claims() -> Self {
        Self::new(1, 1, MAX_CLAIMS as usize)
    }

    /// Disclosure counts measured for a credential with `bucket` claims:
    /// ten steps of `bucket / 10` starting at one.
    pub fn disclosed(bucket: u32) -> Self {
        let step = (bucket / DISCLOSURE_STEPS as u32).max(1);
        let len = (1..=bucket).step_by(step as usize).count();
        Self::new(1, step, len)
    }

    pub fn value(&self, idx: usize) -> u32 {
        self.start + self.step * idx as u32
    }

    pub fn last(&self) -> u32 {
        if self.len == 0 {
            return self.start;
        }
        self.value(self.len - 1)
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(|i| self.value(i))
    }
}

impl std::fmt::Display for IndexDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={} step {}", self.start, self.last(), self.step)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    pub scheme: Scheme,
    pub domain: IndexDomain,
    pub samples: Vec<f64>,
}

impl MeasurementSeries {
    pub fn new(
        scheme: Scheme,
        domain: IndexDomain,
        samples: Vec<f64>,
    ) -> Result<Self, TransformError> {
        if samples.len() != domain.len {
            return Err(TransformError::DomainMismatch {
                expected: domain.len,
                actual: samples.len(),
            });
        }
        Ok(Self {
            scheme,
            domain,
            samples,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSeries {
    pub scheme: Scheme,
    pub domain: IndexDomain,
    pub unit: Unit,
    pub values: Vec<f64>,
}

impl ScaledSeries {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.domain
            .values()
            .zip(self.values.iter())
            .map(|(x, &y)| (x as f64, y))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeltaSeries {
    pub baseline: Scheme,
    pub alternative: Scheme,
    pub domain: IndexDomain,
    pub unit: Unit,
    pub values: Vec<f64>,
}

impl DeltaSeries {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.domain
            .values()
            .zip(self.values.iter())
            .map(|(x, &y)| (x as f64, y))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/series.rs"]
mod tests;
