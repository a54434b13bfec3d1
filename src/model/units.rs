use serde::Serialize;

/// Raw measurement unit of a benchmark table and the display unit it is
/// scaled into before charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Microseconds, shown in milliseconds.
    Latency,
    /// Bytes, shown in kibibytes.
    Size,
}

pub const MICROS_PER_MILLI: f64 = 1000.0;
pub const BYTES_PER_KIB: f64 = 1024.0;

impl Unit {
    pub fn divisor(self) -> f64 {
        match self {
            Unit::Latency => MICROS_PER_MILLI,
            Unit::Size => BYTES_PER_KIB,
        }
    }

    pub fn display_suffix(self) -> &'static str {
        match self {
            Unit::Latency => "ms",
            Unit::Size => "KB",
        }
    }
}
