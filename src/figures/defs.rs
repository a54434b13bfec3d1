use crate::input::{
    VC_ISSUANCE_DURATION, VC_JWT_LENGTH, VC_VERIFICATION_DURATION, VP_JWT_LENGTH, bucket_table,
};
use crate::model::{IndexDomain, Scheme, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureSet {
    Paper,
    Appendix,
}

impl FigureSet {
    pub fn dir_name(self) -> &'static str {
        match self {
            FigureSet::Paper => "paper",
            FigureSet::Appendix => "appendix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    MiddleRight,
    LowerRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    Claims,
    Disclosed(u32),
}

impl DomainKind {
    pub fn domain(self) -> IndexDomain {
        match self {
            DomainKind::Claims => IndexDomain::claims(),
            DomainKind::Disclosed(bucket) => IndexDomain::disclosed(bucket),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaDef {
    pub baseline: Scheme,
    pub alternative: Scheme,
    pub label: &'static str,
    pub color: u32,
}

#[derive(Debug, Clone, Copy)]
pub enum FigureKind {
    /// One table, one line per scheme, optionally with a baseline-minus-
    /// alternative line on top.
    Series {
        table: &'static str,
        domain: DomainKind,
        delta: Option<DeltaDef>,
    },
    /// One delta line per claim bucket, all drawn on a shared x axis.
    DeltaFamily {
        metric: &'static str,
        buckets: &'static [u32],
        baseline: Scheme,
        alternative: Scheme,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FigureDef {
    pub stem: &'static str,
    pub kind: FigureKind,
    pub schemes: &'static [Scheme],
    pub unit: Unit,
    pub x: Axis,
    pub y: Axis,
    pub log_y: bool,
    pub legend: LegendPosition,
}

impl FigureDef {
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.stem)
    }

    /// What the x axis counts, in report wording.
    pub fn index_noun(&self) -> &'static str {
        match self.kind {
            FigureKind::Series {
                domain: DomainKind::Claims,
                ..
            } => "claims",
            FigureKind::Series { .. } | FigureKind::DeltaFamily { .. } => "disclosed claims",
        }
    }

    pub fn tables(&self) -> Vec<String> {
        match self.kind {
            FigureKind::Series { table, .. } => vec![table.to_string()],
            FigureKind::DeltaFamily {
                metric, buckets, ..
            } => buckets
                .iter()
                .map(|&b| bucket_table(b, metric))
                .collect(),
        }
    }
}

const PAPER_SCHEMES: &[Scheme] = &[Scheme::CsdJwt, Scheme::SdJwt];
const ALL_SCHEMES: &[Scheme] = &[
    Scheme::CsdJwt,
    Scheme::SdJwt,
    Scheme::Merkle,
    Scheme::BbsPlus,
];

pub const CLAIM_BUCKETS: &[u32] = &[10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

const CLAIMS_AXIS: Axis = Axis {
    min: 1.0,
    max: 100.0,
    label: "Number of Claims",
};
const DISCLOSED_10_AXIS: Axis = Axis {
    min: 1.0,
    max: 10.0,
    label: "Number of Disclosed Claims",
};
const DISCLOSED_100_AXIS: Axis = Axis {
    min: 1.0,
    max: 91.0,
    label: "Number of Disclosed Claims",
};

const fn latency_axis(max: f64) -> Axis {
    Axis {
        min: 0.01,
        max,
        label: "Latency (ms)",
    }
}

const fn size_axis(max: f64, label: &'static str) -> Axis {
    Axis {
        min: 0.0,
        max,
        label,
    }
}

const SIZE_REDUCTION_10: DeltaDef = DeltaDef {
    baseline: Scheme::SdJwt,
    alternative: Scheme::CsdJwt,
    label: "CSD-JWT Size Reduction w.r.t. SD-JWT",
    color: 0x666666,
};
const SIZE_REDUCTION_100: DeltaDef = DeltaDef {
    baseline: Scheme::SdJwt,
    alternative: Scheme::CsdJwt,
    label: "CSD-JWT Size Reduction w.r.t. SD-JWT",
    color: 0xC23B22,
};

const fn series(
    stem: &'static str,
    set: FigureSet,
    table: &'static str,
    domain: DomainKind,
    unit: Unit,
    x: Axis,
    y: Axis,
    legend: LegendPosition,
) -> FigureDef {
    let schemes = match set {
        FigureSet::Paper => PAPER_SCHEMES,
        FigureSet::Appendix => ALL_SCHEMES,
    };
    let log_y = matches!(unit, Unit::Latency);
    FigureDef {
        stem,
        kind: FigureKind::Series {
            table,
            domain,
            delta: None,
        },
        schemes,
        unit,
        x,
        y,
        log_y,
        legend,
    }
}

const fn with_delta(mut def: FigureDef, delta: DeltaDef) -> FigureDef {
    if let FigureKind::Series { table, domain, .. } = def.kind {
        def.kind = FigureKind::Series {
            table,
            domain,
            delta: Some(delta),
        };
    }
    def
}

const PAPER_FIGURES: &[FigureDef] = &[
    series(
        "VC issuance latency",
        FigureSet::Paper,
        VC_ISSUANCE_DURATION,
        DomainKind::Claims,
        Unit::Latency,
        CLAIMS_AXIS,
        latency_axis(100.0),
        LegendPosition::UpperLeft,
    ),
    series(
        "VC storage requirement",
        FigureSet::Paper,
        VC_JWT_LENGTH,
        DomainKind::Claims,
        Unit::Size,
        CLAIMS_AXIS,
        size_axis(20.0, "Storage Requirement (KB)"),
        LegendPosition::UpperLeft,
    ),
    series(
        "VC verification latency",
        FigureSet::Paper,
        VC_VERIFICATION_DURATION,
        DomainKind::Claims,
        Unit::Latency,
        CLAIMS_AXIS,
        latency_axis(100.0),
        LegendPosition::UpperLeft,
    ),
    series(
        "10 VP issuance latency",
        FigureSet::Paper,
        "10_vp_issuance_duration",
        DomainKind::Disclosed(10),
        Unit::Latency,
        DISCLOSED_10_AXIS,
        latency_axis(0.1),
        LegendPosition::MiddleRight,
    ),
    series(
        "100 VP issuance latency",
        FigureSet::Paper,
        "100_vp_issuance_duration",
        DomainKind::Disclosed(100),
        Unit::Latency,
        DISCLOSED_100_AXIS,
        latency_axis(1.0),
        LegendPosition::MiddleRight,
    ),
    with_delta(
        series(
            "10 Claims VP Size",
            FigureSet::Paper,
            "10_vp_jwt_length",
            DomainKind::Disclosed(10),
            Unit::Size,
            DISCLOSED_10_AXIS,
            size_axis(3.0, "Size (KB)"),
            LegendPosition::LowerRight,
        ),
        SIZE_REDUCTION_10,
    ),
    with_delta(
        series(
            "100 Claims VP Size",
            FigureSet::Paper,
            "100_vp_jwt_length",
            DomainKind::Disclosed(100),
            Unit::Size,
            DISCLOSED_100_AXIS,
            size_axis(20.0, "Size (KB)"),
            LegendPosition::UpperLeft,
        ),
        SIZE_REDUCTION_100,
    ),
    FigureDef {
        stem: "VP size varying disclosed claims",
        kind: FigureKind::DeltaFamily {
            metric: VP_JWT_LENGTH,
            buckets: CLAIM_BUCKETS,
            baseline: Scheme::SdJwt,
            alternative: Scheme::CsdJwt,
        },
        schemes: PAPER_SCHEMES,
        unit: Unit::Size,
        x: DISCLOSED_100_AXIS,
        y: size_axis(12.0, "CSD-JWT Size Reduction w.r.t. SD-JWT (KB)"),
        log_y: false,
        legend: LegendPosition::UpperRight,
    },
    series(
        "10 Claims VP verification latency",
        FigureSet::Paper,
        "10_vp_verification_duration",
        DomainKind::Disclosed(10),
        Unit::Latency,
        DISCLOSED_10_AXIS,
        latency_axis(10.0),
        LegendPosition::MiddleRight,
    ),
    series(
        "100 Claims VP verification latency",
        FigureSet::Paper,
        "100_vp_verification_duration",
        DomainKind::Disclosed(100),
        Unit::Latency,
        DISCLOSED_100_AXIS,
        latency_axis(100.0),
        LegendPosition::MiddleRight,
    ),
];

const APPENDIX_FIGURES: &[FigureDef] = &[
    series(
        "VC issuance latency",
        FigureSet::Appendix,
        VC_ISSUANCE_DURATION,
        DomainKind::Claims,
        Unit::Latency,
        CLAIMS_AXIS,
        latency_axis(100.0),
        LegendPosition::UpperLeft,
    ),
    series(
        "VC storage requirement",
        FigureSet::Appendix,
        VC_JWT_LENGTH,
        DomainKind::Claims,
        Unit::Size,
        CLAIMS_AXIS,
        size_axis(20.0, "Storage Requirement (KB)"),
        LegendPosition::UpperLeft,
    ),
    series(
        "Verification latency",
        FigureSet::Appendix,
        VC_VERIFICATION_DURATION,
        DomainKind::Claims,
        Unit::Latency,
        CLAIMS_AXIS,
        latency_axis(100.0),
        LegendPosition::UpperLeft,
    ),
    series(
        "10 Claims VP issuance latency",
        FigureSet::Appendix,
        "10_vp_issuance_duration",
        DomainKind::Disclosed(10),
        Unit::Latency,
        DISCLOSED_10_AXIS,
        latency_axis(10.0),
        LegendPosition::MiddleRight,
    ),
    series(
        "100 Claims VP issuance latency",
        FigureSet::Appendix,
        "100_vp_issuance_duration",
        DomainKind::Disclosed(100),
        Unit::Latency,
        DISCLOSED_100_AXIS,
        latency_axis(100.0),
        LegendPosition::MiddleRight,
    ),
    series(
        "10 Claims VP Size",
        FigureSet::Appendix,
        "10_vp_jwt_length",
        DomainKind::Disclosed(10),
        Unit::Size,
        DISCLOSED_10_AXIS,
        size_axis(3.0, "Size (KB)"),
        LegendPosition::LowerRight,
    ),
    series(
        "100 Claims VP Size",
        FigureSet::Appendix,
        "100_vp_jwt_length",
        DomainKind::Disclosed(100),
        Unit::Size,
        DISCLOSED_100_AXIS,
        size_axis(20.0, "Size (KB)"),
        LegendPosition::UpperLeft,
    ),
];

pub fn builtin_figures(set: FigureSet) -> &'static [FigureDef] {
    match set {
        FigureSet::Paper => PAPER_FIGURES,
        FigureSet::Appendix => APPENDIX_FIGURES,
    }
}
