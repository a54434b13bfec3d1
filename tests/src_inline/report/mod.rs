use super::json::render_summary_json;
use super::text::render_report_text;
use super::*;

fn sample_summary() -> SetSummary {
    let mut summary = SetSummary::new(FigureSet::Paper);
    summary.figures.push(FigureSummary {
        stem: "100 Claims VP Size".to_string(),
        file: "100 Claims VP Size.svg".to_string(),
        unit: Unit::Size,
        domain: IndexDomain::disclosed(100).to_string(),
        x_axis: "disclosed claims".to_string(),
        log_y: false,
        lines: vec![series_stats(
            "SD-JWT",
            &IndexDomain::disclosed(100),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        )],
        deltas: vec![series_stats(
            "CSD-JWT Size Reduction w.r.t. SD-JWT",
            &IndexDomain::disclosed(100),
            &[0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 4.0],
        )],
    });
    summary.skipped.push(SkippedFigure {
        stem: "VC issuance latency".to_string(),
        reason: "missing input".to_string(),
    });
    summary
}

#[test]
fn test_series_stats() {
    let stats = series_stats("x", &IndexDomain::disclosed(100), &[2.0, 6.0, 4.0]);
    assert_eq!(stats.min, 2.0);
    assert_eq!(stats.max, 6.0);
    assert_eq!(stats.mean, 4.0);
    assert_eq!(stats.last, 4.0);
    assert_eq!(stats.argmax, 11);
}

#[test]
fn test_series_stats_empty() {
    let stats = series_stats("x", &IndexDomain::claims(), &[]);
    assert_eq!(stats.max, 0.0);
    assert_eq!(stats.argmax, 1);
}

#[test]
fn test_summary_json_shape() {
    let json = render_summary_json(&sample_summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], TOOL_NAME);
    assert_eq!(value["set"], "paper");
    assert_eq!(value["figures"][0]["unit"], "size");
    assert_eq!(value["figures"][0]["deltas"][0]["argmax"], 81);
    assert_eq!(value["skipped"][0]["stem"], "VC issuance latency");
}

#[test]
fn test_report_text_mentions_peak_savings() {
    let text = render_report_text(&sample_summary());
    assert!(text.starts_with("Benchmark figures (paper)"));
    assert!(text.contains("Rendered: 1"));
    assert!(text.contains("Skipped: 1"));
    assert!(text.contains(
        "CSD-JWT Size Reduction w.r.t. SD-JWT: peaks at 4.500 KB with 81 disclosed claims"
    ));
    assert!(text.contains("SD-JWT: 1.000 .. 10.000 KB (last 10.000)"));
}

#[test]
fn test_report_text_uses_figure_axis_noun() {
    let mut summary = SetSummary::new(FigureSet::Paper);
    let values: Vec<f64> = (1..=100).map(|i| i as f64 / 100.0).collect();
    summary.figures.push(FigureSummary {
        stem: "VC storage requirement".to_string(),
        file: "VC storage requirement.svg".to_string(),
        unit: Unit::Size,
        domain: IndexDomain::claims().to_string(),
        x_axis: "claims".to_string(),
        log_y: false,
        lines: Vec::new(),
        deltas: vec![series_stats("reduction", &IndexDomain::claims(), &values)],
    });
    let text = render_report_text(&summary);
    assert!(text.contains("reduction: peaks at 1.000 KB with 100 claims"));
    assert!(!text.contains("disclosed"));
}

#[test]
fn test_format_f64_3() {
    assert_eq!(format_f64_3(1.0 / 3.0), "0.333");
}
