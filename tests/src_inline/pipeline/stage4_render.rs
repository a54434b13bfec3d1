use super::*;
use crate::figures::{FigureSet, builtin_figures};
use crate::model::{IndexDomain, ScaledSeries, Unit};
use crate::pipeline::prepare_figure;
use crate::pipeline::tests::fixture_dir;

fn figure(set: FigureSet, stem: &str) -> &'static crate::figures::FigureDef {
    builtin_figures(set)
        .iter()
        .find(|f| f.stem == stem)
        .unwrap()
}

#[test]
fn test_spread_points_even_spacing() {
    let pts = spread_points(&[1.0, 2.0, 3.0], 1.0, 91.0);
    assert_eq!(pts, vec![(1.0, 1.0), (46.0, 2.0), (91.0, 3.0)]);
    assert_eq!(spread_points(&[5.0], 1.0, 91.0), vec![(1.0, 5.0)]);
    assert!(spread_points(&[], 1.0, 91.0).is_empty());
}

#[test]
fn test_marker_every() {
    assert_eq!(marker_every(100), 10);
    assert_eq!(marker_every(10), 1);
    assert_eq!(marker_every(3), 1);
}

#[test]
fn test_scheme_styles_distinct() {
    let (sd, sd_marker) = scheme_style(Scheme::SdJwt);
    let (csd, csd_marker) = scheme_style(Scheme::CsdJwt);
    assert_eq!(sd, RGBColor(0xF2, 0xBB, 0x66));
    assert_eq!(csd, RGBColor(0x77, 0x9E, 0xCB));
    assert_ne!(sd_marker, csd_marker);
}

#[test]
fn test_every_builtin_figure_renders() {
    let dir = fixture_dir();
    for &set in &[FigureSet::Paper, FigureSet::Appendix] {
        for def in builtin_figures(set) {
            let data = prepare_figure(&dir, def).unwrap();
            let svg = render_svg_string(&data, &RenderOptions::default()).unwrap();
            assert!(svg.contains("<svg"), "{}", def.stem);
            assert!(svg.contains("Number of"), "{}", def.stem);
        }
    }
}

#[test]
fn test_legend_lists_schemes_and_delta() {
    let dir = fixture_dir();
    let data = prepare_figure(&dir, figure(FigureSet::Paper, "100 Claims VP Size")).unwrap();
    let svg = render_svg_string(&data, &RenderOptions::default()).unwrap();
    assert!(svg.contains("CSD-JWT"));
    assert!(svg.contains("SD-JWT"));
    assert!(svg.contains("Size Reduction"));
}

#[test]
fn test_log_figure_tolerates_non_positive_samples() {
    let def = figure(FigureSet::Paper, "VC verification latency");
    let domain = IndexDomain::claims();
    let mut values: Vec<f64> = (1..=100).map(|i| i as f64 / 10.0).collect();
    values[0] = 0.0;
    values[1] = -1.0;
    let data = FigureData {
        def,
        lines: vec![ScaledSeries {
            scheme: Scheme::SdJwt,
            domain,
            unit: Unit::Latency,
            values,
        }],
        deltas: Vec::new(),
    };
    let svg = render_svg_string(&data, &RenderOptions { width: 320, height: 240 }).unwrap();
    assert!(svg.contains("<svg") && svg.contains("320"));
}
