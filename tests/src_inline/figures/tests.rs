use std::collections::BTreeSet;

use super::defs::CLAIM_BUCKETS;
use super::*;
use crate::model::{Scheme, Unit};

fn find_figure(set: FigureSet, stem: &str) -> Option<&'static FigureDef> {
    builtin_figures(set).iter().find(|f| f.stem == stem)
}

#[test]
fn test_paper_set_has_ten_figures() {
    let figs = builtin_figures(FigureSet::Paper);
    assert_eq!(figs.len(), 10);
    assert!(
        figs.iter()
            .all(|f| f.schemes == [Scheme::CsdJwt, Scheme::SdJwt])
    );
}

#[test]
fn test_appendix_set_covers_all_schemes() {
    let figs = builtin_figures(FigureSet::Appendix);
    assert_eq!(figs.len(), 7);
    for f in figs {
        assert_eq!(f.schemes.len(), 4);
        assert!(f.schemes.contains(&Scheme::Merkle));
        assert!(f.schemes.contains(&Scheme::BbsPlus));
    }
}

#[test]
fn test_file_names_unique_per_set() {
    for set in SetSelection::All.sets() {
        let names: BTreeSet<String> = builtin_figures(*set)
            .iter()
            .map(|f| f.file_name())
            .collect();
        assert_eq!(names.len(), builtin_figures(*set).len());
    }
}

#[test]
fn test_latency_figures_use_log_axis() {
    for set in SetSelection::All.sets() {
        for f in builtin_figures(*set) {
            assert_eq!(f.log_y, f.unit == Unit::Latency, "{}", f.stem);
            if f.log_y {
                assert!(f.y.min > 0.0);
            }
        }
    }
}

#[test]
fn test_delta_family_tables() {
    let fig = find_figure(FigureSet::Paper, "VP size varying disclosed claims").unwrap();
    let tables = fig.tables();
    assert_eq!(tables.len(), CLAIM_BUCKETS.len());
    assert_eq!(tables[0], "10_vp_jwt_length");
    assert_eq!(tables[9], "100_vp_jwt_length");
}

#[test]
fn test_index_noun_follows_domain() {
    let vc = find_figure(FigureSet::Paper, "VC storage requirement").unwrap();
    assert_eq!(vc.index_noun(), "claims");
    let vp = find_figure(FigureSet::Paper, "10 Claims VP Size").unwrap();
    assert_eq!(vp.index_noun(), "disclosed claims");
    let family = find_figure(FigureSet::Paper, "VP size varying disclosed claims").unwrap();
    assert_eq!(family.index_noun(), "disclosed claims");
}

#[test]
fn test_size_figures_carry_reduction_delta() {
    let fig = find_figure(FigureSet::Paper, "100 Claims VP Size").unwrap();
    match fig.kind {
        FigureKind::Series {
            delta: Some(delta), ..
        } => {
            assert_eq!(delta.baseline, Scheme::SdJwt);
            assert_eq!(delta.alternative, Scheme::CsdJwt);
        }
        _ => panic!("expected a delta line"),
    }
    let appendix = find_figure(FigureSet::Appendix, "100 Claims VP Size").unwrap();
    assert!(matches!(appendix.kind, FigureKind::Series { delta: None, .. }));
}

#[test]
fn test_set_selection() {
    assert_eq!(SetSelection::Paper.sets(), [FigureSet::Paper]);
    assert_eq!(SetSelection::All.sets().len(), 2);
    assert_eq!(FigureSet::Appendix.dir_name(), "appendix");
}
