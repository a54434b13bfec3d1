use super::*;

#[test]
fn test_parse_args_render_defaults() {
    let parsed = parse_args(["csd-jwt-plots", "render", "--input", "csv_dir", "--out", "plots"])
        .unwrap();
    assert_eq!(
        parsed,
        RunConfig::Render {
            input_dir: PathBuf::from("csv_dir"),
            out_dir: PathBuf::from("plots"),
            selection: SetSelection::All,
            render: RenderOptions {
                width: 640,
                height: 480
            },
            strict: false,
        }
    );
}

#[test]
fn test_parse_args_set_and_size() {
    let parsed = parse_args([
        "csd-jwt-plots",
        "render",
        "--input",
        "csv_dir",
        "--out",
        "plots",
        "--set",
        "appendix",
        "--width",
        "1024",
        "--height",
        "768",
        "--strict",
    ])
    .unwrap();
    match parsed {
        RunConfig::Render {
            selection,
            render,
            strict,
            ..
        } => {
            assert_eq!(selection, SetSelection::Appendix);
            assert_eq!(render.width, 1024);
            assert_eq!(render.height, 768);
            assert!(strict);
        }
        other => panic!("unexpected config: {other:?}"),
    }
}

#[test]
fn test_parse_args_rejects_missing_input() {
    assert!(parse_args(["csd-jwt-plots", "render", "--out", "plots"]).is_err());
    assert!(parse_args(["csd-jwt-plots", "render", "--input", "a", "--out", "b", "--set", "draft"]).is_err());
    assert!(parse_args(["csd-jwt-plots", "render", "--input", "a", "--out", "b", "--width", "0"]).is_err());
}

#[test]
fn test_parse_args_list() {
    let parsed = parse_args(["csd-jwt-plots", "list", "--set", "paper"]).unwrap();
    assert_eq!(
        parsed,
        RunConfig::List {
            selection: SetSelection::Paper
        }
    );
}

#[test]
fn test_resolve_output_dir_per_set() {
    let out = resolve_output_dir(Path::new("/tmp/plots"), FigureSet::Paper);
    assert_eq!(out, PathBuf::from("/tmp/plots/paper"));
    let out = resolve_output_dir(Path::new("/tmp/plots"), FigureSet::Appendix);
    assert_eq!(out, PathBuf::from("/tmp/plots/appendix"));
}

#[test]
fn test_catalogue_lists_every_figure() {
    let text = render_catalogue(SetSelection::All);
    assert!(text.starts_with("[paper]\n"));
    assert!(text.contains("[appendix]\n"));
    assert!(text.contains("VP size varying disclosed claims.svg"));
    assert!(text.contains("tables=10_vp_jwt_length,20_vp_jwt_length"));
    assert!(text.contains("schemes=CSD-JWT,SD-JWT,MERKLE,BBS+"));
    let lines = text.lines().filter(|l| l.starts_with("  ")).count();
    assert_eq!(lines, 17);
}
