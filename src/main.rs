mod figures;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::figures::{FigureSet, SetSelection, builtin_figures};
use crate::pipeline::stage4_render::RenderOptions;
use crate::pipeline::{PipelineError, SetParams, run_set};

#[derive(Debug, Parser)]
#[command(
    name = "csd-jwt-plots",
    version,
    about = "Render SD-JWT / CSD-JWT / MERKLE / BBS+ benchmark CSVs into comparison charts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render every figure of the selected set(s).
    Render(RenderArgs),
    /// Print the figure catalogue.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Directory holding the benchmark CSV files.
    #[arg(long)]
    input: PathBuf,
    /// Output directory; one subdirectory per figure set is created.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = SetArg::All)]
    set: SetArg,
    #[arg(long, default_value_t = 640)]
    width: u32,
    #[arg(long, default_value_t = 480)]
    height: u32,
    /// Fail instead of skipping figures whose tables are missing.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, value_enum, default_value_t = SetArg::All)]
    set: SetArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SetArg {
    Paper,
    Appendix,
    All,
}

impl From<SetArg> for SetSelection {
    fn from(value: SetArg) -> Self {
        match value {
            SetArg::Paper => SetSelection::Paper,
            SetArg::Appendix => SetSelection::Appendix,
            SetArg::All => SetSelection::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RunConfig {
    Render {
        input_dir: PathBuf,
        out_dir: PathBuf,
        selection: SetSelection,
        render: RenderOptions,
        strict: bool,
    },
    List {
        selection: SetSelection,
    },
}

fn main() {
    logging::init_logging();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = parse_args(std::env::args_os())?;
    match config {
        RunConfig::List { selection } => {
            print!("{}", render_catalogue(selection));
            Ok(())
        }
        RunConfig::Render {
            input_dir,
            out_dir,
            selection,
            render,
            strict,
        } => render_sets(&input_dir, &out_dir, selection, render, strict)
            .map_err(|e| e.to_string()),
    }
}

fn parse_args<I, T>(args: I) -> Result<RunConfig, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    let config = match cli.command {
        Command::Render(args) => {
            if args.width == 0 || args.height == 0 {
                return Err("--width and --height must be positive".to_string());
            }
            RunConfig::Render {
                input_dir: args.input,
                out_dir: args.out,
                selection: args.set.into(),
                render: RenderOptions {
                    width: args.width,
                    height: args.height,
                },
                strict: args.strict,
            }
        }
        Command::List(args) => RunConfig::List {
            selection: args.set.into(),
        },
    };
    Ok(config)
}

fn resolve_output_dir(base: &Path, set: FigureSet) -> PathBuf {
    base.join(set.dir_name())
}

fn render_sets(
    input_dir: &Path,
    out_dir: &Path,
    selection: SetSelection,
    render: RenderOptions,
    strict: bool,
) -> Result<(), PipelineError> {
    tracing::info!(
        input = %input_dir.display(),
        out = %out_dir.display(),
        ?selection,
        "rendering benchmark figures"
    );
    for &set in selection.sets() {
        let params = SetParams {
            csv_dir: input_dir.to_path_buf(),
            out_dir: resolve_output_dir(out_dir, set),
            render,
            strict,
        };
        let summary = run_set(set, &params)?;
        tracing::info!(
            set = set.dir_name(),
            rendered = summary.figures.len(),
            skipped = summary.skipped.len(),
            "figure set done"
        );
    }
    Ok(())
}

fn render_catalogue(selection: SetSelection) -> String {
    let mut out = String::new();
    for &set in selection.sets() {
        out.push_str(&format!("[{}]\n", set.dir_name()));
        for def in builtin_figures(set) {
            let schemes: Vec<&str> = def.schemes.iter().map(|s| s.column()).collect();
            out.push_str(&format!(
                "  {}  tables={}  schemes={}\n",
                def.file_name(),
                def.tables().join(","),
                schemes.join(",")
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
