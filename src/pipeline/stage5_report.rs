use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::PipelineError;
use crate::report::SetSummary;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TXT: &str = "report.txt";

pub fn write_reports(summary: &SetSummary, out_dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(out_dir).map_err(|e| PipelineError::io(out_dir, e))?;

    let json = render_summary_json(summary)?;
    write_text(&out_dir.join(SUMMARY_JSON), &json)?;

    let report = render_report_text(summary);
    write_text(&out_dir.join(REPORT_TXT), &report)?;

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PipelineError::io(path, e))
}
