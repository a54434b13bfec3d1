use crate::report::SetSummary;

pub fn render_summary_json(summary: &SetSummary) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}
