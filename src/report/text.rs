use crate::report::{FigureSummary, SeriesStats, SetSummary, format_f64_3};

pub fn render_report_text(summary: &SetSummary) -> String {
    let mut out = String::new();

    let title = format!("Benchmark figures ({})", summary.set);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Rendered: {}\nSkipped: {}\n",
        summary.figures.len(),
        summary.skipped.len()
    ));
    for skipped in &summary.skipped {
        out.push_str(&format!("  - {} ({})\n", skipped.stem, skipped.reason));
    }
    out.push('\n');

    for fig in &summary.figures {
        out.push_str(&format!("{}\n", fig.stem));
        for line in &fig.lines {
            out.push_str(&format!(
                "  {}: {} .. {} {} (last {})\n",
                line.label,
                format_f64_3(line.min),
                format_f64_3(line.max),
                fig.unit.display_suffix(),
                format_f64_3(line.last)
            ));
        }
        for delta in &fig.deltas {
            out.push_str(&format!("  {}\n", delta_statement(fig, delta)));
        }
        out.push('\n');
    }

    out
}

fn delta_statement(fig: &FigureSummary, delta: &SeriesStats) -> String {
    let suffix = fig.unit.display_suffix();
    if delta.max <= 0.0 {
        return format!(
            "{}: no savings (max {} {})",
            delta.label,
            format_f64_3(delta.max),
            suffix
        );
    }
    format!(
        "{}: peaks at {} {} with {} {}, mean {} {}",
        delta.label,
        format_f64_3(delta.max),
        suffix,
        delta.argmax,
        fig.x_axis,
        format_f64_3(delta.mean),
        suffix
    )
}
