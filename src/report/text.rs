use crate::report::{BatchSummary, Outcome, PlayerReport};

pub fn render_player_line(report: &PlayerReport) -> String {
    match &report.outcome {
        Outcome::Rated(b) => format!("{}'s QB Rating is: {}", report.player, b.rating),
        Outcome::Failed(f) => f.message.clone(),
    }
}

pub fn render_batch_text(reports: &[PlayerReport], summary: &BatchSummary) -> String {
    let mut out = String::new();
    for report in reports {
        if let Some(line) = report.line {
            out.push_str(&format!("line {line}: "));
        }
        out.push_str(&render_player_line(report));
        out.push('\n');
    }
    out.push_str(&format!(
        "Rated {} of {} rows ({} failed)\n",
        summary.rated, summary.rows, summary.failed
    ));
    if let (Some(best), Some(mean)) = (summary.best, summary.mean) {
        out.push_str(&format!("Best rating: {best:.1}\nMean rating: {mean:.1}\n"));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
