use crate::percentile::PercentileResult;
use crate::pipeline::RunSummary;

const SEP: &str = ",    ";

/// Headline statistics: count, min, avg, max, then the ranks ascending.
pub fn render_stats(result: &PercentileResult) -> String {
    let PercentileResult::Computed(stats) = result else {
        return format!("count: 0{SEP}no readings");
    };

    let mut out = format!(
        "count: {}{SEP}min: {:.3}{SEP}avg: {:.3}{SEP}max: {:.3}\n",
        stats.count, stats.min, stats.average, stats.max
    );

    let ranks: Vec<String> = stats
        .percentiles
        .iter()
        .map(|(rank, value)| format!("P{rank}%: {value:.3}"))
        .collect();
    out.push_str(&ranks.join(SEP));

    out
}

/// Full run report: headline statistics followed by per-verb and scan
/// counters.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut lines = vec![render_stats(&summary.result)];

    if !summary.verb_counts.is_empty() {
        let counts: Vec<String> = summary
            .verb_counts
            .iter()
            .map(|(verb, count)| format!("{verb}={count}"))
            .collect();
        lines.push(format!("verbs: {}", counts.join(" ")));
    }

    lines.push(format!(
        "lines: {} scanned, {} matched, {} skipped",
        summary.scan.lines_scanned, summary.scan.matches_emitted, summary.skipped
    ));

    if let Some(reason) = &summary.scan.read_error {
        lines.push(format!("scan stopped early: {reason}"));
    }

    if let Some(publish) = &summary.publish {
        lines.push(format!(
            "published: {} of {} (failed {}, dropped {})",
            publish.published, publish.submitted, publish.failed, publish.dropped
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
