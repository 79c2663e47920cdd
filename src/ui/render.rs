use crate::analysis::{DistributionSummary, PriceStats};
use crate::config::ANALYSIS;
use crate::models::{FareQuery, Verdict};
use crate::ui::ui_text::UI_TEXT;

/// Human-readable verdict, the console counterpart of the JSON output
pub fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Judged(judgement) => format!(
            "{}\nQuoted fare: {} TWD\nSample band: {}\nVerdict: {}.\nAdvice: {}.",
            query_heading(&judgement.query),
            judgement.query.price,
            judgement.band,
            judgement.tier,
            judgement.action
        ),
        Verdict::InsufficientSample { .. } => UI_TEXT.insufficient_sample.to_string(),
    }
}

fn query_heading(query: &FareQuery) -> String {
    format!("{} [{}] [{} flight]", query.route(), query.season, query.time_slot)
}

/// Line describing which grouping a verdict came from
pub fn render_mode(verdict: &Verdict) -> String {
    format!("Mode: {}", verdict.mode())
}

fn stats_row(label: &str, stats: &PriceStats) -> String {
    let std_dev = stats
        .std_dev
        .map(|sd| format!("{:.0}", sd))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<10} {:>6} {:>8.0} {:>8.0} {:>8.0} {:>8} {:>8.0} {:>8.0} {:>8.0}",
        label,
        stats.count,
        stats.min,
        stats.mean,
        stats.max,
        std_dev,
        stats.band.p25,
        stats.band.p50,
        stats.band.p75
    )
}

/// Tables plus a text histogram of the whole sample
pub fn render_summary(summary: &DistributionSummary) -> String {
    let header = format!(
        "{:<10} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "group", "count", "min", "mean", "max", "std", "p25", "p50", "p75"
    );

    let mut lines = vec![
        "[Overall fare distribution (TWD)]".to_string(),
        header.clone(),
        stats_row("all", &summary.overall),
        String::new(),
        "[By direction]".to_string(),
        header.clone(),
    ];
    lines.extend(
        summary
            .by_route
            .iter()
            .map(|(route, stats)| stats_row(&route.to_string(), stats)),
    );

    lines.extend([String::new(), "[By time slot]".to_string(), header]);
    lines.extend(
        summary
            .by_time_slot
            .iter()
            .map(|(slot, stats)| stats_row(&slot.to_string(), stats)),
    );

    lines.extend([String::new(), "[Histogram]".to_string()]);
    let width = ANALYSIS.summary.histogram_bar_width;
    let tallest = summary.histogram.iter().map(|bin| bin.count).max().unwrap_or(0);
    lines.extend(summary.histogram.iter().map(|bin| {
        let bar_len = if tallest == 0 { 0 } else { bin.count * width / tallest };
        format!(
            "{:>7.0} - {:>7.0} | {:<width$} {}",
            bin.lower,
            bin.upper,
            "#".repeat(bar_len),
            bin.count,
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{build_thresholds, summarize};
    use crate::domain::{Airport, FareRecord, Season, SeasonChoice, TimeSlot};

    fn sample() -> Vec<FareRecord> {
        [5000, 7000, 9000]
            .into_iter()
            .map(|price| {
                FareRecord::new(Airport::Tpe, Airport::Nrt, Season::Peak, TimeSlot::Morning, price)
            })
            .collect()
    }

    #[test]
    fn test_render_judged_verdict() {
        let thresholds = build_thresholds(&sample());
        let query = FareQuery::new(Airport::Tpe, TimeSlot::Morning, Season::Peak.into(), 8001);
        let text = render_verdict(&thresholds.judge(&query));

        assert!(text.starts_with("TPE→NRT [peak season] [morning flight]"));
        assert!(text.contains("Quoted fare: 8001 TWD"));
        assert!(text.contains("p25≈6000, p50≈7000, p75≈8000"));
        assert!(text.contains("Verdict: very expensive."));
        assert!(text.contains("not recommended to buy now"));
    }

    #[test]
    fn test_render_insufficient_sample() {
        let thresholds = build_thresholds(&sample());
        let query = FareQuery::new(Airport::Nrt, TimeSlot::Noon, SeasonChoice::Unknown, 5000);
        let verdict = thresholds.judge(&query);
        assert_eq!(render_verdict(&verdict), UI_TEXT.insufficient_sample);
        assert!(render_mode(&verdict).contains("season unknown"));
    }

    #[test]
    fn test_render_summary_sections() {
        let summary = summarize(&sample()).unwrap();
        let text = render_summary(&summary);
        assert!(text.contains("[By direction]"));
        assert!(text.contains("TPE→NRT"));
        assert!(text.contains("morning"));
        assert_eq!(
            text.lines().filter(|line| line.contains(" | ")).count(),
            ANALYSIS.summary.histogram_bins
        );
    }

    #[test]
    fn test_render_summary_layout() {
        let summary = summarize(&sample()).unwrap();
        let text = render_summary(&summary);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[Overall fare distribution (TWD)]");
        assert!(lines[1].starts_with("group"));
        assert!(lines[2].starts_with("all"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "[By direction]");
        assert!(text.ends_with('\n'));

        // the tallest bin gets a full-width bar
        let full_bar = "#".repeat(ANALYSIS.summary.histogram_bar_width);
        assert!(lines.iter().any(|line| line.contains(&full_bar)));
    }
}
