use super::AnalysisReport;
use crate::analyzer::SequenceKind;
use crate::consts::{PINKY_FACTOR, RING_FACTOR, SHIFT_PENALTY};
use crate::scorer::{CostPolicy, ScoringMode};
use std::fmt::Write;

/// Renders the whole report as a markdown document.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    let meta = &report.metadata;
    let analysis = &report.analysis;
    let doc = &analysis.document;

    writeln!(out, "# Thai Digit Typing Cost Analysis")?;
    writeln!(out)?;
    writeln!(out, "- **Document:** {}", meta.document_name)?;
    writeln!(out, "- **Generated:** {}", meta.generated_at)?;
    writeln!(out, "- **Tool version:** {}", meta.tool_version)?;
    writeln!(
        out,
        "- **Scoring:** {} / {}",
        meta.scoring.mode, meta.scoring.policy
    )?;
    writeln!(out)?;

    // --- Key findings ---
    let kf = &report.key_findings;
    writeln!(out, "## Key Findings ({} typist)", kf.typist)?;
    writeln!(out)?;
    match &kf.current_state {
        Some(current) => {
            writeln!(
                out,
                "- **Current state:** {} takes {:.1} minutes ({:.2} hours)",
                current.description, current.time_minutes, current.time_hours
            )?;
        }
        None => writeln!(out, "- **Current state:** not part of this analysis")?,
    }
    writeln!(
        out,
        "- **Optimal state:** {} takes {:.1} minutes ({:.2} hours)",
        kf.optimal_state.description, kf.optimal_state.time_minutes, kf.optimal_state.time_hours
    )?;
    writeln!(
        out,
        "- **Time saved:** {:.1} minutes per document ({:.1}% efficiency gain)",
        kf.time_saved_minutes, kf.efficiency_gain_percent
    )?;
    writeln!(out)?;

    // --- Document ---
    writeln!(out, "## Document Statistics")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|---|---:|")?;
    writeln!(out, "| Total characters | {} |", doc.total_characters)?;
    writeln!(out, "| Total lines | {} |", doc.total_lines)?;
    writeln!(out, "| Thai digits (๐-๙) | {} |", doc.thai_digits)?;
    writeln!(out, "| International digits (0-9) | {} |", doc.international_digits)?;
    writeln!(out, "| Total digits | {} |", doc.total_digits)?;
    writeln!(out, "| Digit percentage | {:.2}% |", doc.digit_percentage)?;
    writeln!(out, "| Number sequences | {} |", doc.sequences.total_sequences)?;
    writeln!(
        out,
        "| Average Thai sequence length | {:.1} |",
        doc.sequences.average_thai_length
    )?;
    writeln!(
        out,
        "| Average international sequence length | {:.1} |",
        doc.sequences.average_international_length
    )?;
    writeln!(out)?;

    if !doc.digit_frequency.is_empty() {
        writeln!(out, "### Digit Frequency")?;
        writeln!(out)?;
        writeln!(out, "| Digit | Code point | Count |")?;
        writeln!(out, "|---|---|---:|")?;
        for (c, count) in &doc.digit_frequency {
            writeln!(out, "| {} | U+{:04X} | {} |", c, *c as u32, count)?;
        }
        writeln!(out)?;
    }

    // --- Scenarios ---
    writeln!(out, "## Scenario Results")?;
    writeln!(out)?;
    for typist in &analysis.typists {
        writeln!(
            out,
            "### {} ({}s per keystroke)",
            typist.label, typist.keystroke_seconds
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "| Scenario | Minutes | Hours | Digit seconds | ms/char | Saved vs current |"
        )?;
        writeln!(out, "|---|---:|---:|---:|---:|---:|")?;

        let cmp = analysis.comparison(&typist.name);
        for s in analysis.scenarios_for(&typist.name) {
            let mut label = s.scenario.label();
            if s.scenario.is_current() {
                label.push_str(" (current)");
            }
            if cmp.is_some_and(|c| c.optimal == s.scenario) {
                label.push_str(" **(optimal)**");
            }
            let saved = cmp
                .and_then(|c| c.savings.iter().find(|v| v.scenario == s.scenario))
                .map_or_else(|| "-".to_string(), |v| format!("{:.1}%", v.saved_percent));
            writeln!(
                out,
                "| {} | {:.1} | {:.2} | {:.1} | {:.1} | {} |",
                label,
                s.total_minutes(),
                s.total_hours(),
                s.digit_seconds,
                s.average_ms_per_char(),
                saved
            )?;
        }
        writeln!(out)?;

        if let Some(b) = cmp.and_then(|c| c.baseline) {
            writeln!(
                out,
                "Lost time: **{:.1} minutes** per document ({:.1}% of the current cost).",
                b.lost_seconds / 60.0,
                b.delta_percent
            )?;
            writeln!(out)?;
        }
    }

    // --- Projections ---
    let ip = &report.impact_projections;
    writeln!(out, "## Impact Projections")?;
    writeln!(out)?;
    writeln!(
        out,
        "Per-document savings: {:.1} minutes ({:.2} hours). Assumes {} working days per year at ${:.2}/hour.",
        ip.per_document_minutes_saved,
        ip.per_document_hours_saved,
        ip.assumptions.working_days,
        ip.assumptions.hourly_cost
    )?;
    writeln!(out)?;
    writeln!(out, "| Scale | Documents/day | Annual hours saved | Annual savings |")?;
    writeln!(out, "|---|---:|---:|---:|")?;
    for p in &ip.scales {
        writeln!(
            out,
            "| {} | {} | {:.0} | ${:.0} |",
            p.scale, p.docs_per_day, p.annual_hours_saved, p.annual_cost_savings
        )?;
    }
    writeln!(out)?;

    // --- Samples ---
    if !analysis.sample_sequences.is_empty() {
        writeln!(out, "## Sample Number Contexts")?;
        writeln!(out)?;
        for (i, seq) in analysis.sample_sequences.iter().enumerate() {
            let kind = match seq.kind {
                SequenceKind::Thai => "Thai",
                SequenceKind::International => "International",
                SequenceKind::Mixed => "Mixed",
            };
            writeln!(
                out,
                "{}. **{}** ({} digits): \"{}\"",
                i + 1,
                seq.text,
                kind,
                seq.context.replace('\n', " ")
            )?;
        }
        writeln!(out)?;
    }

    // --- Methodology ---
    writeln!(out, "## Methodology")?;
    writeln!(out)?;
    writeln!(
        out,
        "- Shifted keys cost {}x a plain keystroke.",
        SHIFT_PENALTY
    )?;
    match meta.scoring.mode {
        ScoringMode::Unweighted => writeln!(out, "- No per-finger weighting.")?,
        ScoringMode::Ergonomic => writeln!(
            out,
            "- Pinky keys are weighted {}x and ring-finger keys {}x.",
            PINKY_FACTOR, RING_FACTOR
        )?,
    }
    match meta.scoring.policy {
        CostPolicy::DigitsOnly => writeln!(
            out,
            "- Only digits are scored by key position; other characters cost one keystroke on every layout."
        )?,
        CostPolicy::FullDocument => writeln!(
            out,
            "- Every character is scored by its key position on the layout."
        )?,
    }
    writeln!(
        out,
        "- Cognitive overhead and real inter-keystroke timing are not modelled."
    )?;

    Ok(())
}
