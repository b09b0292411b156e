use crate::error::DcResult;
use crate::matrix::AnalysisResult;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ScenarioRow<'a> {
    typist: &'a str,
    keystroke_seconds: f64,
    scenario: String,
    digit_script: String,
    layout: String,
    characters: usize,
    digit_count: usize,
    shifted_keystrokes: usize,
    digit_seconds: f64,
    total_seconds: f64,
    total_minutes: f64,
    saved_vs_current_percent: Option<f64>,
}

/// One CSV row per scenario result, in matrix order.
pub fn write_scenarios_csv<W: Write>(result: &AnalysisResult, writer: W) -> DcResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for s in &result.scenarios {
        let typist = &s.spec.typist;
        let saved = result
            .comparison(&typist.name)
            .and_then(|c| c.savings.iter().find(|v| v.scenario == s.scenario))
            .map(|v| v.saved_percent);

        wtr.serialize(ScenarioRow {
            typist: &typist.name,
            keystroke_seconds: typist.keystroke_seconds,
            scenario: s.scenario.to_string(),
            digit_script: s.spec.digit_script.to_string(),
            layout: s.spec.layout.to_string(),
            characters: s.characters,
            digit_count: s.digit_count,
            shifted_keystrokes: s.shifted_keystrokes,
            digit_seconds: s.digit_seconds,
            total_seconds: s.total_seconds,
            total_minutes: s.total_minutes(),
            saved_vs_current_percent: saved,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
