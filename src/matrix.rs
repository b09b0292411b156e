use crate::analyzer::{DocumentStats, NumberSequence, TextAnalyzer};
use crate::consts::{COST_EPSILON, SAMPLE_SEQUENCE_COUNT};
use crate::digits::DigitScript;
use crate::error::{DcResult, DigitCostError};
use crate::layouts::{LayoutName, LayoutSet};
use crate::scorer::{CostPolicy, KeystrokeTally, ScoringMode, TypingCostCalculator};
use crate::typist::TypistProfile;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// A digit script on a layout, independent of typist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ScenarioKey {
    pub digit_script: DigitScript,
    pub layout: LayoutName,
}

impl ScenarioKey {
    /// Thai digits on Kedmanee, the status quo every scenario is compared against.
    pub const CURRENT: ScenarioKey = ScenarioKey::new(DigitScript::Thai, LayoutName::Kedmanee);

    /// Enumeration order of the matrix.
    pub const ALL: [ScenarioKey; 4] = [
        ScenarioKey::new(DigitScript::Thai, LayoutName::Kedmanee),
        ScenarioKey::new(DigitScript::International, LayoutName::Kedmanee),
        ScenarioKey::new(DigitScript::Thai, LayoutName::Pattajoti),
        ScenarioKey::new(DigitScript::International, LayoutName::Pattajoti),
    ];

    pub const fn new(digit_script: DigitScript, layout: LayoutName) -> Self {
        Self {
            digit_script,
            layout,
        }
    }

    pub fn is_current(&self) -> bool {
        *self == Self::CURRENT
    }

    pub fn label(&self) -> String {
        format!("{} + {}", self.digit_script.label(), self.layout.label())
    }

    // Lower wins a tie: international digits first, then Pattajoti.
    fn tie_rank(&self) -> (u8, u8) {
        let script = match self.digit_script {
            DigitScript::International => 0,
            DigitScript::Thai => 1,
        };
        let layout = match self.layout {
            LayoutName::Pattajoti => 0,
            LayoutName::Kedmanee => 1,
        };
        (script, layout)
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.digit_script.short(), self.layout)
    }
}

impl FromStr for ScenarioKey {
    type Err = DigitCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKey::ALL
            .into_iter()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| DigitCostError::Config(format!("unknown scenario '{}'", s)))
    }
}

impl From<ScenarioKey> for String {
    fn from(key: ScenarioKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ScenarioKey {
    type Error = DigitCostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub digit_script: DigitScript,
    pub layout: LayoutName,
    pub typist: TypistProfile,
}

impl ScenarioSpec {
    pub fn key(&self) -> ScenarioKey {
        ScenarioKey::new(self.digit_script, self.layout)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterCost {
    pub character: char,
    pub count: usize,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: ScenarioKey,
    pub spec: ScenarioSpec,
    pub total_seconds: f64,
    pub digit_seconds: f64,
    pub digit_count: usize,
    pub characters: usize,
    pub shifted_keystrokes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<CharacterCost>>,
}

impl ScenarioResult {
    fn from_tally(tally: &KeystrokeTally, typist: &TypistProfile, breakdown: bool) -> Self {
        let secs = typist.keystroke_seconds;
        let breakdown = breakdown.then(|| {
            tally
                .per_character
                .iter()
                .map(|(&character, t)| CharacterCost {
                    character,
                    count: t.count,
                    seconds: t.units * secs,
                })
                .collect()
        });

        let spec = ScenarioSpec {
            digit_script: tally.script,
            layout: tally.layout,
            typist: typist.clone(),
        };
        Self {
            scenario: spec.key(),
            spec,
            total_seconds: tally.seconds(secs),
            digit_seconds: tally.digit_seconds(secs),
            digit_count: tally.digit_count,
            characters: tally.characters,
            shifted_keystrokes: tally.shifted_keystrokes,
            breakdown,
        }
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_seconds / 60.0
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    pub fn average_ms_per_char(&self) -> f64 {
        if self.characters > 0 {
            self.total_seconds / self.characters as f64 * 1000.0
        } else {
            0.0
        }
    }
}

/// Current scenario against the optimal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineDelta {
    pub current_seconds: f64,
    pub optimal_seconds: f64,
    pub lost_seconds: f64,
    pub delta_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSavings {
    pub scenario: ScenarioKey,
    pub total_seconds: f64,
    pub saved_seconds: f64,
    pub saved_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypistComparison {
    pub typist: String,
    pub optimal: ScenarioKey,
    pub optimal_seconds: f64,
    pub worst: ScenarioKey,
    pub worst_seconds: f64,
    /// Absent when the current scenario was filtered out.
    pub baseline: Option<BaselineDelta>,
    pub savings: Vec<ScenarioSavings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub mode: ScoringMode,
    pub policy: CostPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document: DocumentStats,
    pub sample_sequences: Vec<NumberSequence>,
    pub typists: Vec<TypistProfile>,
    pub scoring: ScoringSettings,
    pub scenarios: Vec<ScenarioResult>,
    pub comparisons: Vec<TypistComparison>,
}

impl AnalysisResult {
    pub fn scenarios_for<'a>(&'a self, typist: &'a str) -> impl Iterator<Item = &'a ScenarioResult> {
        self.scenarios
            .iter()
            .filter(move |s| s.spec.typist.name == typist)
    }

    pub fn scenario(&self, typist: &str, key: ScenarioKey) -> Option<&ScenarioResult> {
        self.scenarios
            .iter()
            .find(|s| s.spec.typist.name == typist && s.scenario == key)
    }

    pub fn comparison(&self, typist: &str) -> Option<&TypistComparison> {
        self.comparisons.iter().find(|c| c.typist == typist)
    }
}

/// Share of `base` that `part` represents, 0 when `base` is 0.
pub fn safe_percentage(part: f64, base: f64) -> f64 {
    if base > 0.0 {
        part / base * 100.0
    } else {
        0.0
    }
}

fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= COST_EPSILON * a.abs().max(b.abs()).max(1.0)
}

pub struct ScenarioMatrixBuilder {
    layouts: LayoutSet,
    calculator: TypingCostCalculator,
    analyzer: TextAnalyzer,
    scoring: ScoringSettings,
    scripts: Option<Vec<DigitScript>>,
    layout_filter: Option<Vec<LayoutName>>,
    breakdown: bool,
}

impl ScenarioMatrixBuilder {
    pub fn new(layouts: LayoutSet) -> Self {
        let scoring = ScoringSettings {
            mode: ScoringMode::default(),
            policy: CostPolicy::default(),
        };
        Self {
            layouts,
            calculator: TypingCostCalculator::new(),
            // Only stats and sample sequences reach the result.
            analyzer: TextAnalyzer::default().without_occurrences(),
            scoring,
            scripts: None,
            layout_filter: None,
            breakdown: false,
        }
    }

    pub fn with_scoring(mut self, mode: ScoringMode) -> Self {
        self.scoring.mode = mode;
        self.calculator = self.calculator.with_scoring(mode);
        self
    }

    pub fn with_policy(mut self, policy: CostPolicy) -> Self {
        self.scoring.policy = policy;
        self.calculator = self.calculator.with_policy(policy);
        self
    }

    pub fn with_scripts(mut self, scripts: Vec<DigitScript>) -> Self {
        self.scripts = Some(scripts);
        self
    }

    pub fn with_layouts(mut self, layouts: Vec<LayoutName>) -> Self {
        self.layout_filter = Some(layouts);
        self
    }

    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.analyzer = TextAnalyzer::new(radius).without_occurrences();
        self
    }

    /// Scenario pairs left after filtering, in enumeration order.
    pub fn pairs(&self) -> Vec<ScenarioKey> {
        ScenarioKey::ALL
            .into_iter()
            .filter(|k| {
                self.scripts
                    .as_ref()
                    .map_or(true, |s| s.contains(&k.digit_script))
            })
            .filter(|k| {
                self.layout_filter
                    .as_ref()
                    .map_or(true, |l| l.contains(&k.layout))
            })
            .collect()
    }

    pub fn build(&self, document: &str, typists: &[TypistProfile]) -> DcResult<AnalysisResult> {
        if typists.is_empty() {
            return Err(DigitCostError::Config(
                "at least one typist profile is required".into(),
            ));
        }
        let pairs = self.pairs();
        if pairs.is_empty() {
            return Err(DigitCostError::Config(
                "script/layout filters exclude every scenario".into(),
            ));
        }

        let analysis = self.analyzer.analyze(document);
        info!(
            "Document: {} chars, {} Thai digits, {} international digits",
            analysis.stats.total_characters,
            analysis.stats.thai_digits,
            analysis.stats.international_digits
        );

        // One walk per pair. Collecting keeps enumeration order.
        let tallies: Vec<KeystrokeTally> = pairs
            .par_iter()
            .map(|key| {
                self.calculator
                    .tally(document, self.layouts.get(key.layout), key.digit_script)
            })
            .collect::<DcResult<_>>()?;

        let mut scenarios = Vec::with_capacity(typists.len() * tallies.len());
        let mut comparisons = Vec::with_capacity(typists.len());
        for typist in typists {
            let rows: Vec<ScenarioResult> = tallies
                .iter()
                .map(|t| ScenarioResult::from_tally(t, typist, self.breakdown))
                .collect();
            let comparison = compare(typist, &rows);
            debug!(
                "{}: optimal {} ({:.2}s), worst {} ({:.2}s)",
                typist.name,
                comparison.optimal,
                comparison.optimal_seconds,
                comparison.worst,
                comparison.worst_seconds
            );
            comparisons.push(comparison);
            scenarios.extend(rows);
        }

        info!(
            "Built {} scenarios for {} typist(s)",
            scenarios.len(),
            typists.len()
        );

        Ok(AnalysisResult {
            document: analysis.stats,
            sample_sequences: analysis
                .sequences
                .into_iter()
                .take(SAMPLE_SEQUENCE_COUNT)
                .collect(),
            typists: typists.to_vec(),
            scoring: self.scoring,
            scenarios,
            comparisons,
        })
    }
}

// `rows` is non-empty and in enumeration order.
fn compare(typist: &TypistProfile, rows: &[ScenarioResult]) -> TypistComparison {
    let mut optimal = &rows[0];
    let mut worst = &rows[0];
    for row in &rows[1..] {
        if nearly_equal(row.total_seconds, optimal.total_seconds) {
            if row.scenario.tie_rank() < optimal.scenario.tie_rank() {
                optimal = row;
            }
        } else if row.total_seconds < optimal.total_seconds {
            optimal = row;
        }

        if !nearly_equal(row.total_seconds, worst.total_seconds)
            && row.total_seconds > worst.total_seconds
        {
            worst = row;
        }
    }

    let current = rows.iter().find(|r| r.scenario.is_current());
    let baseline = current.map(|c| {
        // Ties within epsilon may pick an optimum a rounding error above current.
        let lost = (c.total_seconds - optimal.total_seconds).max(0.0);
        BaselineDelta {
            current_seconds: c.total_seconds,
            optimal_seconds: optimal.total_seconds,
            lost_seconds: lost,
            delta_percent: safe_percentage(lost, c.total_seconds),
        }
    });
    let savings = current
        .map(|c| {
            rows.iter()
                .map(|r| {
                    let saved = c.total_seconds - r.total_seconds;
                    ScenarioSavings {
                        scenario: r.scenario,
                        total_seconds: r.total_seconds,
                        saved_seconds: saved,
                        saved_percent: safe_percentage(saved, c.total_seconds),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    TypistComparison {
        typist: typist.name.clone(),
        optimal: optimal.scenario,
        optimal_seconds: optimal.total_seconds,
        worst: worst.scenario,
        worst_seconds: worst.total_seconds,
        baseline,
        savings,
    }
}
