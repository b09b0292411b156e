//! Single-pass digit statistics over a document.
//!
//! Positions and context windows are counted in Unicode scalar values, never
//! bytes, so Thai text with combining marks indexes the same way the cost
//! calculator reports unmapped characters.

use crate::consts::DEFAULT_CONTEXT_RADIUS;
use crate::digits::{DigitConverter, DigitScript};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    Thai,
    International,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitOccurrence {
    pub character: char,
    pub position: usize,
    pub script: DigitScript,
    pub context: String,
}

/// A maximal run of digit characters. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSequence {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: SequenceKind,
    pub context: String,
}

impl NumberSequence {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub total_sequences: usize,
    pub thai_sequences: usize,
    pub international_sequences: usize,
    pub mixed_sequences: usize,
    pub average_thai_length: f64,
    pub average_international_length: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_characters: usize,
    pub total_lines: usize,
    pub thai_digits: usize,
    pub international_digits: usize,
    pub total_digits: usize,
    pub digit_percentage: f64,
    pub digit_frequency: BTreeMap<char, usize>,
    pub sequences: SequenceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub stats: DocumentStats,
    pub occurrences: Vec<DigitOccurrence>,
    pub sequences: Vec<NumberSequence>,
}

#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    converter: DigitConverter,
    context_radius: usize,
    collect_occurrences: bool,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_RADIUS)
    }
}

impl TextAnalyzer {
    pub fn new(context_radius: usize) -> Self {
        Self {
            converter: DigitConverter::new(),
            context_radius,
            collect_occurrences: true,
        }
    }

    /// Skips the per-digit occurrence list. Stats and sequences are unchanged.
    pub fn without_occurrences(mut self) -> Self {
        self.collect_occurrences = false;
        self
    }

    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        let chars: Vec<char> = text.chars().collect();

        let mut occurrences = Vec::new();
        let mut sequences = Vec::new();
        let mut frequency = BTreeMap::new();
        let mut thai_digits = 0;
        let mut international_digits = 0;
        let mut newlines = 0;
        let mut run_start: Option<usize> = None;

        for (pos, &c) in chars.iter().enumerate() {
            if c == '\n' {
                newlines += 1;
            }

            match self.converter.script_of(c) {
                Some(script) => {
                    match script {
                        DigitScript::Thai => thai_digits += 1,
                        DigitScript::International => international_digits += 1,
                    }
                    *frequency.entry(c).or_insert(0) += 1;
                    if self.collect_occurrences {
                        occurrences.push(DigitOccurrence {
                            character: c,
                            position: pos,
                            script,
                            context: self.window(&chars, pos, pos + 1),
                        });
                    }
                    if run_start.is_none() {
                        run_start = Some(pos);
                    }
                }
                None => {
                    if let Some(start) = run_start.take() {
                        sequences.push(self.sequence(&chars, start, pos));
                    }
                }
            }
        }
        if let Some(start) = run_start {
            sequences.push(self.sequence(&chars, start, chars.len()));
        }

        let total_characters = chars.len();
        let total_digits = thai_digits + international_digits;
        let digit_percentage = if total_characters > 0 {
            total_digits as f64 / total_characters as f64 * 100.0
        } else {
            0.0
        };

        let stats = DocumentStats {
            total_characters,
            total_lines: if total_characters == 0 { 0 } else { newlines + 1 },
            thai_digits,
            international_digits,
            total_digits,
            digit_percentage,
            digit_frequency: frequency,
            sequences: summarize(&sequences),
        };

        DocumentAnalysis {
            stats,
            occurrences,
            sequences,
        }
    }

    fn sequence(&self, chars: &[char], start: usize, end: usize) -> NumberSequence {
        let digits = &chars[start..end];
        let thai = digits
            .iter()
            .filter(|&&c| self.converter.script_of(c) == Some(DigitScript::Thai))
            .count();
        let kind = if thai == digits.len() {
            SequenceKind::Thai
        } else if thai == 0 {
            SequenceKind::International
        } else {
            SequenceKind::Mixed
        };

        NumberSequence {
            text: digits.iter().collect(),
            start,
            end,
            kind,
            context: self.window(chars, start, end),
        }
    }

    /// Text around `[start, end)`, clipped to the document and trimmed.
    fn window(&self, chars: &[char], start: usize, end: usize) -> String {
        let from = start.saturating_sub(self.context_radius);
        let to = end.saturating_add(self.context_radius).min(chars.len());
        let raw: String = chars[from..to].iter().collect();
        raw.trim().to_string()
    }
}

fn summarize(sequences: &[NumberSequence]) -> SequenceSummary {
    let mean_len = |kind: SequenceKind| {
        let (count, total) = sequences
            .iter()
            .filter(|s| s.kind == kind)
            .fold((0usize, 0usize), |(n, sum), s| (n + 1, sum + s.len()));
        let avg = if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        };
        (count, avg)
    };

    let (thai_sequences, average_thai_length) = mean_len(SequenceKind::Thai);
    let (international_sequences, average_international_length) =
        mean_len(SequenceKind::International);

    SequenceSummary {
        total_sequences: sequences.len(),
        thai_sequences,
        international_sequences,
        mixed_sequences: sequences.len() - thai_sequences - international_sequences,
        average_thai_length,
        average_international_length,
    }
}
