pub mod costs;
pub mod types;

pub use self::costs::{CostPolicy, Ergonomic, KeystrokeModel, ScoringMode, Unweighted};
pub use self::types::{CharTally, KeystrokeTally};

use crate::digits::{DigitConverter, DigitScript};
use crate::error::{DcResult, DigitCostError};
use crate::layouts::KeyboardLayout;
use crate::typist::TypistProfile;
use tracing::debug;

/// Prices a document on one layout in one digit script.
pub struct TypingCostCalculator {
    pub converter: DigitConverter,
    pub model: Box<dyn KeystrokeModel>,
    pub policy: CostPolicy,
}

impl Default for TypingCostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingCostCalculator {
    pub fn new() -> Self {
        Self {
            converter: DigitConverter::new(),
            model: ScoringMode::default().model(),
            policy: CostPolicy::default(),
        }
    }

    pub fn with_scoring(mut self, mode: ScoringMode) -> Self {
        self.model = mode.model();
        self
    }

    pub fn with_model(mut self, model: Box<dyn KeystrokeModel>) -> Self {
        self.model = model;
        self
    }

    pub fn with_policy(mut self, policy: CostPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_converter(mut self, converter: DigitConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Converts the digits of `document` to `script` and walks it once on
    /// `layout`. Any character without a key aborts the walk.
    pub fn tally(
        &self,
        document: &str,
        layout: &KeyboardLayout,
        script: DigitScript,
    ) -> DcResult<KeystrokeTally> {
        let text = self.converter.convert(document, script);
        let mut tally = KeystrokeTally::new(layout.name(), script);

        for (position, c) in text.chars().enumerate() {
            let key = layout
                .lookup(c)
                .ok_or_else(|| DigitCostError::UnmappedCharacter {
                    character: c,
                    position,
                    layout: layout.name(),
                })?;

            let is_digit = self.converter.is_digit(c);
            let units = match self.policy {
                CostPolicy::FullDocument => self.model.keystroke_units(key),
                CostPolicy::DigitsOnly if is_digit => self.model.keystroke_units(key),
                CostPolicy::DigitsOnly => 1.0,
            };

            tally.characters += 1;
            tally.total_units += units;
            if key.requires_shift {
                tally.shifted_keystrokes += 1;
            }
            if is_digit {
                tally.digit_count += 1;
                tally.digit_units += units;
            }

            let entry = tally.per_character.entry(c).or_default();
            entry.count += 1;
            entry.units += units;
        }

        debug!(
            "{} / {} [{}]: {} chars, {:.1} units, {} shifted",
            layout.name(),
            script,
            self.model.name(),
            tally.characters,
            tally.total_units,
            tally.shifted_keystrokes
        );
        Ok(tally)
    }

    /// Total typing time in seconds.
    pub fn compute_cost(
        &self,
        document: &str,
        layout: &KeyboardLayout,
        script: DigitScript,
        typist: &TypistProfile,
    ) -> DcResult<f64> {
        let tally = self.tally(document, layout, script)?;
        Ok(tally.seconds(typist.keystroke_seconds))
    }
}
