use crate::digits::DigitScript;
use crate::layouts::LayoutName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharTally {
    pub count: usize,
    pub units: f64,
}

/// Typist-independent result of one walk over a converted document.
#[derive(Debug, Clone, PartialEq)]
pub struct KeystrokeTally {
    pub layout: LayoutName,
    pub script: DigitScript,

    // Whole document
    pub characters: usize,
    pub total_units: f64,
    pub shifted_keystrokes: usize,

    // Digits only
    pub digit_count: usize,
    pub digit_units: f64,

    pub per_character: BTreeMap<char, CharTally>,
}

impl KeystrokeTally {
    pub fn new(layout: LayoutName, script: DigitScript) -> Self {
        Self {
            layout,
            script,
            characters: 0,
            total_units: 0.0,
            shifted_keystrokes: 0,
            digit_count: 0,
            digit_units: 0.0,
            per_character: BTreeMap::new(),
        }
    }

    pub fn seconds(&self, keystroke_seconds: f64) -> f64 {
        self.total_units * keystroke_seconds
    }

    pub fn digit_seconds(&self, keystroke_seconds: f64) -> f64 {
        self.digit_units * keystroke_seconds
    }
}
