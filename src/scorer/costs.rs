use crate::consts::{PINKY_FACTOR, RING_FACTOR, SHIFT_PENALTY};
use crate::layouts::{Finger, KeyInfo};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Scoring function over a single key. Costs are in keystroke units; the
/// calculator multiplies by a typist's seconds per keystroke.
pub trait KeystrokeModel: Send + Sync {
    fn name(&self) -> &'static str;
    fn keystroke_units(&self, key: &KeyInfo) -> f64;
}

/// 2 units for a shifted key, 1 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted;

impl KeystrokeModel for Unweighted {
    fn name(&self) -> &'static str {
        "unweighted"
    }

    #[inline]
    fn keystroke_units(&self, key: &KeyInfo) -> f64 {
        if key.requires_shift {
            SHIFT_PENALTY
        } else {
            1.0
        }
    }
}

/// Shift penalty scaled by a per-finger factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ergonomic;

impl Ergonomic {
    pub fn finger_factor(finger: Finger) -> f64 {
        match finger {
            Finger::Pinky => PINKY_FACTOR,
            Finger::Ring => RING_FACTOR,
            Finger::Thumb | Finger::Index | Finger::Middle => 1.0,
        }
    }
}

impl KeystrokeModel for Ergonomic {
    fn name(&self) -> &'static str {
        "ergonomic"
    }

    #[inline]
    fn keystroke_units(&self, key: &KeyInfo) -> f64 {
        Unweighted.keystroke_units(key) * Self::finger_factor(key.finger)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    #[default]
    Unweighted,
    Ergonomic,
}

impl ScoringMode {
    pub fn model(&self) -> Box<dyn KeystrokeModel> {
        match self {
            Self::Unweighted => Box::new(Unweighted),
            Self::Ergonomic => Box::new(Ergonomic),
        }
    }
}

/// Which characters the scoring function is applied to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// Digits are scored; every other character costs one flat unit.
    #[default]
    #[strum(to_string = "digits_only", serialize = "digits-only")]
    DigitsOnly,
    /// Every character is scored.
    #[strum(to_string = "full_document", serialize = "full-document")]
    FullDocument,
}
