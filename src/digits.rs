use crate::error::{DcResult, DigitCostError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

pub const THAI_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];
pub const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DigitScript {
    Thai,
    #[strum(to_string = "international", serialize = "intl")]
    #[value(alias = "intl")]
    International,
}

impl DigitScript {
    /// Short form used in scenario keys.
    pub fn short(&self) -> &'static str {
        match self {
            Self::Thai => "thai",
            Self::International => "intl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Thai => "Thai digits",
            Self::International => "International digits",
        }
    }
}

pub fn is_thai_digit(c: char) -> bool {
    ('\u{0E50}'..='\u{0E59}').contains(&c)
}

/// Substitution table between the two digit scripts.
#[derive(Debug, Clone)]
pub struct DigitConverter {
    to_thai: HashMap<char, char>,
    to_ascii: HashMap<char, char>,
}

impl Default for DigitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitConverter {
    pub fn new() -> Self {
        let to_thai = ASCII_DIGITS.iter().copied().zip(THAI_DIGITS).collect();
        let to_ascii = THAI_DIGITS.iter().copied().zip(ASCII_DIGITS).collect();
        Self { to_thai, to_ascii }
    }

    /// Builds a converter from explicit `(thai, ascii)` pairs.
    pub fn from_pairs(pairs: &[(char, char)]) -> DcResult<Self> {
        if pairs.len() != 10 {
            return Err(DigitCostError::MalformedDigitMap(format!(
                "expected 10 digit pairs, found {}",
                pairs.len()
            )));
        }

        let mut to_thai = HashMap::with_capacity(10);
        let mut to_ascii = HashMap::with_capacity(10);
        for &(thai, ascii) in pairs {
            if !is_thai_digit(thai) {
                return Err(DigitCostError::MalformedDigitMap(format!(
                    "'{}' is not a Thai digit",
                    thai
                )));
            }
            if !ascii.is_ascii_digit() {
                return Err(DigitCostError::MalformedDigitMap(format!(
                    "'{}' is not an ASCII digit",
                    ascii
                )));
            }
            if to_ascii.insert(thai, ascii).is_some() || to_thai.insert(ascii, thai).is_some() {
                return Err(DigitCostError::MalformedDigitMap(format!(
                    "duplicate pair '{}' <-> '{}'",
                    thai, ascii
                )));
            }
        }

        Ok(Self { to_thai, to_ascii })
    }

    pub fn is_digit(&self, c: char) -> bool {
        self.to_thai.contains_key(&c) || self.to_ascii.contains_key(&c)
    }

    pub fn script_of(&self, c: char) -> Option<DigitScript> {
        if self.to_ascii.contains_key(&c) {
            Some(DigitScript::Thai)
        } else if self.to_thai.contains_key(&c) {
            Some(DigitScript::International)
        } else {
            None
        }
    }

    /// The same digit in the other script.
    pub fn counterpart(&self, c: char) -> Option<char> {
        self.to_ascii
            .get(&c)
            .or_else(|| self.to_thai.get(&c))
            .copied()
    }

    /// Rewrites every digit into `target`. Returns the input untouched when
    /// nothing needs substituting.
    pub fn convert<'a>(&self, text: &'a str, target: DigitScript) -> Cow<'a, str> {
        let table = match target {
            DigitScript::Thai => &self.to_thai,
            DigitScript::International => &self.to_ascii,
        };

        if !text.chars().any(|c| table.contains_key(&c)) {
            return Cow::Borrowed(text);
        }

        Cow::Owned(
            text.chars()
                .map(|c| table.get(&c).copied().unwrap_or(c))
                .collect(),
        )
    }
}
