use crate::digits::{ASCII_DIGITS, THAI_DIGITS};
use crate::error::{DcResult, DigitCostError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

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
pub enum LayoutName {
    Kedmanee,
    Pattajoti,
}

impl LayoutName {
    /// Kedmanee puts the Thai digits on the shifted number row; Pattajoti does not.
    pub fn thai_digits_shifted(&self) -> bool {
        matches!(self, Self::Kedmanee)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kedmanee => "Kedmanee",
            Self::Pattajoti => "Pattajoti",
        }
    }

    fn thai_layer(&self) -> &'static [RowLayer] {
        match self {
            Self::Kedmanee => &KEDMANEE_THAI,
            Self::Pattajoti => &PATTAJOTI_THAI,
        }
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Number,
    Top,
    Home,
    Bottom,
}

/// Physical key metadata for one character on one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub character: char,
    pub requires_shift: bool,
    pub finger: Finger,
    pub hand: Hand,
    pub row: Row,
}

impl KeyInfo {
    pub fn new(character: char, requires_shift: bool, hand: Hand, finger: Finger, row: Row) -> Self {
        Self {
            character,
            requires_shift,
            finger,
            hand,
            row,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub layout: LayoutName,
    pub total_mapped_keys: usize,
    pub shifted_keys: usize,
    pub unshifted_keys: usize,
}

// --- PHYSICAL GRID (US ANSI positions) ---

type Slot = (Hand, Finger);

const LP: Slot = (Hand::Left, Finger::Pinky);
const LR: Slot = (Hand::Left, Finger::Ring);
const LM: Slot = (Hand::Left, Finger::Middle);
const LI: Slot = (Hand::Left, Finger::Index);
const RI: Slot = (Hand::Right, Finger::Index);
const RM: Slot = (Hand::Right, Finger::Middle);
const RR: Slot = (Hand::Right, Finger::Ring);
const RP: Slot = (Hand::Right, Finger::Pinky);

// ` 1 2 3 4 5 6 7 8 9 0 - =
const NUMBER_ROW: [Slot; 13] = [LP, LP, LR, LM, LI, LI, RI, RI, RM, RR, RP, RP, RP];
// q w e r t y u i o p [ ] \
const TOP_ROW: [Slot; 13] = [LP, LR, LM, LI, LI, RI, RI, RM, RR, RP, RP, RP, RP];
// a s d f g h j k l ; '
const HOME_ROW: [Slot; 11] = [LP, LR, LM, LI, LI, RI, RI, RM, RR, RP, RP];
// z x c v b n m , . /
const BOTTOM_ROW: [Slot; 10] = [LP, LR, LM, LI, LI, RI, RI, RM, RR, RP];

/// Marks a physical slot with no glyph on that layer.
const NO_KEY: char = '\0';

/// One physical row of a layer: unshifted and shifted glyphs, slot by slot.
struct RowLayer {
    row: Row,
    slots: &'static [Slot],
    plain: &'static [char],
    shifted: &'static [char],
}

// Shared English layer. Thai layers override characters they also carry.
static LATIN: [RowLayer; 4] = [
    RowLayer {
        row: Row::Number,
        slots: &NUMBER_ROW,
        plain: &['`', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '='],
        shifted: &['~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+'],
    },
    RowLayer {
        row: Row::Top,
        slots: &TOP_ROW,
        plain: &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '[', ']', '\\'],
        shifted: &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', '{', '}', '|'],
    },
    RowLayer {
        row: Row::Home,
        slots: &HOME_ROW,
        plain: &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\''],
        shifted: &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', ':', '"'],
    },
    RowLayer {
        row: Row::Bottom,
        slots: &BOTTOM_ROW,
        plain: &['z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/'],
        shifted: &['Z', 'X', 'C', 'V', 'B', 'N', 'M', '<', '>', '?'],
    },
];

// TIS 820-2538. Thai digits ๑-๙ sit on the shifted number row, ๐ on shifted Q.
static KEDMANEE_THAI: [RowLayer; 4] = [
    RowLayer {
        row: Row::Number,
        slots: &NUMBER_ROW,
        plain: &[
            '_', 'ๅ', '/', '-', 'ภ', 'ถ', '\u{0E38}', '\u{0E36}', 'ค', 'ต', 'จ', 'ข', 'ช',
        ],
        shifted: &[
            '%', '+', '๑', '๒', '๓', '๔', '\u{0E39}', '฿', '๕', '๖', '๗', '๘', '๙',
        ],
    },
    RowLayer {
        row: Row::Top,
        slots: &TOP_ROW,
        plain: &[
            'ๆ', 'ไ', 'ำ', 'พ', 'ะ', '\u{0E31}', '\u{0E35}', 'ร', 'น', 'ย', 'บ', 'ล', 'ฃ',
        ],
        shifted: &[
            '๐', '"', 'ฎ', 'ฑ', 'ธ', '\u{0E4D}', '\u{0E4A}', 'ณ', 'ฯ', 'ญ', 'ฐ', ',', 'ฅ',
        ],
    },
    RowLayer {
        row: Row::Home,
        slots: &HOME_ROW,
        plain: &[
            'ฟ', 'ห', 'ก', 'ด', 'เ', '\u{0E49}', '\u{0E48}', 'า', 'ส', 'ว', 'ง',
        ],
        shifted: &[
            'ฤ', 'ฆ', 'ฏ', 'โ', 'ฌ', '\u{0E47}', '\u{0E4B}', 'ษ', 'ศ', 'ซ', '.',
        ],
    },
    RowLayer {
        row: Row::Bottom,
        slots: &BOTTOM_ROW,
        plain: &[
            'ผ', 'ป', 'แ', 'อ', '\u{0E34}', '\u{0E37}', 'ท', 'ม', 'ใ', 'ฝ',
        ],
        shifted: &['(', ')', 'ฉ', 'ฮ', '\u{0E3A}', '\u{0E4C}', '?', 'ฒ', 'ฬ', 'ฦ'],
    },
];

// Pattajoti: all ten Thai digits on the unshifted number row (๒๓๔๕ู๗๘๙๐๑๖).
// No slots for ฃ, ฅ or ๅ.
static PATTAJOTI_THAI: [RowLayer; 4] = [
    RowLayer {
        row: Row::Number,
        slots: &NUMBER_ROW,
        plain: &[
            '_', '=', '๒', '๓', '๔', '๕', '\u{0E39}', '๗', '๘', '๙', '๐', '๑', '๖',
        ],
        shifted: &[
            '฿', '+', '"', '/', ',', '?', '\u{0E38}', NO_KEY, '.', '(', ')', '-', '%',
        ],
    },
    RowLayer {
        row: Row::Top,
        slots: &TOP_ROW,
        plain: &[
            '\u{0E47}', 'ต', 'ย', 'อ', 'ร', '\u{0E48}', 'ด', 'ม', 'ว', 'แ', 'ใ', 'ฌ', '\u{0E3A}',
        ],
        shifted: &[
            '\u{0E4A}', 'ฤ', 'ๆ', 'ญ', 'ษ', '\u{0E36}', 'ฝ', 'ซ', 'ถ', 'ฒ', 'ฯ', 'ฦ', '\u{0E4D}',
        ],
    },
    RowLayer {
        row: Row::Home,
        slots: &HOME_ROW,
        plain: &[
            '\u{0E49}', 'ท', 'ง', 'ก', '\u{0E31}', '\u{0E35}', 'า', 'น', 'เ', 'ไ', 'ข',
        ],
        shifted: &[
            '\u{0E4B}', 'ธ', 'ำ', 'ณ', '\u{0E4C}', '\u{0E37}', 'ผ', 'ช', 'โ', 'ฆ', 'ฑ',
        ],
    },
    RowLayer {
        row: Row::Bottom,
        slots: &BOTTOM_ROW,
        plain: &['บ', 'ป', 'ล', 'ห', '\u{0E34}', 'ค', 'ส', 'ะ', 'จ', 'พ'],
        shifted: &['ฎ', 'ฏ', 'ฐ', 'ภ', NO_KEY, 'ศ', 'ฮ', 'ฟ', 'ฉ', 'ฬ'],
    },
];

// Space on the right thumb, Enter on the right pinky, Tab on the left pinky.
// A carriage return is typed with the same Enter key.
const WHITESPACE: [KeyInfo; 4] = [
    KeyInfo {
        character: ' ',
        requires_shift: false,
        finger: Finger::Thumb,
        hand: Hand::Right,
        row: Row::Bottom,
    },
    KeyInfo {
        character: '\n',
        requires_shift: false,
        finger: Finger::Pinky,
        hand: Hand::Right,
        row: Row::Home,
    },
    KeyInfo {
        character: '\r',
        requires_shift: false,
        finger: Finger::Pinky,
        hand: Hand::Right,
        row: Row::Home,
    },
    KeyInfo {
        character: '\t',
        requires_shift: false,
        finger: Finger::Pinky,
        hand: Hand::Left,
        row: Row::Top,
    },
];

/// An immutable, validated character → key table for one named layout.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    name: LayoutName,
    keys: HashMap<char, KeyInfo>,
}

impl KeyboardLayout {
    /// Builds the standard table for `name` and validates its digit rows.
    pub fn build(name: LayoutName) -> DcResult<Self> {
        let mut keys = HashMap::new();
        insert_layer(&mut keys, &LATIN, name)?;
        insert_layer(&mut keys, name.thai_layer(), name)?;
        for key in WHITESPACE {
            keys.insert(key.character, key);
        }
        Self::from_keys(name, keys.into_values())
    }

    /// Builds a layout from an explicit key list. Later keys replace earlier ones.
    pub fn from_keys<I>(name: LayoutName, keys: I) -> DcResult<Self>
    where
        I: IntoIterator<Item = KeyInfo>,
    {
        let keys = keys.into_iter().map(|k| (k.character, k)).collect();
        let layout = Self { name, keys };
        layout.validate()?;
        Ok(layout)
    }

    pub fn name(&self) -> LayoutName {
        self.name
    }

    #[inline]
    pub fn lookup(&self, character: char) -> Option<&KeyInfo> {
        self.keys.get(&character)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn info(&self) -> LayoutInfo {
        let shifted_keys = self.keys.values().filter(|k| k.requires_shift).count();
        LayoutInfo {
            layout: self.name,
            total_mapped_keys: self.keys.len(),
            shifted_keys,
            unshifted_keys: self.keys.len() - shifted_keys,
        }
    }

    /// Both digit sets must be present, with the shift flags of this layout.
    fn validate(&self) -> DcResult<()> {
        let thai_shifted = self.name.thai_digits_shifted();
        let expected = THAI_DIGITS
            .iter()
            .map(|&c| (c, thai_shifted))
            .chain(ASCII_DIGITS.iter().map(|&c| (c, false)));

        for (digit, shift) in expected {
            let key = self.lookup(digit).ok_or_else(|| {
                DigitCostError::LayoutValidation(format!(
                    "{} layout has no key for digit '{}'",
                    self.name.label(),
                    digit
                ))
            })?;
            if key.requires_shift != shift {
                return Err(DigitCostError::LayoutValidation(format!(
                    "{} layout marks digit '{}' requires_shift={}, expected {}",
                    self.name.label(),
                    digit,
                    key.requires_shift,
                    shift
                )));
            }
        }
        Ok(())
    }
}

fn insert_layer(
    keys: &mut HashMap<char, KeyInfo>,
    layer: &[RowLayer],
    name: LayoutName,
) -> DcResult<()> {
    let mut seen = HashSet::new();
    for row in layer {
        if row.plain.len() != row.slots.len() || row.shifted.len() != row.slots.len() {
            return Err(DigitCostError::LayoutValidation(format!(
                "{} {} row has {} slots but {}/{} glyphs",
                name.label(),
                row.row,
                row.slots.len(),
                row.plain.len(),
                row.shifted.len()
            )));
        }

        let glyphs = row
            .plain
            .iter()
            .map(|&c| (c, false))
            .chain(row.shifted.iter().map(|&c| (c, true)));
        let slots = row.slots.iter().chain(row.slots.iter());

        for ((character, requires_shift), &(hand, finger)) in glyphs.zip(slots) {
            if character == NO_KEY {
                continue;
            }
            if !seen.insert(character) {
                return Err(DigitCostError::LayoutValidation(format!(
                    "{} layout defines '{}' twice on one layer",
                    name.label(),
                    character
                )));
            }
            keys.insert(
                character,
                KeyInfo::new(character, requires_shift, hand, finger, row.row),
            );
        }
    }
    Ok(())
}

/// Both standard layouts, built and validated once and then shared read-only.
#[derive(Debug, Clone)]
pub struct LayoutSet {
    kedmanee: KeyboardLayout,
    pattajoti: KeyboardLayout,
}

impl LayoutSet {
    pub fn standard() -> DcResult<Self> {
        Ok(Self {
            kedmanee: KeyboardLayout::build(LayoutName::Kedmanee)?,
            pattajoti: KeyboardLayout::build(LayoutName::Pattajoti)?,
        })
    }

    pub fn get(&self, name: LayoutName) -> &KeyboardLayout {
        match name {
            LayoutName::Kedmanee => &self.kedmanee,
            LayoutName::Pattajoti => &self.pattajoti,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyboardLayout> {
        LayoutName::iter().map(move |name| self.get(name))
    }
}
