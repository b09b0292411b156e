use crate::consts::DEFAULT_TYPIST;
use crate::error::{DcResult, DigitCostError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Average time per keystroke for one class of typist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypistProfile {
    pub name: String,
    pub keystroke_seconds: f64,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl TypistProfile {
    pub fn new(name: &str, keystroke_seconds: f64, label: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            keystroke_seconds,
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Either one named profile or every registered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypistSelection {
    All,
    Named(String),
}

impl Default for TypistSelection {
    fn default() -> Self {
        Self::Named(DEFAULT_TYPIST.to_string())
    }
}

impl FromStr for TypistSelection {
    type Err = DigitCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DigitCostError::Config("empty typist selection".into()));
        }
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Named(s.to_lowercase()))
        }
    }
}

impl std::fmt::Display for TypistSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Ordered, immutable set of typist profiles.
#[derive(Debug, Clone)]
pub struct TypistRegistry {
    profiles: Vec<TypistProfile>,
}

impl TypistRegistry {
    pub fn standard() -> Self {
        Self {
            profiles: vec![
                TypistProfile::new(
                    "expert",
                    0.12,
                    "Expert Typist (90 WPM)",
                    "Professional typist, ~90 WPM, touch typing mastery",
                ),
                TypistProfile::new(
                    "skilled",
                    0.20,
                    "Skilled Typist",
                    "Experienced office worker, good typing skills",
                ),
                TypistProfile::new(
                    "average",
                    0.28,
                    "Average Non-secretarial",
                    "Average office worker, moderate typing skills",
                ),
                TypistProfile::new(
                    "worst",
                    1.2,
                    "Worst Typist",
                    "Hunt-and-peck typist, very slow typing",
                ),
            ],
        }
    }

    /// Validates and wraps an explicit list of profiles.
    pub fn from_profiles(profiles: Vec<TypistProfile>) -> DcResult<Self> {
        if profiles.is_empty() {
            return Err(DigitCostError::Config(
                "typist registry must hold at least one profile".into(),
            ));
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.name.trim().is_empty() {
                return Err(DigitCostError::Config("typist profile with empty name".into()));
            }
            if !(profile.keystroke_seconds.is_finite() && profile.keystroke_seconds > 0.0) {
                return Err(DigitCostError::Config(format!(
                    "typist '{}' has non-positive keystroke time {}",
                    profile.name, profile.keystroke_seconds
                )));
            }
            // Lookup ignores case, so `Fast` and `fast` would shadow each other.
            if !seen.insert(profile.name.to_lowercase()) {
                return Err(DigitCostError::Config(format!(
                    "duplicate typist profile '{}' (names are case-insensitive)",
                    profile.name
                )));
            }
        }

        Ok(Self { profiles })
    }

    /// Reads profiles from CSV with header `name,keystroke_seconds,label,description`.
    pub fn from_csv_reader<R: Read>(reader: R) -> DcResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut profiles = Vec::new();
        for record in rdr.deserialize() {
            let profile: TypistProfile = record?;
            profiles.push(profile);
        }
        debug!("Parsed {} typist profiles from CSV", profiles.len());

        Self::from_profiles(profiles)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DcResult<Self> {
        let path = path.as_ref();
        debug!("Loading typist profiles from {}", path.display());
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn get(&self, name: &str) -> DcResult<&TypistProfile> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DigitCostError::UnknownTypistProfile {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn all(&self) -> &[TypistProfile] {
        &self.profiles
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// The `average` profile when registered, otherwise the first one.
    pub fn default_profile(&self) -> &TypistProfile {
        self.profiles
            .iter()
            .find(|p| p.name == DEFAULT_TYPIST)
            .unwrap_or(&self.profiles[0])
    }

    pub fn select(&self, selection: &TypistSelection) -> DcResult<Vec<TypistProfile>> {
        match selection {
            TypistSelection::All => Ok(self.profiles.clone()),
            TypistSelection::Named(name) => Ok(vec![self.get(name)?.clone()]),
        }
    }
}
