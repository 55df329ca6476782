//! User identity and localization types.
//!
//! A `UserProfile` is produced by the mock session layer and consumed by the
//! advisor for personalized replies. Condition tags are plain strings
//! (e.g. "Hypertension") matched exactly, case-sensitive.

use serde::{Deserialize, Serialize};

/// The display language selected in settings.
///
/// Language selection is a pure string-table lookup — no locale negotiation,
/// no fallback chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    Hi,
}

impl Language {
    /// Short code used in the settings overlay ("EN", "ES", ...).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
            Language::Fr => "FR",
            Language::Hi => "HI",
        }
    }

    /// Native display name shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Hi => "हिन्दी",
        }
    }

    /// The next language in picker order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::Fr,
            Language::Fr => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// The logged-in user's profile.
///
/// Built by the mock session layer; no real account exists behind it.
/// `conditions` holds known medical-condition tags the advisor may
/// personalize on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Absent for freshly registered users.
    pub age: Option<u8>,
    /// Known condition tags, e.g. ["Hypertension"]. May be empty.
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl UserProfile {
    /// Return true if the profile carries the given condition tag.
    ///
    /// Matching is exact and case-sensitive: "Hypertension" and
    /// "hypertension" are different tags.
    pub fn has_condition(&self, tag: &str) -> bool {
        self.conditions.iter().any(|c| c == tag)
    }
}
