//! Advisor rule types and configuration schema.
//!
//! An `AdvisorConfig` is deserialized from TOML and holds an ordered list of
//! `AdvisorRule`s plus the fallback reply.  Rules are evaluated in
//! declaration order — the first matching rule wins.  If no rule matches,
//! the advisor replies with the fallback.

use serde::{Deserialize, Serialize};

use wellkit_contracts::{
    error::{WellkitError, WellkitResult},
    profile::UserProfile,
};

/// A single advisor rule loaded from TOML.
///
/// Rules are matched in the order they appear in the rule file.  The first
/// rule whose keyword set matches the (lowercased) query wins; subsequent
/// rules are not evaluated.
///
/// A rule with `requires_condition` set only matches when the user's profile
/// carries that condition tag — this is how personalized rules shadow the
/// generic topic that shares their keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorRule {
    /// Stable identifier used in logs and error messages.
    pub id: String,

    /// Human-readable explanation of what this rule answers.
    pub description: String,

    /// Substrings tested against the lowercased query, joined by OR.
    /// Matching is case-insensitive; keywords are lowercased at load time.
    pub keywords: Vec<String>,

    /// Condition tag the profile MUST carry for this rule to match.
    /// Tag comparison is exact and case-sensitive (e.g. "Hypertension").
    #[serde(default)]
    pub requires_condition: Option<String>,

    /// Whether the food-recommendation list computed for the query is
    /// attached to this rule's reply.  Topics without a food category
    /// (exercise, sleep, emergency) set this false.
    #[serde(default)]
    pub attach_foods: bool,

    /// The advisory text returned when this rule matches.  May contain the
    /// `{condition}` placeholder, substituted with `requires_condition`
    /// when the rule fires.
    pub reply: String,
}

impl AdvisorRule {
    /// Return true if this rule matches the given query and profile.
    ///
    /// `normalized_query` must already be lowercased by the caller.
    /// Matching logic:
    /// - If `requires_condition` is set, the profile must be present and
    ///   carry the tag, or the rule does not match.
    /// - Otherwise the rule matches when any keyword is a substring of the
    ///   query.
    pub fn matches(&self, normalized_query: &str, profile: Option<&UserProfile>) -> bool {
        if let Some(tag) = &self.requires_condition {
            let holds_tag = profile.map(|p| p.has_condition(tag)).unwrap_or(false);
            if !holds_tag {
                return false;
            }
        }

        self.keywords
            .iter()
            .any(|keyword| normalized_query.contains(keyword.as_str()))
    }
}

/// The fixed reply used when no rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackReply {
    pub reply: String,
}

/// The top-level structure deserialized from a TOML rule file.
///
/// Rules are evaluated in the order they appear in the `rules` array.
///
/// Example:
/// ```toml
/// [[rules]]
/// id = "headache"
/// description = "Headache relief steps"
/// keywords = ["headache", "head pain"]
/// attach_foods = true
/// reply = "Rest in a quiet, dark room."
///
/// [fallback]
/// reply = "What health topic would you like to discuss?"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Ordered list of rules.  First match wins.
    pub rules: Vec<AdvisorRule>,
    /// Returned when no rule matches.  Evaluation is total — there is
    /// always a reply.
    pub fallback: FallbackReply,
}

impl AdvisorConfig {
    /// Check structural invariants serde cannot express.
    ///
    /// Every rule needs an id, at least one keyword, and a non-empty reply;
    /// the fallback reply must be non-empty as well.  Returns
    /// `WellkitError::Config` naming the offending rule.
    pub fn validate(&self) -> WellkitResult<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(WellkitError::Config {
                    reason: format!("rule at position {} has an empty id", index),
                });
            }
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(WellkitError::Config {
                    reason: format!("rule '{}' must declare at least one non-empty keyword", rule.id),
                });
            }
            if rule.reply.trim().is_empty() {
                return Err(WellkitError::Config {
                    reason: format!("rule '{}' has an empty reply", rule.id),
                });
            }
        }

        if self.fallback.reply.trim().is_empty() {
            return Err(WellkitError::Config {
                reason: "fallback reply must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
