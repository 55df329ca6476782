//! TOML-driven advisor engine implementation.
//!
//! `RuleAdvisor` loads an `AdvisorConfig` from a TOML string or file and
//! selects a reply for each query.
//!
//! Selection algorithm:
//!
//! 1. Lowercase the query.
//! 2. Compute the food-recommendation list for the query — independently of
//!    topic selection, from its own keyword table (see `recommend`).
//! 3. Iterate rules in declaration order.  For the first rule whose keywords
//!    match (and whose `requires_condition`, if any, is held by the profile):
//!    substitute `{condition}` in the reply text and attach the food list
//!    when the rule asks for it.
//! 4. If no rule matched → the fallback reply with no recommendations
//!    (reply-by-default; selection is total and never errors).

use std::path::Path;

use tracing::debug;

use wellkit_contracts::{
    chat::AdvisorReply,
    error::{WellkitError, WellkitResult},
    profile::UserProfile,
};

use crate::recommend;
use crate::rule::{AdvisorConfig, AdvisorRule};

/// The built-in rule table shipped with the crate.
///
/// Loaded by `RuleAdvisor::builtin()`; a deployment can substitute its own
/// table via `from_file`.
pub const BUILTIN_RULES: &str = include_str!("../rules/advisor.toml");

/// A response selector that reads its rule table from a TOML document.
///
/// Construct via `builtin`, `from_toml_str`, or `from_file`, then call
/// `select` once per incoming query.  The advisor is stateless: each call is
/// independent, and identical inputs produce identical replies.
///
/// ```rust,ignore
/// use wellkit_advisor::engine::RuleAdvisor;
///
/// let advisor = RuleAdvisor::builtin()?;
/// let reply = advisor.select("I have a headache", None);
/// ```
#[derive(Debug)]
pub struct RuleAdvisor {
    config: AdvisorConfig,
}

impl RuleAdvisor {
    /// Parse `s` as TOML and build a `RuleAdvisor`.
    ///
    /// Keywords are lowercased here, once, so matching at query time is a
    /// plain substring test.  Returns `WellkitError::Config` if the TOML is
    /// malformed, does not match the `AdvisorConfig` schema, or fails
    /// validation.
    pub fn from_toml_str(s: &str) -> WellkitResult<Self> {
        let mut config: AdvisorConfig = toml::from_str(s).map_err(|e| WellkitError::Config {
            reason: format!("failed to parse advisor rule TOML: {}", e),
        })?;
        config.validate()?;

        for rule in &mut config.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }

        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a TOML rule table.
    ///
    /// Returns `WellkitError::Config` if the file cannot be read or its
    /// contents are not a valid rule table.
    pub fn from_file(path: &Path) -> WellkitResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WellkitError::Config {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build an advisor from the built-in rule table.
    pub fn builtin() -> WellkitResult<Self> {
        Self::from_toml_str(BUILTIN_RULES)
    }

    /// The loaded rules, in evaluation order.
    pub fn rules(&self) -> &[AdvisorRule] {
        &self.config.rules
    }

    /// Select a reply for `query`.
    ///
    /// Total over all inputs: an empty or unmatched query falls through to
    /// the fallback reply.  The food-recommendation list is computed from
    /// the same query by an independently evaluated keyword table, so the
    /// attached foods can belong to a different topic than the reply text
    /// when keyword sets overlap asymmetrically — that divergence is
    /// intentional, observed behavior.
    pub fn select(&self, query: &str, profile: Option<&UserProfile>) -> AdvisorReply {
        let normalized = query.to_lowercase();
        let foods = recommend::recommendations_for(query);

        for rule in &self.config.rules {
            if !rule.matches(&normalized, profile) {
                continue;
            }

            debug!(rule_id = %rule.id, "advisor rule matched");

            let text = match &rule.requires_condition {
                Some(tag) => rule.reply.replace("{condition}", tag),
                None => rule.reply.clone(),
            };

            let items = if rule.attach_foods { foods } else { Vec::new() };
            return AdvisorReply { text, items };
        }

        debug!("no advisor rule matched; replying with fallback");

        AdvisorReply {
            text: self.config.fallback.reply.clone(),
            items: Vec::new(),
        }
    }
}
