//! # wellkit-advisor
//!
//! A TOML-driven, first-match-wins response selector for the Wellkit health
//! advisor.
//!
//! ## Overview
//!
//! This crate provides [`RuleAdvisor`], which answers free-text health
//! questions from an ordered table of keyword rules.  Rules are declared in
//! a TOML document, evaluated in order, and the first matching rule wins.
//! If no rule matches, the advisor replies with the table's fallback — the
//! selector is total and cannot fail at query time.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wellkit_advisor::RuleAdvisor;
//!
//! let advisor = RuleAdvisor::builtin()?;
//! let reply = advisor.select("how do I sleep better", None);
//! println!("{}", reply.text);
//! ```
//!
//! ## Rule matching
//!
//! Each rule declares a keyword set matched case-insensitively as
//! substrings of the query.  A rule may additionally require a profile
//! condition tag (personalization); such rules are declared before the
//! generic topics they shadow.  Food recommendations are computed from the
//! same query by a second, independently evaluated keyword table in
//! [`recommend`] and attached only when the winning rule asks for them.

pub mod engine;
pub mod recommend;
pub mod rule;

pub use engine::{RuleAdvisor, BUILTIN_RULES};
pub use rule::{AdvisorConfig, AdvisorRule, FallbackReply};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wellkit_contracts::{error::WellkitError, profile::UserProfile};

    use crate::RuleAdvisor;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn hypertension_profile() -> UserProfile {
        UserProfile {
            name: "jordan".to_string(),
            email: "jordan@example.com".to_string(),
            age: Some(32),
            conditions: vec!["Hypertension".to_string()],
        }
    }

    fn advisor() -> RuleAdvisor {
        RuleAdvisor::builtin().unwrap()
    }

    // ── 1. totality ───────────────────────────────────────────────────────────

    /// Every input produces a reply with non-empty advisory text — including
    /// empty and whitespace-only queries.
    #[test]
    fn test_selection_is_total() {
        let advisor = advisor();
        for query in ["", "   ", "headache", "xyz123 unrelated nonsense", "🤷"] {
            let reply = advisor.select(query, None);
            assert!(
                !reply.text.is_empty(),
                "query {:?} must produce non-empty text",
                query
            );
        }
    }

    // ── 2. personalization precedence ─────────────────────────────────────────

    /// With the Hypertension tag, a blood-pressure query gets the
    /// personalized advisory, not the generic path.
    #[test]
    fn test_personalized_rule_precedes_generic_matching() {
        let advisor = advisor();
        let profile = hypertension_profile();

        let reply = advisor.select("what about my blood pressure", Some(&profile));

        assert!(
            reply.text.contains("Since you have Hypertension"),
            "expected personalized text, got: {}",
            reply.text
        );
        // The blood-pressure food list rides along.
        assert_eq!(reply.items.len(), 4);
        assert_eq!(reply.items[0].name, "Bananas");
    }

    /// Without the tag, the same query hits no generic topic (there is no
    /// generic blood-pressure rule) and falls back — with no foods, since
    /// the fallback never attaches any.
    #[test]
    fn test_blood_pressure_without_tag_falls_back() {
        let advisor = advisor();
        let reply = advisor.select("what about my blood pressure", None);

        assert!(reply.text.contains("What specific health topic"));
        assert!(reply.items.is_empty());
    }

    /// The personalized rule needs BOTH the tag and its keywords; a profile
    /// holding the tag does not personalize unrelated queries.
    #[test]
    fn test_tag_alone_does_not_personalize() {
        let advisor = advisor();
        let profile = hypertension_profile();

        let reply = advisor.select("I feel a lot of stress", Some(&profile));
        assert!(reply.text.contains("Stress Management"));
    }

    // ── 3. case-insensitivity ─────────────────────────────────────────────────

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let advisor = advisor();
        for query in ["HEADACHE", "headache", "Head Pain"] {
            let reply = advisor.select(query, None);
            assert!(
                reply.text.contains("For headache relief"),
                "query {:?} must select the headache topic",
                query
            );
        }
    }

    // ── 4. declaration-order tie-break ────────────────────────────────────────

    /// A query matching both diet and stress keywords selects diet — the
    /// earlier rule in declaration order.
    #[test]
    fn test_topic_tie_break_is_declaration_order() {
        let advisor = advisor();
        let reply = advisor.select("stress is ruining my diet", None);
        assert!(
            reply.text.contains("Healthy Diet Guidelines"),
            "diet is declared before stress and must win: {}",
            reply.text
        );
    }

    // ── 5. recommendation completeness ────────────────────────────────────────

    /// Every topic that attaches foods returns exactly 4 fully populated
    /// items.
    #[test]
    fn test_food_topics_attach_four_complete_items() {
        let advisor = advisor();
        for query in ["headache", "fever", "diet", "stress"] {
            let reply = advisor.select(query, None);
            assert_eq!(reply.items.len(), 4, "query {:?}", query);
            for item in &reply.items {
                assert!(!item.name.is_empty());
                assert!(!item.benefit.is_empty());
                assert!(!item.symbol.is_empty());
            }
        }
    }

    /// Exercise, sleep, and emergency topics never attach foods — even when
    /// the query would satisfy a food category on its own.
    #[test]
    fn test_non_food_topics_attach_nothing() {
        let advisor = advisor();

        // Plain non-food topics.
        for query in ["workout plan", "insomnia", "this is urgent"] {
            let reply = advisor.select(query, None);
            assert!(reply.items.is_empty(), "query {:?}", query);
        }

        // "workout" wins topic selection before "stress", so the stress food
        // category (which the query also satisfies) is discarded.
        let reply = advisor.select("workout to reduce stress", None);
        assert!(reply.text.contains("Exercise Recommendations"));
        assert!(reply.items.is_empty());
    }

    // ── 6. fallback ───────────────────────────────────────────────────────────

    #[test]
    fn test_unmatched_query_gets_fallback() {
        let advisor = advisor();
        let reply = advisor.select("xyz123 unrelated nonsense", None);
        assert!(reply.text.contains("What specific health topic"));
        assert!(reply.items.is_empty());
    }

    // ── 7. idempotence ────────────────────────────────────────────────────────

    /// Identical arguments yield identical replies — no hidden state drift.
    #[test]
    fn test_selection_is_idempotent() {
        let advisor = advisor();
        let profile = hypertension_profile();

        let first = advisor.select("hypertension and diet", Some(&profile));
        let second = advisor.select("hypertension and diet", Some(&profile));
        assert_eq!(first, second);
    }

    // ── 8. topic/category divergence (observed behavior) ─────────────────────

    /// The advisory topic and the food category come from two independently
    /// evaluated keyword tables over the same query.  A diet query that
    /// mentions hypertension (without the profile tag) gets diet TEXT but
    /// blood-pressure FOODS — the tables disagree, and that is preserved.
    #[test]
    fn diet_reply_can_carry_blood_pressure_foods() {
        let advisor = advisor();
        let reply = advisor.select("diet plan for hypertension", None);

        assert!(reply.text.contains("Healthy Diet Guidelines"));
        assert_eq!(reply.items.len(), 4);
        assert_eq!(
            reply.items[0].name, "Bananas",
            "blood-pressure category is declared first and wins independently"
        );
    }

    // ── 9. configuration errors ───────────────────────────────────────────────

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = RuleAdvisor::from_toml_str("rules = [ not toml");
        match result {
            Err(WellkitError::Config { reason }) => {
                assert!(reason.contains("failed to parse"), "got: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let toml = r#"
            [[rules]]
            id = "broken"
            description = "no keywords"
            keywords = []
            reply = "hello"

            [fallback]
            reply = "default"
        "#;
        let result = RuleAdvisor::from_toml_str(toml);
        match result {
            Err(WellkitError::Config { reason }) => {
                assert!(reason.contains("broken"), "got: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let toml = r#"
            [[rules]]
            id = "ok"
            description = "fine"
            keywords = ["hello"]
            reply = "hi"

            [fallback]
            reply = "   "
        "#;
        assert!(RuleAdvisor::from_toml_str(toml).is_err());
    }

    // ── builtin table shape ───────────────────────────────────────────────────

    /// The shipped table declares the personalized rule first, then the
    /// seven generic topics.
    #[test]
    fn test_builtin_table_loads_with_expected_order() {
        let advisor = advisor();
        let ids: Vec<&str> = advisor.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "personal-hypertension",
                "headache",
                "fever",
                "diet",
                "exercise",
                "sleep",
                "stress",
                "emergency",
            ]
        );
    }
}
