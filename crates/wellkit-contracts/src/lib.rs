//! # wellkit-contracts
//!
//! Shared types and error definitions for the Wellkit health companion.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod appointment;
pub mod chat;
pub mod error;
pub mod hospital;
pub mod profile;
pub mod reminder;

#[cfg(test)]
mod tests {
    use super::*;
    use chat::{AdvisorReply, MessageId, RecommendationItem, Sender};
    use error::WellkitError;
    use profile::{Language, UserProfile};
    use reminder::Frequency;

    fn sample_profile(conditions: &[&str]) -> UserProfile {
        UserProfile {
            name: "jordan".to_string(),
            email: "jordan@example.com".to_string(),
            age: Some(32),
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
        }
    }

    // ── UserProfile ──────────────────────────────────────────────────────────

    #[test]
    fn has_condition_matches_exact_tag() {
        let profile = sample_profile(&["Hypertension"]);
        assert!(profile.has_condition("Hypertension"));
        assert!(!profile.has_condition("Diabetes"));
    }

    #[test]
    fn has_condition_is_case_sensitive() {
        let profile = sample_profile(&["Hypertension"]);
        // Tags are exact strings; query keywords, not tags, are the
        // case-insensitive side of matching.
        assert!(!profile.has_condition("hypertension"));
    }

    #[test]
    fn has_condition_on_empty_set() {
        let profile = sample_profile(&[]);
        assert!(!profile.has_condition("Hypertension"));
    }

    // ── Language ─────────────────────────────────────────────────────────────

    #[test]
    fn language_next_cycles_through_all_four() {
        let mut lang = Language::En;
        let mut seen = vec![lang];
        for _ in 0..3 {
            lang = lang.next();
            seen.push(lang);
        }
        assert_eq!(seen, vec![Language::En, Language::Es, Language::Fr, Language::Hi]);
        // Wraps back to the start.
        assert_eq!(lang.next(), Language::En);
    }

    // ── Serde round-trips ────────────────────────────────────────────────────

    #[test]
    fn advisor_reply_round_trips() {
        let original = AdvisorReply {
            text: "Stay hydrated and rest.".to_string(),
            items: vec![RecommendationItem::new(
                "Water",
                "Hydration prevents headaches",
                "💧",
            )],
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: AdvisorReply = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn advisor_reply_items_default_to_empty() {
        // A reply serialized without items must decode with an empty list.
        let decoded: AdvisorReply =
            serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert!(decoded.items.is_empty());
    }

    #[test]
    fn sender_round_trips() {
        for sender in [Sender::User, Sender::Advisor] {
            let json = serde_json::to_string(&sender).unwrap();
            let decoded: Sender = serde_json::from_str(&json).unwrap();
            assert_eq!(sender, decoded);
        }
    }

    #[test]
    fn frequency_round_trips_kebab_case() {
        let json = serde_json::to_string(&Frequency::TwiceDaily).unwrap();
        assert_eq!(json, "\"twice-daily\"");
        let decoded: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Frequency::TwiceDaily);
    }

    #[test]
    fn frequency_parse_accepts_case_variants() {
        assert_eq!(Frequency::parse("Daily").unwrap(), Frequency::Daily);
        assert_eq!(Frequency::parse("twice daily").unwrap(), Frequency::TwiceDaily);
        assert_eq!(Frequency::parse("WEEKLY").unwrap(), Frequency::Weekly);
        assert!(Frequency::parse("hourly").is_err());
    }

    // ── MessageId ────────────────────────────────────────────────────────────

    #[test]
    fn message_id_new_produces_unique_values() {
        let ids: Vec<MessageId> = (0..100).map(|_| MessageId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── WellkitError display messages ────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = WellkitError::Config {
            reason: "missing fallback reply".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing fallback reply"));
    }

    #[test]
    fn error_invalid_entry_display() {
        let err = WellkitError::InvalidEntry {
            field: "medicine name".to_string(),
            reason: "must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("medicine name"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn error_unknown_entry_display() {
        let err = WellkitError::UnknownEntry {
            id: "abc-123".to_string(),
        };
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn error_session_display() {
        let err = WellkitError::Session {
            reason: "not logged in".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("session error"));
        assert!(msg.contains("not logged in"));
    }
}
