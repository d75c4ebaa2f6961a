//! Property-based tests for the fusion heuristics.
//!
//! The pipeline promises totality (every input produces a value) and
//! determinism (identical inputs produce identical labels); these properties
//! pin both down over arbitrary inputs.

use proptest::prelude::*;

use request_trust::analysis::{score, TrustLevel};
use request_trust::signals::lang_country;

// Property: the scorer is deterministic and total
proptest! {
    #[test]
    fn score_never_panics(
        country in "\\PC*",
        tz in "\\PC*",
        lang in "\\PC*",
        dc in proptest::bool::ANY,
        vpn in proptest::bool::ANY
    ) {
        let _ = score(&country, &tz, &lang, dc, vpn);
    }

    #[test]
    fn score_is_deterministic(
        country in "\\PC*",
        tz in "\\PC*",
        lang in "\\PC*",
        dc in proptest::bool::ANY,
        vpn in proptest::bool::ANY
    ) {
        let first = score(&country, &tz, &lang, dc, vpn);
        let second = score(&country, &tz, &lang, dc, vpn);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_country_is_always_unknown(
        tz in "\\PC*",
        lang in "\\PC*",
        dc in proptest::bool::ANY,
        vpn in proptest::bool::ANY
    ) {
        prop_assert_eq!(score("", &tz, &lang, dc, vpn), TrustLevel::Unknown);
    }

    #[test]
    fn flagged_requests_never_exceed_very_low(
        country in "[A-Z]{2}",
        tz in "\\PC*",
        lang in "\\PC*"
    ) {
        // With a resolved country, either risk flag caps the label
        prop_assert_eq!(score(&country, &tz, &lang, true, false), TrustLevel::VeryLow);
        prop_assert_eq!(score(&country, &tz, &lang, false, true), TrustLevel::VeryLow);
    }

    #[test]
    fn clean_resolved_requests_rank_at_least_low(
        country in "[A-Z]{2}",
        tz in "\\PC*",
        lang in "\\PC*"
    ) {
        let level = score(&country, &tz, &lang, false, false);
        prop_assert!(level >= TrustLevel::Low);
    }
}

// Property: language-region derivation is total and never produces garbage
proptest! {
    #[test]
    fn lang_country_never_panics(header in "\\PC*") {
        let _ = lang_country(&header);
    }

    #[test]
    fn lang_country_output_comes_after_a_hyphen(header in "\\PC*") {
        // A non-empty result must be the suffix of the first entry after its
        // first hyphen; a trailing hyphen (`en-`) must yield empty, never a
        // partial value.
        let result = lang_country(&header);
        if !result.is_empty() {
            let primary = header.split(',').next().unwrap_or("").trim();
            prop_assert!(primary.contains('-'));
            prop_assert!(primary.ends_with(&result));
            prop_assert!(!result.starts_with('-') || primary.contains("--"));
        }
    }

    #[test]
    fn lang_country_of_simple_tags(region in "[A-Z]{2}") {
        let header = format!("en-{},en;q=0.9", region);
        prop_assert_eq!(lang_country(&header), region);
    }
}
