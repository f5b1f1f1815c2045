//! Critique formatter/parser — pure functions, no I/O.
//!
//! Prompt in: `build_prompt` fills the roast template.
//! Reply out: `extract_score` finds the first `<digits>/100`, `score_reply` substitutes a
//! random 70–99 when there is none, and `TierThresholds::classify` maps score to level.

use std::sync::LazyLock;

use regex::Regex;

use crate::critique::models::RoastLevel;
use crate::critique::prompts::ROAST_PROMPT_TEMPLATE;
use crate::critique::randomness::RandomSource;

// ASCII digits only: `\d` is Unicode-aware and would let e.g. Arabic-Indic digits
// claim the first match and then fail to parse.
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)/100").expect("SCORE_RE regex should compile"));

/// Range used when a model reply carries no parseable score.
pub const UNPARSED_SCORE_RANGE: (u32, u32) = (70, 99);

/// Lower bounds for each level, checked high to low. Anything below `spicy` is nuclear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub mild: u32,
    pub medium: u32,
    pub spicy: u32,
}

impl TierThresholds {
    /// Scores parsed from a live model reply.
    pub const LIVE: TierThresholds = TierThresholds {
        mild: 90,
        medium: 75,
        spicy: 60,
    };

    /// Scores synthesized in demo mode.
    pub const DEMO: TierThresholds = TierThresholds {
        mild: 85,
        medium: 75,
        spicy: 65,
    };

    pub fn classify(&self, score: u32) -> RoastLevel {
        if score >= self.mild {
            RoastLevel::Mild
        } else if score >= self.medium {
            RoastLevel::Medium
        } else if score >= self.spicy {
            RoastLevel::Spicy
        } else {
            RoastLevel::Nuclear
        }
    }
}

/// Builds the roast prompt. Both values are embedded verbatim.
pub fn build_prompt(resume_text: &str, filename: &str) -> String {
    fill_template(
        ROAST_PROMPT_TEMPLATE,
        &[("filename", filename), ("resume_text", resume_text)],
    )
}

/// Returns the number before the first `/100` in `reply`.
///
/// `None` when there is no such substring or the digits overflow a `u32`.
/// Never panics, whatever the input.
pub fn extract_score(reply: &str) -> Option<u32> {
    SCORE_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Parsed score, or a random one from `UNPARSED_SCORE_RANGE`.
pub fn score_reply(reply: &str, rng: &dyn RandomSource) -> u32 {
    match extract_score(reply) {
        Some(score) => score,
        None => {
            let (low, high) = UNPARSED_SCORE_RANGE;
            let score = rng.between(low, high);
            tracing::warn!("No score found in model reply, substituting {score}");
            score
        }
    }
}

/// Replaces `{key}` placeholders found in `template`.
///
/// Only the template is scanned: substituted values are copied as-is, so a résumé that
/// happens to contain `{filename}` is left untouched. Unknown placeholders stay literal.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });
        match replacement {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn between(&self, low: u32, high: u32) -> u32 {
            self.0.clamp(low, high)
        }

        fn index(&self, _len: usize) -> usize {
            0
        }
    }

    // ── tiers ──────────────────────────────────────────────────────────────

    #[test]
    fn test_live_tier_boundaries() {
        let t = TierThresholds::LIVE;
        assert_eq!(t.classify(100), RoastLevel::Mild);
        assert_eq!(t.classify(90), RoastLevel::Mild);
        assert_eq!(t.classify(89), RoastLevel::Medium);
        assert_eq!(t.classify(75), RoastLevel::Medium);
        assert_eq!(t.classify(74), RoastLevel::Spicy);
        assert_eq!(t.classify(60), RoastLevel::Spicy);
        assert_eq!(t.classify(59), RoastLevel::Nuclear);
        assert_eq!(t.classify(0), RoastLevel::Nuclear);
    }

    #[test]
    fn test_demo_tier_boundaries() {
        let t = TierThresholds::DEMO;
        assert_eq!(t.classify(89), RoastLevel::Mild);
        assert_eq!(t.classify(85), RoastLevel::Mild);
        assert_eq!(t.classify(84), RoastLevel::Medium);
        assert_eq!(t.classify(75), RoastLevel::Medium);
        assert_eq!(t.classify(74), RoastLevel::Spicy);
        assert_eq!(t.classify(65), RoastLevel::Spicy);
        assert_eq!(t.classify(64), RoastLevel::Nuclear);
    }

    #[test]
    fn test_scores_above_100_are_mild() {
        assert_eq!(TierThresholds::LIVE.classify(250), RoastLevel::Mild);
    }

    #[test]
    fn test_tables_disagree_between_85_and_89() {
        assert_eq!(TierThresholds::LIVE.classify(87), RoastLevel::Medium);
        assert_eq!(TierThresholds::DEMO.classify(87), RoastLevel::Mild);
    }

    // ── score extraction ───────────────────────────────────────────────────

    #[test]
    fn test_extract_score_from_final_line() {
        assert_eq!(extract_score("...great work! FINAL SCORE: 42/100"), Some(42));
    }

    #[test]
    fn test_extract_score_ignores_surrounding_text() {
        let reply = "🔥 ROAST 🔥\nyour bullets are soup\n💯 FINAL SCORE: 77/100\nbye";
        assert_eq!(extract_score(reply), Some(77));
    }

    #[test]
    fn test_extract_score_first_match_wins() {
        assert_eq!(extract_score("Formatting: 30/100. Overall: 65/100"), Some(30));
    }

    #[test]
    fn test_extract_score_without_match() {
        assert_eq!(extract_score("FINAL SCORE: eighty"), None);
        assert_eq!(extract_score("rated 7/10"), None);
        assert_eq!(extract_score(""), None);
    }

    #[test]
    fn test_extract_score_takes_trailing_digits_of_longer_ratio() {
        // "1/1000" still contains "1/100"
        assert_eq!(extract_score("1/1000"), Some(1));
    }

    #[test]
    fn test_extract_score_overflow_is_none() {
        assert_eq!(extract_score("99999999999999999999/100"), None);
    }

    #[test]
    fn test_extract_score_skips_non_ascii_digits() {
        let reply = "Rated ٨٥/100 by my cousin.\n💯 FINAL SCORE: 42/100";
        assert_eq!(extract_score(reply), Some(42));
    }

    #[test]
    fn test_extract_score_fullwidth_digit_is_not_part_of_number() {
        assert_eq!(extract_score("score ４2/100"), Some(2));
    }

    #[test]
    fn test_score_reply_uses_parsed_value() {
        assert_eq!(score_reply("FINAL SCORE: 12/100", &Fixed(99)), 12);
    }

    #[test]
    fn test_score_reply_falls_back_into_range() {
        assert_eq!(score_reply("no score here", &Fixed(0)), 70);
        assert_eq!(score_reply("no score here", &Fixed(500)), 99);
    }

    #[test]
    fn test_unparsed_reply_still_gets_valid_tier() {
        let score = score_reply("the model rambled", &Fixed(72));
        assert_eq!(score, 72);
        assert_eq!(TierThresholds::LIVE.classify(score), RoastLevel::Spicy);
    }

    // ── prompt ─────────────────────────────────────────────────────────────

    #[test]
    fn test_prompt_embeds_inputs_and_score_contract() {
        let prompt = build_prompt("Senior Rust Engineer at Acme", "jane_doe.pdf");
        assert!(prompt.contains("Resume filename: jane_doe.pdf"));
        assert!(prompt.contains("Resume content: Senior Rust Engineer at Acme"));
        assert!(prompt.contains("FINAL SCORE: [X]/100"));
        assert!(!prompt.contains("{filename}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_keeps_placeholder_like_resume_text_verbatim() {
        let prompt = build_prompt("skills: {filename} {resume_text}", "cv.pdf");
        assert!(prompt.contains("Resume content: skills: {filename} {resume_text}"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let out = fill_template("{a} and {b} and {", &[("a", "1")]);
        assert_eq!(out, "1 and {b} and {");
    }
}
