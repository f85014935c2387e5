use std::fmt;
use std::sync::Arc;
use scr_core::{KeywordMatcher, Result};

pub mod matchers;

pub use matchers::{create_matcher, SubstringMatcher, TokenMatcher};

/// Risk-indicating words used when no override is configured.
pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "strike",
    "shortage",
    "disruption",
    "protest",
    "inflation",
    "embargo",
];

/// Upper end of the nominal score scale.
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub keywords: Vec<String>,
    pub matcher: String,
    /// Cap scores at `MAX_SCORE` when repeated keywords push the ratio above 1.
    pub clamp: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            matcher: TokenMatcher::NAME.to_string(),
            clamp: false,
        }
    }
}

/// Maps free text to a keyword-density score on a 0-10 scale.
#[derive(Clone)]
pub struct RiskScorer {
    keywords: Vec<String>,
    matcher: Arc<dyn KeywordMatcher>,
    clamp: bool,
}

impl fmt::Debug for RiskScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskScorer")
            .field("keywords", &self.keywords)
            .field("matcher", &self.matcher.name())
            .field("clamp", &self.clamp)
            .finish()
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        let config = ScoringConfig::default();
        Self::with_matcher(config.keywords, Arc::new(TokenMatcher), config.clamp)
    }
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        let matcher = create_matcher(&config.matcher)?;
        Ok(Self::with_matcher(config.keywords, matcher, config.clamp))
    }

    pub fn with_matcher(keywords: Vec<String>, matcher: Arc<dyn KeywordMatcher>, clamp: bool) -> Self {
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords, matcher, clamp }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matcher_name(&self) -> &str {
        self.matcher.name()
    }

    /// Scores `text` as (matches / keyword count) * 10, rounded to 2 decimals.
    ///
    /// The result is only guaranteed to stay within 0-10 when each keyword
    /// occurs at most once, unless clamping is enabled.
    pub fn score(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }

        let lowered = text.to_lowercase();
        let matches = self.matcher.count_matches(&lowered, &self.keywords);
        let raw = matches as f64 / self.keywords.len() as f64 * MAX_SCORE;
        let score = round_to_hundredths(raw);

        tracing::trace!(matches, score, "scored text");

        if self.clamp {
            score.min(MAX_SCORE)
        } else {
            score
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = RiskScorer::default();
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn test_two_keywords_out_of_six() {
        let scorer = RiskScorer::default();
        assert_eq!(scorer.score("strike shortage"), 3.33);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        let scorer = RiskScorer::default();
        assert_eq!(scorer.score("Dock STRIKE, fuel Shortage!"), 3.33);
        assert_eq!(scorer.score("Supply chain news"), 0.0);
    }

    #[test]
    fn test_every_keyword_once_scores_ten() {
        let scorer = RiskScorer::default();
        let text = DEFAULT_KEYWORDS.join(" ");
        assert_eq!(scorer.score(&text), 10.0);
    }

    #[test]
    fn test_scores_stay_in_range_for_single_occurrences() {
        let scorer = RiskScorer::default();
        let texts = [
            "embargo",
            "inflation and protest",
            "a strike causes disruption and shortage",
            "nothing to see here",
        ];
        for text in texts {
            let score = scorer.score(text);
            assert!((0.0..=MAX_SCORE).contains(&score), "{} scored {}", text, score);
            assert_eq!(score, round_to_hundredths(score));
        }
    }

    #[test]
    fn test_repeated_keyword_is_not_clamped_by_default() {
        let scorer = RiskScorer::default();
        let text = "strike ".repeat(12);
        assert_eq!(scorer.score(&text), 20.0);
    }

    #[test]
    fn test_clamping_caps_repeated_keywords() {
        let config = ScoringConfig {
            clamp: true,
            ..ScoringConfig::default()
        };
        let scorer = RiskScorer::new(config).unwrap();
        let text = "strike ".repeat(12);
        assert_eq!(scorer.score(&text), MAX_SCORE);
        assert_eq!(scorer.score("strike"), 1.67);
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        let scorer = RiskScorer::with_matcher(vec![" ".to_string()], Arc::new(TokenMatcher), false);
        assert!(scorer.keywords().is_empty());
        assert_eq!(scorer.score("strike"), 0.0);
    }

    #[test]
    fn test_custom_keywords_are_normalized() {
        let scorer = RiskScorer::with_matcher(
            vec!["Flood ".to_string(), "FIRE".to_string()],
            Arc::new(TokenMatcher),
            false,
        );
        assert_eq!(scorer.keywords(), ["flood", "fire"]);
        assert_eq!(scorer.score("Warehouse fire"), 5.0);
    }

    #[test]
    fn test_substring_matcher_is_pluggable() {
        let config = ScoringConfig {
            matcher: SubstringMatcher::NAME.to_string(),
            ..ScoringConfig::default()
        };
        let scorer = RiskScorer::new(config).unwrap();
        assert_eq!(scorer.matcher_name(), SubstringMatcher::NAME);
        assert_eq!(scorer.score("Strikes spread"), 1.67);
        assert_eq!(RiskScorer::default().score("Strikes spread"), 0.0);
    }

    #[test]
    fn test_unknown_matcher_is_rejected() {
        let config = ScoringConfig {
            matcher: "spacy".to_string(),
            ..ScoringConfig::default()
        };
        assert!(RiskScorer::new(config).is_err());
    }
}
