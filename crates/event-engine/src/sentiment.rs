//! Lexicon-based sentiment scoring for event text.
//!
//! Signed sum of matched token polarities over the event's title and
//! description. Deterministic: no normalization by length, no context
//! windows — the score is only a coarse annotation on the report.

use std::collections::HashMap;

/// Positive macro/finance vocabulary with polarity weights.
const POSITIVE: [(&str, f64); 18] = [
    ("beat", 0.7),
    ("beats", 0.7),
    ("growth", 0.5),
    ("expansion", 0.5),
    ("surplus", 0.5),
    ("strong", 0.5),
    ("strength", 0.5),
    ("improved", 0.5),
    ("improvement", 0.5),
    ("rise", 0.4),
    ("rises", 0.4),
    ("gains", 0.4),
    ("rebound", 0.5),
    ("recovery", 0.5),
    ("optimism", 0.6),
    ("upbeat", 0.6),
    ("resilient", 0.5),
    ("record", 0.3),
];

/// Negative macro/finance vocabulary with polarity weights.
const NEGATIVE: [(&str, f64); 18] = [
    ("miss", -0.7),
    ("misses", -0.7),
    ("recession", -0.9),
    ("contraction", -0.6),
    ("deficit", -0.5),
    ("weak", -0.5),
    ("weakness", -0.5),
    ("decline", -0.5),
    ("declines", -0.5),
    ("fall", -0.4),
    ("falls", -0.4),
    ("slump", -0.7),
    ("crisis", -0.9),
    ("layoffs", -0.7),
    ("pessimism", -0.6),
    ("downturn", -0.7),
    ("slowdown", -0.5),
    ("turmoil", -0.8),
];

/// Scores text against the embedded lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        let mut lexicon = HashMap::with_capacity(POSITIVE.len() + NEGATIVE.len());
        for (word, weight) in POSITIVE {
            lexicon.insert(word, weight);
        }
        for (word, weight) in NEGATIVE {
            lexicon.insert(word, weight);
        }
        Self { lexicon }
    }

    /// Signed polarity sum over the lowercased alphanumeric tokens of
    /// `text`. Unmatched text scores 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter_map(|token| self.lexicon.get(token))
            .sum()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_zero() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("Core CPI m/m"), 0.0);
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn test_positive_words_raise_the_score() {
        let scorer = SentimentScorer::new();
        let one = scorer.score("strong growth");
        let two = scorer.score("strong growth and broad recovery optimism");
        assert!(one > 0.0);
        assert!(two > one);
    }

    #[test]
    fn test_negative_words_lower_the_score() {
        let scorer = SentimentScorer::new();
        let one = scorer.score("weak retail data");
        let two = scorer.score("weak data, recession fears and layoffs");
        assert!(one < 0.0);
        assert!(two < one);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = SentimentScorer::new();
        let text = "Unemployment falls as payrolls beat forecasts; growth outlook improved";
        let first = scorer.score(text);
        for _ in 0..10 {
            assert_eq!(scorer.score(text), first);
        }
    }

    #[test]
    fn test_tokenization_ignores_punctuation_and_case() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("GROWTH!"), scorer.score("growth"));
    }
}
