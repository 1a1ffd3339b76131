//! Lexicon scorer for local-business reviews and social mentions.

/// Word weights. Keys are lowercase single words; positive weights in
/// `(0.0, 1.0]`, negative in `[-1.0, 0.0)`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("friendly", 0.4),
    ("helpful", 0.4),
    ("professional", 0.4),
    ("clean", 0.3),
    ("fast", 0.3),
    ("quick", 0.3),
    ("fair", 0.3),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("recommend", 0.4),
    ("delicious", 0.4),
    ("spotless", 0.4),
    ("reliable", 0.4),
    ("perfect", 0.5),
    ("thanks", 0.2),
    // Negative
    ("rude", -0.6),
    ("dirty", -0.5),
    ("filthy", -0.6),
    ("slow", -0.4),
    ("late", -0.4),
    ("overpriced", -0.5),
    ("expensive", -0.3),
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("disappointed", -0.4),
    ("disappointing", -0.4),
    ("never", -0.2),
    ("cold", -0.3),
    ("broken", -0.4),
    ("scam", -0.7),
    ("refund", -0.3),
    ("complaint", -0.3),
    ("waited", -0.3),
];

/// Score text against the lexicon.
///
/// Splits on whitespace, strips punctuation, sums matching weights and
/// clamps to `[-1.0, 1.0]`. Unknown or empty text scores `0.0`.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex, _)| *lex == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert!(lexicon_score("").abs() < f32::EPSILON);
        assert!(lexicon_score("   ").abs() < f32::EPSILON);
    }

    #[test]
    fn positive_review_scores_above_zero() {
        assert!(lexicon_score("Friendly staff, spotless bays. Highly recommend!") > 0.0);
    }

    #[test]
    fn negative_review_scores_below_zero() {
        assert!(lexicon_score("Rude host and we waited forever. Overpriced.") < 0.0);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let a = lexicon_score("GREAT!!!");
        let b = lexicon_score("great");
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    fn score_is_clamped() {
        let gushing = "amazing ".repeat(10);
        assert!((lexicon_score(&gushing) - 1.0).abs() < f32::EPSILON);
        let furious = "worst ".repeat(10);
        assert!((lexicon_score(&furious) + 1.0).abs() < f32::EPSILON);
    }
}
