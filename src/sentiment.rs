//! Rule-based sentiment scoring
//!
//! Produces a compound polarity score in `[-1, 1]` from a small valence
//! lexicon plus a handful of heuristics:
//! - booster and dampener words scale the next sentiment word
//! - negations in the three preceding words flip it
//! - ALL-CAPS words in mixed-case text are emphasized
//! - "but" shifts weight to the clause after it
//! - exclamation and repeated question marks amplify the total

use crate::types::SentimentScore;
use std::collections::HashMap;

/// Scores the polarity of a piece of text
pub trait SentimentAnalyzer {
    fn score(&self, text: &str) -> SentimentScore;
}

const BOOST_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Word valences on a -4..+4 scale
const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("appreciate", 1.7),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("cool", 1.3),
    ("delighted", 3.2),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("interested", 1.7),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("perfect", 2.7),
    ("please", 1.3),
    ("pleased", 1.9),
    ("reasonable", 1.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("want", 0.3),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yes", 1.7),
    // Negative
    ("absurd", -1.9),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("cheat", -2.0),
    ("crazy", -1.4),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("expensive", -1.0),
    ("frustrated", -2.0),
    ("greedy", -1.3),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("insane", -1.7),
    ("insulting", -2.2),
    ("joke", -0.6),
    ("lousy", -2.5),
    ("mad", -2.2),
    ("overpriced", -1.5),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("ridiculous", -1.5),
    ("ripoff", -2.0),
    ("robbery", -2.6),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.9),
    ("steep", -0.6),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "especially",
    "exceptionally",
    "extremely",
    "highly",
    "hugely",
    "incredibly",
    "most",
    "really",
    "remarkably",
    "so",
    "super",
    "totally",
    "truly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "barely",
    "hardly",
    "kinda",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "neither", "never", "no",
    "nobody", "none", "nor", "not", "nothing", "nowhere", "wasnt", "without", "wont",
];

/// Lexicon and rule based analyzer
#[derive(Clone, Debug)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl LexiconAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Valence of a single lowercase word, if known
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }

    fn booster_scalar(word: &str) -> Option<f64> {
        if BOOSTERS.contains(&word) {
            Some(BOOST_INCREMENT)
        } else if DAMPENERS.contains(&word) {
            Some(-BOOST_INCREMENT)
        } else {
            None
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word) || word.ends_with("n't")
    }

    /// Raw sum of word valences before punctuation emphasis and normalization
    fn sum_valence(&self, words: &[Word]) -> f64 {
        let cap_differential = has_cap_differential(words);
        let mut valences = vec![0.0; words.len()];

        for (i, word) in words.iter().enumerate() {
            if Self::booster_scalar(&word.lower).is_some() {
                continue;
            }

            let Some(mut valence) = self.valence(&word.lower) else {
                continue;
            };

            if cap_differential && word.is_shouting {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for distance in 1..=3 {
                let Some(prev) = i.checked_sub(distance).map(|j| &words[j]) else {
                    break;
                };

                if let Some(mut scalar) = Self::booster_scalar(&prev.lower) {
                    if cap_differential && prev.is_shouting {
                        scalar += CAPS_INCREMENT.copysign(scalar);
                    }
                    // Boosters further away count less
                    let decay = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    if valence < 0.0 {
                        scalar = -scalar;
                    }
                    valence += scalar * decay;
                }

                if Self::is_negation(&prev.lower) {
                    valence *= NEGATION_SCALAR;
                    break;
                }
            }

            valences[i] = valence;
        }

        if let Some(but_index) = words.iter().position(|w| w.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_index {
                    *valence *= 0.5;
                } else if i > but_index {
                    *valence *= 1.5;
                }
            }
        }

        valences.iter().sum()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn score(&self, text: &str) -> SentimentScore {
        let words = tokenize(text);
        let mut sum = self.sum_valence(&words);

        if sum == 0.0 {
            return SentimentScore::NEUTRAL;
        }

        let emphasis = punctuation_emphasis(text);
        sum += emphasis.copysign(sum);

        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        SentimentScore::new(compound)
    }
}

/// A token with its lowercase form and shouting flag
#[derive(Debug)]
struct Word {
    lower: String,
    is_shouting: bool,
}

fn tokenize(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|token| !token.is_empty())
        .map(|token| Word {
            lower: token.to_lowercase(),
            is_shouting: token.chars().count() > 1
                && token.chars().any(char::is_alphabetic)
                && !token.chars().any(char::is_lowercase),
        })
        .collect()
}

/// True when some but not all words are in caps
fn has_cap_differential(words: &[Word]) -> bool {
    let shouting = words.iter().filter(|w| w.is_shouting).count();
    shouting > 0 && shouting < words.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    fn score(text: &str) -> f64 {
        LexiconAnalyzer::new().score(text).value()
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("What is the price of this lamp"), 0.0);
        assert_eq!(score("   "), 0.0);
    }

    #[test]
    fn test_polarity() {
        assert!(score("This is a good deal") > 0.0);
        assert!(score("That price is bad") < 0.0);
    }

    #[test]
    fn test_single_word_compound() {
        // 3.1 / sqrt(3.1^2 + 15)
        let expected = 3.1 / (3.1f64 * 3.1 + 15.0).sqrt();
        assert!((score("great") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mood_classification() {
        let analyzer = LexiconAnalyzer::new();

        assert_eq!(
            analyzer.score("I love this, it is a great price").mood(),
            Mood::Positive
        );
        assert_eq!(
            analyzer.score("This price is terrible and awful").mood(),
            Mood::Negative
        );
        assert_eq!(analyzer.score("Let's talk about the price").mood(), Mood::Neutral);
    }

    #[test]
    fn test_negation_flips_sign() {
        assert!(score("good") > 0.0);
        assert!(score("not good") < 0.0);
        assert!(score("this isn't good") < 0.0);
        assert!(score("I don't hate it") > 0.0);
    }

    #[test]
    fn test_boosters_and_dampeners() {
        assert!(score("very good") > score("good"));
        assert!(score("very bad") < score("bad"));
        assert!(score("slightly good") < score("good"));
        assert!(score("slightly good") > 0.0);
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(score("this is GREAT value") > score("this is great value"));
        // All caps text has no differential
        assert_eq!(score("GREAT"), score("great"));
    }

    #[test]
    fn test_but_shifts_weight() {
        // Positive first clause, negative second clause dominates
        assert!(score("the lamp is nice but the price is terrible") < 0.0);
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(score("good!") > score("good"));
        assert!(score("good!!!!!!!!") == score("good!!!!"));
        assert!(score("bad??") < score("bad?"));
        assert_eq!(score("price?!!"), 0.0);
    }

    #[test]
    fn test_score_bounds() {
        let text = "AMAZING amazing wonderful best love love love great perfect!!!!";
        let value = score(text);
        assert!(value <= 1.0 && value > 0.9);

        let text = "worst scam robbery pathetic hate hate horrible awful";
        let value = score(text);
        assert!(value >= -1.0 && value < -0.9);
    }
}
