//! Keyword classification of individual chat messages.
//!
//! Each message gets tag hits for every matching category, plus three
//! scalars: sentiment, at most one action category, and at most one story
//! phase. The scalars are last-match-wins over the lexicon declaration
//! order, which keeps the result reproducible by inspection.

use gmlens_types::{ActionCategory, ChatMessage, StoryPhase};

use crate::config::Lexicons;

/// Ephemeral classification of one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageClassification {
    /// Names of every category whose lexicon matched, in detection order.
    pub tags: Vec<&'static str>,
    pub sentiment: Sentiment,
    /// Last action category (in declaration order) whose lexicon matched.
    pub action: Option<ActionCategory>,
    /// Last story phase (in declaration order) whose lexicon matched.
    pub phase: Option<StoryPhase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn count_hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

/// Classify a single chat message against the configured lexicons.
///
/// Total function: a message with no lexicon hits yields empty tags,
/// neutral sentiment, and no scalars.
pub fn classify_message(message: &ChatMessage, lexicons: &Lexicons) -> MessageClassification {
    let text = message.message.to_lowercase();

    let mut tags = Vec::new();
    let mut phase = None;
    let mut action = None;

    for (candidate, words) in lexicons.story {
        if contains_any(&text, words) {
            tags.push(candidate.as_str());
            phase = Some(*candidate);
        }
    }

    for (candidate, words) in lexicons.action {
        if contains_any(&text, words) {
            tags.push(candidate.as_str());
            action = Some(*candidate);
        }
    }

    let positive_hits = count_hits(&text, lexicons.positive);
    let negative_hits = count_hits(&text, lexicons.negative);
    let sentiment = if positive_hits > negative_hits {
        Sentiment::Positive
    } else if negative_hits > positive_hits {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    if contains_any(&text, lexicons.excitement) {
        tags.push("excitement");
    }
    if contains_any(&text, lexicons.confusion) {
        tags.push("confusion");
    }

    MessageClassification {
        tags,
        sentiment,
        action,
        phase,
    }
}
