use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, Result};
use crate::syllables;
use crate::tokenizer;

/// Base counts extracted from a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub polysyllable_count: usize,
}

impl TextStatistics {
    pub fn characters(&self) -> f64 {
        self.character_count as f64
    }

    pub fn words(&self) -> f64 {
        self.word_count as f64
    }

    pub fn sentences(&self) -> f64 {
        self.sentence_count as f64
    }

    pub fn syllables(&self) -> f64 {
        self.syllable_count as f64
    }

    pub fn polysyllables(&self) -> f64 {
        self.polysyllable_count as f64
    }
}

/// Extracts the base counts of `text`.
///
/// Fails with [`ReadabilityError::InvalidInput`] when the text has no words,
/// since every formula divides by the word count. The sentence count is at
/// least 1 by construction, so text without any terminator is accepted.
pub fn compute_statistics(text: &str) -> Result<TextStatistics> {
    let word_count = tokenizer::word_count(text);
    if word_count == 0 {
        return Err(ReadabilityError::InvalidInput(
            "text must contain at least one word".to_string(),
        ));
    }

    let tokens = tokenizer::syllable_tokens(text);
    let stats = TextStatistics {
        character_count: tokenizer::character_count(text),
        word_count,
        sentence_count: tokenizer::sentence_count(text),
        syllable_count: syllables::total_syllables(&tokens),
        polysyllable_count: syllables::polysyllable_count(&tokens),
    };
    debug!("Computed text statistics: {:?}", stats);
    Ok(stats)
}
