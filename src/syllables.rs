use crate::tokenizer::is_vowel;

/// Tokens with more syllables than this are polysyllables.
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

/// Estimated syllables of one normalized token: its vowel count, but never less than 1.
pub fn syllables_in(token: &str) -> usize {
    token.chars().filter(|&c| is_vowel(c)).count().max(1)
}

pub fn total_syllables<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens.iter().map(|t| syllables_in(t.as_ref())).sum()
}

pub fn polysyllable_count<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .filter(|t| syllables_in(t.as_ref()) > POLYSYLLABLE_THRESHOLD)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables_in_floors_at_one() {
        assert_eq!(syllables_in("th"), 1);
        assert_eq!(syllables_in("."), 1);
        assert_eq!(syllables_in(""), 1);
        assert_eq!(syllables_in("cat"), 1);
        assert_eq!(syllables_in("betiful"), 3);
        assert_eq!(syllables_in("rhythm"), 1);
    }

    #[test]
    fn test_totals_over_tokens() {
        let tokens = ["th", "cat", "sat."];
        assert_eq!(total_syllables(&tokens), 3);
        assert_eq!(polysyllable_count(&tokens), 0);

        let tokens = vec!["betiful".to_string(), "readability".to_string(), "go".to_string()];
        // "readability" is not collapsed here: r-e-a-d-a-b-i-l-i-t-y has 6 vowels.
        assert_eq!(total_syllables(&tokens), 3 + 6 + 1);
        assert_eq!(polysyllable_count(&tokens), 2);
    }

    #[test]
    fn test_empty_token_list() {
        let tokens: [&str; 0] = [];
        assert_eq!(total_syllables(&tokens), 0);
        assert_eq!(polysyllable_count(&tokens), 0);
    }
}
