//! Character predicates and the base counters that feed the readability formulas.
//!
//! Everything here works on plain `char` classes instead of patterns so each
//! normalization rule can be exercised on its own.

/// Whitespace as understood by the counters: space, tab, newline, vertical tab,
/// form feed and carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Characters that never count as "the character after a terminator".
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn is_trailing_punctuation(c: char) -> bool {
    matches!(c, '.' | '?' | '!' | ':')
}

fn is_e(c: char) -> bool {
    c == 'e' || c == 'E'
}

/// Iterates the whitespace-delimited words of `text`, never yielding empty tokens.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_whitespace).filter(|w| !w.is_empty())
}

pub fn character_count(text: &str) -> usize {
    text.chars().filter(|&c| !is_whitespace(c)).count()
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Approximate sentence count.
///
/// Starts at 1 for the final sentence and adds one for every terminator that is
/// followed by some other character. The following character is consumed, so
/// `"?!"` in the middle of a text is a single boundary. A terminator at the end
/// of the text or right before a line break adds nothing.
pub fn sentence_count(text: &str) -> usize {
    let mut count = 1;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !is_sentence_terminator(c) {
            continue;
        }
        if let Some(&next) = chars.peek() {
            if !is_line_terminator(next) {
                chars.next();
                count += 1;
            }
        }
    }
    count
}

/// Rule 1: drop a single trailing `e`/`E`.
pub fn strip_trailing_e(token: &str) -> &str {
    match token.chars().last() {
        Some(c) if is_e(c) => &token[..token.len() - c.len_utf8()],
        _ => token,
    }
}

/// Rule 2: drop every `e`/`E` sitting right before `.`, `?`, `!` or `:`.
pub fn strip_e_before_punctuation(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        let followed_by_punct = chars.peek().is_some_and(|&n| is_trailing_punctuation(n));
        if is_e(c) && followed_by_punct {
            continue;
        }
        out.push(c);
    }
    out
}

/// Rule 4: keep only the first vowel of every run of consecutive vowels.
pub fn collapse_vowel_runs(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut previous_was_vowel = false;
    for c in token.chars() {
        let vowel = is_vowel(c);
        if !(vowel && previous_was_vowel) {
            out.push(c);
        }
        previous_was_vowel = vowel;
    }
    out
}

/// Applies the four normalization rules, in order, to one word.
pub fn normalize_token(word: &str) -> String {
    let stripped = strip_e_before_punctuation(strip_trailing_e(word));
    collapse_vowel_runs(&stripped.to_lowercase())
}

/// One normalized token per word, in text order.
pub fn syllable_tokens(text: &str) -> Vec<String> {
    words(text).map(normalize_token).collect()
}
