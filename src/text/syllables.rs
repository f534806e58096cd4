//! Heuristic syllable counting.
//!
//! Syllables are approximated by vowel nuclei rather than real
//! syllabification. The script of a word is decided by its first letter:
//! Cyrillic words use the Russian vowel set, everything else the English one.

const CYRILLIC_VOWELS: &[char] = &['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];
const LATIN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Letters that lower the count by one when they end a Cyrillic word.
const CYRILLIC_SILENT_ENDINGS: &[char] = &['ь', 'й'];

/// Writing system a word is treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
    Latin,
}

impl Script {
    /// Classify a word by its first code point.
    ///
    /// Anything outside the Cyrillic blocks (U+0400..=U+052F) is Latin,
    /// including digits and the empty string.
    pub fn detect(word: &str) -> Self {
        match word.chars().next() {
            Some(c) if ('\u{0400}'..='\u{052F}').contains(&c) => Script::Cyrillic,
            _ => Script::Latin,
        }
    }

    /// Lowercase vowel letters of this script.
    pub fn vowels(self) -> &'static [char] {
        match self {
            Script::Cyrillic => CYRILLIC_VOWELS,
            Script::Latin => LATIN_VOWELS,
        }
    }

    /// Whether adjacent vowels merge into one nucleus.
    ///
    /// English spelling uses vowel digraphs (`ea`, `ou`); Russian does not,
    /// every vowel letter is pronounced as its own syllable.
    fn merges_adjacent_vowels(self) -> bool {
        matches!(self, Script::Latin)
    }

    fn is_vowel(self, c: char) -> bool {
        self.vowels().contains(&c)
    }
}

/// Estimate the number of syllables in a single word.
///
/// Returns 0 for the empty string and at least 1 for any other input.
/// Case-insensitive.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let lowered = word.to_lowercase();
    let script = Script::detect(&lowered);

    let mut count = 0usize;
    let mut prev_is_vowel = false;
    for c in lowered.chars() {
        let is_vowel = script.is_vowel(c);
        if is_vowel && !(prev_is_vowel && script.merges_adjacent_vowels()) {
            count += 1;
        }
        prev_is_vowel = is_vowel;
    }

    if script == Script::Cyrillic && lowered.ends_with(CYRILLIC_SILENT_ENDINGS) {
        count = count.saturating_sub(1);
    }

    count.max(1)
}
