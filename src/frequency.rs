//! This module contains the letter frequency model used by every other part of
//! the search.
//!
//! A [`FrequencyMap`] is a multiset of the letters `A` to `Z` stored as 26
//! fixed counters. Every operation the search performs on its hot path
//! (subset tests, subtraction, emptiness) is a walk over those 26 slots with
//! no allocation.

use std::fmt::Display;

use itertools::Itertools;

/// Number of letters supported by the model
pub const ALPHABET_LEN: usize = 26;

/// Tally of how many times each letter `A..=Z` appears in a word or phrase.
///
/// Slot `0` holds the count of `A`, slot `25` the count of `Z`. Counts are
/// signed so that [`FrequencyMap::subtract`] can report over-consumption
/// instead of wrapping around.
///
/// ```rust
/// use anagram_search_rs::frequency::FrequencyMap;
///
/// let banana = FrequencyMap::build("BANANA");
/// let remaining = banana.subtract(["ANA"]);
///
/// assert!(remaining == FrequencyMap::build("BAN"));
/// assert!(remaining.total() == 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrequencyMap {
    counts: [i32; ALPHABET_LEN],
}

/// Gives the slot of an uppercase letter. Anything outside `A..=Z` has no slot
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter - b'A') as usize)
}

impl FrequencyMap {
    /// Tallies the letters of a word.
    ///
    /// Words are expected to hold only `A..=Z`. Any other byte is skipped
    /// rather than counted.
    pub fn build(word: &str) -> Self {
        let mut map = Self::default();
        map.add_word(word);
        map
    }

    /// Adds every letter of `word` to the tally
    fn add_word(&mut self, word: &str) {
        word.bytes()
            .filter_map(slot)
            .for_each(|idx| self.counts[idx] += 1);
    }

    /// Provides the count of a single letter. Non `A..=Z` letters always give 0
    pub fn count(&self, letter: char) -> i32 {
        u8::try_from(letter)
            .ok()
            .and_then(slot)
            .map_or(0, |idx| self.counts[idx])
    }

    /// Returns true if every letter `word` needs is available in this map in
    /// sufficient quantity
    pub fn contains_word(&self, word: &str) -> bool {
        self.is_superset_of(&Self::build(word))
    }

    /// Returns true if every count of `other` is less than or equal to the
    /// matching count in `self`
    pub fn is_superset_of(&self, other: &FrequencyMap) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| need <= have)
    }

    /// Builds the combined tally of `words` and subtracts it from this map.
    ///
    /// If the words use more of a letter than the map holds, that slot goes
    /// negative.
    pub fn subtract<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut used = Self::default();
        words
            .into_iter()
            .for_each(|word| used.add_word(word.as_ref()));

        let mut remaining = *self;
        remaining
            .counts
            .iter_mut()
            .zip(used.counts.iter())
            .for_each(|(have, spent)| *have -= spent);
        remaining
    }

    /// Sum of all the letter counts, which is the length of the multiset
    pub fn total(&self) -> i32 {
        self.counts.iter().sum()
    }

    /// Determines if the map has no letters left
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }
}

impl From<&str> for FrequencyMap {
    fn from(value: &str) -> Self {
        FrequencyMap::build(value)
    }
}

/// Lists the letters with a non zero count, such as `A2 B1 N3`
impl Display for FrequencyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listing = self
            .counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count != 0)
            .map(|(idx, count)| format!("{}{count}", (b'A' + idx as u8) as char))
            .join(" ");
        write!(f, "{listing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Ensures that building a map counts repeated letters
    fn test_build_counts_letters() {
        let map = FrequencyMap::build("BANANA");
        assert!(map.count('A') == 3);
        assert!(map.count('N') == 2);
        assert!(map.count('B') == 1);
        assert!(map.count('Z') == 0);
        assert!(map.total() == 6);
    }

    #[test]
    /// Bytes outside of `A..=Z` should be ignored instead of panicking
    fn test_build_skips_foreign_bytes() {
        let map = FrequencyMap::build("a-B é");
        assert!(map == FrequencyMap::build("B"), "Got {map}");
        assert!(map.count('a') == 0);
    }

    #[test]
    /// A word fits only when every letter is available in enough quantity
    fn test_contains_word() {
        let phrase = FrequencyMap::build("CARRO");
        assert!(phrase.contains_word("CAR"));
        assert!(phrase.contains_word("ROAR"));
        assert!(phrase.contains_word("CARRO"));
        assert!(!phrase.contains_word("CARROT"));
        assert!(!phrase.contains_word("ARCA"), "Only one A is available");
        assert!(phrase.contains_word(""));
    }

    #[test]
    /// Subtracting several words should remove the combined tally
    fn test_subtract_words() {
        let phrase = FrequencyMap::build("MARCOPAGANINIAB");
        let remaining = phrase.subtract(["MARCO", "PAGAN"]);

        assert!(remaining == FrequencyMap::build("ABINI"), "Got {remaining}");
        assert!(remaining.total() == 5);
        assert!(phrase.subtract(Vec::<String>::new()) == phrase);
    }

    #[test]
    /// Over consuming a letter gives a negative count rather than wrapping
    fn test_subtract_over_consumption() {
        let remaining = FrequencyMap::build("CAR").subtract(["CARR"]);
        assert!(remaining.count('R') == -1);
        assert!(!remaining.is_empty());
        assert!(remaining.total() == -1);
    }

    #[test]
    /// Only a map with every count at zero is empty
    fn test_is_empty() {
        assert!(FrequencyMap::default().is_empty());
        assert!(FrequencyMap::build("").is_empty());
        assert!(!FrequencyMap::build("A").is_empty());
        assert!(FrequencyMap::build("ROAR").subtract(["OR", "AR"]).is_empty());
    }

    #[test]
    /// Ensures the display listing only shows letters that are present
    fn test_display() {
        let map = FrequencyMap::build("BANANA");
        assert!(
            map.to_string() == "A3 B1 N2",
            "The created string [{map}] does not match [A3 B1 N2]"
        );
    }
}
