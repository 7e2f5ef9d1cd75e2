//! This module reduces a raw dictionary down to the words that could take
//! part in an anagram of a phrase.
//!
//! The resulting list is sorted ascending by length. The search relies on
//! that ordering: once a candidate is longer than the letters left to cover,
//! every following candidate is too.

use itertools::Itertools;

use crate::{frequency::FrequencyMap, phrase::Phrase, search::SearchConfig};

/// Reasons a dictionary word can be turned away. Only used for reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Rejection {
    LongerThanPhrase,
    OutOfBounds,
    NotAlphabetic,
    LettersMissing,
}

/// Runs a single dictionary word through the filter, giving back the
/// uppercased word if it fits inside the phrase
fn screen_word(
    word: &str,
    phrase_len: usize,
    phrase_map: &FrequencyMap,
    config: &SearchConfig,
) -> Result<String, Rejection> {
    let word_len = word.len();
    if word_len > phrase_len {
        return Err(Rejection::LongerThanPhrase);
    }
    if word_len == 0 || !config.allows_length(word_len) {
        return Err(Rejection::OutOfBounds);
    }

    let upper = word.to_ascii_uppercase();
    if !upper.bytes().all(|c| c.is_ascii_uppercase()) {
        return Err(Rejection::NotAlphabetic);
    }
    if !phrase_map.contains_word(&upper) {
        return Err(Rejection::LettersMissing);
    }
    Ok(upper)
}

/// Produces the candidate list for `phrase` out of a raw dictionary.
///
/// A word is kept when it is no longer than the phrase, its length is within
/// the bounds of `config`, it only holds letters once uppercased and each of
/// its letters is available in the phrase. Malformed entries are dropped
/// silently. The survivors are sorted by length, words of equal length keep
/// their dictionary order.
///
/// ```rust
/// use anagram_search_rs::{candidates::candidates, phrase::Phrase, search::SearchConfig};
///
/// let phrase = Phrase::sanitize("carro");
/// let dictionary = ["roar", "car", "x-ray", "carrot", "or"];
///
/// let found = candidates(dictionary, &phrase, &SearchConfig::default());
/// assert!(found == ["OR", "CAR", "ROAR"]);
/// ```
pub fn candidates<I, S>(dictionary: I, phrase: &Phrase, config: &SearchConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let phrase_map = phrase.frequency();
    let phrase_len = phrase.len();

    let (kept, rejected): (Vec<String>, Vec<Rejection>) = dictionary
        .into_iter()
        .map(|word| screen_word(word.as_ref(), phrase_len, &phrase_map, config))
        .partition_result();

    if log::log_enabled!(log::Level::Debug) {
        rejected
            .iter()
            .counts()
            .into_iter()
            .sorted_by_key(|(reason, _)| format!("{reason:?}"))
            .for_each(|(reason, count)| log::debug!("Rejected {count} words: {reason:?}"));
    }
    log::debug!("Kept {} candidate words for {phrase}", kept.len());

    kept.into_iter().sorted_by_key(String::len).collect()
}
