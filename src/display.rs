//! This module arranges search results for printing. None of it affects what
//! the search finds, only the order and amount of lines shown.

use itertools::Itertools;

use crate::search::Anagram;

/// Controls how anagrams are turned into output lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Sorts the words inside each line alphabetically
    pub sort_words: bool,
    /// Sorts the lines themselves alphabetically
    pub sort_lines: bool,
    /// Most lines to produce. [`None`] shows everything
    pub limit: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            sort_words: true,
            sort_lines: false,
            limit: None,
        }
    }
}

/// Turns anagrams into the lines that get printed, applying the sorting and
/// limit of `options`.
///
/// The limit is applied last, so with `sort_lines` set the first lines in
/// sorted order are kept.
///
/// ```rust
/// use anagram_search_rs::{
///     display::{DisplayOptions, arrange},
///     phrase::Phrase,
///     search::{SearchConfig, find_anagrams},
/// };
///
/// let phrase = Phrase::sanitize("carro");
/// let anagrams = find_anagrams(&phrase, ["or", "car", "carro"], &SearchConfig::default());
/// let options = DisplayOptions { sort_lines: true, ..Default::default() };
///
/// assert!(arrange(anagrams, &options) == ["CAR OR", "CARRO"]);
/// ```
pub fn arrange(anagrams: Vec<Anagram>, options: &DisplayOptions) -> Vec<String> {
    let lines = anagrams.into_iter().map(|mut anagram| {
        if options.sort_words {
            anagram.sort_words();
        }
        anagram.to_string()
    });

    let lines = if options.sort_lines {
        lines.sorted().collect_vec()
    } else {
        lines.collect_vec()
    };

    match options.limit {
        Some(limit) => lines.into_iter().take(limit).collect(),
        None => lines,
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use super::*;

    lazy_static! {
        /// Anagrams in the order a search on "ROAR" could produce them
        static ref ANAGRAMS: Vec<Anagram> = vec![
            Anagram::from(["RR", "OA"].as_slice()),
            Anagram::from(["ROAR"].as_slice()),
            Anagram::from(["OR", "AR"].as_slice()),
        ];
    }

    #[test]
    /// Words are sorted inside each line by default while lines keep the
    /// search order
    fn test_arrange_default() {
        let lines = arrange(ANAGRAMS.clone(), &DisplayOptions::default());
        assert!(lines == ["OA RR", "ROAR", "AR OR"], "Got {lines:?}");
    }

    #[test]
    /// Ensures both sorts can be applied together
    fn test_arrange_sorted_lines() {
        let options = DisplayOptions {
            sort_lines: true,
            ..Default::default()
        };
        let lines = arrange(ANAGRAMS.clone(), &options);
        assert!(lines == ["AR OR", "OA RR", "ROAR"], "Got {lines:?}");
    }

    #[test]
    /// Leaves everything in search order when no sorting is asked for
    fn test_arrange_unsorted() {
        let options = DisplayOptions {
            sort_words: false,
            sort_lines: false,
            limit: None,
        };
        let lines = arrange(ANAGRAMS.clone(), &options);
        assert!(lines == ["RR OA", "ROAR", "OR AR"], "Got {lines:?}");
    }

    #[test]
    /// The limit applies after sorting
    fn test_arrange_limit() {
        let options = DisplayOptions {
            sort_words: true,
            sort_lines: true,
            limit: Some(2),
        };
        let lines = arrange(ANAGRAMS.clone(), &options);
        assert!(lines == ["AR OR", "OA RR"], "Got {lines:?}");

        let options = DisplayOptions {
            limit: Some(0),
            ..options
        };
        assert!(arrange(ANAGRAMS.clone(), &options).is_empty());
    }
}
