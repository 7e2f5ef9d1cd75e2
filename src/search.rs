//! This module implements the anagram search itself.
//!
//! The search is a bounded depth first walk over the candidate list. Each
//! branch owns the words it has picked so far (its base) and works out which
//! letters of the phrase are still uncovered. A branch ends when nothing is
//! left to cover (an anagram), when it used up its word budget, or when no
//! remaining candidate is short enough to fit.
//!
//! Candidates are only ever picked after the previous pick, so each
//! combination of words is produced once instead of once per permutation.

use std::{
    fmt::Display,
    ops::AddAssign,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use itertools::Itertools;
use thiserror::Error;

use crate::{candidates::candidates, frequency::FrequencyMap, phrase::Phrase};

/// How many candidates are looked at between two polls of the
/// [`CancelToken`]
const CANCEL_POLL_INTERVAL: u64 = 256;

/// Errors for bounds that can never produce a meaningful search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum word length must be at least 1")]
    ZeroMinimumLength,
    #[error("minimum word length {min} is larger than the maximum {max}")]
    InvertedLengths { min: usize, max: usize },
}

/// Bounds applied to the words of an anagram
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest word allowed in an anagram
    pub min_word_len: usize,
    /// Longest word allowed in an anagram
    pub max_word_len: usize,
    /// Most words allowed in an anagram. [`None`] places no limit
    pub max_words: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_len: 1,
            max_word_len: 64,
            max_words: Some(16),
        }
    }
}

impl SearchConfig {
    pub fn new(min_word_len: usize, max_word_len: usize, max_words: Option<usize>) -> Self {
        Self {
            min_word_len,
            max_word_len,
            max_words,
        }
    }

    /// Checks that the bounds describe at least one usable word length
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.min_word_len, self.max_word_len) {
            (0, _) => Err(ConfigError::ZeroMinimumLength),
            (min, max) if min > max => Err(ConfigError::InvertedLengths { min, max }),
            _ => Ok(()),
        }
    }

    /// Determines if a word of `len` letters is within the length bounds
    pub fn allows_length(&self, len: usize) -> bool {
        (self.min_word_len..=self.max_word_len).contains(&len)
    }

    /// Determines if a branch holding `depth` words may still take another
    fn allows_more_words(&self, depth: usize) -> bool {
        self.max_words.is_none_or(|max| depth < max)
    }
}

/// Shared signal used to stop a running search early.
///
/// Clones of a token share the same flag, so one can be handed to another
/// thread and cancelled from there. A token can also carry a deadline after
/// which it counts as cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that cancels itself once `timeout` has elapsed
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Default::default(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Determines if the search should stop, either because [`cancel`] was
    /// called or the deadline passed
    ///
    /// [`cancel`]: CancelToken::cancel
    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }
}

/// Counters collected while walking the search tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of branches entered, the root included
    pub branches: u64,
    /// Number of candidates tested for fitting inside the remaining letters
    pub subset_checks: u64,
    /// Number of candidate scans stopped because the next candidate was
    /// longer than the remaining letters
    pub length_prunes: u64,
    /// Number of branches abandoned for having used up the word budget
    pub depth_prunes: u64,
    /// Number of anagrams found
    pub anagrams: u64,
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, rhs: Self) {
        self.branches += rhs.branches;
        self.subset_checks += rhs.subset_checks;
        self.length_prunes += rhs.length_prunes;
        self.depth_prunes += rhs.depth_prunes;
        self.anagrams += rhs.anagrams;
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "branches: {}, subset checks: {}, length prunes: {}, depth prunes: {}, anagrams: {}",
            self.branches, self.subset_checks, self.length_prunes, self.depth_prunes, self.anagrams
        )
    }
}

/// A combination of words whose letters are exactly the letters of the phrase.
///
/// Words are kept in the order the search picked them, which is ascending by
/// length. Displays as the words separated by single spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anagram {
    words: Vec<String>,
}

impl Anagram {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Combined tally of every word in the anagram
    pub fn frequency(&self) -> FrequencyMap {
        FrequencyMap::build(&self.words.concat())
    }

    /// Reorders the words alphabetically
    pub fn sort_words(&mut self) {
        self.words.sort_unstable();
    }
}

impl<S: AsRef<str>> From<&[S]> for Anagram {
    fn from(value: &[S]) -> Self {
        Self {
            words: value.iter().map(|word| word.as_ref().to_owned()).collect(),
        }
    }
}

impl Display for Anagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.iter().join(" "))
    }
}

/// Everything produced by a finished or cancelled search
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    /// Every anagram found, in no particular order
    pub anagrams: Vec<Anagram>,
    pub statistics: Statistics,
    /// False when the search was cancelled before covering the whole tree
    pub completed: bool,
}

/// Depth first search over an ordered candidate list.
///
/// The candidates must be sorted ascending by length, which is what
/// [`candidates`] produces. Each branch copies its base before extending it,
/// so sibling branches never see each other's words.
///
/// ```rust
/// use anagram_search_rs::{
///     candidates::candidates,
///     phrase::Phrase,
///     search::{AnagramSearch, CancelToken, SearchConfig},
/// };
///
/// let phrase = Phrase::sanitize("roar");
/// let config = SearchConfig::default();
/// let words = candidates(["or", "ar", "roar", "rr", "oa"], &phrase, &config);
///
/// let outcome = AnagramSearch::new(&phrase, &words, &config, &CancelToken::new()).run();
/// let mut lines: Vec<String> = outcome.anagrams.iter().map(ToString::to_string).collect();
/// lines.sort();
///
/// assert!(lines == ["OR AR", "ROAR", "RR OA"]);
/// assert!(outcome.completed);
/// ```
pub struct AnagramSearch<'a> {
    phrase_map: FrequencyMap,
    candidates: &'a [String],
    config: &'a SearchConfig,
    cancel: &'a CancelToken,
    statistics: Statistics,
    ticks: u64,
    interrupted: bool,
}

impl<'a> AnagramSearch<'a> {
    pub fn new(
        phrase: &Phrase,
        candidates: &'a [String],
        config: &'a SearchConfig,
        cancel: &'a CancelToken,
    ) -> Self {
        Self::from_map(phrase.frequency(), candidates, config, cancel)
    }

    pub(crate) fn from_map(
        phrase_map: FrequencyMap,
        candidates: &'a [String],
        config: &'a SearchConfig,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            phrase_map,
            candidates,
            config,
            cancel,
            statistics: Statistics::default(),
            ticks: 0,
            interrupted: false,
        }
    }

    /// Walks the whole tree starting from an empty base.
    ///
    /// A phrase without letters gives no anagram. The empty combination is
    /// never reported as a match.
    pub fn run(mut self) -> SearchOutcome {
        if self.phrase_map.is_empty() {
            log::warn!("Phrase has no letters to anagram");
            return SearchOutcome {
                completed: true,
                ..Default::default()
            };
        }

        let candidates = self.candidates;
        let anagrams = self.descend(candidates, &[], 0);
        if self.interrupted {
            log::warn!("Search cancelled after {} anagrams", anagrams.len());
        }
        self.into_outcome(anagrams)
    }

    pub(crate) fn into_outcome(self, anagrams: Vec<Anagram>) -> SearchOutcome {
        SearchOutcome {
            anagrams,
            statistics: self.statistics,
            completed: !self.interrupted,
        }
    }

    /// Polls the cancel token every [`CANCEL_POLL_INTERVAL`] candidates
    fn should_stop(&mut self) -> bool {
        if !self.interrupted && self.ticks % CANCEL_POLL_INTERVAL == 0 {
            self.interrupted = self.cancel.is_cancelled();
        }
        self.ticks += 1;
        self.interrupted
    }

    /// Explores every extension of `base` using words from `sublist`, which
    /// only holds candidates after the last word of `base`
    pub(crate) fn descend(
        &mut self,
        sublist: &'a [String],
        base: &[&'a str],
        depth: usize,
    ) -> Vec<Anagram> {
        self.statistics.branches += 1;

        let remaining = self.phrase_map.subtract(base);
        if remaining.is_empty() {
            log::trace!("Found anagram {base:?}");
            self.statistics.anagrams += 1;
            return vec![Anagram::from(base)];
        }
        if !self.config.allows_more_words(depth) {
            self.statistics.depth_prunes += 1;
            return Vec::new();
        }

        let letters_left = usize::try_from(remaining.total()).unwrap_or_default();
        let mut found = Vec::new();
        for (idx, word) in sublist.iter().enumerate() {
            if self.should_stop() {
                break;
            }
            // Sorted by length, nothing after this can fit either
            if word.len() > letters_left {
                self.statistics.length_prunes += 1;
                break;
            }
            self.statistics.subset_checks += 1;
            if !remaining.contains_word(word) {
                continue;
            }

            let next_base = base
                .iter()
                .copied()
                .chain(std::iter::once(word.as_str()))
                .collect_vec();
            found.extend(self.descend(&sublist[idx + 1..], &next_base, depth + 1));
        }
        found
    }
}

/// Filters `dictionary` down to candidates and searches them for every
/// anagram of `phrase`, without any way to cancel
pub fn find_anagrams<I, S>(phrase: &Phrase, dictionary: I, config: &SearchConfig) -> Vec<Anagram>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = candidates(dictionary, phrase, config);
    AnagramSearch::new(phrase, &words, config, &CancelToken::new())
        .run()
        .anagrams
}

/// Parallel version of the search using the rayon library.
///
/// Every first level candidate roots an independent subtree, so each one is
/// searched as its own task. Results are concatenated and statistics summed,
/// giving the same anagrams and counters as [`AnagramSearch::run`].
#[cfg(feature = "rayon")]
pub mod rayon {
    use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

    use super::{AnagramSearch, CancelToken, SearchConfig, SearchOutcome, Statistics};
    use crate::phrase::Phrase;

    /// Searches `candidates` for every anagram of `phrase`, spreading the
    /// first level subtrees over the rayon thread pool
    pub fn par_search(
        phrase: &Phrase,
        candidates: &[String],
        config: &SearchConfig,
        cancel: &CancelToken,
    ) -> SearchOutcome {
        let phrase_map = phrase.frequency();
        if phrase_map.is_empty() {
            log::warn!("Phrase has no letters to anagram");
            return SearchOutcome {
                completed: true,
                ..Default::default()
            };
        }

        let mut root = Statistics {
            branches: 1,
            ..Default::default()
        };
        if !config.allows_more_words(0) {
            root.depth_prunes += 1;
            return SearchOutcome {
                statistics: root,
                completed: true,
                ..Default::default()
            };
        }

        // Sorted by length, only this prefix can start an anagram
        let reachable = candidates.partition_point(|word| word.len() <= phrase.len());
        if reachable < candidates.len() {
            root.length_prunes += 1;
        }

        let mut outcome = candidates[..reachable]
            .par_iter()
            .enumerate()
            .map(|(idx, word)| {
                let mut search = AnagramSearch::from_map(phrase_map, candidates, config, cancel);
                if search.should_stop() {
                    return search.into_outcome(Vec::new());
                }
                search.statistics.subset_checks += 1;
                let found = if phrase_map.contains_word(word) {
                    search.descend(&candidates[idx + 1..], &[word.as_str()], 1)
                } else {
                    Vec::new()
                };
                search.into_outcome(found)
            })
            .reduce(
                || SearchOutcome {
                    completed: true,
                    ..Default::default()
                },
                |mut merged, part| {
                    merged.anagrams.extend(part.anagrams);
                    merged.statistics += part.statistics;
                    merged.completed &= part.completed;
                    merged
                },
            );

        outcome.statistics += root;
        if !outcome.completed {
            log::warn!("Search cancelled after {} anagrams", outcome.anagrams.len());
        }
        outcome
    }
}
