#![forbid(unsafe_code)]
//! Finds every combination of dictionary words whose letters, taken together,
//! are exactly the letters of a phrase.
//!
//! The work happens in three steps:
//!
//! 1. [`Phrase::sanitize`] reduces the input to the letters `A..=Z`
//! 2. [`candidates`] keeps only the dictionary words that fit inside the
//!    phrase, sorted by length
//! 3. [`AnagramSearch`] walks every combination of candidates that covers
//!    the phrase letter for letter
//!
//! [`Phrase::sanitize`]: phrase::Phrase::sanitize
//! [`candidates`]: candidates::candidates
//! [`AnagramSearch`]: search::AnagramSearch

pub mod candidates;
pub mod dictionary;
pub mod display;
pub mod frequency;
pub mod phrase;
pub mod search;
