//! This module handles turning raw user input into a [`Phrase`], the only
//! form of text the search engine accepts as the thing to anagram.

use std::fmt::Display;

use crate::frequency::FrequencyMap;

/// A phrase reduced to the uppercase letters `A..=Z`.
///
/// The only way to build one is [`Phrase::sanitize`], so anything holding a
/// [`Phrase`] can rely on it containing nothing but letters.
///
/// ```rust
/// use anagram_search_rs::phrase::Phrase;
///
/// let phrase = Phrase::sanitize("Lorem ipsum, dolor sit!");
/// assert!(phrase.as_str() == "LOREMIPSUMDOLORSIT");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Phrase {
    letters: String,
}

impl Phrase {
    /// Uppercases the input and removes every character that is not `A..=Z`
    pub fn sanitize(raw: &str) -> Self {
        Self {
            letters: raw
                .to_uppercase()
                .chars()
                .filter(char::is_ascii_uppercase)
                .collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of letters in the phrase
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Tally of the letters of the phrase
    pub fn frequency(&self) -> FrequencyMap {
        FrequencyMap::build(&self.letters)
    }
}

impl Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters)
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Spaces, punctuation and digits should all be dropped
    fn test_sanitize_strips_non_letters() {
        let phrase = Phrase::sanitize("marco paganini ab");
        assert!(phrase.as_str() == "MARCOPAGANINIAB", "Got [{phrase}]");
        assert!(phrase.len() == 15);

        assert!(Phrase::sanitize("It's 3 o'clock!").as_str() == "ITSOCLOCK");
    }

    #[test]
    /// Letters outside of the 26 letter alphabet are not kept
    fn test_sanitize_drops_accents() {
        assert!(Phrase::sanitize("café").as_str() == "CAF");
    }

    #[test]
    /// Input without any letter produces an empty phrase
    fn test_sanitize_empty() {
        assert!(Phrase::sanitize("").is_empty());
        assert!(Phrase::sanitize("123 !? ...").is_empty());
    }

    #[test]
    /// Ensures the phrase frequency matches its letters
    fn test_frequency() {
        let phrase = Phrase::sanitize("carro");
        assert!(phrase.frequency() == FrequencyMap::build("CARRO"));
        assert!(phrase.frequency().total() as usize == phrase.len());
    }
}
