use std::path::PathBuf;

use anagram_search_rs::{display::DisplayOptions, search::SearchConfig};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ToolArgs {
    /// Expression to find anagrams of. Anything other than letters is ignored
    pub(crate) phrase: String,

    /// Dictionary file holding one word per line
    #[arg(short, long, default_value = "words.txt")]
    pub(crate) dict: PathBuf,

    /// Minimum word length
    #[arg(long, default_value_t = 1)]
    pub(crate) min_len: usize,

    /// Maximum word length
    #[arg(long, default_value_t = 64)]
    pub(crate) max_len: usize,

    /// Maximum number of words in an anagram (0 = no maximum)
    #[arg(short = 'w', long, default_value_t = 16)]
    pub(crate) max_words: usize,

    /// Only prints the candidate words instead of searching for anagrams
    #[arg(short, long)]
    pub(crate) candidates: bool,

    /// Runs the search without printing the results
    #[arg(short, long)]
    pub(crate) silent: bool,

    /// Also sorts the output by lines
    #[arg(long)]
    pub(crate) sort_lines: bool,

    /// Keeps the words of each line in the order they were found instead of
    /// sorting them
    #[arg(long)]
    pub(crate) no_sort_words: bool,

    /// Prints at most this many lines
    #[arg(short, long)]
    pub(crate) limit: Option<usize>,

    /// Stops searching after this many seconds and prints what was found
    #[arg(short, long)]
    pub(crate) timeout: Option<f64>,

    /// Searches the first words of each anagram in parallel
    #[cfg(feature = "rayon")]
    #[arg(short, long)]
    pub(crate) parallel: bool,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity,
}

impl ToolArgs {
    /// Collects the search bounds. A maximum of 0 words places no limit
    pub(crate) fn search_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.min_len,
            self.max_len,
            (self.max_words != 0).then_some(self.max_words),
        )
    }

    pub(crate) fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            sort_words: !self.no_sort_words,
            sort_lines: self.sort_lines,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Ensures the defaults match a plain search with sorted words
    fn test_defaults() {
        let args = ToolArgs::parse_from(["anagrams", "carro"]);
        assert!(args.phrase == "carro");
        assert!(args.dict == PathBuf::from("words.txt"));
        assert!(args.search_config() == SearchConfig::default());
        assert!(args.display_options() == DisplayOptions::default());
    }

    #[test]
    /// Zero words means the anagrams can be any length
    fn test_unbounded_words() {
        let args = ToolArgs::parse_from(["anagrams", "-w", "0", "--min-len", "4", "carro"]);
        assert!(args.search_config() == SearchConfig::new(4, 64, None));
    }

    #[test]
    /// Ensures the display flags end up in the options
    fn test_display_flags() {
        let args = ToolArgs::parse_from([
            "anagrams",
            "--sort-lines",
            "--no-sort-words",
            "--limit",
            "5",
            "carro",
        ]);
        let options = args.display_options();
        assert!(!options.sort_words);
        assert!(options.sort_lines);
        assert!(options.limit == Some(5));
    }

    #[test]
    /// Clap should accept the argument definitions as a whole
    fn test_command_is_valid() {
        use clap::CommandFactory;
        ToolArgs::command().debug_assert();
    }
}
