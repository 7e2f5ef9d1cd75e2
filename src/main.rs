#![forbid(unsafe_code)]
use std::{
    io::{BufWriter, Write},
    time::{Duration, Instant},
};

use anagram_search_rs::{
    candidates::candidates,
    dictionary::read_dictionary,
    display::arrange,
    phrase::Phrase,
    search::{AnagramSearch, CancelToken, SearchOutcome},
};
use clap::Parser;
use tool_args::ToolArgs;

mod tool_args;

/// Writes each line to stdout, flushing once at the end
fn print_lines<I>(lines: I) -> Result<(), String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = BufWriter::new(std::io::stdout().lock());
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    let parser = ToolArgs::parse();

    env_logger::builder()
        .filter_level(parser.verbose.log_level_filter())
        .init();

    let config = parser.search_config();
    config
        .validate()
        .map_err(|e| format!("Invalid word bounds: {e}"))?;

    let cancel = match parser.timeout {
        Some(secs) => CancelToken::with_timeout(
            Duration::try_from_secs_f64(secs).map_err(|e| format!("Invalid timeout: {e}"))?,
        ),
        None => CancelToken::new(),
    };

    let phrase = Phrase::sanitize(&parser.phrase);
    log::info!("Searching anagrams of {phrase} ({} letters)", phrase.len());

    // Failing early if the dictionary cannot be used
    let words = read_dictionary(&parser.dict).map_err(|e| e.to_string())?;
    let candidate_words = candidates(&words, &phrase, &config);
    log::info!("{} candidate words", candidate_words.len());

    if parser.candidates {
        return print_lines(&candidate_words);
    }

    let started = Instant::now();
    #[cfg(feature = "rayon")]
    let outcome: SearchOutcome = if parser.parallel {
        anagram_search_rs::search::rayon::par_search(&phrase, &candidate_words, &config, &cancel)
    } else {
        AnagramSearch::new(&phrase, &candidate_words, &config, &cancel).run()
    };
    #[cfg(not(feature = "rayon"))]
    let outcome: SearchOutcome =
        AnagramSearch::new(&phrase, &candidate_words, &config, &cancel).run();

    log::info!(
        "Found {} anagrams in {:.3?}",
        outcome.anagrams.len(),
        started.elapsed()
    );
    log::info!("{}", outcome.statistics);
    if !outcome.completed {
        log::warn!("Timed out, results are incomplete");
    }

    if parser.silent {
        return Ok(());
    }
    print_lines(arrange(outcome.anagrams, &parser.display_options()))
}
