use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use delegate::delegate;
use derive_new::new;
use metrics::histogram;
use tracing::{debug, info};

use crate::alphabet::validate_letter;
use crate::error::{Result, WordCrossError};
use crate::wordlist::format::{read_words, FileFormat};
use crate::wordlist::provider::TrieProvider;
use crate::wordlist::trie::search::{scan_word_list, search};
use crate::wordlist::trie::LetterCounts;

/// Shortest first, then case-insensitively alphabetical, then by exact
/// string so distinct words never compare equal.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len())
        .then_with(|| a.to_ascii_uppercase().cmp(&b.to_ascii_uppercase()))
        .then_with(|| a.cmp(b))
}

pub fn rank<I, S>(words: I) -> Vec<String>
    where I: IntoIterator<Item=S>, S: Into<String> {
    let mut ranked: Vec<String> = words.into_iter().map(Into::into).collect();
    ranked.sort_by(|a, b| compare_words(a, b));
    ranked.dedup();
    ranked
}

/// Splits ranked words into runs of equal length.
pub fn group_by_length(words: &[String]) -> Vec<(usize, Vec<&str>)> {
    let mut groups: Vec<(usize, Vec<&str>)> = vec![];
    for word in words {
        match groups.last_mut() {
            Some((len, group)) if *len == word.len() => group.push(word.as_str()),
            _ => groups.push((word.len(), vec![word.as_str()])),
        }
    }
    groups
}

/// Ranked answer to a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
    elapsed: Duration,
}

impl Solution {
    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, String>;
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Time spent searching, excluding loading or building tries.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn grouped(&self) -> Vec<(usize, Vec<&str>)> {
        group_by_length(&self.words)
    }
}

/// Which search runs once the dictionary is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Walk the per-letter tries.
    #[default]
    Trie,
    /// Check every word of the per-letter lists.
    Scan,
}

/// Answers letter queries against the dictionary behind a [`TrieProvider`].
///
/// Letters are resolved in alphabetical order and the first letter that
/// cannot be resolved aborts the whole query; no partial answer is returned.
#[derive(new, Debug, Clone)]
pub struct Solver {
    provider: TrieProvider,
    #[new(default)]
    strategy: Strategy,
}

impl Solver {
    pub fn with_strategy(mut self, strategy: Strategy) -> Solver {
        self.strategy = strategy;
        self
    }

    pub fn provider(&self) -> &TrieProvider {
        &self.provider
    }

    pub fn solve(&self, letters: &[char]) -> Result<Solution> {
        for letter in letters {
            validate_letter(*letter)?;
        }
        let available = LetterCounts::from_letters(letters.iter().copied());
        let distinct: BTreeSet<char> = letters.iter().copied().collect();
        debug!(?available, "solving");

        let (words, elapsed) = match self.strategy {
            Strategy::Trie => self.solve_with_tries(&distinct, &available)?,
            Strategy::Scan => self.solve_with_scan(&distinct, &available)?,
        };
        let words = rank(words);
        histogram!("search_seconds", elapsed.as_secs_f64());
        info!(letters = letters.len(), found = words.len(), elapsed_ms = elapsed.as_millis() as u64, "solved");
        Ok(Solution { words, elapsed })
    }

    fn solve_with_tries(&self, distinct: &BTreeSet<char>, available: &LetterCounts)
                        -> Result<(BTreeSet<String>, Duration)> {
        // load everything first so the timing covers the search alone
        let tries = distinct.iter()
            .map(|letter| self.provider.get_trie_for_letter(*letter))
            .collect::<Result<Vec<_>>>()?;

        let start = Instant::now();
        let mut words = BTreeSet::new();
        for trie in &tries {
            words.extend(search(trie, available));
        }
        Ok((words, start.elapsed()))
    }

    fn solve_with_scan(&self, distinct: &BTreeSet<char>, available: &LetterCounts)
                       -> Result<(BTreeSet<String>, Duration)> {
        let mut lists = vec![];
        for letter in distinct {
            let path = self.provider.word_list_path(*letter);
            let list = if path.is_file() {
                let words = read_words(&path, &FileFormat::default())?;
                if let Some(word) = words.iter().find(|x| !x.starts_with(*letter)) {
                    return Err(WordCrossError::InconsistentRoot {
                        expected: *letter,
                        word: word.clone(),
                    });
                }
                words
            } else {
                self.provider.get_trie_for_letter(*letter)?.words()
            };
            lists.push(list);
        }

        let start = Instant::now();
        let mut words = BTreeSet::new();
        for list in &lists {
            words.extend(scan_word_list(list, available));
        }
        Ok((words, start.elapsed()))
    }
}
