use std::path::PathBuf;

use metrics::increment_counter;
use tracing::{debug, info, instrument};

use crate::alphabet::validate_letter;
use crate::config::DataLayout;
use crate::error::{Result, WordCrossError};
use crate::wordlist::cache::TrieCache;
use crate::wordlist::format::{read_words, FileFormat};
use crate::wordlist::partition::{split_file, word_list_path};
use crate::wordlist::trie::Trie;

/// Hands out the trie for a starting letter, building whatever is missing
/// on the way.
///
/// Resolution order for a letter:
/// 1. the cached trie, if there is one;
/// 2. the letter's word list, built and then cached;
/// 3. the master list, split into word lists, then step 2 once more. A
///    letter still without a list after that has no words in the master
///    list and gets a bare root, cached like any other trie.
///
/// If none of those exist the letter fails with
/// [`WordCrossError::DictionaryMissing`].
#[derive(Debug, Clone)]
pub struct TrieProvider {
    layout: DataLayout,
    cache: TrieCache,
}

impl TrieProvider {
    pub fn new(layout: DataLayout) -> TrieProvider {
        let cache = TrieCache::new(layout.cache_dir.clone());
        TrieProvider { layout, cache }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    pub fn cache(&self) -> &TrieCache {
        &self.cache
    }

    pub fn word_list_path(&self, letter: char) -> PathBuf {
        word_list_path(&self.layout.word_list_dir, letter)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn get_trie_for_letter(&self, letter: char) -> Result<Trie> {
        let letter = validate_letter(letter)?;

        if let Some(trie) = self.cache.load(letter)? {
            increment_counter!("trie_cache_hits");
            debug!(%letter, "cache hit");
            return Ok(trie);
        }

        if let Some(trie) = self.build_from_word_list(letter)? {
            return Ok(trie);
        }

        let master = self.layout.master_list_path();
        if !master.is_file() {
            return Err(self.missing(letter));
        }
        info!(%letter, master = %master.display(), "no word list for letter, splitting master list");
        increment_counter!("dictionary_partitions");
        split_file(&master, &self.layout.word_list_dir, &self.layout.format)?;

        match self.build_from_word_list(letter)? {
            Some(trie) => Ok(trie),
            None => {
                // the master list has no word for this letter
                info!(%letter, "no words start with letter");
                let trie = Trie::with_root(letter);
                self.cache.save(&trie, letter)?;
                Ok(trie)
            }
        }
    }

    /// Builds and caches the trie for `letter` from its word list, or
    /// returns `None` when there is no list.
    fn build_from_word_list(&self, letter: char) -> Result<Option<Trie>> {
        let path = self.word_list_path(letter);
        if !path.is_file() {
            return Ok(None);
        }
        let words = read_words(&path, &FileFormat::default())?;
        let trie = Trie::from_words(&words)?;
        if trie.root_letter() != letter {
            return Err(WordCrossError::InconsistentRoot {
                expected: letter,
                word: words.first().cloned().unwrap_or_default(),
            });
        }
        self.cache.save(&trie, letter)?;
        increment_counter!("trie_builds");
        info!(%letter, words = words.len(), nodes = trie.len(), "built trie from word list");
        Ok(Some(trie))
    }

    fn missing(&self, letter: char) -> WordCrossError {
        WordCrossError::DictionaryMissing {
            letter,
            expected: self.layout.master_list_path(),
            search_dir: self.layout.word_list_dir.clone(),
        }
    }
}
