use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use derive_new::new;
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::error::{Result, WordCrossError};
use crate::wordlist::trie::Trie;

/// Built tries stored on disk, one bincode file per starting letter.
#[derive(new, Debug, Clone)]
pub struct TrieCache {
    dir: PathBuf,
}

impl TrieCache {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, letter: char) -> PathBuf {
        self.dir.join(format!("{}-data.node.bin", letter))
    }

    pub fn contains(&self, letter: char) -> bool {
        self.path_for(letter).is_file()
    }

    /// Writes `trie` under `letter`. The blob is written to a temporary file
    /// next to the target and renamed over it, so a reader sees either the
    /// old entry or the new one.
    #[instrument(level = "debug", skip(self, trie), fields(nodes = trie.len()))]
    pub fn save(&self, trie: &Trie, letter: char) -> Result<()> {
        let path = self.path_for(letter);
        fs::create_dir_all(&self.dir).map_err(WordCrossError::io(&self.dir))?;

        let tmp = NamedTempFile::new_in(&self.dir).map_err(WordCrossError::io(&self.dir))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            bincode::serialize_into(&mut writer, trie)
                .map_err(|source| WordCrossError::Cache { path: path.clone(), source })?;
            writer.flush().map_err(WordCrossError::io(tmp.path()))?;
        }
        tmp.persist(&path)
            .map_err(|e| WordCrossError::Io { path: path.clone(), source: e.error })?;
        debug!(path = %path.display(), "saved trie");
        Ok(())
    }

    /// Reads the trie stored under `letter`, if there is one.
    pub fn load(&self, letter: char) -> Result<Option<Trie>> {
        let path = self.path_for(letter);
        if !path.is_file() {
            return Ok(None);
        }
        let file = File::open(&path).map_err(WordCrossError::io(&path))?;
        let trie: Trie = bincode::deserialize_from(BufReader::new(file))
            .map_err(|source| WordCrossError::Cache { path: path.clone(), source })?;
        if trie.root_letter() != letter {
            return Err(WordCrossError::InconsistentRoot {
                expected: letter,
                word: trie.root_letter().to_string(),
            });
        }
        debug!(path = %path.display(), nodes = trie.len(), "loaded trie");
        Ok(Some(trie))
    }
}
