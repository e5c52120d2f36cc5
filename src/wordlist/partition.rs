use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::alphabet::normalize;
use crate::error::{Result, WordCrossError};
use crate::wordlist::format::{read_words, FileFormat};

/// Name of the word list holding every word that starts with `letter`.
pub fn word_list_file_name(letter: char) -> String {
    format!("{}-words.txt", letter)
}

pub fn word_list_path(dir: &Path, letter: char) -> PathBuf {
    dir.join(word_list_file_name(letter))
}

/// Groups words by first letter, keeping their relative order.
pub fn partition_words<I, S>(words: I) -> BTreeMap<char, Vec<String>>
    where I: IntoIterator<Item=S>, S: AsRef<str> {
    let mut grouped: BTreeMap<char, Vec<String>> = BTreeMap::new();
    for word in words {
        let normalized = normalize(word.as_ref());
        match normalized.chars().next() {
            Some(first) => grouped.entry(first).or_default().push(normalized),
            None => warn!(word = word.as_ref(), "dropping word with no letters"),
        }
    }
    grouped
}

/// Splits a master word list into one `<L>-words.txt` file per starting
/// letter inside `output_dir`, replacing any that already exist.
///
/// Returns how many words went into each file.
#[instrument(level = "debug", skip(format))]
pub fn split_file(master: &Path, output_dir: &Path, format: &FileFormat) -> Result<BTreeMap<char, usize>> {
    let words = read_words(master, format)?;
    fs::create_dir_all(output_dir).map_err(WordCrossError::io(output_dir))?;

    let mut counts = BTreeMap::new();
    for (letter, group) in partition_words(words) {
        let path = word_list_path(output_dir, letter);
        write_words(&path, &group)?;
        counts.insert(letter, group.len());
    }
    info!(master = %master.display(), letters = counts.len(), "partitioned master word list");
    Ok(counts)
}

fn write_words(path: &Path, words: &[String]) -> Result<()> {
    let file = File::create(path).map_err(WordCrossError::io(path))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word).map_err(WordCrossError::io(path))?;
    }
    writer.flush().map_err(WordCrossError::io(path))
}
