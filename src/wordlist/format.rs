use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Result, WordCrossError};

/// How to pull a word out of each line of a word-list file.
#[derive(TypedBuilder, Clone, Debug, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

/// Reads one word per line, normalized to `A..=Z`. Lines that end up empty
/// are skipped; file order is kept.
pub fn read_words(path: &Path, format: &FileFormat) -> Result<Vec<String>> {
    let file = File::open(path).map_err(WordCrossError::io(path))?;
    let buf_reader = BufReader::new(file);

    let mut words = vec![];
    let mut skipped: usize = 0;
    for line in buf_reader.lines() {
        let line = line.map_err(WordCrossError::io(path))?;
        let raw = line.trim_end_matches(['\r', '\n']);
        match format.parse_line(raw).map(|x| normalize(x.trim())) {
            Some(word) if !word.is_empty() => words.push(word),
            _ => {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }
    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped lines without a usable word");
    }
    debug!(path = %path.display(), count = words.len(), "read word list");
    Ok(words)
}
