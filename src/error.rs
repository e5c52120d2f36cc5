use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCrossError {
    #[error("Invalid letter {0:?}: input must be a single letter from [A-Z]")]
    InvalidLetter(String),

    #[error("Word {word:?} does not belong in the word list for letter {expected}")]
    InconsistentRoot { expected: char, word: String },

    #[error("Word list is empty: no root letter to build a trie from")]
    EmptyInput,

    #[error("Word {word:?} contains characters outside [A-Z]")]
    InvalidWord { word: String },

    #[error(
        "No dictionary for letter {}: expected a master word list at {} (or a per-letter list in {})",
        .letter,
        .expected.display(),
        .search_dir.display()
    )]
    DictionaryMissing {
        letter: char,
        expected: PathBuf,
        search_dir: PathBuf,
    },

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trie cache {} is unreadable: {}", .path.display(), .source)]
    Cache {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

impl WordCrossError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> WordCrossError {
        let path = path.into();
        move |source| WordCrossError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, WordCrossError>;
