use std::path::{Path, PathBuf};

use typed_builder::TypedBuilder;

use crate::wordlist::format::FileFormat;

pub const WORD_LIST_DIR: &str = "TextFiles";
pub const CACHE_DIR: &str = "DataFiles";
pub const MASTER_LIST: &str = "master-list.txt";

/// Where the dictionary resources live on disk.
#[derive(TypedBuilder, Clone, Debug)]
pub struct DataLayout {
    /// Directory holding `master-list.txt` and the `<L>-words.txt` files.
    #[builder(setter(into))]
    pub word_list_dir: PathBuf,
    /// Directory holding the `<L>-data.node.bin` trie cache.
    #[builder(setter(into))]
    pub cache_dir: PathBuf,
    #[builder(default = MASTER_LIST.to_string(), setter(into))]
    pub master_list_name: String,
    /// Format of the master list. Per-letter lists are always one word per line.
    #[builder(default)]
    pub format: FileFormat,
}

impl DataLayout {
    /// `<base>/TextFiles` for word lists and `<base>/DataFiles` for the cache.
    pub fn under(base: impl AsRef<Path>) -> DataLayout {
        let base = base.as_ref();
        DataLayout::builder()
            .word_list_dir(base.join(WORD_LIST_DIR))
            .cache_dir(base.join(CACHE_DIR))
            .build()
    }

    pub fn master_list_path(&self) -> PathBuf {
        self.word_list_dir.join(&self.master_list_name)
    }
}
