pub mod trie;
pub mod format;
pub mod partition;
pub mod cache;
pub mod provider;
