pub mod trie;
pub mod trie_builder;
pub mod search;
pub mod letter_counts;
pub mod node;
pub mod iterators;

pub use letter_counts::LetterCounts;
pub use node::{NodeId, TrieNode};
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
