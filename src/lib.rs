pub mod alphabet;
pub mod config;
pub mod error;
pub mod solver;
pub mod wordlist;

pub use config::DataLayout;
pub use error::{Result, WordCrossError};
pub use solver::{rank, Solution, Solver, Strategy};
pub use wordlist::provider::TrieProvider;
pub use wordlist::trie::{LetterCounts, Trie};
