use std::collections::BTreeSet;

use crate::wordlist::trie::letter_counts::LetterCounts;
use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Every word in the trie that can be spelled from `available`, each
    /// letter used at most as often as it occurs there.
    pub fn query_letters(&self, available: &LetterCounts) -> BTreeSet<String> {
        let mut results = BTreeSet::new();
        self.visit(NodeId::ROOT, available, &mut results);
        results
    }

    fn visit(&self, id: NodeId, budget: &LetterCounts, results: &mut BTreeSet<String>) {
        let node = self.node(id);
        let Some(remaining) = budget.without(node.letter) else {
            return;
        };
        if node.is_terminal {
            results.insert(self.word_at(id));
        }
        if remaining.is_empty() {
            return;
        }
        for child in node {
            if remaining.count(self.node(child).letter) > 0 {
                self.visit(child, &remaining, results);
            }
        }
    }
}

/// Runs [`Trie::query_letters`] against one trie.
pub fn search(trie: &Trie, available: &LetterCounts) -> BTreeSet<String> {
    trie.query_letters(available)
}

/// Checks every word of a plain list against `available`. Slower than the
/// trie walk but needs no trie at all.
pub fn scan_word_list<I, S>(words: I, available: &LetterCounts) -> BTreeSet<String>
    where I: IntoIterator<Item=S>, S: AsRef<str> {
    words.into_iter()
        .filter(|word| !word.as_ref().is_empty() && available.covers(word.as_ref()))
        .map(|word| word.as_ref().to_string())
        .collect()
}
