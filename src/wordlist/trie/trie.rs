use std::fmt::{Debug, Formatter};

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::wordlist::trie::iterators::PrefixCursor;
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// Prefix tree holding every word that starts with one letter.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root is always
/// [`NodeId::ROOT`]. A `Trie` is only produced by
/// [`TrieBuilder`](crate::wordlist::trie::trie_builder::TrieBuilder) or by
/// deserializing a cached one, and offers no way to change it afterwards.
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
}

/// On-disk form of one node. A trie is stored as these records in prefix
/// order; depth is enough to recover each node's parent.
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct NodeRecord {
    pub(crate) letter: char,
    pub(crate) depth: usize,
    pub(crate) is_terminal: bool,
}

impl Trie {
    pub(crate) fn with_root(letter: char) -> Trie {
        Trie {
            nodes: vec![TrieNode::new(letter, None, 0)],
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn root_letter(&self) -> char {
        self.root().letter
    }

    /// Panics if `id` was not handed out by this trie.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn child(&self, id: NodeId, c: char) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|x| self.node(*x).letter == c)
    }

    pub(crate) fn get_or_create_child(&mut self, id: NodeId, c: char) -> NodeId {
        if let Some(child) = self.child(id, c) {
            return child;
        }
        let new_id = NodeId(self.nodes.len());
        let depth = self.node(id).depth + 1;
        self.nodes.push(TrieNode::new(c, Some(id), depth));
        self.nodes[id.0].children.push(new_id);
        new_id
    }

    /// Spells the path from the root down to `id`.
    pub fn word_at(&self, id: NodeId) -> String {
        let mut reversed = vec![];
        let mut current = Some(id);
        while let Some(x) = current {
            let node = self.node(x);
            reversed.push(node.letter);
            current = node.parent;
        }
        reversed.iter().rev().collect()
    }

    pub fn get_node(&self, word: &str) -> Option<NodeId> {
        let mut chars = word.chars();
        if chars.next()? != self.root_letter() {
            return None;
        }
        chars.try_fold(NodeId::ROOT, |node, c| self.child(node, c))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| self.node(x).is_terminal)
            .unwrap_or(false)
    }

    pub fn iter_prefix(&self) -> PrefixCursor<'_> {
        PrefixCursor::new(self, NodeId::ROOT)
    }

    pub fn traverse_prefix<T, F>(&self, f: &mut F)
        where F: FnMut(NodeId, &TrieNode) -> T {
        self.iter_prefix().for_each(|(id, node)| {
            f(id, node);
        });
    }

    /// Every word in the trie, in prefix order.
    pub fn words(&self) -> Vec<String> {
        self.iter_prefix()
            .filter(|(_, node)| node.is_terminal)
            .map(|(id, _)| self.word_at(id))
            .collect()
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.iter_prefix();
        let mut rhs = other.iter_prefix();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some((_, a)), Some((_, b))) => {
                    if a.letter != b.letter
                        || a.is_terminal != b.is_terminal
                        || a.depth != b.depth
                        || a.children.len() != b.children.len() {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Trie {}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (_, node) in self.iter_prefix() {
            seq.serialize_element(&NodeRecord {
                letter: node.letter,
                depth: node.depth,
                is_terminal: node.is_terminal,
            })?;
        }
        seq.end()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.traverse_prefix(&mut |_, x| { l.entry(x); });
        l.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::node::NodeId;
    use crate::wordlist::trie::trie::Trie;

    fn tally() -> Trie {
        Trie::from_words(["TAB", "TABBY", "TALE", "TALL", "TALLER", "TALLEST"]).unwrap()
    }

    #[test]
    fn finds_words_in_trie() {
        let trie = tally();
        for word in ["TAB", "TABBY", "TALE", "TALL", "TALLER", "TALLEST"] {
            assert!(trie.contains(word), "{}", word);
        }
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = tally();
        for word in ["T", "TA", "TABB", "TALLE", "BAT", "", "TALLESTS"] {
            assert!(!trie.contains(word), "{}", word);
        }
    }

    #[test]
    fn word_at_walks_back_to_the_root() {
        let trie = tally();
        let node = trie.get_node("TALLER").unwrap();
        assert_eq!(trie.word_at(node), "TALLER");
        assert_eq!(trie.word_at(NodeId::ROOT), "T");
        assert_eq!(trie.node(node).depth(), 5);
    }

    #[test]
    fn words_come_back_in_prefix_order() {
        assert_eq!(tally().words(), vec!["TAB", "TABBY", "TALE", "TALL", "TALLER", "TALLEST"]);
    }

    #[test]
    fn every_child_points_back_at_its_parent() {
        let trie = tally();
        for (id, node) in trie.iter_prefix() {
            for child in node {
                assert_eq!(trie.node(child).parent(), Some(id));
            }
            assert_eq!(trie.children(id), node.children());
        }
        assert!(trie.root().is_root());
        let t_children: Vec<char> = trie.children(NodeId::ROOT).iter().map(|x| trie.node(*x).letter()).collect();
        assert_eq!(t_children, vec!['A']);
    }

    #[test]
    fn equality_is_structural() {
        let a = Trie::from_words(["CAT", "CAR"]).unwrap();
        let b = Trie::from_words(["CAT", "CAR"]).unwrap();
        let c = Trie::from_words(["CAR", "CAT"]).unwrap();
        let d = Trie::from_words(["CAT", "CARS"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
