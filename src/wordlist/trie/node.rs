use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// Position of a node inside its trie's arena.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A single letter in a trie.
///
/// `parent` is a back-reference used to spell the word a node ends; the
/// arena owns every node and `children` is the only owning edge.
pub struct TrieNode {
    pub(crate) letter: char,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    pub(crate) fn new(letter: char, parent: Option<NodeId>, depth: usize) -> TrieNode {
        TrieNode {
            letter,
            parent,
            children: vec![],
            is_terminal: false,
            depth,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Distance from the root, which sits at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("parent", &self.parent.map(|x| x.0))
            .field("children", &self.children.iter().map(|x| x.0).collect::<Vec<_>>())
            .finish()
    }
}
