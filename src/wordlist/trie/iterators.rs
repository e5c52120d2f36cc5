use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Depth-first walk that yields a node before its children, children in
/// insertion order.
#[derive(Debug)]
pub struct PrefixCursor<'a> {
    stack: Vec<NodeId>,
    trie: &'a Trie,
}

impl<'a> PrefixCursor<'a> {
    pub(crate) fn new(trie: &'a Trie, start: NodeId) -> PrefixCursor<'a> {
        PrefixCursor { stack: vec![start], trie }
    }
}

impl<'a> Iterator for PrefixCursor<'a> {
    type Item = (NodeId, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.trie.node(id);
        self.stack.extend(node.children.iter().rev());
        Some((id, node))
    }
}

/// Yields the ids of a node's children.
pub struct ChildCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for ChildCursor<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let rv = self.node.children.get(self.idx).copied();
        self.idx += 1;
        rv
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = NodeId;
    type IntoIter = ChildCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ChildCursor { idx: 0, node: self }
    }
}
