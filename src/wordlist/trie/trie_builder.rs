use std::fmt::Formatter;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, instrument};

use crate::alphabet::is_letter;
use crate::error::{Result, WordCrossError};
use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::{NodeRecord, Trie};

/// Grows a [`Trie`] one word at a time.
///
/// The first word fixes the root letter; every later word has to start with
/// it.
#[derive(Default)]
pub struct TrieBuilder {
    trie: Option<Trie>,
    words: usize,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        Default::default()
    }

    pub fn add(&mut self, word: &str) -> Result<&mut TrieBuilder> {
        if word.is_empty() || !word.chars().all(is_letter) {
            return Err(WordCrossError::InvalidWord { word: word.to_string() });
        }
        let mut chars = word.chars();
        let first = chars.next().unwrap_or_default();
        let trie = self.trie.get_or_insert_with(|| Trie::with_root(first));
        if first != trie.root_letter() {
            return Err(WordCrossError::InconsistentRoot {
                expected: trie.root_letter(),
                word: word.to_string(),
            });
        }

        let mut current = NodeId::ROOT;
        for c in chars {
            current = trie.get_or_create_child(current, c);
        }
        trie.nodes[current.0].is_terminal = true;
        self.words += 1;
        Ok(self)
    }

    pub fn add_all<I, S>(&mut self, items: I) -> Result<&mut TrieBuilder>
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        for x in items {
            self.add(x.as_ref())?;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<Trie> {
        let trie = self.trie.ok_or(WordCrossError::EmptyInput)?;
        debug!(root = %trie.root_letter(), words = self.words, nodes = trie.len(), "built trie");
        Ok(trie)
    }
}

impl Trie {
    #[instrument(level = "trace", skip(words))]
    pub fn from_words<I, S>(words: I) -> Result<Trie>
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut builder = TrieBuilder::new();
        builder.add_all(words)?;
        builder.build()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of trie nodes in prefix order")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let root: NodeRecord = seq.next_element()?
            .ok_or_else(|| A::Error::custom("trie has no root"))?;
        if root.depth != 0 || !is_letter(root.letter) {
            return Err(A::Error::custom("first node is not a valid root"));
        }
        let mut trie = Trie::with_root(root.letter);
        trie.nodes[0].is_terminal = root.is_terminal;
        let mut stack: Vec<NodeId> = vec![NodeId::ROOT];

        while let Some(record) = seq.next_element::<NodeRecord>()? {
            if record.depth == 0 {
                return Err(A::Error::custom("trie has more than one root"));
            }
            if record.depth > stack.len() {
                return Err(A::Error::custom(format!("node {:?} skips a level", record)));
            }
            if !is_letter(record.letter) {
                return Err(A::Error::custom(format!("node {:?} is not a letter", record)));
            }
            stack.truncate(record.depth);

            let parent = *stack.last().ok_or_else(|| A::Error::custom("lost track of parent"))?;
            if trie.child(parent, record.letter).is_some() {
                return Err(A::Error::custom(format!("duplicate sibling {:?}", record.letter)));
            }
            let node = trie.get_or_create_child(parent, record.letter);
            trie.nodes[node.0].is_terminal = record.is_terminal;
            stack.push(node);
        }
        Ok(trie)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::WordCrossError;
    use crate::wordlist::trie::trie::Trie;
    use crate::wordlist::trie::trie_builder::TrieBuilder;

    const WORDS: [&str; 6] = ["TAB", "TABBY", "TALE", "TALL", "TALLER", "TALLEST"];

    #[test]
    fn shares_prefixes() {
        let trie = Trie::from_words(WORDS).unwrap();
        // T A B B Y L E L E R S T
        assert_eq!(trie.len(), 12);
        assert_eq!(trie.root_letter(), 'T');
        assert!(!trie.root().is_terminal());
    }

    #[test]
    fn rejects_words_with_another_first_letter() {
        let err = Trie::from_words(["CAR", "CAT", "BAT"]).unwrap_err();
        match err {
            WordCrossError::InconsistentRoot { expected, word } => {
                assert_eq!(expected, 'C');
                assert_eq!(word, "BAT");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let words: Vec<String> = vec![];
        assert!(matches!(Trie::from_words(words), Err(WordCrossError::EmptyInput)));
    }

    #[test]
    fn rejects_words_outside_the_alphabet() {
        assert!(matches!(Trie::from_words(["CAT", "cat"]), Err(WordCrossError::InvalidWord { .. })));
        assert!(matches!(TrieBuilder::new().add(""), Err(WordCrossError::InvalidWord { .. })));
    }

    #[test]
    fn single_letter_word_marks_the_root() {
        let trie = Trie::from_words(["A", "AN"]).unwrap();
        assert!(trie.root().is_terminal());
        assert_eq!(trie.words(), vec!["A", "AN"]);
    }

    #[test]
    fn duplicate_words_are_harmless() {
        let once = Trie::from_words(["CAR", "CART"]).unwrap();
        let twice = Trie::from_words(["CAR", "CART", "CAR"]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn building_twice_is_deterministic() {
        assert_eq!(Trie::from_words(WORDS).unwrap(), Trie::from_words(WORDS).unwrap());
    }

    #[test]
    fn siblings_have_distinct_letters() {
        let trie = Trie::from_words(["CAB", "CAT", "CAB", "COT", "CAT", "CATS", "COTS"]).unwrap();
        for (_, node) in trie.iter_prefix() {
            let mut letters: Vec<char> = node.children().iter().map(|x| trie.node(*x).letter()).collect();
            let before = letters.len();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(before, letters.len());
        }
    }

    #[test]
    fn test_serialize_deserialize() {
        let trie = Trie::from_words(WORDS).unwrap();

        let serialized = serde_json::to_string(&trie).unwrap();
        let new_trie = serde_json::from_str::<Trie>(&serialized).unwrap();

        assert_eq!(trie, new_trie);
        WORDS.iter().for_each(|word| assert!(new_trie.contains(word)));
        let taller = new_trie.get_node("TALLER").unwrap();
        assert_eq!(new_trie.word_at(taller), "TALLER");
    }

    #[test]
    fn deserialize_rejects_malformed_sequences() {
        let cases = [
            "[]",
            r#"[{"letter":"A","depth":1,"is_terminal":false}]"#,
            r#"[{"letter":"A","depth":0,"is_terminal":false},{"letter":"B","depth":2,"is_terminal":true}]"#,
            r#"[{"letter":"A","depth":0,"is_terminal":false},{"letter":"B","depth":0,"is_terminal":true}]"#,
            r#"[{"letter":"A","depth":0,"is_terminal":false},{"letter":"B","depth":1,"is_terminal":true},{"letter":"B","depth":1,"is_terminal":true}]"#,
        ];
        for case in cases {
            assert!(serde_json::from_str::<Trie>(case).is_err(), "{}", case);
        }
    }
}
