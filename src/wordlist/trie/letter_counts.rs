use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, is_letter, ALPHABET};

/// Multiset over `A..=Z`: how many of each letter are still available.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: [usize; ALPHABET.len()],
    len: usize,
}

impl LetterCounts {
    pub fn new() -> LetterCounts {
        Default::default()
    }

    /// Non-letters are ignored.
    pub fn from_letters<I>(letters: I) -> LetterCounts
        where I: IntoIterator<Item=char> {
        let mut counts = LetterCounts::new();
        letters.into_iter()
            .filter(|c| is_letter(*c))
            .for_each(|c| counts.add(c));
        counts
    }

    pub fn add(&mut self, c: char) {
        self.counts[get_idx(c)] += 1;
        self.len += 1;
    }

    pub fn count(&self, c: char) -> usize {
        if is_letter(c) {
            self.counts[get_idx(c)]
        } else {
            0
        }
    }

    /// Total letters, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The multiset minus one `c`, or `None` if no `c` is left.
    pub fn without(&self, c: char) -> Option<LetterCounts> {
        if self.count(c) == 0 {
            return None;
        }
        let mut rest = *self;
        rest.counts[get_idx(c)] -= 1;
        rest.len -= 1;
        Some(rest)
    }

    /// Whether `word` can be spelled from these letters.
    pub fn covers(&self, word: &str) -> bool {
        if word.len() > self.len {
            return false;
        }
        word.chars()
            .try_fold(*self, |rest, c| rest.without(c))
            .is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item=(char, usize)> + '_ {
        ALPHABET.iter()
            .zip(self.counts.iter())
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (*c as char, *n))
    }
}

impl Debug for LetterCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::letter_counts::LetterCounts;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::from_letters("WOBLLE".chars());
        assert_eq!(counts.len(), 6);
        assert_eq!(counts.count('L'), 2);
        assert_eq!(counts.count('Z'), 0);
        assert_eq!(counts.count('?'), 0);
    }

    #[test]
    fn counts_long_runs_of_one_letter() {
        let counts = LetterCounts::from_letters("A".repeat(70_000).chars());
        assert_eq!(counts.count('A'), 70_000);
        assert_eq!(counts.len(), 70_000);
        assert!(counts.covers("AAAA"));
    }

    #[test]
    fn without_consumes_one_occurrence() {
        let counts = LetterCounts::from_letters("LL".chars());
        let once = counts.without('L').unwrap();
        assert_eq!(once.count('L'), 1);
        let twice = once.without('L').unwrap();
        assert!(twice.is_empty());
        assert!(twice.without('L').is_none());
    }

    #[test]
    fn covers_respects_multiplicity() {
        let counts = LetterCounts::from_letters("TABBYLERS".chars());
        assert!(counts.covers("TABBY"));
        assert!(counts.covers("STABLE"));
        assert!(!counts.covers("TALLEST"));
        assert!(!counts.covers("TABBYCAT"));
        assert!(counts.covers(""));
    }
}
