use criterion::{criterion_group, criterion_main, Criterion};
use word_cross::wordlist::trie::search::{scan_word_list, search};
use word_cross::{LetterCounts, Trie};

/// Every string over `letters` up to `max_len` long, all starting with `first`.
fn synthetic_words(first: char, letters: &str, max_len: usize) -> Vec<String> {
    let mut words = vec![first.to_string()];
    let mut frontier = words.clone();
    for _ in 1..max_len {
        frontier = frontier.iter()
            .flat_map(|prefix| letters.chars().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        words.extend(frontier.iter().cloned());
    }
    words
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = synthetic_words('S', "AEILNRST", 6);
    let trie = Trie::from_words(&words).unwrap();
    let query = LetterCounts::from_letters("SATIRESLN".chars());

    c.bench_function("build", |b| b.iter(|| Trie::from_words(&words).unwrap()));

    { let mut group = c.benchmark_group("search");
        group.bench_function("trie", |b| b.iter(|| search(&trie, &query)));
        group.bench_function("scan", |b| b.iter(|| scan_word_list(&words, &query)));
    }

    { let mut group = c.benchmark_group("cache");
        group.sample_size(10);
        let blob = bincode::serialize(&trie).unwrap();
        group.bench_function("encode", |b| b.iter(|| bincode::serialize(&trie).unwrap()));
        group.bench_function("decode", |b| b.iter(|| bincode::deserialize::<Trie>(&blob).unwrap()));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
