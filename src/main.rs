use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use word_cross::alphabet::{parse_letter, validate_letter};
use word_cross::wordlist::format::FileFormat;
use word_cross::{DataLayout, Solution, Solver, Strategy, TrieProvider};

/// Find every dictionary word that can be spelled from a set of letters.
#[derive(StructOpt)]
#[structopt(name = "word-cross")]
struct Cli {
    /// Directory holding TextFiles/ (word lists) and DataFiles/ (trie cache)
    #[structopt(long, parse(from_os_str), default_value = ".")]
    data_dir: PathBuf,
    /// Word list directory, instead of <data-dir>/TextFiles
    #[structopt(long, parse(from_os_str))]
    word_lists: Option<PathBuf>,
    /// Trie cache directory, instead of <data-dir>/DataFiles
    #[structopt(long, parse(from_os_str))]
    cache_dir: Option<PathBuf>,
    /// File name of the master word list inside the word list directory
    #[structopt(long)]
    master_list: Option<String>,
    /// Column delimiter of the master word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column of the master word list holding the word (with --delimiter)
    #[structopt(long)]
    word_column: Option<usize>,
    /// Letters to solve for; prompts for them one at a time when absent
    #[structopt(short, long)]
    letters: Option<String>,
    /// Scan the word lists instead of walking the tries
    #[structopt(long)]
    brute: bool,
    /// Print the words grouped by length
    #[structopt(long)]
    group: bool,
    /// More logging (-v, -vv, -vvv); RUST_LOG takes precedence
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Cli {
    fn layout(&self) -> DataLayout {
        let mut layout = DataLayout::under(&self.data_dir);
        if let Some(dir) = &self.word_lists {
            layout.word_list_dir = dir.clone();
        }
        if let Some(dir) = &self.cache_dir {
            layout.cache_dir = dir.clone();
        }
        if let Some(name) = &self.master_list {
            layout.master_list_name = name.clone();
        }
        if let Some(delimiter) = self.delimiter {
            layout.format = FileFormat::builder()
                .delimiter(delimiter)
                .word_column(self.word_column.unwrap_or(0))
                .build();
        }
        layout
    }
}

fn main() -> Result<()> {
    let args = Cli::from_args();
    setup_logging(args.verbose);

    let letters = match &args.letters {
        Some(letters) => letters_from_arg(letters)?,
        None => prompt_for_letters()?,
    };

    let strategy = if args.brute { Strategy::Scan } else { Strategy::Trie };
    let solver = Solver::new(TrieProvider::new(args.layout())).with_strategy(strategy);
    let solution = solver.solve(&letters)
        .with_context(|| format!("could not solve for {:?}", letters.iter().collect::<String>()))?;

    print_solution(&solution, args.group);
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn letters_from_arg(letters: &str) -> Result<Vec<char>> {
    letters.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| validate_letter(c.to_ascii_uppercase()).map_err(Into::into))
        .collect()
}

fn prompt_for_letters() -> Result<Vec<char>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut letters = vec![];
    loop {
        print!("Enter a letter (Press <ENTER> to stop): ");
        io::stdout().flush()?;
        let input = match lines.next() {
            Some(line) => line.context("reading letter from stdin")?,
            None => String::new(),
        };
        let input = input.trim().to_ascii_uppercase();
        if input.is_empty() {
            println!("Computing possible word combinations...");
            return Ok(letters);
        }
        match parse_letter(&input) {
            Ok(letter) => letters.push(letter),
            Err(_) => println!("Invalid input - must be a letter [A-Z]!"),
        }
        let current: Vec<String> = letters.iter().map(|x| x.to_string()).collect();
        println!("Current letters: {}", current.join(" "));
    }
}

fn print_solution(solution: &Solution, grouped: bool) {
    if grouped {
        for (len, words) in solution.grouped() {
            println!("{}-Letter Words:", len);
            words.iter().for_each(|word| println!("{}", word));
        }
    } else {
        solution.iter().for_each(|word| println!("{}", word));
    }
    println!("{} words in {:.3}s", solution.len(), solution.elapsed().as_secs_f64());
}
