//! Word lookup timing example.
//!
//! Loads a newline-delimited word list and times random-sample lookups in:
//! 1. the sorted word vector (linear search)
//! 2. a tree built from the sorted list (degenerate chain)
//! 3. a tree built from the shuffled list
//! 4. the shuffled tree after `rebalance()`
//!
//! Usage: cargo run --release --example word_lookup -- words.txt --sample 10000
//! Set `RUST_LOG=debug` to see tree-level log events.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use linked_bst::LinkedBst;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(about = "Compare word lookups in a vector and in binary search trees")]
struct Opts {
    /// Newline-delimited word list
    path: PathBuf,

    /// Number of random words to look up
    #[arg(short, long, default_value_t = 10_000)]
    sample: usize,

    /// Use only the first N words of the list
    #[arg(short, long)]
    limit: Option<usize>,

    /// RNG seed for sampling and shuffling
    #[arg(long)]
    seed: Option<u64>,
}

fn load_words(opts: &Opts) -> Result<Vec<String>, Box<dyn Error>> {
    let content = fs::read_to_string(&opts.path)
        .map_err(|err| format!("cannot read {}: {}", opts.path.display(), err))?;

    let mut words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();

    if let Some(limit) = opts.limit {
        words.truncate(limit);
    }
    words.sort();
    Ok(words)
}

fn time_lookups<F>(sample: &[String], mut lookup: F) -> (Duration, usize)
where
    F: FnMut(&String) -> bool,
{
    let start = Instant::now();
    let hits = sample.iter().filter(|word| lookup(word)).count();
    (start.elapsed(), hits)
}

fn report(label: &str, elapsed: Duration, hits: usize, total: usize) {
    println!("  {:<32} {:>12.3?}  ({}/{} found)", label, elapsed, hits, total);
}

fn describe(label: &str, tree: &LinkedBst<String>) {
    println!(
        "  {:<32} height {:>6}, balanced: {}",
        label,
        tree.height(),
        tree.is_balanced()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let words = load_words(&opts)?;
    if words.is_empty() {
        return Err(format!("{} contains no words", opts.path.display()).into());
    }
    if opts.sample > words.len() {
        return Err(format!(
            "sample size {} exceeds word count {}",
            opts.sample,
            words.len()
        )
        .into());
    }
    info!("loaded {} words from {}", words.len(), opts.path.display());

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sample: Vec<String> = words.choose_multiple(&mut rng, opts.sample).cloned().collect();

    println!("=== Word Lookup ({} words, {} lookups) ===\n", words.len(), sample.len());

    // 1. Linear search in the sorted vector
    let (elapsed, hits) = time_lookups(&sample, |word| words.iter().any(|w| w == word));
    report("sorted vector, linear search", elapsed, hits, sample.len());

    // 2. Tree built from sorted input
    if words.len() > 50_000 {
        warn!("sorted insertion is quadratic; consider --limit");
    }
    let sorted_tree: LinkedBst<String> = words.iter().cloned().collect();
    let (elapsed, hits) = time_lookups(&sample, |word| sorted_tree.find(word).is_some());
    report("tree from sorted words", elapsed, hits, sample.len());

    // 3. Tree built from shuffled input
    let mut shuffled = words.clone();
    shuffled.shuffle(&mut rng);
    let mut tree: LinkedBst<String> = shuffled.into_iter().collect();
    let (elapsed, hits) = time_lookups(&sample, |word| tree.find(word).is_some());
    report("tree from shuffled words", elapsed, hits, sample.len());

    // 4. Same tree after rebalancing
    let before = tree.height();
    tree.rebalance();
    info!("rebalanced shuffled tree: height {} -> {}", before, tree.height());
    let (elapsed, hits) = time_lookups(&sample, |word| tree.find(word).is_some());
    report("shuffled tree after rebalance", elapsed, hits, sample.len());

    println!("\nTree shapes:");
    describe("sorted insertion", &sorted_tree);
    describe("shuffled + rebalance", &tree);

    Ok(())
}
