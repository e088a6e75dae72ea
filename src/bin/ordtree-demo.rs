//! Times word lookups against a sorted list and against differently shaped trees.

use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use ordtree::OrderedTree;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Compare lookup times of a linear scan, a degenerate tree, a randomized tree and a
/// rebalanced tree
#[derive(Parser, Debug)]
#[command(name = "ordtree-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited word list
    #[arg(env = "ORDTREE_WORDS")]
    words: PathBuf,

    /// Number of words to sample from the list
    #[arg(short, long, env = "ORDTREE_SAMPLE_SIZE", default_value_t = 1000)]
    sample_size: usize,

    /// Read at most this many words from the list
    #[arg(short, long, env = "ORDTREE_LIMIT")]
    limit: Option<usize>,

    /// Seed for sampling and shuffling (random when absent)
    #[arg(long, env = "ORDTREE_SEED")]
    seed: Option<u64>,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("cannot sample {wanted} words from a list of {available}")]
    SampleTooLarge { wanted: usize, available: usize },

    #[error("lookup missed {0:?}")]
    Missed(String),
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn read_words(cli: &Cli) -> Result<Vec<String>, DemoError> {
    let text = fs::read_to_string(&cli.words)
        .map_err(|source| DemoError::Read { path: cli.words.clone(), source })?;

    let words = text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(cli.limit.unwrap_or(usize::MAX))
        .map(String::from)
        .collect::<Vec<_>>();

    debug!(count = words.len(), path = %cli.words.display(), "read word list");
    if words.is_empty() { return Err(DemoError::EmptyWordList); }
    Ok(words)
}

/// Looks up every word, failing on the first miss.
fn time_lookups<F>(words: &[String], mut find: F) -> Result<Duration, DemoError>
    where F: FnMut(&String) -> bool {

    let start = Instant::now();
    for word in words {
        if !black_box(find(word)) { return Err(DemoError::Missed(word.clone())); }
    }
    Ok(start.elapsed())
}

/// How a timed tree is built from the full word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    /// Words inserted in sorted order, leaving a single right spine.
    Degenerate,
    /// Words inserted in shuffled order.
    Randomized,
    /// Words inserted in file order, then rebalanced.
    Rebalanced,
}

/// Clears `tree` and refills it with every word in `words`, arranged as `shape` asks.
fn rebuild(tree: &mut OrderedTree<String>, shape: Shape, words: &[String], rng: &mut StdRng) {
    tree.clear();

    match shape {
        Shape::Degenerate => {
            let mut sorted = words.to_vec();
            sorted.sort();
            tree.extend(sorted);
        }
        Shape::Randomized => {
            let mut shuffled = words.to_vec();
            shuffled.shuffle(rng);
            tree.extend(shuffled);
        }
        Shape::Rebalanced => {
            tree.extend(words.iter().cloned());
            tree.rebalance();
        }
    }

    info!(?shape, len = tree.len(), height = tree.height(), balanced = tree.is_balanced());
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let words = read_words(cli)?;
    if cli.sample_size > words.len() {
        return Err(DemoError::SampleTooLarge { wanted: cli.sample_size, available: words.len() });
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "sampling {} of {} words", cli.sample_size, words.len());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sample: Vec<String> = words.choose_multiple(&mut rng, cli.sample_size).cloned().collect();
    sample.sort();

    let linear = time_lookups(&sample, |word| sample.iter().any(|w| w == word))?;
    println!("linear search:     {:?}", linear);

    let mut tree = OrderedTree::new();

    rebuild(&mut tree, Shape::Degenerate, &words, &mut rng);
    let degenerate = time_lookups(&sample, |word| tree.contains(word))?;
    println!("degenerate tree:   {:?}", degenerate);

    let mut shuffled = sample.clone();
    shuffled.shuffle(&mut rng);

    rebuild(&mut tree, Shape::Randomized, &words, &mut rng);
    let randomized = time_lookups(&shuffled, |word| tree.contains(word))?;
    println!("randomized tree:   {:?}", randomized);

    rebuild(&mut tree, Shape::Rebalanced, &words, &mut rng);
    let rebalanced = time_lookups(&shuffled, |word| tree.contains(word))?;
    println!("rebalanced tree:   {:?}", rebalanced);

    Ok(())
}
