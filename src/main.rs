use clap::{Parser, ValueEnum};
use pagerank_estimators::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
    Corpus, Distribution,
};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pagerank", version, about = "Rank the pages of an HTML corpus")]
struct Cli {
    /// Directory holding the `*.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = 0.85)]
    damping: f64,

    /// Length of the random walk
    #[arg(short = 'n', long, default_value_t = 10_000)]
    samples: usize,

    /// Largest per-page change at which iteration stops
    #[arg(short, long, default_value_t = 0.001)]
    tolerance: f64,

    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Seed of the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Treatment of pages without links during iteration
    #[arg(long, value_enum, default_value_t = DanglingArg::Discard)]
    dangling: DanglingArg,

    /// Log every sweep and crawled page
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DanglingArg {
    Discard,
    Uniform,
}

impl From<DanglingArg> for iterated::Dangling {
    fn from(value: DanglingArg) -> Self {
        match value {
            DanglingArg::Discard => iterated::Dangling::Discard,
            DanglingArg::Uniform => iterated::Dangling::Uniform,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), pagerank_estimators::Error> {
    let corpus = crawl(&cli.corpus)?;

    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
    };
    let res = sampled::SampledPageRank::new(&corpus, &config)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(&corpus, res.page_rank());

    let config = iterated::Config {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
        dangling: cli.dangling.into(),
    };
    let res = iterated::IteratedPageRank::new(&corpus, &config)?.calc()?;
    println!("PageRank Results from Iteration");
    print_ranks(&corpus, res.page_rank());
    Ok(())
}

fn print_ranks(corpus: &Corpus, ranks: &Distribution) {
    for (page, rank) in corpus.labelled(ranks) {
        println!("  {page}: {rank:.4}");
    }
}
