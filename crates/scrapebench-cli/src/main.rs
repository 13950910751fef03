//! scrapebench CLI.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use scrapebench::{
    aggregate_all, compare_all, output, report, AdapterRegistry, BenchmarkConfig, BenchmarkRunner,
    Operation, SampleCorpus,
};
use std::path::PathBuf;
use std::time::Duration;

/// CLI enum for operations
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOperation {
    /// Retrieve the content of each URL sample
    Fetch,
    /// Extract title and meta description from each HTML sample
    ExtractMetadata,
    /// Extract absolute hyperlinks from each HTML sample
    ExtractLinks,
    /// Extract element markup by tag/class from each HTML sample
    ExtractElements,
}

impl From<CliOperation> for Operation {
    fn from(operation: CliOperation) -> Self {
        match operation {
            CliOperation::Fetch => Operation::Fetch,
            CliOperation::ExtractMetadata => Operation::ExtractMetadata,
            CliOperation::ExtractLinks => Operation::ExtractLinks,
            CliOperation::ExtractElements => Operation::ExtractElements,
        }
    }
}

#[derive(Parser)]
#[command(name = "scrapebench")]
#[command(about = "Compare web fetch and HTML extraction libraries under identical inputs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the samples in the corpus
    Corpus {
        /// Path to a JSON corpus file (defaults to the built-in corpus)
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },

    /// Validate corpus and configuration without running benchmarks
    Validate {
        /// Path to a JSON corpus file (defaults to the built-in corpus)
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Path to a scrapebench.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the configured comparisons and print the report
    Run {
        /// Path to a JSON corpus file (defaults to the built-in corpus)
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Path to a scrapebench.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Operations to benchmark (comma-separated; defaults to all)
        #[arg(short = 'o', long, value_delimiter = ',', value_enum)]
        operations: Vec<CliOperation>,

        /// Implementations to benchmark (comma-separated; defaults to all registered)
        #[arg(short = 'F', long, value_delimiter = ',')]
        implementations: Vec<String>,

        /// Number of measured iterations per (implementation, operation) pair
        #[arg(short = 'i', long)]
        iterations: Option<usize>,

        /// Number of warmup iterations (discarded from statistics)
        #[arg(short = 'w', long)]
        warmup: Option<usize>,

        /// Per-call timeout in seconds (0 disables the timeout)
        #[arg(short = 't', long)]
        timeout: Option<u64>,

        /// Run distinct (implementation, operation) pairs concurrently
        #[arg(long)]
        parallel: bool,

        /// Directory to write JSON results into
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_corpus(path: Option<&PathBuf>) -> anyhow::Result<SampleCorpus> {
    match path {
        Some(path) => SampleCorpus::from_json_file(path)
            .with_context(|| format!("failed to load corpus from {}", path.display())),
        None => Ok(SampleCorpus::builtin()),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<BenchmarkConfig> {
    match path {
        Some(path) => BenchmarkConfig::from_toml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(BenchmarkConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Corpus { corpus } => {
            let corpus = load_corpus(corpus.as_ref())?;

            println!("Loaded {} sample(s)", corpus.len());
            for sample in corpus.samples() {
                let kind = match (&sample.url, &sample.html) {
                    (Some(_), Some(_)) => "url+html",
                    (Some(_), None) => "url",
                    _ => "html",
                };
                println!(
                    "  {} - {} ({} bytes)",
                    sample.id,
                    kind,
                    sample.html.as_deref().map(str::len).unwrap_or(0)
                );
            }

            Ok(())
        }

        Commands::Validate { corpus, config } => {
            let corpus = load_corpus(corpus.as_ref())?;
            let config = load_config(config.as_ref())?;
            config.validate()?;

            println!("✓ Configuration is valid");
            println!("✓ All {} sample(s) are valid", corpus.len());
            Ok(())
        }

        Commands::Run {
            corpus,
            config,
            operations,
            implementations,
            iterations,
            warmup,
            timeout,
            parallel,
            output,
        } => {
            let mut config = load_config(config.as_ref())?;

            if !operations.is_empty() {
                config.operations = operations.into_iter().map(Operation::from).collect();
            }
            if !implementations.is_empty() {
                config.implementations = implementations;
            }
            if let Some(iterations) = iterations {
                config.iterations = iterations;
            }
            if let Some(warmup) = warmup {
                config.warmup_iterations = warmup;
            }
            if let Some(timeout) = timeout {
                config.timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
            }
            if parallel {
                config.parallel = true;
            }

            config.validate()?;
            tracing::debug!(?config, "resolved run configuration");

            let corpus = load_corpus(corpus.as_ref())?;
            let registry = AdapterRegistry::with_default_adapters();

            eprintln!("[adapter] {} implementation(s): {}", registry.len(), registry.names().join(", "));
            println!("Loaded {} sample(s)", corpus.len());
            println!(
                "Running {} iteration(s) per pair ({} warmup) over {} operation(s)",
                config.iterations,
                config.warmup_iterations,
                config.operations.len()
            );

            let operations = config.operations.clone();
            let runner = BenchmarkRunner::new(config, registry, corpus);
            let measurements = runner.run().await?;

            let aggregates = aggregate_all(&measurements);
            let comparisons = compare_all(&operations, &aggregates);

            println!();
            print!("{}", report::render(&comparisons));

            if let Some(output) = output {
                let results_path = output.join("results.json");
                output::write_comparisons(&comparisons, &results_path)?;
                output::write_measurements(&measurements, &output.join("measurements.json"))?;
                println!("\nResults written to: {}", results_path.display());
            }

            Ok(())
        }
    }
}
