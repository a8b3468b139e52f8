//! exambank CLI: build, validate and inspect exam question banks.

use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser, Subcommand};

use exambank_core::model::{Difficulty, Level};

mod commands;

#[derive(Parser)]
#[command(name = "exambank", version, about = "Exam question bank generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, validate and write the question document
    Generate {
        /// TOML bucket file or directory (default: built-in sample buckets)
        #[arg(long)]
        buckets: Option<PathBuf>,

        /// Output document path (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Allocated ids start after this value (overrides config)
        #[arg(long)]
        id_base: Option<u32>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate bucket files or an emitted document without writing
    #[command(group(ArgGroup::new("source").required(true).args(["buckets", "document"])))]
    Validate {
        /// TOML bucket file or directory
        #[arg(long)]
        buckets: Option<PathBuf>,

        /// Emitted JSON document
        #[arg(long)]
        document: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize or filter an emitted document
    Stats {
        /// Emitted JSON document
        #[arg(long)]
        document: PathBuf,

        /// Filter by level (I, II, III)
        #[arg(long)]
        level: Option<Level>,

        /// Filter by topic
        #[arg(long)]
        topic: Option<String>,

        /// Filter by difficulty (Easy, Medium, Hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Filter by question type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Show at most this many questions
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example bucket file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("exambank=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            buckets,
            output,
            id_base,
            compact,
            config,
        } => commands::generate::execute(buckets, output, id_base, compact, config),
        Commands::Validate {
            buckets,
            document,
            config,
        } => commands::validate::execute(buckets, document, config),
        Commands::Stats {
            document,
            level,
            topic,
            difficulty,
            kind,
            tag,
            limit,
            json,
            config,
        } => {
            let filter = exambank_core::bank::QuestionFilter {
                level,
                topic,
                difficulty,
                kind,
                tag,
                limit,
            };
            commands::stats::execute(document, filter, json, config)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
