//! ppdrill CLI: practice, grade and review Present Perfect exercises.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ppdrill_core::DrillError;

mod commands;

#[derive(Parser)]
#[command(name = "ppdrill", version, about = "Present Perfect exercise generator and grader")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a quiz interactively and save the result
    Practice {
        /// Student name (asked for when missing)
        #[arg(long)]
        student: Option<String>,

        /// Topic slug or "mixed"
        #[arg(long)]
        topic: Option<String>,

        /// Number of exercises (5-20)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a quiz as JSON
    Generate {
        /// Topic slug or "mixed"
        #[arg(long)]
        topic: Option<String>,

        /// Number of exercises (5-20)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Grade an answer sheet against a quiz file
    Grade {
        /// Quiz JSON written by `generate`
        #[arg(long)]
        quiz: PathBuf,

        /// Answers JSON: {"0": "has", ...} or ["has", ...]
        #[arg(long)]
        answers: PathBuf,

        /// Student name
        #[arg(long)]
        student: Option<String>,

        /// Grade without saving the result
        #[arg(long)]
        no_save: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show saved results, newest first
    History {
        /// Only this student's results
        #[arg(long)]
        student: Option<String>,

        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file for the html format
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List topics
    Topics,

    /// Print the Present Perfect lesson
    Lesson,

    /// Create a starter ppdrill.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Practice {
            student,
            topic,
            count,
            seed,
        } => commands::practice::execute(student, topic, count, seed, config),
        Commands::Generate {
            topic,
            count,
            seed,
            output,
        } => commands::generate::execute(topic, count, seed, output, config),
        Commands::Grade {
            quiz,
            answers,
            student,
            no_save,
            format,
        } => commands::grade::execute(quiz, answers, student, no_save, format, config),
        Commands::History {
            student,
            format,
            output,
        } => commands::history::execute(student, format, output, config),
        Commands::Topics => commands::topics::execute(),
        Commands::Lesson => commands::lesson::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        if e
            .downcast_ref::<DrillError>()
            .is_some_and(DrillError::is_validation)
        {
            eprintln!("hint: see `ppdrill --help`; `ppdrill topics` lists topic slugs");
        }
        process::exit(1);
    }
}
