use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_DATA_PATH: &str = "data/questions.json";

#[derive(Debug, Parser)]
#[command(
    name = "quiz-tools",
    version,
    about = "Import, rebuild, renumber and clean quiz question corpora"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse pasted questions and append them to the corpus
    Import {
        /// Text file with the pasted questions
        file: PathBuf,

        /// Corpus file to merge into
        #[arg(long = "data", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },

    /// Rebuild a corpus from a numbered question dump
    Rebuild {
        /// Numbered text dump ("1. Question" headers)
        file: PathBuf,

        /// Corpus file to overwrite
        #[arg(long = "out", default_value = DEFAULT_DATA_PATH)]
        out: PathBuf,
    },

    /// Renumber "N. (points)" headers in a text dump, keeping a .bak copy
    Renumber {
        /// Text dump to rewrite in place
        file: PathBuf,
    },

    /// Print the first and last questions of a corpus
    Show {
        #[arg(long = "data", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Number of questions to print from each end
        #[arg(long = "count", default_value_t = 10)]
        count: usize,
    },

    /// Report near-duplicate questions
    Dedupe {
        #[arg(long = "data", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Similarity threshold between 0 and 1
        #[arg(long = "threshold", default_value_t = quiz_core::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Write the deduplicated corpus back
        #[arg(long = "write")]
        write: bool,
    },
}
