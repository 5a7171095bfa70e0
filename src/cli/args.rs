use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data as hex
    Encode(EncodeArgs),

    /// Decode hex back into binary data
    Decode(DecodeArgs),

    /// Inspect the alphabet registry
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to encode with (defaults to the configured default alphabet)
    #[arg(short = 'a', long, conflicts_with = "upper")]
    pub alphabet: Option<String>,

    /// Use upper-case hex digits
    #[arg(short = 'u', long)]
    pub upper: bool,

    /// Do not print a trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to decode from (defaults to the configured default alphabet)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Accept only the exact alphabet symbols, not their other case
    #[arg(long)]
    pub strict: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List registered alphabets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific alphabet
    Show {
        /// Alphabet name
        alphabet: String,
    },
}
