use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jom",
    about = "jom — structural merge of JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a source document over a target document
    Merge(MergeArgs),
    /// Parse a document and reprint it (round-trip check)
    Show(ShowArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Source document; its values take precedence ("-" for stdin)
    pub source: PathBuf,
    /// Target document; fills in what source leaves out ("-" for stdin)
    pub target: PathBuf,
    /// Write the merged document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Document to parse and reprint ("-" for stdin)
    pub file: PathBuf,
    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}
