use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mjpeg-forge")]
#[command(author, version, about = "Assemble a directory of JPEG frames into an MJPEG stream")]
pub struct Cli {
    /// Directory containing the JPEG frames
    #[arg(required = true)]
    pub input: PathBuf,

    /// MJPEG file to write
    #[arg(required = true)]
    pub output: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also collect frames from subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Validate frames without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Re-read the output and check its frame count
    #[arg(long, conflicts_with = "dry_run")]
    pub verify: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
