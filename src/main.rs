mod cli;

use mjpeg_forge::{
    batch::{self, BatchSummary},
    collect, config,
};
use mjpeg_forge_core::StreamAssembler;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mjpeg_forge=debug,mjpeg_forge_core=debug".to_string()
        } else {
            "mjpeg_forge=info,mjpeg_forge_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    if cli.recursive {
        config.input.recursive = true;
    }
    if cli.verify {
        config.output.verify = true;
    }

    let frames = collect::collect_frames(&cli.input, &config.input)?;
    tracing::info!("Found {} frames in {:?}", frames.len(), cli.input);

    let summary = if cli.dry_run {
        tracing::info!("Dry run: output will not be written");
        let mut assembler = StreamAssembler::new(std::io::sink());
        batch::run_batch(&frames, &mut assembler)?
    } else {
        let mut assembler = StreamAssembler::open(&cli.output)
            .with_context(|| format!("Could not open output file: {:?}", cli.output))?;
        let summary = batch::run_batch(&frames, &mut assembler)?;

        if config.output.verify {
            batch::verify_output(&cli.output, &summary)?;
        }
        summary
    };

    print_summary(&summary, cli.json)
}

fn print_summary(summary: &BatchSummary, json: bool) -> Result<()> {
    if json {
        let json_str = serde_json::to_string_pretty(summary)?;
        println!("{}", json_str);
        return Ok(());
    }

    println!("\nMJPEG creation complete:");
    println!(
        "- Processed frames: {}/{}",
        summary.accepted, summary.submitted
    );
    println!("- Resolution: {}", summary.resolution());

    if !summary.rejected.is_empty() {
        println!("- Skipped frames:");
        for rejected in &summary.rejected {
            println!("    {}: {}", rejected.path.display(), rejected.reason);
        }
    }

    Ok(())
}
