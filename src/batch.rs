//! Batch driver: feed collected frames through a [`StreamAssembler`].

use anyhow::{Context, Result};
use mjpeg_forge_core::{is_valid, Dimensions, StreamAssembler};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A frame that was skipped, and why.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedFrame {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub submitted: usize,
    pub accepted: usize,
    pub dimensions: Option<Dimensions>,
    pub bytes_written: u64,
    pub rejected: Vec<RejectedFrame>,
    /// Length of each accepted frame, in output order.
    #[serde(skip)]
    pub frame_lengths: Vec<usize>,
}

impl BatchSummary {
    /// Established resolution as `WxH`, or `none`.
    pub fn resolution(&self) -> String {
        self.dimensions
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string())
    }
}

/// Add every file in `paths` to `assembler`, in order, then finish it.
///
/// Unreadable or rejected frames are logged and recorded in the summary.
/// A sink failure aborts the batch.
pub fn run_batch<W: Write>(
    paths: &[PathBuf],
    assembler: &mut StreamAssembler<W>,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        submitted: paths.len(),
        ..BatchSummary::default()
    };

    for path in paths {
        info!("Processing: {}", display_name(path));

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read frame {:?}: {}", path, e);
                summary.rejected.push(RejectedFrame {
                    path: path.clone(),
                    reason: format!("unreadable: {}", e),
                });
                continue;
            }
        };

        match assembler.add_frame(&data) {
            Ok(()) => {
                summary.accepted += 1;
                summary.frame_lengths.push(data.len());
            }
            Err(e) if e.is_fatal() => {
                return Err(e).with_context(|| format!("Failed to write frame {:?}", path));
            }
            Err(e) => {
                warn!("Failed to add frame {}: {}", display_name(path), e);
                summary.rejected.push(RejectedFrame {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    assembler
        .finish()
        .context("Failed to finalize MJPEG output")?;

    summary.dimensions = assembler.dimensions();
    summary.bytes_written = assembler.bytes_written();
    Ok(summary)
}

/// Re-read a written stream and check it holds exactly the accepted frames.
///
/// The check walks the recorded frame lengths rather than scanning for
/// markers, so frames that embed further JPEGs after their own EOI (MPF
/// secondary images, gain maps) still verify.
pub fn verify_output(path: &Path, summary: &BatchSummary) -> Result<()> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read output for verification: {:?}", path))?;

    if data.len() as u64 != summary.bytes_written {
        anyhow::bail!(
            "Output verification failed: expected {} bytes, found {}",
            summary.bytes_written,
            data.len()
        );
    }

    let mut offset = 0;
    for (index, &len) in summary.frame_lengths.iter().enumerate() {
        let frame = data.get(offset..offset + len).unwrap_or_default();
        if !is_valid(frame) {
            anyhow::bail!(
                "Output verification failed: frame {} at offset {} is not a complete JPEG",
                index,
                offset
            );
        }
        offset += len;
    }

    if offset != data.len() {
        anyhow::bail!(
            "Output verification failed: {} frames cover {} of {} bytes",
            summary.frame_lengths.len(),
            offset,
            data.len()
        );
    }

    info!("Verified {} frames in {:?}", summary.frame_lengths.len(), path);
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
