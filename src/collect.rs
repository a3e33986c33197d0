//! Input frame discovery.
//!
//! Frames are the files in the input directory whose extension matches the
//! configured list, ordered lexicographically by path.

use crate::config::InputConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Check if a path has one of the given extensions (case-insensitive).
pub fn is_frame_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Collect and sort the frame files under `dir`.
///
/// Fails if `dir` is missing, is not a directory, or contains no frames.
pub fn collect_frames(dir: &Path, config: &InputConfig) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        anyhow::bail!("Input directory does not exist: {:?}", dir);
    }
    if !dir.is_dir() {
        anyhow::bail!("Input path is not a directory: {:?}", dir);
    }

    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let mut frames = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(config.follow_links)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_frame_file(path, &config.extensions) {
            frames.push(path.to_path_buf());
        } else {
            debug!("Ignoring non-frame file {:?}", path);
        }
    }

    if frames.is_empty() {
        anyhow::bail!("No JPEG files found in directory: {:?}", dir);
    }

    frames.sort();
    Ok(frames)
}
