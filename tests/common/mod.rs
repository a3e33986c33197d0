//! Shared fixtures for CLI and batch tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Minimal baseline JPEG with a SOF0 header for `width` x `height`.
pub fn jpeg(width: u16, height: u16) -> Vec<u8> {
    let [h0, h1] = height.to_be_bytes();
    let [w0, w1] = width.to_be_bytes();
    vec![
        0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x0B, 0x08, h0, h1, w0, w1, 0x01, 0x01, 0x11, 0x00, 0xFF,
        0xD9,
    ]
}

/// Write each `(name, bytes)` pair into `dir`.
pub fn write_frames(dir: &Path, frames: &[(&str, Vec<u8>)]) {
    for (name, data) in frames {
        fs::write(dir.join(name), data).unwrap();
    }
}
