//! JPEG marker handling.
//!
//! Only the handful of markers needed to delimit and size a baseline JPEG
//! are understood here. Entropy-coded data is never inspected.

mod sof;
mod split;
mod validator;

pub use sof::{find_frame_header, parse_dimensions, FrameHeader};
pub use split::{split_frames, Frames};
pub use validator::is_valid;

use std::fmt;

/// Two-byte JPEG marker code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(pub [u8; 2]);

impl Marker {
    /// Start of image.
    pub const SOI: Self = Self([0xFF, 0xD8]);
    /// End of image.
    pub const EOI: Self = Self([0xFF, 0xD9]);
    /// Start of frame, baseline DCT.
    pub const SOF0: Self = Self([0xFF, 0xC0]);

    /// Marker code as raw bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Whether `data` holds this marker at `offset`.
    pub fn is_at(&self, data: &[u8], offset: usize) -> bool {
        data.get(offset..offset + 2) == Some(&self.0[..])
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.0[0], self.0[1])
    }
}

/// Pixel dimensions of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
