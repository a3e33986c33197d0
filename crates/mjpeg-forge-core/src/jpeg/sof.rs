//! SOF0 frame header decoding.
//!
//! Layout following the marker (offsets relative to the `FF` byte):
//!
//! ```text
//! +0  FF C0   marker
//! +2  Lf      segment length (u16 BE)
//! +4  P       sample precision
//! +5  Y       number of lines / height (u16 BE)
//! +7  X       samples per line / width (u16 BE)
//! ```

use super::{Dimensions, Marker};

const HEIGHT_OFFSET: usize = 5;
const WIDTH_OFFSET: usize = 7;

/// Bytes that must be readable from the marker onwards to decode both fields.
const HEADER_SPAN: usize = WIDTH_OFFSET + 2;

/// A located SOF0 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Offset of the `FF C0` marker within the buffer.
    pub offset: usize,
    pub dimensions: Dimensions,
}

/// Find the first SOF0 header in `data` and decode its dimensions.
///
/// The scan runs from offset 0 and only considers markers followed by a full
/// header; a marker too close to the end of the buffer is treated as absent.
/// Later SOF0 occurrences are ignored.
pub fn find_frame_header(data: &[u8]) -> Option<FrameHeader> {
    let offset = data
        .windows(HEADER_SPAN)
        .position(|window| Marker::SOF0.is_at(window, 0))?;

    let header = &data[offset..offset + HEADER_SPAN];
    let height = u16::from_be_bytes([header[HEIGHT_OFFSET], header[HEIGHT_OFFSET + 1]]);
    let width = u16::from_be_bytes([header[WIDTH_OFFSET], header[WIDTH_OFFSET + 1]]);

    Some(FrameHeader {
        offset,
        dimensions: Dimensions::new(width, height),
    })
}

/// Decode the frame dimensions of a JPEG buffer, if it has a SOF0 header.
pub fn parse_dimensions(data: &[u8]) -> Option<Dimensions> {
    find_frame_header(data).map(|header| header.dimensions)
}
