//! Splitting an assembled MJPEG stream back into frames.

use super::Marker;

/// Iterator over the JPEG frames of a concatenated stream.
///
/// A frame starts with SOI at the current position and ends at the first EOI
/// that is either the last two bytes of the stream or directly followed by
/// the next frame's SOI. Iteration stops at the first position that does not
/// start with SOI, or at an unterminated trailing frame.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Frames<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset where the next frame would start.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn frame_end(&self) -> Option<usize> {
        let data = self.data;
        (self.pos + 2..data.len().saturating_sub(1))
            .find(|&i| {
                Marker::EOI.is_at(data, i)
                    && (i + 2 == data.len() || Marker::SOI.is_at(data, i + 2))
            })
            .map(|i| i + 2)
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if !Marker::SOI.is_at(self.data, self.pos) {
            self.pos = self.data.len();
            return None;
        }

        match self.frame_end() {
            Some(end) => {
                let frame = &self.data[self.pos..end];
                self.pos = end;
                Some(frame)
            }
            None => {
                self.pos = self.data.len();
                None
            }
        }
    }
}

/// Split a concatenated MJPEG stream into its frames.
pub fn split_frames(data: &[u8]) -> Vec<&[u8]> {
    Frames::new(data).collect()
}
