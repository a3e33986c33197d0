//! MJPEG stream assembly.
//!
//! [`StreamAssembler`] owns an output sink and the frame size established by
//! the first accepted frame. Every frame it accepts is appended to the sink
//! unmodified; frames that are malformed or sized differently are rejected
//! without touching the sink.

use crate::error::{Error, RejectReason, Result};
use crate::jpeg::{find_frame_header, is_valid, Dimensions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Appends validated JPEG frames to a sink.
///
/// The sink is flushed and released exactly once, by [`finish`] or when the
/// assembler is dropped, whichever comes first.
///
/// [`finish`]: StreamAssembler::finish
#[derive(Debug)]
pub struct StreamAssembler<W: Write> {
    sink: Option<W>,
    established: Option<Dimensions>,
    frames_written: usize,
    bytes_written: u64,
}

impl StreamAssembler<BufWriter<File>> {
    /// Create (or truncate) the output file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!("Opened MJPEG output {:?}", path);
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> StreamAssembler<W> {
    /// Wrap an arbitrary writer.
    pub fn new(sink: W) -> Self {
        Self {
            sink: Some(sink),
            established: None,
            frames_written: 0,
            bytes_written: 0,
        }
    }

    /// Validate `frame` and append it to the sink.
    ///
    /// Returns [`Error::Rejected`] when the frame is skipped; in that case
    /// nothing was written and the established dimensions are unchanged.
    /// [`Error::Io`] means the sink failed (or was already finished) and the
    /// output should be considered truncated.
    pub fn add_frame(&mut self, frame: &[u8]) -> Result<()> {
        if self.sink.is_none() {
            return Err(Error::sink_closed());
        }

        if !is_valid(frame) {
            return Err(RejectReason::InvalidStructure.into());
        }

        let header = find_frame_header(frame).ok_or(RejectReason::DimensionMarkerMissing)?;
        let found = header.dimensions;
        trace!("SOF0 at offset {}: {}", header.offset, found);

        match self.established {
            Some(expected) if expected != found => {
                return Err(RejectReason::DimensionMismatch { expected, found }.into());
            }
            Some(_) => {}
            None => {
                debug!("Established frame dimensions {}", found);
                self.established = Some(found);
            }
        }

        let sink = self.sink.as_mut().ok_or_else(Error::sink_closed)?;
        if let Err(e) = sink.write_all(frame) {
            // A partial frame may be in the sink; nothing more can be appended.
            self.sink = None;
            return Err(e.into());
        }

        self.frames_written += 1;
        self.bytes_written += frame.len() as u64;
        Ok(())
    }

    /// Dimensions shared by every accepted frame, once one has been accepted.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.established
    }

    /// Number of frames appended so far.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Number of bytes appended so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Whether the sink has been released.
    pub fn is_finished(&self) -> bool {
        self.sink.is_none()
    }

    /// Borrow the sink, if it has not been released.
    pub fn get_ref(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    /// Flush and release the sink. Later calls do nothing.
    ///
    /// A sink that already failed a write is released without a flush.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
            debug!(
                "Finished MJPEG output: {} frames, {} bytes",
                self.frames_written, self.bytes_written
            );
        }
        Ok(())
    }

    /// Flush and return the sink.
    pub fn into_inner(mut self) -> Result<W> {
        let mut sink = self.sink.take().ok_or_else(Error::sink_closed)?;
        sink.flush()?;
        Ok(sink)
    }
}

impl<W: Write> Drop for StreamAssembler<W> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(e) = sink.flush() {
                warn!("Failed to flush MJPEG output on drop: {}", e);
            }
        }
    }
}
