//! Error types for mjpeg-forge-core.

use crate::jpeg::Dimensions;
use std::io;
use thiserror::Error;

/// Result type for mjpeg-forge-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single frame was refused by the assembler.
///
/// Rejections are recoverable: the frame is skipped, nothing is written and
/// the assembler state is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The buffer does not start with SOI or does not end with EOI.
    #[error("invalid JPEG structure: missing SOI/EOI boundary markers")]
    InvalidStructure,

    /// Boundary markers are present but no usable SOF0 header was found.
    #[error("SOF0 frame header marker not found")]
    DimensionMarkerMissing,

    /// The frame decodes to a size other than the established baseline.
    #[error("frame dimensions {found} do not match established {expected}")]
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },
}

/// Error type for mjpeg-forge-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink could not be opened, written or flushed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The frame was rejected; the batch may continue.
    #[error("frame rejected: {0}")]
    Rejected(#[from] RejectReason),
}

impl Error {
    /// Whether the error leaves the output in an unusable state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// The rejection reason, if this is a per-frame rejection.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Io(_) => None,
        }
    }

    pub(crate) fn sink_closed() -> Self {
        Self::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "output sink already finalized",
        ))
    }
}
