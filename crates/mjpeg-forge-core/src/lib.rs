//! # mjpeg-forge-core
//!
//! JPEG marker validation and MJPEG stream assembly.
//!
//! An MJPEG stream produced by this crate is a bare concatenation of baseline
//! JPEG images. There is no container header and no frame index: readers find
//! frame boundaries by scanning for the SOI/EOI markers each image carries.
//!
//! ## Modules
//!
//! - `jpeg` - marker constants, boundary validation, SOF0 header decoding and
//!   re-splitting of an assembled stream
//! - `assembler` - [`StreamAssembler`], which validates frames, enforces a
//!   single frame size and appends accepted frames to its sink
//! - `error` - [`Error`] and the per-frame [`RejectReason`]
//!
//! ## Example
//!
//! ```no_run
//! use mjpeg_forge_core::StreamAssembler;
//!
//! let mut assembler = StreamAssembler::open("out.mjpeg").unwrap();
//!
//! for frame in [std::fs::read("0001.jpg").unwrap(), std::fs::read("0002.jpg").unwrap()] {
//!     match assembler.add_frame(&frame) {
//!         Ok(()) => {}
//!         Err(e) if e.is_fatal() => panic!("{}", e),
//!         Err(e) => eprintln!("skipped frame: {}", e),
//!     }
//! }
//!
//! assembler.finish().unwrap();
//! println!("{:?}", assembler.dimensions());
//! ```

pub mod assembler;
pub mod error;
pub mod jpeg;

pub use assembler::StreamAssembler;
pub use error::{Error, RejectReason, Result};
pub use jpeg::{find_frame_header, is_valid, split_frames, Dimensions, Frames, Marker};
