//! mjpeg-forge - assemble JPEG frames into an MJPEG stream
//!
//! This library crate exposes the batch driver for integration testing.

pub mod batch;
pub mod collect;
pub mod config;
