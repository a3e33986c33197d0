//! Synthetic JPEG buffers for integration tests.

#![allow(dead_code)]

/// Minimal baseline JPEG: SOI, SOF0 with one component, `payload`, EOI.
pub fn jpeg_with_payload(width: u16, height: u16, payload: &[u8]) -> Vec<u8> {
    let [h0, h1] = height.to_be_bytes();
    let [w0, w1] = width.to_be_bytes();

    let mut data = vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xC0, // SOF0
        0x00, 0x0B, // Lf
        0x08, // P
        h0, h1, // Y
        w0, w1, // X
        0x01, // Nf
        0x01, 0x11, 0x00, // Ci, Hi/Vi, Tqi
    ];
    data.extend_from_slice(payload);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

pub fn jpeg(width: u16, height: u16) -> Vec<u8> {
    jpeg_with_payload(width, height, &[])
}
