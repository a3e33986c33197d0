//! SOI/EOI boundary validation.

use super::Marker;

/// Smallest buffer that can hold both boundary markers.
const MIN_LEN: usize = 4;

/// Check that `data` begins with SOI and ends with EOI.
///
/// This is a structural check only. Interior markers and entropy-coded data
/// are not examined, so a corrupt image with intact boundaries passes.
pub fn is_valid(data: &[u8]) -> bool {
    if data.len() < MIN_LEN {
        return false;
    }

    Marker::SOI.is_at(data, 0) && Marker::EOI.is_at(data, data.len() - 2)
}
