//! Frame layout constants and header helpers.

/// Frame header size in bytes (1 + 1 + 8 = 10)
pub(crate) const HEADER_SIZE: usize = 10;

// Header field offsets
pub(crate) const OFF_BITS_PER_VALUE: usize = 0;
pub(crate) const OFF_PADDING_BITS: usize = 1;
pub(crate) const OFF_SHIFT: usize = 2;

/// Largest valid padding count; padding never fills a whole byte
pub(crate) const MAX_PADDING_BITS: u8 = 7;

/// Read an i64 from buffer in little-endian format
#[inline]
pub(crate) fn read_i64_le(buf: &[u8], offset: usize) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    i64::from_le_bytes(bytes)
}

/// Write an i64 to buffer in little-endian format
#[inline]
pub(crate) fn write_i64_le(buf: &mut [u8], offset: usize, value: i64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}
