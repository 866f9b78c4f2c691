//! The encoded content record and its binary frame.

use serde::{Deserialize, Serialize};

use crate::bits::MAX_FIELD_BITS;
use crate::constants::{
    read_i64_le, write_i64_le, HEADER_SIZE, MAX_PADDING_BITS, OFF_BITS_PER_VALUE,
    OFF_PADDING_BITS, OFF_SHIFT,
};
use crate::error::DecodeError;

/// Packed values plus everything needed to unpack them
///
/// `encoded` holds the values back to back, each `bits_per_value` wide and
/// most significant bit first. The last `n_padding_bits` bits of the final
/// byte are zero filler and never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedContent {
    /// Packed bit stream
    pub encoded: Vec<u8>,
    /// `stored = value + shift`, i.e. `-min` of the encoding range
    pub shift: i64,
    /// Width of every packed value
    pub bits_per_value: u32,
    /// Unused trailing bits in the last byte (0-7)
    pub n_padding_bits: u8,
}

impl EncodedContent {
    /// Total bits in `encoded`, padding included
    #[inline]
    #[must_use]
    pub fn total_bits(&self) -> usize {
        self.encoded.len() * 8
    }

    /// Check width and padding, returning the number of data bits.
    ///
    /// # Errors
    /// - `DecodeError::InvalidWidth` if `bits_per_value` is 0 or above 32
    /// - `DecodeError::InvalidPadding` if `n_padding_bits` is above 7, exceeds
    ///   the buffer, or leaves a bit count that is not a multiple of the width
    pub fn usable_bits(&self) -> Result<usize, DecodeError> {
        if self.bits_per_value == 0 || self.bits_per_value > MAX_FIELD_BITS {
            return Err(DecodeError::InvalidWidth {
                bits_per_value: self.bits_per_value,
            });
        }

        let total_bits = self.total_bits();
        let invalid = DecodeError::InvalidPadding {
            n_padding_bits: self.n_padding_bits,
            total_bits,
            bits_per_value: self.bits_per_value,
        };

        if self.n_padding_bits > MAX_PADDING_BITS {
            return Err(invalid);
        }
        let usable = total_bits
            .checked_sub(usize::from(self.n_padding_bits))
            .ok_or(invalid)?;
        if usable % self.bits_per_value as usize != 0 {
            return Err(invalid);
        }
        Ok(usable)
    }

    /// Number of packed values.
    ///
    /// # Errors
    /// Same as [`EncodedContent::usable_bits`].
    pub fn value_count(&self) -> Result<usize, DecodeError> {
        Ok(self.usable_bits()? / self.bits_per_value as usize)
    }

    /// Serialize into the binary frame
    ///
    /// | Offset | Size | Field |
    /// |--------|------|-------|
    /// | 0 | 1 | `bits_per_value` |
    /// | 1 | 1 | `n_padding_bits` |
    /// | 2 | 8 | `shift` (i64, little-endian) |
    /// | 10 | n | `encoded` |
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf[OFF_BITS_PER_VALUE] = self.bits_per_value as u8;
        buf[OFF_PADDING_BITS] = self.n_padding_bits;
        write_i64_le(&mut buf, OFF_SHIFT, self.shift);
        buf.extend_from_slice(&self.encoded);
        buf
    }

    /// Parse and validate a binary frame produced by [`EncodedContent::to_bytes`].
    ///
    /// # Errors
    /// Returns `DecodeError::BufferTooShort` if the header is incomplete, or
    /// any error of [`EncodedContent::usable_bits`].
    pub fn from_bytes(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < HEADER_SIZE {
            return Err(DecodeError::BufferTooShort {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let content = Self {
            encoded: buf[HEADER_SIZE..].to_vec(),
            shift: read_i64_le(buf, OFF_SHIFT),
            bits_per_value: u32::from(buf[OFF_BITS_PER_VALUE]),
            n_padding_bits: buf[OFF_PADDING_BITS],
        };
        content.usable_bits()?;
        Ok(content)
    }
}
