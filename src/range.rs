//! Shift and width derivation shared by the encoder and decoder.

use crate::error::EncodeError;
use crate::value::Value;

/// Number of bits needed to represent `n` (0 for 0)
#[inline]
#[must_use]
pub const fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// A validated inclusive value range `[min, max]`
///
/// Values are normalized to `value + shift` with `shift = -min`, which maps the
/// range onto `[0, max - min]`. Each normalized value is packed in
/// `bits_per_value` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<V: Value> {
    min: V,
    max: V,
    shift: i64,
    bits_per_value: u32,
}

impl<V: Value> Range<V> {
    /// Validate a range and derive its shift and value width.
    ///
    /// # Errors
    /// Returns `EncodeError::InvalidRange` unless `min < max`.
    pub fn new(min: V, max: V) -> Result<Self, EncodeError> {
        if min >= max {
            return Err(EncodeError::InvalidRange {
                min: min.to_i64(),
                max: max.to_i64(),
            });
        }

        let shift = -min.to_i64();
        // Width is never below one bit
        let span = (max.to_i64() + shift) as u64;
        let bits_per_value = bit_length(span).max(1);

        Ok(Self {
            min,
            max,
            shift,
            bits_per_value,
        })
    }

    /// Inclusive lower bound
    #[inline]
    #[must_use]
    pub fn min(&self) -> V {
        self.min
    }

    /// Inclusive upper bound
    #[inline]
    #[must_use]
    pub fn max(&self) -> V {
        self.max
    }

    /// Additive normalization, `-min`
    #[inline]
    #[must_use]
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Packed width of each value
    #[inline]
    #[must_use]
    pub fn bits_per_value(&self) -> u32 {
        self.bits_per_value
    }

    /// Whether `value` lies within `[min, max]`
    #[inline]
    #[must_use]
    pub fn contains(&self, value: V) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamp `value` to the violated bound
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: V) -> V {
        value.clamp(self.min, self.max)
    }

    /// Map an in-range value to its stored form in `[0, max - min]`
    #[inline]
    #[must_use]
    pub fn normalize(&self, value: V) -> u64 {
        debug_assert!(self.contains(value), "normalize called with out-of-range value");
        (value.to_i64() + self.shift) as u64
    }

    /// Map a stored value back to the value domain
    #[inline]
    #[must_use]
    pub fn denormalize(&self, stored: u64) -> i64 {
        stored as i64 - self.shift
    }
}
