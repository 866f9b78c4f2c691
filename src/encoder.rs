//! Encoder for rangepack fixed-width bit packing.

use crate::bits::BitWriter;
use crate::content::EncodedContent;
use crate::error::EncodeError;
use crate::range::Range;
use crate::strategy::Strategy;
use crate::value::Value;

/// Encoder for a fixed value range
///
/// Every accepted value is stored as `value - min` in `bits_per_value` bits,
/// appended to a growable bit buffer. The range and strategy are fixed at
/// construction; encoding under a different range needs a new encoder.
///
/// Generic over value type V (i8, i16, or i32).
#[derive(Debug, Clone)]
pub struct Encoder<V: Value> {
    range: Range<V>,
    strategy: Strategy,
    bits: BitWriter,
    count: usize,
}

impl<V: Value> Encoder<V> {
    /// Create an encoder for the inclusive range `[min, max]`
    ///
    /// # Errors
    /// Returns `EncodeError::InvalidRange` unless `min < max`.
    pub fn new(min: V, max: V, strategy: Strategy) -> Result<Self, EncodeError> {
        Ok(Self::with_range(Range::new(min, max)?, strategy))
    }

    /// Create an encoder for an already validated range
    #[must_use]
    pub fn with_range(range: Range<V>, strategy: Strategy) -> Self {
        tracing::debug!(
            min = ?range.min(),
            max = ?range.max(),
            shift = range.shift(),
            bits_per_value = range.bits_per_value(),
            %strategy,
            "encoder initialized"
        );
        Self {
            range,
            strategy,
            bits: BitWriter::new(),
            count: 0,
        }
    }

    /// Encode one value
    ///
    /// Returns `Ok(true)` if the value (possibly saturated) was appended and
    /// `Ok(false)` if the `Ignore` strategy dropped it.
    ///
    /// # Errors
    /// Returns `EncodeError::OutOfRange` for an out-of-range value under the
    /// `Error` strategy. The encoder is left unchanged.
    #[inline]
    pub fn encode_next(&mut self, value: V) -> Result<bool, EncodeError> {
        let value = if self.range.contains(value) {
            value
        } else {
            match self.out_of_range(value)? {
                Some(clamped) => clamped,
                None => return Ok(false),
            }
        };

        self.bits
            .write_bits(self.range.normalize(value), self.range.bits_per_value());
        self.count += 1;
        Ok(true)
    }

    /// Apply the strategy to an out-of-range value: `Some` carries the value
    /// to encode, `None` means drop it
    #[cold]
    fn out_of_range(&self, value: V) -> Result<Option<V>, EncodeError> {
        tracing::warn!(
            value = ?value,
            min = ?self.range.min(),
            max = ?self.range.max(),
            strategy = %self.strategy,
            "value not in expected range"
        );
        match self.strategy {
            Strategy::Error => Err(EncodeError::OutOfRange {
                value: value.to_i64(),
                min: self.range.min().to_i64(),
                max: self.range.max().to_i64(),
            }),
            Strategy::Ignore => Ok(None),
            Strategy::Saturate => {
                let clamped = self.range.clamp(value);
                tracing::warn!(value = ?clamped, "value saturated");
                Ok(Some(clamped))
            }
        }
    }

    /// Encode values in order, returning how many were appended
    ///
    /// # Errors
    /// Stops at the first value rejected by `encode_next`; values before it
    /// stay encoded.
    pub fn encode_many<I>(&mut self, values: I) -> Result<usize, EncodeError>
    where
        I: IntoIterator<Item = V>,
    {
        let mut encoded = 0;
        for value in values {
            if self.encode_next(value)? {
                encoded += 1;
            }
        }
        Ok(encoded)
    }

    /// Build the content record from the buffer
    ///
    /// With `reinit` the buffer and count are cleared afterwards, so the
    /// encoder starts over empty. Without it, later calls return the content
    /// accumulated so far, including what earlier calls returned.
    #[must_use = "finalize returns the encoded content"]
    pub fn finalize(&mut self, reinit: bool) -> EncodedContent {
        let content = EncodedContent {
            encoded: self.bits.to_bytes(),
            shift: self.range.shift(),
            bits_per_value: self.range.bits_per_value(),
            n_padding_bits: self.bits.padding_bits(),
        };
        if reinit {
            self.reset();
        }
        content
    }

    /// Clear the buffer and count without producing content
    #[inline]
    pub fn reset(&mut self) {
        self.bits.clear();
        self.count = 0;
    }

    /// Number of values encoded since the last reset
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether nothing has been encoded since the last reset
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bits written since the last reset, padding excluded
    #[inline]
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bits.bit_len()
    }

    /// The validated encoding range
    #[inline]
    #[must_use]
    pub fn range(&self) -> &Range<V> {
        &self.range
    }

    /// Out-of-range policy
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Additive normalization, `-min`
    #[inline]
    #[must_use]
    pub fn shift(&self) -> i64 {
        self.range.shift()
    }

    /// Packed width of each value
    #[inline]
    #[must_use]
    pub fn bits_per_value(&self) -> u32 {
        self.range.bits_per_value()
    }
}

/// Smallest and largest value of `values`
///
/// # Errors
/// Returns `EncodeError::EmptyInput` if `values` is empty.
pub fn infer_range<V: Value>(values: &[V]) -> Result<(V, V), EncodeError> {
    let (&first, rest) = values.split_first().ok_or(EncodeError::EmptyInput)?;
    Ok(rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

/// Encode a whole sequence with a fresh encoder
///
/// A missing bound is inferred from `values`.
///
/// # Errors
/// - `EncodeError::EmptyInput` if a bound must be inferred from an empty input
/// - `EncodeError::InvalidRange` if the (possibly inferred) range is not `min < max`
/// - `EncodeError::OutOfRange` for an out-of-range value under `Strategy::Error`
///
/// # Example
/// ```
/// use rangepack::{decode_all, encode_all, Strategy};
///
/// let content = encode_all(&[0i32, 50, 100], Some(0), Some(100), Strategy::Saturate).unwrap();
/// assert_eq!(content.bits_per_value, 7);
/// assert_eq!(content.n_padding_bits, 3);
/// assert_eq!(decode_all::<i32>(&content).unwrap(), vec![0, 50, 100]);
/// ```
pub fn encode_all<V: Value>(
    values: &[V],
    min: Option<V>,
    max: Option<V>,
    strategy: Strategy,
) -> Result<EncodedContent, EncodeError> {
    let (min, max) = match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (min, max) => {
            let (lo, hi) = infer_range(values)?;
            (min.unwrap_or(lo), max.unwrap_or(hi))
        }
    };

    let mut encoder = Encoder::new(min, max, strategy)?;
    encoder.encode_many(values.iter().copied())?;
    Ok(encoder.finalize(true))
}
