//! Decoding functionality for rangepack encoded content.

use std::marker::PhantomData;

use crate::bits::BitReader;
use crate::content::EncodedContent;
use crate::error::DecodeError;
use crate::value::Value;

/// Cursor over the values of an [`EncodedContent`]
///
/// Reads values front to back in encoding order. The cursor stops at the end
/// of the data bits; the padding of the last byte is never read.
///
/// # Example
/// ```
/// use rangepack::{Decoder, Encoder, Strategy};
///
/// let mut enc = Encoder::<i16>::new(-50, 50, Strategy::Saturate).unwrap();
/// enc.encode_many([-50, 0, 50]).unwrap();
/// let content = enc.finalize(true);
///
/// let mut dec = Decoder::<i16>::new(&content).unwrap();
/// assert_eq!(dec.remaining(), 3);
/// assert_eq!(dec.decode_next().unwrap(), -50);
/// assert_eq!(dec.collect::<Result<Vec<_>, _>>().unwrap(), vec![0, 50]);
/// ```
pub struct Decoder<'a, V: Value> {
    reader: BitReader<'a>,
    shift: i64,
    bits_per_value: u32,
    _marker: PhantomData<V>,
}

impl<'a, V: Value> Decoder<'a, V> {
    /// Create a decoder positioned at the first value.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidWidth` or `DecodeError::InvalidPadding` if
    /// the record is inconsistent or its values are wider than `V`.
    pub fn new(content: &'a EncodedContent) -> Result<Self, DecodeError> {
        let usable_bits = content.usable_bits()?;
        if content.bits_per_value > V::BITS {
            return Err(DecodeError::InvalidWidth {
                bits_per_value: content.bits_per_value,
            });
        }
        Ok(Self {
            reader: BitReader::new(&content.encoded, usable_bits),
            shift: content.shift,
            bits_per_value: content.bits_per_value,
            _marker: PhantomData,
        })
    }

    /// Decode the next value
    ///
    /// # Errors
    /// - `DecodeError::TruncatedBuffer` if fewer than `bits_per_value` data
    ///   bits remain
    /// - `DecodeError::ValueOverflow` if the value does not fit `V`
    #[inline]
    pub fn decode_next(&mut self) -> Result<V, DecodeError> {
        let stored = self.reader.read_bits(self.bits_per_value)?;
        let value = i128::from(stored) - i128::from(self.shift);
        i64::try_from(value)
            .ok()
            .and_then(V::try_from_i64)
            .ok_or(DecodeError::ValueOverflow { value })
    }

    /// Number of values left
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.reader.remaining() / self.bits_per_value as usize
    }
}

impl<V: Value> Iterator for Decoder<'_, V> {
    type Item = Result<V, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        Some(self.decode_next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// Decode every value of `content`, in encoding order
///
/// # Type Parameters
/// * `V` - Value type (i8, i16, or i32). Values that do not fit it are an error.
///
/// # Errors
/// - `DecodeError::InvalidWidth` / `DecodeError::InvalidPadding` for an
///   inconsistent record or one wider than `V`
/// - `DecodeError::ValueOverflow` if a value does not fit `V`
///
/// # Example
/// ```
/// use rangepack::{decode_all, EncodedContent};
///
/// // [1,0,1,1,0,0,0,1] packed one bit each
/// let content = EncodedContent {
///     encoded: vec![0b1011_0001],
///     shift: 0,
///     bits_per_value: 1,
///     n_padding_bits: 0,
/// };
/// assert_eq!(decode_all::<i8>(&content).unwrap(), vec![1, 0, 1, 1, 0, 0, 0, 1]);
/// ```
#[must_use = "decoding returns values that should be used"]
pub fn decode_all<V: Value>(content: &EncodedContent) -> Result<Vec<V>, DecodeError> {
    let mut decoder = Decoder::<V>::new(content)?;
    let nb_values = decoder.remaining();
    let mut result = Vec::with_capacity(nb_values);
    for _ in 0..nb_values {
        result.push(decoder.decode_next()?);
    }
    Ok(result)
}
