//! MSB-first bit buffers.
//!
//! `BitWriter` is the encoder's growable buffer: complete bytes are flushed to a
//! `Vec<u8>` and at most seven pending bits stay in an accumulator, so a
//! byte-aligned snapshot can be taken at any time without consuming the writer.
//! `BitReader` is the decoder's cursor, bounded to a caller-provided number of
//! usable bits so trailing padding is never read as data.

use crate::error::DecodeError;

/// Widest field either side accepts in one call
pub(crate) const MAX_FIELD_BITS: u32 = 32;

/// Growable MSB-first bit buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    /// Pending bits, right-aligned (only the low `pending` bits are meaningful)
    accum: u64,
    /// Number of pending bits (0-7)
    pending: u32,
}

impl BitWriter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `num_bits` bits of `value`, most significant first
    #[inline]
    pub fn write_bits(&mut self, value: u64, num_bits: u32) {
        debug_assert!(num_bits <= MAX_FIELD_BITS, "cannot write more than 32 bits at a time");
        debug_assert!(value >> num_bits == 0, "value {value} wider than {num_bits} bits");

        self.accum = (self.accum << num_bits) | value;
        self.pending += num_bits;

        // Flush complete bytes
        while self.pending >= 8 {
            self.pending -= 8;
            self.bytes.push((self.accum >> self.pending) as u8);
        }
        self.accum &= (1u64 << self.pending) - 1;
    }

    /// Total number of bits written
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending as usize
    }

    /// Zero bits needed to reach the next byte boundary (0-7)
    #[inline]
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.pending) % 8) as u8
    }

    /// Byte-aligned copy of the buffer, the last byte zero-padded
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.extend_from_slice(&self.bytes);
        if self.pending > 0 {
            out.push((self.accum << (8 - self.pending)) as u8);
        }
        out
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.accum = 0;
        self.pending = 0;
    }
}

/// MSB-first bit cursor over a borrowed buffer
pub(crate) struct BitReader<'a> {
    buf: &'a [u8],
    /// Next byte to load into `bits`
    pos: usize,
    bits: u64,
    /// Loaded but unread bits in `bits`
    left: u32,
    /// Unread usable bits, loaded or not
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `usable_bits` bits of `buf`
    #[inline]
    pub fn new(buf: &'a [u8], usable_bits: usize) -> Self {
        debug_assert!(usable_bits <= buf.len() * 8, "usable bits exceed buffer");
        let mut r = Self {
            buf,
            pos: 0,
            bits: 0,
            left: 0,
            remaining: usable_bits,
        };
        r.refill();
        r
    }

    /// Refill the bit buffer from the byte buffer
    #[inline]
    fn refill(&mut self) {
        while self.left <= 56 && self.pos < self.buf.len() {
            self.bits = (self.bits << 8) | u64::from(self.buf[self.pos]);
            self.pos += 1;
            self.left += 8;
        }
    }

    /// Read `n` bits (max 32) as a big-endian unsigned integer
    ///
    /// # Errors
    /// Returns `DecodeError::TruncatedBuffer` if fewer than `n` usable bits
    /// remain; the cursor does not move in that case.
    #[inline]
    pub fn read_bits(&mut self, n: u32) -> Result<u64, DecodeError> {
        debug_assert!(n <= MAX_FIELD_BITS, "cannot read more than 32 bits at a time");
        if (n as usize) > self.remaining {
            return Err(DecodeError::TruncatedBuffer {
                requested: n,
                available: self.remaining,
            });
        }
        if self.left < n {
            self.refill();
        }
        self.left -= n;
        self.remaining -= n as usize;
        Ok((self.bits >> self.left) & ((1u64 << n) - 1))
    }

    /// Unread usable bits
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
