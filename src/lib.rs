//! `rangepack` - Fixed-width bit packing for bounded-range integer time series
//!
//! When every value of a series is known to lie in an inclusive range
//! `[min, max]`, each one can be stored in exactly
//! `bit_length(max - min)` bits. `rangepack` packs values back to back at that
//! width and unpacks them exactly.
//!
//! # Example
//! ```
//! use rangepack::{decode_all, Encoder, Strategy};
//!
//! // Percentages: [0, 100] needs 7 bits per value
//! let mut encoder = Encoder::<i32>::new(0, 100, Strategy::Saturate).unwrap();
//! encoder.encode_next(0).unwrap();
//! encoder.encode_next(50).unwrap();
//! encoder.encode_next(100).unwrap();
//!
//! let content = encoder.finalize(true);
//! assert_eq!(content.encoded.len(), 3); // 21 bits
//! assert_eq!(content.n_padding_bits, 3);
//!
//! assert_eq!(decode_all::<i32>(&content).unwrap(), vec![0, 50, 100]);
//! ```
//!
//! # Encoding
//!
//! | Quantity | Derivation |
//! |----------|------------|
//! | `shift` | `-min` |
//! | stored value | `value + shift`, in `[0, max - min]` |
//! | `bits_per_value` | `bit_length(max - min)`, at least 1 |
//! | `n_padding_bits` | `(8 - total_bits % 8) % 8` |
//!
//! Stored values are written most significant bit first with no padding
//! between them. Only the final byte is padded, with zero bits that a decoder
//! never reads. The number of values is therefore implied:
//! `(len(encoded) * 8 - n_padding_bits) / bits_per_value`.
//!
//! # Out-of-range values
//!
//! | Strategy | Effect |
//! |----------|--------|
//! | `Saturate` (default) | clamped to the violated bound, then encoded |
//! | `Ignore` | dropped; the decoded sequence is shorter than the input |
//! | `Error` | `EncodeError::OutOfRange`, encoder unchanged |
//!
//! Each out-of-range value is reported as a `tracing` warning. Install a
//! subscriber to see them; without one they cost nothing and change nothing.
//!
//! # Binary Frame
//!
//! [`EncodedContent::to_bytes`] writes a 10-byte header followed by the
//! packed bits:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | `bits_per_value` (1-32) |
//! | 1 | 1 | `n_padding_bits` (0-7) |
//! | 2 | 8 | `shift` (i64, little-endian) |
//! | 10 | n | `encoded` |
//!
//! ## Supported Ranges
//! - Values: `i8`, `i16`, `i32`
//! - Width: 1-32 bits per value
//! - Ranges must hold at least two values (`min < max`)

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod bits;
mod constants;
mod content;
mod decoder;
mod encoder;
mod error;
mod range;
mod strategy;
mod value;


// Re-export public API
pub use content::EncodedContent;
pub use decoder::{decode_all, Decoder};
pub use encoder::{encode_all, infer_range, Encoder};
pub use error::{DecodeError, EncodeError, ParseStrategyError};
pub use range::{bit_length, Range};
pub use strategy::Strategy;
pub use value::Value;
