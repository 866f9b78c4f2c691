//! Error types for rangepack encoding and decoding operations.

use std::fmt;

/// Error returned when building an encoder or encoding a value fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Declared range has fewer than two representable values (`min >= max`)
    InvalidRange { min: i64, max: i64 },
    /// Value outside the declared range under the `Error` strategy
    OutOfRange { value: i64, min: i64, max: i64 },
    /// Range inference requested on an empty input
    EmptyInput,
}

/// Error returned when decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer unread bits than one value needs
    TruncatedBuffer { requested: u32, available: usize },
    /// Padding count is inconsistent with the buffer length and value width
    InvalidPadding {
        n_padding_bits: u8,
        total_bits: usize,
        bits_per_value: u32,
    },
    /// Value width is zero, wider than 32 bits, or wider than the value type
    InvalidWidth { bits_per_value: u32 },
    /// Decoded value does not fit the requested value type
    ValueOverflow { value: i128 },
    /// Buffer is too short to contain a frame header
    BufferTooShort { expected: usize, actual: usize },
}

/// Error returned when a strategy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub(crate) tag: String,
}

impl ParseStrategyError {
    /// The rejected strategy name
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "range min ({min}) should be smaller than range max ({max})")
            }
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} not in expected range [{min}, {max}]")
            }
            Self::EmptyInput => write!(f, "cannot infer a range from an empty input"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedBuffer { requested, available } => {
                write!(f, "truncated buffer: need {requested} bits, {available} left")
            }
            Self::InvalidPadding {
                n_padding_bits,
                total_bits,
                bits_per_value,
            } => {
                write!(
                    f,
                    "invalid padding: {n_padding_bits} padding bits in {total_bits} bits \
                     do not leave a multiple of {bits_per_value}"
                )
            }
            Self::InvalidWidth { bits_per_value } => {
                write!(f, "invalid value width: {bits_per_value} bits")
            }
            Self::ValueOverflow { value } => {
                write!(f, "decoded value {value} does not fit the value type")
            }
            Self::BufferTooShort { expected, actual } => {
                write!(f, "buffer too short: expected at least {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected strategy ({}), expected 'ignore', 'saturate' or 'error'",
            self.tag
        )
    }
}

impl std::error::Error for ParseStrategyError {}
