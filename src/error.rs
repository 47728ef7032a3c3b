//! Error types.

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported while building a codec or encoding/decoding a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A width in [`Config`](crate::Config) is zero or out of range.
    InvalidConfig(&'static str),

    /// The modulus is zero or one.
    InvalidModulus,

    /// The modulus does not fit below the Montgomery reducer `R = 2^max`.
    ModulusTooLarge {
        /// Bit length of the modulus.
        bits: u64,
        /// Montgomery base width.
        max: u32,
    },

    /// The modulus is not coprime to the Montgomery reducer.
    NotInvertible,

    /// The digit width passed to `unpack` is zero or wider than the padded digit.
    InvalidDigitWidth {
        /// Canonical digit width requested.
        digit_bits: u32,
        /// Padded digit width of the wire format.
        padded_bits: u32,
    },

    /// A round bound does not fit its fixed-width field.
    FieldOverflow {
        /// Offending round value.
        value: u64,
        /// Width of the round field in bits.
        width: u32,
    },

    /// The value to pack is wider than the input value field.
    ValueOverflow {
        /// Bit length of the encoded value.
        bits: u64,
        /// Capacity of the value field in bits.
        capacity: u64,
    },

    /// The output buffer holds more bits than the output layout allows.
    MalformedMessage {
        /// Bit length of the buffer.
        bits: u64,
        /// Capacity of the output layout in bits.
        capacity: u64,
    },

    /// The codec name is not recognized.
    UnknownCodec,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(field) => write!(f, "invalid configuration: {field}"),
            Self::InvalidModulus => write!(f, "modulus must be greater than one"),
            Self::ModulusTooLarge { bits, max } => {
                write!(f, "{bits}-bit modulus does not fit below 2^{max}")
            }
            Self::NotInvertible => write!(f, "modulus is not coprime to the Montgomery reducer"),
            Self::InvalidDigitWidth {
                digit_bits,
                padded_bits,
            } => write!(
                f,
                "digit width {digit_bits} is invalid for {padded_bits}-bit padded digits"
            ),
            Self::FieldOverflow { value, width } => {
                write!(f, "round value {value} does not fit in {width} bits")
            }
            Self::ValueOverflow { bits, capacity } => {
                write!(f, "{bits}-bit value exceeds {capacity}-bit input field")
            }
            Self::MalformedMessage { bits, capacity } => {
                write!(f, "{bits}-bit message exceeds {capacity}-bit output layout")
            }
            Self::UnknownCodec => write!(f, "unknown codec"),
        }
    }
}

impl core::error::Error for Error {}
