//! Accelerator message codecs.
//!
//! Every codec implements [`Codec`]: it packs a squaring value and its round bounds into the bit
//! layout the accelerator reads, and unpacks the accelerator's reply into a canonical value.
//!
//! # Wire layout
//!
//! Messages are single big integers built most significant field first. Input messages carry
//! the value followed by two fixed-width round fields:
//!
//! ```text
//! [ value ][ round_final : round_bits ][ round_start : round_bits ]
//! ```
//!
//! The accelerator consumes `round_start`, so output messages end with `round_final` alone:
//!
//! ```text
//! [ value ][ round_final : round_bits ]
//! ```
//!
//! The Montgomery unit additionally inserts a 16-bit seed between the value and `round_final`.
//! "Direct" codecs carry only the value in both directions.

mod envelope;
mod montgomery;
mod positional;
mod redundant;

pub use self::{
    montgomery::{MONTY_SEED_BITS, MontgomeryRedundantCodec},
    positional::{PositionalCodec, PositionalDirectCodec},
    redundant::{RedundantCodec, RedundantDirectCodec},
};

use crate::{Config, Error, Result};
use core::{fmt, str::FromStr};
use num_bigint::BigUint;

/// Encoding contract shared by all accelerator representations.
pub trait Codec {
    /// Which representation this codec speaks.
    fn kind(&self) -> CodecKind;

    /// The modulus the codec reduces by.
    fn modulus(&self) -> &BigUint;

    /// Accelerator words occupied by an input message.
    fn words_in(&self) -> u64;

    /// Accelerator words occupied by an output message.
    fn words_out(&self) -> u64;

    /// Build the input message for rounds `round_start..round_final` starting from `value`.
    fn pack(&self, round_start: u64, round_final: u64, value: &BigUint) -> Result<BigUint>;

    /// Decode an output message.
    ///
    /// `digit_bits` is the canonical digit width of the redundant representation; codecs that
    /// emit positional values ignore it.
    fn unpack(&self, wire: &BigUint, digit_bits: u32) -> Result<Unpacked>;
}

/// A decoded output message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpacked {
    /// The squaring value, undone from the wire representation.
    pub value: BigUint,

    /// Last round the value corresponds to; `None` for direct codecs, which carry no round field.
    pub round_final: Option<u64>,
}

/// Selector for the available codecs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CodecKind {
    /// Redundant digits with round envelope.
    Redundant,
    /// Redundant digits without round envelope.
    RedundantDirect,
    /// Montgomery form over redundant digits.
    MontgomeryRedundant,
    /// Canonical binary with round envelope.
    Positional,
    /// Canonical binary without round envelope.
    PositionalDirect,
}

impl CodecKind {
    /// All codec kinds.
    pub const ALL: [Self; 5] = [
        Self::Redundant,
        Self::RedundantDirect,
        Self::MontgomeryRedundant,
        Self::Positional,
        Self::PositionalDirect,
    ];

    /// Whether messages of this kind omit the round envelope.
    pub const fn is_direct(self) -> bool {
        matches!(self, Self::RedundantDirect | Self::PositionalDirect)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Redundant => "redundant",
            Self::RedundantDirect => "redundant-direct",
            Self::MontgomeryRedundant => "montgomery",
            Self::Positional => "positional",
            Self::PositionalDirect => "positional-direct",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = Error;

    /// Accepts the names printed by [`Display`](fmt::Display) as well as the accelerator build
    /// names (`ozturk`, `ozturk-direct`, `simple`, `simple-direct`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "redundant" | "ozturk" => Ok(Self::Redundant),
            "redundant-direct" | "ozturk-direct" => Ok(Self::RedundantDirect),
            "montgomery" | "montgomery-redundant" => Ok(Self::MontgomeryRedundant),
            "positional" | "simple" => Ok(Self::Positional),
            "positional-direct" | "simple-direct" => Ok(Self::PositionalDirect),
            _ => Err(Error::UnknownCodec),
        }
    }
}

/// One of the codecs, selected at setup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnyCodec {
    /// See [`RedundantCodec`].
    Redundant(RedundantCodec),
    /// See [`RedundantDirectCodec`].
    RedundantDirect(RedundantDirectCodec),
    /// See [`MontgomeryRedundantCodec`].
    MontgomeryRedundant(MontgomeryRedundantCodec),
    /// See [`PositionalCodec`].
    Positional(PositionalCodec),
    /// See [`PositionalDirectCodec`].
    PositionalDirect(PositionalDirectCodec),
}

impl AnyCodec {
    /// Build the codec of the given kind for a `modulus_bits`-bit `modulus`.
    pub fn new(
        kind: CodecKind,
        config: Config,
        modulus_bits: u32,
        modulus: BigUint,
    ) -> Result<Self> {
        let codec = match kind {
            CodecKind::Redundant => {
                Self::Redundant(RedundantCodec::new(config, modulus_bits, modulus)?)
            }
            CodecKind::RedundantDirect => {
                Self::RedundantDirect(RedundantDirectCodec::new(config, modulus_bits, modulus)?)
            }
            CodecKind::MontgomeryRedundant => Self::MontgomeryRedundant(
                MontgomeryRedundantCodec::new(config, modulus_bits, modulus)?,
            ),
            CodecKind::Positional => {
                Self::Positional(PositionalCodec::new(config, modulus_bits, modulus)?)
            }
            CodecKind::PositionalDirect => {
                Self::PositionalDirect(PositionalDirectCodec::new(config, modulus_bits, modulus)?)
            }
        };

        log::debug!(
            "{kind} codec for {modulus_bits}-bit modulus: {} words in, {} words out",
            codec.words_in(),
            codec.words_out()
        );
        Ok(codec)
    }
}

macro_rules! dispatch {
    ($self:expr, $codec:ident => $body:expr) => {
        match $self {
            AnyCodec::Redundant($codec) => $body,
            AnyCodec::RedundantDirect($codec) => $body,
            AnyCodec::MontgomeryRedundant($codec) => $body,
            AnyCodec::Positional($codec) => $body,
            AnyCodec::PositionalDirect($codec) => $body,
        }
    };
}

impl Codec for AnyCodec {
    fn kind(&self) -> CodecKind {
        dispatch!(self, codec => codec.kind())
    }

    fn modulus(&self) -> &BigUint {
        dispatch!(self, codec => codec.modulus())
    }

    fn words_in(&self) -> u64 {
        dispatch!(self, codec => codec.words_in())
    }

    fn words_out(&self) -> u64 {
        dispatch!(self, codec => codec.words_out())
    }

    fn pack(&self, round_start: u64, round_final: u64, value: &BigUint) -> Result<BigUint> {
        dispatch!(self, codec => codec.pack(round_start, round_final, value))
    }

    fn unpack(&self, wire: &BigUint, digit_bits: u32) -> Result<Unpacked> {
        dispatch!(self, codec => codec.unpack(wire, digit_bits))
    }
}
