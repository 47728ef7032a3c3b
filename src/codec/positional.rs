//! Positional (canonical binary) codecs.

use super::{
    Codec, CodecKind, Unpacked,
    envelope::{check_message, check_value, pop_field, seal},
};
use crate::{Config, Error, Result};
use num_bigint::BigUint;
use num_traits::One;

/// Canonical binary with round envelope.
///
/// No reduction is applied in either direction: the value is expected to be below the modulus
/// already, and the accelerator's output is returned as is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionalCodec {
    config: Config,
    modulus: BigUint,
    modulus_bits: u32,

    /// Buffer words of the value in either direction.
    value_words: u64,
}

impl PositionalCodec {
    /// Build the codec for a `modulus_bits`-bit `modulus`.
    pub fn new(config: Config, modulus_bits: u32, modulus: BigUint) -> Result<Self> {
        config.validate()?;
        if modulus <= BigUint::one() {
            return Err(Error::InvalidModulus);
        }

        Ok(Self {
            config,
            modulus,
            modulus_bits,
            value_words: u64::from(modulus_bits).div_ceil(config.buffer_word_bits()),
        })
    }

    /// Nominal bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }

    fn value_capacity(&self) -> u64 {
        self.value_words * self.config.buffer_word_bits()
    }
}

impl Codec for PositionalCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Positional
    }

    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn words_in(&self) -> u64 {
        self.config.round_words() * 2 + self.value_words
    }

    fn words_out(&self) -> u64 {
        self.config.round_words() + self.value_words
    }

    fn pack(&self, round_start: u64, round_final: u64, value: &BigUint) -> Result<BigUint> {
        check_value(value, self.value_capacity())?;
        seal(value.clone(), round_start, round_final, self.config.round_bits)
    }

    fn unpack(&self, wire: &BigUint, _digit_bits: u32) -> Result<Unpacked> {
        check_message(wire, u64::from(self.config.round_bits) + self.value_capacity())?;

        let (round_final, value) = pop_field(wire, self.config.round_bits);
        Ok(Unpacked {
            value,
            round_final: Some(round_final),
        })
    }
}

/// Canonical binary without round envelope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionalDirectCodec(PositionalCodec);

impl PositionalDirectCodec {
    /// Build the codec for a `modulus_bits`-bit `modulus`.
    pub fn new(config: Config, modulus_bits: u32, modulus: BigUint) -> Result<Self> {
        PositionalCodec::new(config, modulus_bits, modulus).map(Self)
    }

    /// Nominal bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.0.modulus_bits
    }
}

impl Codec for PositionalDirectCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::PositionalDirect
    }

    fn modulus(&self) -> &BigUint {
        &self.0.modulus
    }

    fn words_in(&self) -> u64 {
        self.0.value_words
    }

    fn words_out(&self) -> u64 {
        self.0.value_words
    }

    fn pack(&self, _round_start: u64, _round_final: u64, value: &BigUint) -> Result<BigUint> {
        check_value(value, self.0.value_capacity())?;
        Ok(value.clone())
    }

    fn unpack(&self, wire: &BigUint, _digit_bits: u32) -> Result<Unpacked> {
        check_message(wire, self.0.value_capacity())?;
        Ok(Unpacked {
            value: wire.clone(),
            round_final: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PositionalCodec, PositionalDirectCodec};
    use crate::{Codec, Config, Error};
    use num_bigint::BigUint;

    #[test]
    fn word_counts() {
        let codec = PositionalCodec::new(Config::new(), 1024, BigUint::from(97u32)).unwrap();
        assert_eq!(codec.words_in(), 4 + 32);
        assert_eq!(codec.words_out(), 2 + 32);

        let direct = PositionalDirectCodec::new(Config::new(), 1024, BigUint::from(97u32)).unwrap();
        assert_eq!(direct.words_in(), 32);
        assert_eq!(direct.words_out(), 32);
    }

    #[test]
    fn pack_layout() {
        let codec = PositionalCodec::new(Config::new(), 7, BigUint::from(97u32)).unwrap();
        let wire = codec.pack(3, 5, &BigUint::from(42u32)).unwrap();
        let expected = (BigUint::from(42u32) << 128u32) + (BigUint::from(5u32) << 64u32) + 3u32;
        assert_eq!(wire, expected);
    }

    #[test]
    fn unpack_strips_round_final() {
        let codec = PositionalCodec::new(Config::new(), 7, BigUint::from(97u32)).unwrap();
        let wire = (BigUint::from(42u32) << 64u32) + 5u32;
        let unpacked = codec.unpack(&wire, 0).unwrap();
        assert_eq!(unpacked.value, BigUint::from(42u32));
        assert_eq!(unpacked.round_final, Some(5));
    }

    #[test]
    fn unpack_rejects_oversized_message() {
        let codec = PositionalCodec::new(Config::new(), 7, BigUint::from(97u32)).unwrap();
        let wire = BigUint::from(1u32) << 96u32;
        assert_eq!(
            codec.unpack(&wire, 0),
            Err(Error::MalformedMessage {
                bits: 97,
                capacity: 96
            })
        );
    }

    #[test]
    fn reply_capacity_boundary() {
        let codec = PositionalCodec::new(Config::new(), 7, BigUint::from(97u32)).unwrap();
        let full = BigUint::from(1u32) << 95u32;
        assert_eq!(codec.unpack(&full, 0).unwrap().value, BigUint::from(1u32) << 31u32);

        // One 32-bit buffer word, no round field
        let direct = PositionalDirectCodec::new(Config::new(), 7, BigUint::from(97u32)).unwrap();
        let full = BigUint::from(1u32) << 31u32;
        assert_eq!(direct.unpack(&full, 0).unwrap().value, full);
        assert_eq!(
            direct.unpack(&(full << 1u32), 0),
            Err(Error::MalformedMessage {
                bits: 33,
                capacity: 32
            })
        );
    }

    #[test]
    fn even_modulus_is_accepted() {
        assert!(PositionalCodec::new(Config::new(), 8, BigUint::from(96u32)).is_ok());
        assert_eq!(
            PositionalDirectCodec::new(Config::new(), 8, BigUint::ZERO),
            Err(Error::InvalidModulus)
        );
    }
}
