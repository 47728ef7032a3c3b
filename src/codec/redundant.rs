//! Redundant-digit codecs.
//!
//! The accelerator takes a canonical binary value and answers with one padded digit per
//! accelerator word, each holding `digit_bits` of weight plus unpropagated carries.

use super::{
    Codec, CodecKind, Unpacked,
    envelope::{check_message, check_value, pop_field, seal},
};
use crate::{Config, Error, Result, redundant::reduce_polynomial};
use num_bigint::BigUint;
use num_traits::One;

/// Redundant representation with round envelope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedundantCodec {
    config: Config,
    modulus: BigUint,
    modulus_bits: u32,

    /// Accelerator words of the input value: the non-redundant digits, packed densely.
    value_words_in: u64,

    /// Accelerator words of the output value: one per digit, including the redundant ones.
    value_words_out: u64,
}

impl RedundantCodec {
    /// Build the codec for a `modulus_bits`-bit `modulus`.
    pub fn new(config: Config, modulus_bits: u32, modulus: BigUint) -> Result<Self> {
        config.validate()?;
        if modulus <= BigUint::one() {
            return Err(Error::InvalidModulus);
        }

        let digit_bits = u64::from(config.digit_bits);
        let nonredundant = u64::from(modulus_bits).div_ceil(digit_bits);
        let elements = nonredundant + u64::from(config.redundant_elements);

        Ok(Self {
            config,
            modulus,
            modulus_bits,
            value_words_in: (nonredundant * digit_bits).div_ceil(u64::from(config.msu_word_bits)),
            value_words_out: elements,
        })
    }

    /// Nominal bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }

    fn value_capacity_in(&self) -> u64 {
        self.value_words_in * u64::from(self.config.msu_word_bits)
    }

    fn value_capacity_out(&self) -> u64 {
        self.value_words_out * u64::from(self.config.msu_word_bits)
    }

    /// Reduce the redundant value field to its canonical residue.
    fn decode(&self, poly: &BigUint, digit_bits: u32) -> Result<BigUint> {
        let padded_bits = self.config.msu_word_bits;
        if digit_bits == 0 || digit_bits > padded_bits {
            return Err(Error::InvalidDigitWidth {
                digit_bits,
                padded_bits,
            });
        }
        Ok(reduce_polynomial(poly, digit_bits, padded_bits) % &self.modulus)
    }
}

impl Codec for RedundantCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Redundant
    }

    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn words_in(&self) -> u64 {
        self.config.round_words() * 2 + self.value_words_in
    }

    fn words_out(&self) -> u64 {
        self.config.round_words() + self.value_words_out
    }

    fn pack(&self, round_start: u64, round_final: u64, value: &BigUint) -> Result<BigUint> {
        check_value(value, self.value_capacity_in())?;
        seal(value.clone(), round_start, round_final, self.config.round_bits)
    }

    fn unpack(&self, wire: &BigUint, digit_bits: u32) -> Result<Unpacked> {
        check_message(wire, u64::from(self.config.round_bits) + self.value_capacity_out())?;

        let (round_final, poly) = pop_field(wire, self.config.round_bits);
        Ok(Unpacked {
            value: self.decode(&poly, digit_bits)?,
            round_final: Some(round_final),
        })
    }
}

/// Redundant representation for accelerators that track rounds themselves: messages carry the
/// value alone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedundantDirectCodec(RedundantCodec);

impl RedundantDirectCodec {
    /// Build the codec for a `modulus_bits`-bit `modulus`.
    pub fn new(config: Config, modulus_bits: u32, modulus: BigUint) -> Result<Self> {
        RedundantCodec::new(config, modulus_bits, modulus).map(Self)
    }

    /// Nominal bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.0.modulus_bits
    }
}

impl Codec for RedundantDirectCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::RedundantDirect
    }

    fn modulus(&self) -> &BigUint {
        &self.0.modulus
    }

    fn words_in(&self) -> u64 {
        self.0.value_words_in
    }

    fn words_out(&self) -> u64 {
        self.0.value_words_out
    }

    fn pack(&self, _round_start: u64, _round_final: u64, value: &BigUint) -> Result<BigUint> {
        check_value(value, self.0.value_capacity_in())?;
        Ok(value.clone())
    }

    fn unpack(&self, wire: &BigUint, digit_bits: u32) -> Result<Unpacked> {
        check_message(wire, self.0.value_capacity_out())?;
        Ok(Unpacked {
            value: self.0.decode(wire, digit_bits)?,
            round_final: None,
        })
    }
}
