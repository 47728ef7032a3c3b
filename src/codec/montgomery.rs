//! Montgomery-form codec over redundant digits.

use super::{
    Codec, CodecKind, Unpacked,
    envelope::{check_message, check_value, pop_field, seal},
};
use crate::{Config, Error, Result, modular::MontyParams, redundant::reduce_polynomial};
use num_bigint::BigUint;

/// Width of the seed the accelerator echoes between the value and the round field.
pub const MONTY_SEED_BITS: u32 = 16;

/// Montgomery form with round envelope.
///
/// Values travel to the accelerator as `x * R mod M` and come back as a redundant polynomial of
/// `monty_digit_bits`-wide digits padded by one carry bit, still in Montgomery form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontgomeryRedundantCodec {
    config: Config,
    params: MontyParams,
    modulus_bits: u32,

    /// Accelerator words of the value in either direction.
    value_words: u64,
}

impl MontgomeryRedundantCodec {
    /// Build the codec for a `modulus_bits`-bit `modulus`, computing its Montgomery parameters.
    pub fn new(config: Config, modulus_bits: u32, modulus: BigUint) -> Result<Self> {
        config.validate()?;
        let params = MontyParams::new(modulus, config.monty_bits)?;

        let value_bytes = u64::from(config.monty_bits).div_ceil(8);
        Ok(Self {
            config,
            params,
            modulus_bits,
            value_words: value_bytes.div_ceil(u64::from(config.msu_bytes_per_word)),
        })
    }

    /// Nominal bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }

    /// Montgomery parameters of the modulus.
    pub fn params(&self) -> &MontyParams {
        &self.params
    }

    /// Padded width of one output digit.
    fn padded_bits(&self) -> u32 {
        self.config.monty_digit_bits + 1
    }

    fn value_capacity_in(&self) -> u64 {
        self.value_words * u64::from(self.config.msu_bytes_per_word) * 8
    }

    /// Round field, seed, and enough padded digits to cover a value below `2^monty_bits`.
    fn message_capacity_out(&self) -> u64 {
        let digits = u64::from(self.config.monty_bits / self.config.monty_digit_bits) + 1;
        u64::from(self.config.round_bits)
            + u64::from(MONTY_SEED_BITS)
            + digits * u64::from(self.padded_bits())
    }
}

impl Codec for MontgomeryRedundantCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::MontgomeryRedundant
    }

    fn modulus(&self) -> &BigUint {
        self.params.modulus()
    }

    fn words_in(&self) -> u64 {
        self.config.round_words() * 2 + self.value_words
    }

    fn words_out(&self) -> u64 {
        self.config.round_words() + self.value_words
    }

    fn pack(&self, round_start: u64, round_final: u64, value: &BigUint) -> Result<BigUint> {
        let value = self.params.to_montgomery(value);
        check_value(&value, self.value_capacity_in())?;
        seal(value, round_start, round_final, self.config.round_bits)
    }

    fn unpack(&self, wire: &BigUint, digit_bits: u32) -> Result<Unpacked> {
        check_message(wire, self.message_capacity_out())?;

        let padded_bits = self.padded_bits();
        if digit_bits == 0 || digit_bits > padded_bits {
            return Err(Error::InvalidDigitWidth {
                digit_bits,
                padded_bits,
            });
        }

        let (round_final, rest) = pop_field(wire, self.config.round_bits);
        let poly = rest >> MONTY_SEED_BITS;

        // Range fixing is left to the conversion out of Montgomery form.
        let value = reduce_polynomial(&poly, digit_bits, padded_bits);
        Ok(Unpacked {
            value: self.params.from_montgomery(&value),
            round_final: Some(round_final),
        })
    }
}
