//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use msu_codec::{CodecKind, Config, MONTY_SEED_BITS, modular::MontyParams};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;

/// Seed echoed by the modelled Montgomery unit.
pub const SEED: u32 = 0xa5c3;

/// Split `value` into `digit_bits` digits and lay them out at `padded_bits` spacing.
///
/// When the padding has room, one unit is borrowed from every non-zero digit into the digit
/// below it, so the result carries the same kind of unpropagated carries the hardware emits.
pub fn to_redundant(value: &BigUint, digit_bits: u32, padded_bits: u32) -> BigUint {
    let mask = (BigUint::one() << digit_bits) - 1u32;
    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        digits.push(&rest & &mask);
        rest >>= digit_bits;
    }

    if padded_bits > digit_bits {
        for i in 1..digits.len() {
            if !digits[i].is_zero() {
                digits[i] -= 1u32;
                digits[i - 1] += BigUint::one() << digit_bits;
            }
        }
    }

    digits
        .iter()
        .enumerate()
        .fold(BigUint::zero(), |acc, (i, digit)| {
            acc + (digit << (padded_bits * i as u32))
        })
}

/// Model a zero-round pass through the accelerator: turn an input message into the output
/// message the hardware would answer with.
///
/// The accelerator drops `round_start`, keeps `round_final`, and re-emits the value in its output
/// representation.
pub fn loopback(kind: CodecKind, config: &Config, wire: &BigUint) -> BigUint {
    let round_bits = config.round_bits;
    let round_mask = (BigUint::one() << round_bits) - 1u32;

    match kind {
        CodecKind::PositionalDirect => wire.clone(),
        CodecKind::RedundantDirect => to_redundant(wire, config.digit_bits, config.msu_word_bits),
        CodecKind::Positional => wire >> round_bits,
        CodecKind::Redundant => {
            let rest = wire >> round_bits;
            let round_final = &rest & &round_mask;
            let value = rest >> round_bits;
            let poly = to_redundant(&value, config.digit_bits, config.msu_word_bits);
            (poly << round_bits) + round_final
        }
        CodecKind::MontgomeryRedundant => {
            let rest = wire >> round_bits;
            let round_final = &rest & &round_mask;
            let value = rest >> round_bits;
            let poly = to_redundant(&value, config.monty_digit_bits, config.monty_digit_bits + 1);
            (((poly << MONTY_SEED_BITS) + SEED) << round_bits) + round_final
        }
    }
}

/// Canonical digit width the accelerator output of `kind` is reduced with.
pub fn digit_bits(kind: CodecKind, config: &Config) -> u32 {
    match kind {
        CodecKind::MontgomeryRedundant => config.monty_digit_bits,
        _ => config.digit_bits,
    }
}

/// Reference Montgomery parameters for a 256-bit prime, with `R = 2^256`.
pub fn bls12_381_scalar() -> MontyParams {
    let modulus = BigUint::from_bytes_be(&hex_literal::hex!(
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"
    ));
    MontyParams::new(modulus, 256).unwrap()
}

prop_compose! {
    /// Generate a random odd modulus of at least two bits and at most 512.
    pub fn modulus()(bytes in prop::collection::vec(any::<u8>(), 1..64)) -> BigUint {
        BigUint::from_bytes_be(&bytes) | BigUint::from(3u32)
    }
}

prop_compose! {
    /// Generate a random odd modulus together with a value below it.
    pub fn modulus_and_value()(m in modulus(), bytes in any::<Vec<u8>>()) -> (BigUint, BigUint) {
        let x = BigUint::from_bytes_be(&bytes) % &m;
        (m, x)
    }
}
