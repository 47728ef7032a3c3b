//! Reduction of the redundant (carry-save) digit representation.
//!
//! The accelerator emits its result as a polynomial whose coefficients sit in `padded` bit slots
//! but carry only `digit` bits of positional weight each: the extra bits hold carries the
//! hardware never propagated. Evaluating the polynomial at `2^digit` recovers the integer.

use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Combine the coefficients of a redundant polynomial into a positional integer.
///
/// Each `padded_digit_bits`-wide coefficient of `poly`, taken from the least significant end, is
/// added into the result at a stride of `digit_bits`. The result is not reduced by any modulus.
///
/// # Panics
///
/// Panics unless `0 < digit_bits <= padded_digit_bits <= 64`.
pub fn reduce_polynomial(poly: &BigUint, digit_bits: u32, padded_digit_bits: u32) -> BigUint {
    assert!(
        digit_bits > 0 && digit_bits <= padded_digit_bits,
        "digit width must be non-zero and at most the padded width"
    );
    assert!(padded_digit_bits <= u64::BITS, "padded width exceeds 64 bits");

    let limbs = poly.to_u64_digits();
    let count = poly.bits().div_ceil(u64::from(padded_digit_bits));
    if count == 0 {
        return BigUint::ZERO;
    }

    // Highest coefficient lands at `digit * (count - 1)` and spans at most two limbs; the carries
    // from summing `count` coefficients stay within one more.
    let top = u64::from(digit_bits) * (count - 1) + u64::from(padded_digit_bits);
    let mut acc = vec![0u64; (top / u64::from(u64::BITS)) as usize + 3];

    for i in 0..count {
        let coeff = bit_field(&limbs, i * u64::from(padded_digit_bits), padded_digit_bits);
        add_at(&mut acc, i * u64::from(digit_bits), coeff);
    }

    from_limbs(&acc)
}

/// Read `width <= 64` bits starting at bit `offset` of a little-endian limb slice.
fn bit_field(limbs: &[u64], offset: u64, width: u32) -> u64 {
    let index = (offset / u64::from(u64::BITS)) as usize;
    let shift = (offset % u64::from(u64::BITS)) as u32;

    let lo = limbs.get(index).copied().unwrap_or(0) >> shift;
    let hi = match shift {
        0 => 0,
        _ => limbs.get(index + 1).copied().unwrap_or(0) << (u64::BITS - shift),
    };

    let value = lo | hi;
    if width == u64::BITS {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}

/// Add `value` into `acc` at bit `offset`, propagating the carry.
fn add_at(acc: &mut [u64], offset: u64, value: u64) {
    let mut index = (offset / u64::from(u64::BITS)) as usize;
    let wide = u128::from(value) << (offset % u64::from(u64::BITS));

    let mut carry = 0u128;
    for word in [wide as u64, (wide >> u64::BITS) as u64] {
        let sum = u128::from(acc[index]) + u128::from(word) + carry;
        acc[index] = sum as u64;
        carry = sum >> u64::BITS;
        index += 1;
    }
    while carry != 0 {
        let sum = u128::from(acc[index]) + carry;
        acc[index] = sum as u64;
        carry = sum >> u64::BITS;
        index += 1;
    }
}

fn from_limbs(limbs: &[u64]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}
