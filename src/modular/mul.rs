//! Montgomery multiplication and conversions.

use super::MontyParams;
use num_bigint::BigUint;

impl MontyParams {
    /// Multiply two values and divide by `R`, i.e. compute `a * b * R^-1 mod M`.
    ///
    /// Operands need not be below `M`: products beyond the single-pass bound `R * M` are reduced
    /// modulo `M` first. The result is fully reduced.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce(a * b)
    }

    /// Convert `x` into Montgomery form, `x * R mod M`.
    pub fn to_montgomery(&self, x: &BigUint) -> BigUint {
        self.mul(x, &self.reciprocal_sq)
    }

    /// Convert `x` out of Montgomery form, `x * R^-1 mod M`.
    ///
    /// Values beyond the single-pass bound `R * M` are reduced modulo `M` first.
    pub fn from_montgomery(&self, x: &BigUint) -> BigUint {
        self.reduce(x.clone())
    }

    /// Montgomery reduction of a whole product.
    fn reduce(&self, t: BigUint) -> BigUint {
        let t = if t < self.bound { t } else { t % &self.modulus };

        let u = ((&t & &self.mask) * &self.factor) & &self.mask;

        // `u * M + t` is divisible by `R`, and below `2 * R * M`.
        let mut result = (u * &self.modulus + t) >> self.bits;
        if result >= self.modulus {
            result -= &self.modulus;
        }
        result
    }
}
