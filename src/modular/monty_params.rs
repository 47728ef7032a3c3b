//! Modulus-specific Montgomery form parameters.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Parameters to go to/from the Montgomery form for a modulus provided at runtime.
///
/// All values are pure functions of the modulus and the base width, computed once by
/// [`MontyParams::new`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyParams {
    /// The modulus `M`.
    pub(super) modulus: BigUint,

    /// Base width: `R = 2^bits`.
    pub(super) bits: u32,

    /// `R - 1`, used to take a value modulo `R`.
    pub(super) mask: BigUint,

    /// `R^-1 mod M`.
    pub(super) reciprocal: BigUint,

    /// `R^2 mod M`, used to move into Montgomery form.
    pub(super) reciprocal_sq: BigUint,

    /// Reduction constant satisfying `R * reciprocal = 1 + factor * M`.
    pub(super) factor: BigUint,

    /// 1 in Montgomery form (a.k.a. `R mod M`).
    pub(super) one: BigUint,

    /// `R * M`, the largest product a single reduction pass brings below `2M`.
    pub(super) bound: BigUint,
}

impl MontyParams {
    /// Instantiates a new set of [`MontyParams`] for `modulus` with reducer `R = 2^bits`.
    ///
    /// The modulus must be greater than one, below `R`, and odd so that `R` is invertible.
    pub fn new(modulus: BigUint, bits: u32) -> Result<Self> {
        if modulus <= BigUint::one() {
            return Err(Error::InvalidModulus);
        }
        if modulus.bits() > u64::from(bits) {
            return Err(Error::ModulusTooLarge {
                bits: modulus.bits(),
                max: bits,
            });
        }

        let reducer = BigUint::one() << bits;
        let mask = &reducer - 1u32;

        // `R mod M`, which represents 1 in Montgomery form.
        let one = &reducer % &modulus;

        let reciprocal = one.modinv(&modulus).ok_or(Error::NotInvertible)?;
        let reciprocal_sq = (&reducer * &reducer) % &modulus;

        // `R * R^-1 - 1` is an exact multiple of `M`.
        let factor = Integer::div_ceil(&(&reducer * &reciprocal - 1u32), &modulus);
        let bound = &reducer * &modulus;

        log::debug!("Montgomery FACTOR is {factor:#x}");
        log::debug!("Montgomery MASK is {mask:#x}");
        log::debug!("Montgomery CONVERTED_ONE is {one:#x}");
        log::debug!("Montgomery RECIPROCAL is {reciprocal:#x}");
        log::debug!("Montgomery RECIPROCAL_SQ is {reciprocal_sq:#x}");

        Ok(Self {
            modulus,
            bits,
            mask,
            reciprocal,
            reciprocal_sq,
            factor,
            one,
            bound,
        })
    }

    /// Returns the modulus which was used to initialize these parameters.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Base width of the reducer `R = 2^bits`.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// `R - 1`.
    pub fn mask(&self) -> &BigUint {
        &self.mask
    }

    /// `R^-1 mod M`.
    pub fn reciprocal(&self) -> &BigUint {
        &self.reciprocal
    }

    /// `R^2 mod M`, used to move into Montgomery form.
    pub fn reciprocal_sq(&self) -> &BigUint {
        &self.reciprocal_sq
    }

    /// Montgomery reduction constant.
    pub fn factor(&self) -> &BigUint {
        &self.factor
    }

    /// 1 in Montgomery form (a.k.a. `R mod M`).
    pub fn one(&self) -> &BigUint {
        &self.one
    }
}

#[cfg(test)]
mod tests {
    use super::MontyParams;
    use crate::Error;
    use num_bigint::BigUint;

    #[test]
    fn rejects_even_modulus() {
        assert_eq!(
            MontyParams::new(BigUint::from(96u32), 64),
            Err(Error::NotInvertible)
        );
    }

    #[test]
    fn rejects_trivial_modulus() {
        assert_eq!(
            MontyParams::new(BigUint::from(1u32), 64),
            Err(Error::InvalidModulus)
        );
        assert_eq!(
            MontyParams::new(BigUint::ZERO, 64),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn rejects_modulus_wider_than_reducer() {
        let modulus = (BigUint::from(1u32) << 64u32) + 1u32;
        assert_eq!(
            MontyParams::new(modulus, 64),
            Err(Error::ModulusTooLarge { bits: 65, max: 64 })
        );
    }

    #[test]
    fn small_modulus() {
        // R = 2^8 = 256, 256 mod 97 = 62, 62 * 36 = 2232 = 23 * 97 + 1
        let params = MontyParams::new(BigUint::from(97u32), 8).unwrap();
        assert_eq!(params.one(), &BigUint::from(62u32));
        assert_eq!(params.reciprocal(), &BigUint::from(36u32));
        assert_eq!(params.reciprocal_sq(), &BigUint::from(62u32 * 62 % 97));
        // 256 * 36 - 1 = 9215 = 95 * 97
        assert_eq!(params.factor(), &BigUint::from(95u32));
    }
}
