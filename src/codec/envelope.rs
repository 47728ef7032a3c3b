//! Fixed-width fields around the value.

use crate::{Error, Result};
use num_bigint::BigUint;

/// Append both round bounds below `value`: `round_final` first, then `round_start`.
pub(super) fn seal(
    value: BigUint,
    round_start: u64,
    round_final: u64,
    round_bits: u32,
) -> Result<BigUint> {
    let wire = push_field(value, round_final, round_bits)?;
    push_field(wire, round_start, round_bits)
}

/// Shift `acc` up by `width` bits and place `field` in the vacated low bits.
pub(super) fn push_field(acc: BigUint, field: u64, width: u32) -> Result<BigUint> {
    if width < u64::BITS && field >> width != 0 {
        return Err(Error::FieldOverflow {
            value: field,
            width,
        });
    }
    Ok((acc << width) + field)
}

/// Read the low `width <= 64` bits of `wire` and return them with the remaining high bits.
pub(super) fn pop_field(wire: &BigUint, width: u32) -> (u64, BigUint) {
    let low = wire.iter_u64_digits().next().unwrap_or(0);
    let field = if width >= u64::BITS {
        low
    } else {
        low & ((1u64 << width) - 1)
    };
    (field, wire >> width)
}

/// Reject a value that does not fit the input value field.
pub(super) fn check_value(value: &BigUint, capacity: u64) -> Result<()> {
    match value.bits() {
        bits if bits > capacity => Err(Error::ValueOverflow { bits, capacity }),
        _ => Ok(()),
    }
}

/// Reject an output buffer wider than the output layout.
pub(super) fn check_message(wire: &BigUint, capacity: u64) -> Result<()> {
    match wire.bits() {
        bits if bits > capacity => Err(Error::MalformedMessage { bits, capacity }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{check_message, check_value, pop_field, push_field, seal};
    use crate::Error;
    use num_bigint::BigUint;

    #[test]
    fn fields_stack_below_value() {
        let wire = seal(BigUint::from(42u32), 3, 5, 64).unwrap();
        let expected = (BigUint::from(42u32) << 128u32) + (BigUint::from(5u32) << 64u32) + 3u32;
        assert_eq!(wire, expected);

        let (start, rest) = pop_field(&wire, 64);
        let (finish, value) = pop_field(&rest, 64);
        assert_eq!((start, finish, value), (3, 5, BigUint::from(42u32)));
    }

    #[test]
    fn narrow_field_is_masked() {
        let wire = BigUint::from(0b1011_0110u32);
        assert_eq!(pop_field(&wire, 4), (0b0110, BigUint::from(0b1011u32)));
    }

    #[test]
    fn overflowing_field_is_rejected() {
        assert_eq!(
            push_field(BigUint::ZERO, 16, 4),
            Err(Error::FieldOverflow {
                value: 16,
                width: 4
            })
        );
        assert!(push_field(BigUint::ZERO, u64::MAX, 64).is_ok());
    }

    #[test]
    fn capacity_checks() {
        let x = BigUint::from(0xffu32);
        assert_eq!(check_value(&x, 8), Ok(()));
        assert_eq!(
            check_value(&x, 7),
            Err(Error::ValueOverflow {
                bits: 8,
                capacity: 7
            })
        );
        assert_eq!(
            check_message(&x, 4),
            Err(Error::MalformedMessage {
                bits: 8,
                capacity: 4
            })
        );
    }
}
