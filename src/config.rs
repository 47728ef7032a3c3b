//! Accelerator word and field widths.

use crate::{Error, Result};

/// Fixed widths describing an accelerator build.
///
/// These mirror the constants the hardware image was synthesized with. They determine every
/// word count and shift amount a codec uses, and are fixed for the lifetime of a codec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Width of each round-bound field in bits.
    pub round_bits: u32,

    /// Width of one accelerator word in bits. Also the padded digit width of redundant output.
    pub msu_word_bits: u32,

    /// Canonical digit width of the redundant representation.
    pub digit_bits: u32,

    /// Extra digits the redundant representation carries beyond the modulus width.
    pub redundant_elements: u32,

    /// Montgomery base width: the reducer is `R = 2^monty_bits`.
    pub monty_bits: u32,

    /// Canonical digit width of the Montgomery unit's redundant output; digits are padded by one
    /// carry bit on the wire.
    pub monty_digit_bits: u32,

    /// Bytes per accelerator word as seen by the Montgomery unit.
    pub msu_bytes_per_word: u32,

    /// Bytes per word of the positional (binary) value buffers.
    pub buffer_word_bytes: u32,
}

impl Config {
    /// Default accelerator configuration.
    pub const fn new() -> Self {
        Self {
            round_bits: 64,
            msu_word_bits: 32,
            digit_bits: 16,
            redundant_elements: 2,
            monty_bits: 1024,
            monty_digit_bits: 16,
            msu_bytes_per_word: 4,
            buffer_word_bytes: 4,
        }
    }

    /// Check that every width is usable.
    pub fn validate(&self) -> Result<()> {
        if self.round_bits == 0 || self.round_bits > u64::BITS {
            return Err(Error::InvalidConfig("round_bits must be in 1..=64"));
        }
        if self.msu_word_bits == 0 || self.msu_word_bits > u64::BITS {
            return Err(Error::InvalidConfig("msu_word_bits must be in 1..=64"));
        }
        if self.digit_bits == 0 || self.digit_bits > self.msu_word_bits {
            return Err(Error::InvalidConfig(
                "digit_bits must be in 1..=msu_word_bits",
            ));
        }
        if self.monty_bits == 0 {
            return Err(Error::InvalidConfig("monty_bits must be non-zero"));
        }
        if self.monty_digit_bits == 0 || self.monty_digit_bits >= u64::BITS {
            return Err(Error::InvalidConfig("monty_digit_bits must be in 1..64"));
        }
        if self.msu_bytes_per_word == 0 {
            return Err(Error::InvalidConfig("msu_bytes_per_word must be non-zero"));
        }
        if self.buffer_word_bytes == 0 {
            return Err(Error::InvalidConfig("buffer_word_bytes must be non-zero"));
        }
        Ok(())
    }

    /// Accelerator words occupied by one round-bound field.
    pub(crate) fn round_words(&self) -> u64 {
        u64::from(self.round_bits).div_ceil(u64::from(self.msu_word_bits))
    }

    /// Width in bits of one positional buffer word.
    pub(crate) fn buffer_word_bits(&self) -> u64 {
        u64::from(self.buffer_word_bytes) * 8
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::Error;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(Config::default().round_words(), 2);
    }

    #[test]
    fn rejects_wide_round_field() {
        let config = Config {
            round_bits: 65,
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_digit_wider_than_word() {
        let config = Config {
            digit_bits: 33,
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn partial_round_words_round_up() {
        let config = Config {
            round_bits: 40,
            ..Config::new()
        };
        assert_eq!(config.round_words(), 2);
    }
}
