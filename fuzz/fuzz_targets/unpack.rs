#![no_main]
use libfuzzer_sys::fuzz_target;
use msu_codec::{AnyCodec, BigUint, Codec, CodecKind, Config};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub enum Kind {
    Redundant, RedundantDirect, MontgomeryRedundant, Positional, PositionalDirect
}

impl From<Kind> for CodecKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Redundant => CodecKind::Redundant,
            Kind::RedundantDirect => CodecKind::RedundantDirect,
            Kind::MontgomeryRedundant => CodecKind::MontgomeryRedundant,
            Kind::Positional => CodecKind::Positional,
            Kind::PositionalDirect => CodecKind::PositionalDirect,
        }
    }
}

// Arbitrary replies must decode or be rejected, never panic.
fuzz_target!(|input: (Kind, u64, u32, Vec<u8>)| {
    let (kind, modulus, digit_bits, wire) = input;
    let modulus = BigUint::from(modulus | 3);
    let codec = AnyCodec::new(kind.into(), Config::new(), 64, modulus.clone())
        .expect("odd 64-bit modulus is valid for every codec");

    if let Ok(unpacked) = codec.unpack(&BigUint::from_bytes_le(&wire), digit_bits) {
        let kind = codec.kind();
        if matches!(
            kind,
            CodecKind::Redundant | CodecKind::RedundantDirect | CodecKind::MontgomeryRedundant
        ) {
            assert!(unpacked.value < modulus);
        }
        assert_eq!(unpacked.round_final.is_none(), kind.is_direct());
    }
});
