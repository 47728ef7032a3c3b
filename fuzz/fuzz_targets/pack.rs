#![no_main]
use libfuzzer_sys::fuzz_target;
use msu_codec::{AnyCodec, BigUint, Codec, CodecKind, Config};

// Packed messages always fit the input word budget.
fuzz_target!(|input: (u64, u64, u64, Vec<u8>)| {
    let (modulus, round_start, round_final, value) = input;
    let modulus = BigUint::from(modulus | 3);
    let value = BigUint::from_bytes_le(&value) % &modulus;

    for kind in CodecKind::ALL {
        let codec = AnyCodec::new(kind, Config::new(), 64, modulus.clone())
            .expect("odd 64-bit modulus is valid for every codec");
        let wire = codec.pack(round_start, round_final, &value).expect("canonical value fits");
        assert!(wire.bits() <= codec.words_in() * u64::from(Config::new().msu_word_bits));
    }
});
