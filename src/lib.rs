//! Wire codecs for hardware modular squaring units.
//!
//! # About
//! A modular squaring unit (MSU) evaluates long chains of sequential squarings `x -> x^2 mod M`,
//! the work at the heart of a verifiable delay function. The hardware only exchanges fixed-width
//! word buffers, so the host has to lay values and round bookkeeping out in the exact bit format
//! the accelerator expects, and undo whichever number representation the accelerator answers in.
//!
//! This crate implements those encodings. Buffers are handled as whole-message [`BigUint`]s;
//! splitting them into words for the transport is left to the driver.
//!
//! # Codecs
//! All codecs implement [`Codec`]:
//!
//! - [`RedundantCodec`] / [`RedundantDirectCodec`]: output in redundant (carry-save) digits,
//!   reduced with [`reduce_polynomial`].
//! - [`MontgomeryRedundantCodec`]: values travel in Montgomery form, see [`modular`].
//! - [`PositionalCodec`] / [`PositionalDirectCodec`]: canonical binary both ways.
//!
//! The "direct" variants omit the round envelope for accelerators that track rounds themselves.
//! [`AnyCodec`] selects one of them at runtime from a [`CodecKind`].
//!
//! # Usage
//! ```
//! use msu_codec::{AnyCodec, BigUint, Codec, CodecKind, Config};
//!
//! let codec = AnyCodec::new(CodecKind::Positional, Config::new(), 7, BigUint::from(97u32))?;
//! let wire = codec.pack(3, 5, &BigUint::from(42u32))?;
//!
//! // The accelerator consumes `round_start` and answers `[value][round_final]`.
//! let reply = wire >> 64u32;
//! let unpacked = codec.unpack(&reply, 16)?;
//! assert_eq!(unpacked.value, BigUint::from(42u32));
//! assert_eq!(unpacked.round_final, Some(5));
//! # Ok::<(), msu_codec::Error>(())
//! ```
//!
//! # Logging
//! Construction-time diagnostics (derived Montgomery constants, selected word counts) are
//! emitted at `debug` level through the [`log`] facade.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod codec;
mod config;
mod error;
pub mod modular;
mod redundant;

pub use crate::{
    codec::{
        AnyCodec, Codec, CodecKind, MONTY_SEED_BITS, MontgomeryRedundantCodec, PositionalCodec,
        PositionalDirectCodec, RedundantCodec, RedundantDirectCodec, Unpacked,
    },
    config::Config,
    error::{Error, Result},
    redundant::reduce_polynomial,
};
pub use num_bigint::{self, BigUint};
