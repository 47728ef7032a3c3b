//! Montgomery form support for a modulus chosen at runtime.
//!
//! The accelerator's Montgomery unit works on values in the form `x * R mod M` with
//! `R = 2^monty_bits`. [`MontyParams`] holds the constants for one modulus and converts values
//! into and out of that form.

mod monty_params;
mod mul;

pub use self::monty_params::MontyParams;
