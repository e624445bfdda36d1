//! Unsigned-to-signed integer casting by two's-complement reinterpretation,
//! spelled out so that no step depends on how a platform converts an
//! out-of-range unsigned value.
//!
//! For a width `W` with signed maximum `m = 2^(W-1) - 1`, a value `v <= m` is
//! kept as is, and a value `v > m` becomes `(v - (m + 1)) + MIN`, which is the
//! signed value with the same bit pattern (`v - 2^W`).

#![cfg_attr(not(test), no_std)]

mod error;
mod int;
pub mod sample;
mod value;
mod width;

pub use error::CastError;
pub use int::{
    classify, utos, utos_u16, utos_u32, utos_u64, utos_u8, utos_with_max, widen_utos,
    CastBranch, SignedInt, UnsignedInt,
};
pub use value::{SignedValue, UnsignedValue};
pub use width::IntWidth;
