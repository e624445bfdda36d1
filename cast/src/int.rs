use core::{
    fmt::{self, Debug, Display, Formatter},
    ops::{Add, Sub},
};

use crate::IntWidth;

/// Which arm of the cast a value takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CastBranch {
    /// `v <= m`, the value is representable as is.
    Direct,
    /// `v > m`, the value lands in the negative range.
    Wrapped,
}

impl Display for CastBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CastBranch::Direct => write!(f, "direct"),
            CastBranch::Wrapped => write!(f, "wrapped"),
        }
    }
}

pub trait SignedInt: Copy + Ord + Add<Output = Self> + Debug + Display + Into<i64> {
    const MIN: Self;
}

/// An unsigned fixed-width integer paired with its signed counterpart of the
/// same width.
pub trait UnsignedInt: Copy + Ord + Sub<Output = Self> + Debug + Display + Into<u64> {
    type Signed: SignedInt;

    const WIDTH: IntWidth;
    const ONE: Self;
    /// The signed maximum of the width, as the unsigned type.
    const SIGNED_MAX: Self;

    /// Converts a value that is at most [`Self::SIGNED_MAX`].
    /// The result is unspecified for larger values.
    fn to_signed_in_range(self) -> Self::Signed;
}

macro_rules! impl_int_pair {
    ($($u:ty => $s:ty, $width:ident, $const_fn:ident;)*) => {
        $(
            impl SignedInt for $s {
                const MIN: Self = <$s>::MIN;
            }

            impl UnsignedInt for $u {
                type Signed = $s;

                const WIDTH: IntWidth = IntWidth::$width;
                const ONE: Self = 1;
                const SIGNED_MAX: Self = <$s>::MAX as $u;

                #[inline]
                #[allow(clippy::cast_possible_wrap)]
                fn to_signed_in_range(self) -> $s {
                    self as $s
                }
            }

            #[doc = concat!(
                "Casts `", stringify!($u), "` to `", stringify!($s),
                "` by two's-complement reinterpretation. Usable in const contexts."
            )]
            #[inline]
            #[allow(clippy::cast_possible_wrap)]
            pub const fn $const_fn(v: $u) -> $s {
                const M: $u = <$s>::MAX as $u;
                if v <= M {
                    v as $s
                } else {
                    (v - M - 1) as $s + <$s>::MIN
                }
            }
        )*
    };
}

impl_int_pair! {
    u8 => i8, W8, utos_u8;
    u16 => i16, W16, utos_u16;
    u32 => i32, W32, utos_u32;
    u64 => i64, W64, utos_u64;
}

/// Casts `v` to the signed type of the same width, keeping its bit pattern.
#[inline]
pub fn utos<U: UnsignedInt>(v: U) -> U::Signed {
    utos_with_max(v, U::SIGNED_MAX)
}

/// [`utos`] with the signed maximum `m` of the width passed explicitly.
/// `m` must be `U::SIGNED_MAX`.
pub fn utos_with_max<U: UnsignedInt>(v: U, m: U) -> U::Signed {
    debug_assert!(
        m == U::SIGNED_MAX,
        "{m} is not the signed maximum of {}",
        U::WIDTH.unsigned_name()
    );
    if v <= m {
        v.to_signed_in_range()
    } else {
        // v - (m + 1) is in [0, m]
        (v - m - U::ONE).to_signed_in_range() + <U::Signed as SignedInt>::MIN
    }
}

pub fn classify<U: UnsignedInt>(v: U) -> CastBranch {
    if v <= U::SIGNED_MAX {
        CastBranch::Direct
    } else {
        CastBranch::Wrapped
    }
}

/// Zero-extends `v` to the unsigned type `U`, then casts it.
/// When `S` is narrower than `U` only the direct arm is ever taken.
#[inline]
pub fn widen_utos<S, U>(v: S) -> U::Signed
where
    U: UnsignedInt + From<S>,
{
    utos(U::from(v))
}
