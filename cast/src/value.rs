use core::fmt::{self, Display, Formatter};

use crate::{utos, CastBranch, CastError, IntWidth, UnsignedInt};

/// An unsigned value whose width is only known at runtime.
/// The bits never exceed the unsigned maximum of the width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnsignedValue {
    width: IntWidth,
    bits: u64,
}

/// The result of casting an [`UnsignedValue`], sign-extended into an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignedValue {
    width: IntWidth,
    value: i64,
}

impl UnsignedValue {
    pub fn new(width: IntWidth, bits: u64) -> Result<Self, CastError> {
        if bits > width.unsigned_max() {
            return Err(CastError::ValueOutOfRange { value: bits, width });
        }
        Ok(Self { width, bits })
    }

    pub fn of<U: UnsignedInt>(v: U) -> Self {
        Self {
            width: U::WIDTH,
            bits: v.into(),
        }
    }

    #[inline]
    pub fn width(&self) -> IntWidth {
        self.width
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Zero-extends the value to `to`, which must be at least as wide.
    pub fn widen(self, to: IntWidth) -> Result<Self, CastError> {
        if to < self.width {
            return Err(CastError::NarrowingWiden {
                from: self.width,
                to,
            });
        }
        Ok(Self {
            width: to,
            bits: self.bits,
        })
    }

    pub fn branch(&self) -> CastBranch {
        if self.bits <= self.width.signed_max() {
            CastBranch::Direct
        } else {
            CastBranch::Wrapped
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn to_signed(self) -> SignedValue {
        // bits fit the width, so the truncating casts below are lossless
        let value = match self.width {
            IntWidth::W8 => i64::from(utos(self.bits as u8)),
            IntWidth::W16 => i64::from(utos(self.bits as u16)),
            IntWidth::W32 => i64::from(utos(self.bits as u32)),
            IntWidth::W64 => utos(self.bits),
        };
        SignedValue {
            width: self.width,
            value,
        }
    }
}

impl SignedValue {
    #[inline]
    pub fn width(&self) -> IntWidth {
        self.width
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Display for UnsignedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width.unsigned_name(), self.bits)
    }
}

impl Display for SignedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width.signed_name(), self.value)
    }
}
