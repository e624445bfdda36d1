use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::CastError;

/// Widths of the fixed-width integer pairs the cast is defined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub const ALL: [IntWidth; 4] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64];

    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// `2^W - 1`
    pub const fn unsigned_max(self) -> u64 {
        u64::MAX >> (u64::BITS - self.bits())
    }

    /// `2^(W-1) - 1`, the largest value that passes through unchanged.
    pub const fn signed_max(self) -> u64 {
        self.unsigned_max() >> 1
    }

    /// `-2^(W-1)`
    pub const fn signed_min(self) -> i64 {
        // signed_max <= i64::MAX for every width
        -(self.signed_max() as i64) - 1
    }

    pub const fn unsigned_name(self) -> &'static str {
        match self {
            IntWidth::W8 => "u8",
            IntWidth::W16 => "u16",
            IntWidth::W32 => "u32",
            IntWidth::W64 => "u64",
        }
    }

    pub const fn signed_name(self) -> &'static str {
        match self {
            IntWidth::W8 => "i8",
            IntWidth::W16 => "i16",
            IntWidth::W32 => "i32",
            IntWidth::W64 => "i64",
        }
    }
}

impl TryFrom<u32> for IntWidth {
    type Error = CastError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        IntWidth::ALL
            .into_iter()
            .find(|w| w.bits() == bits)
            .ok_or(CastError::UnsupportedWidth(bits))
    }
}

impl From<IntWidth> for u32 {
    fn from(width: IntWidth) -> Self {
        width.bits()
    }
}

/// Accepts a bare bit count (`32`) or a type name of either signedness (`u32`, `i32`).
impl FromStr for IntWidth {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(['u', 'i']).unwrap_or(s);
        digits
            .parse::<u32>()
            .map_err(|_| CastError::MalformedWidth)
            .and_then(IntWidth::try_from)
    }
}

impl Display for IntWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_native_types() {
        assert_eq!(IntWidth::W8.signed_max(), i8::MAX as u64);
        assert_eq!(IntWidth::W16.signed_max(), i16::MAX as u64);
        assert_eq!(IntWidth::W32.signed_max(), i32::MAX as u64);
        assert_eq!(IntWidth::W64.signed_max(), i64::MAX as u64);

        assert_eq!(IntWidth::W8.unsigned_max(), u8::MAX as u64);
        assert_eq!(IntWidth::W64.unsigned_max(), u64::MAX);

        assert_eq!(IntWidth::W8.signed_min(), i8::MIN as i64);
        assert_eq!(IntWidth::W64.signed_min(), i64::MIN);
    }

    #[test]
    fn widths_are_ordered_by_bits() {
        assert!(IntWidth::W8 < IntWidth::W16);
        assert!(IntWidth::W32 < IntWidth::W64);
    }

    #[test]
    fn parses_counts_and_type_names() {
        assert_eq!("8".parse::<IntWidth>(), Ok(IntWidth::W8));
        assert_eq!("u16".parse::<IntWidth>(), Ok(IntWidth::W16));
        assert_eq!(" i64 ".parse::<IntWidth>(), Ok(IntWidth::W64));
        assert_eq!("12".parse::<IntWidth>(), Err(CastError::UnsupportedWidth(12)));
        assert_eq!("wide".parse::<IntWidth>(), Err(CastError::MalformedWidth));
        assert_eq!(IntWidth::try_from(128), Err(CastError::UnsupportedWidth(128)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_bit_count() {
        assert_eq!(serde_json::to_string(&IntWidth::W32).unwrap(), "32");
        assert_eq!(serde_json::from_str::<IntWidth>("16").unwrap(), IntWidth::W16);
        assert!(serde_json::from_str::<IntWidth>("7").is_err());
    }
}
