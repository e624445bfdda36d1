use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::IntWidth;

/// Errors at the edges of the casting API. The cast itself never fails;
/// these come from building runtime-width values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastError {
    /// A bit count that has no fixed-width integer pair.
    UnsupportedWidth(u32),
    /// A width that could not be read at all.
    MalformedWidth,
    /// The value does not fit in the unsigned type of the width.
    ValueOutOfRange { value: u64, width: IntWidth },
    /// Zero-extension was requested towards a narrower width.
    NarrowingWiden { from: IntWidth, to: IntWidth },
}

impl Error for CastError {}

impl Display for CastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CastError::UnsupportedWidth(bits) => {
                write!(f, "Unsupported integer width: {bits} (expected 8, 16, 32, or 64)")
            }
            CastError::MalformedWidth => write!(f, "Malformed integer width"),
            CastError::ValueOutOfRange { value, width } => write!(
                f,
                "Value {value} does not fit in {} (max {})",
                width.unsigned_name(),
                width.unsigned_max()
            ),
            CastError::NarrowingWiden { from, to } => write!(
                f,
                "Cannot widen {} to the narrower {}",
                from.unsigned_name(),
                to.unsigned_name()
            ),
        }
    }
}
