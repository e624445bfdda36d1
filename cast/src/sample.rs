//! The two functions of the `basic_math` sample program: an entry point that
//! only reports success, and `foo`, which casts a zero-extended byte.

use crate::widen_utos;

/// Exit status of the sample program.
pub fn entry() -> i32 {
    0
}

/// Only `x` is used; it is zero-extended to 64 bits before the cast, so the
/// result always equals `x`.
pub fn foo(x: u8, _y: u16, _z: u32) -> i64 {
    widen_utos::<u8, u64>(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_succeeds() {
        assert_eq!(entry(), 0);
    }

    #[test]
    fn foo_is_identity_on_bytes() {
        for x in 0..=u8::MAX {
            assert_eq!(foo(x, u16::MAX, u32::MAX), i64::from(x));
        }
    }
}
