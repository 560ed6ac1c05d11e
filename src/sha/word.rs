//! Word-level primitives shared by the 32-bit and 64-bit families.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shr};

/// An unsigned machine word the compression functions operate on.
///
/// Implemented for `u32` (SHA-1, SHA-224, SHA-256) and `u64` (SHA-384,
/// SHA-512).
pub trait Word:
    Copy
    + Eq
    + Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const BYTES: usize;
    const ZERO: Self;

    /// Circular left rotation. `n` must satisfy `0 < n < BITS`.
    fn rotl(self, n: u32) -> Self;

    /// Circular right rotation. `n` must satisfy `0 < n < BITS`.
    fn rotr(self, n: u32) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Assemble a word from exactly `BYTES` bytes, most significant first.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Write the word into exactly `BYTES` bytes, most significant first.
    fn store_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline(always)]
            fn rotl(self, n: u32) -> Self {
                debug_assert!(n > 0 && n < Self::BITS, "rotation by {}", n);
                <$ty>::rotate_left(self, n)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                debug_assert!(n > 0 && n < Self::BITS, "rotation by {}", n);
                <$ty>::rotate_right(self, n)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_be_bytes(buf)
            }

            #[inline(always)]
            fn store_be(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// Convenience free form of [`Word::rotl`].
#[inline(always)]
pub fn rotate_left<W: Word>(word: W, n: u32) -> W {
    word.rotl(n)
}

/// Convenience free form of [`Word::rotr`].
#[inline(always)]
pub fn rotate_right<W: Word>(word: W, n: u32) -> W {
    word.rotr(n)
}
