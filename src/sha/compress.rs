//! Block compression functions.
//!
//! [`Sha1Core`] is the 32-bit SHA-1 engine. [`Sha2Core`] is a single SHA-2
//! engine generic over the word width: `Sha2Core<u32>` serves SHA-224 and
//! SHA-256, `Sha2Core<u64>` serves SHA-384 and SHA-512. Each core owns its
//! state words and the message-schedule scratch, which is fully rewritten
//! from every block before it is read.

use super::constants::{K32, K64, SHA1_K};
use super::word::Word;

/// A per-block state transition plus the block geometry padding needs.
pub trait Compressor: Clone + Send + Sync + 'static {
    /// Fixed-size buffer holding one block.
    type Block: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync + 'static;

    /// Block size in bytes (64 or 128).
    const BLOCK_LEN: usize;
    /// Size of the trailing bit-length field in bytes (8 or 16).
    const LENGTH_FIELD_LEN: usize;
    const ZERO_BLOCK: Self::Block;

    /// Absorb exactly one block of `BLOCK_LEN` bytes into the state.
    fn compress(&mut self, block: &[u8]);

    /// Write state words big-endian, front to back, until `out` is full.
    ///
    /// `out.len()` must be a multiple of the word size; a shorter `out`
    /// truncates the state (SHA-224, SHA-384).
    fn write_state(&self, out: &mut [u8]);
}

/// SHA-1 compression engine.
#[derive(Clone, Copy)]
pub struct Sha1Core {
    h: [u32; 5],
    w: [u32; 80],
}

impl Sha1Core {
    pub fn new(iv: [u32; 5]) -> Self {
        Sha1Core { h: iv, w: [0; 80] }
    }

    pub fn state(&self) -> &[u32; 5] {
        &self.h
    }
}

/// SHA-1 round constant for round `t`.
#[inline]
fn k(t: usize) -> u32 {
    SHA1_K[t / 20]
}

/// SHA-1 nonlinear function for round `t`: choice, parity, majority, parity.
#[inline]
fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) | ((!b) & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

impl Compressor for Sha1Core {
    type Block = [u8; 64];

    const BLOCK_LEN: usize = 64;
    const LENGTH_FIELD_LEN: usize = 8;
    const ZERO_BLOCK: [u8; 64] = [0; 64];

    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), Self::BLOCK_LEN);
        let w = &mut self.w;

        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_slice(bytes);
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotl(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (t, &wt) in w.iter().enumerate() {
            let temp = a
                .rotl(5)
                .wrapping_add(f(t, b, c, d))
                .wrapping_add(e)
                .wrapping_add(k(t))
                .wrapping_add(wt);
            e = d;
            d = c;
            c = b.rotl(30);
            b = a;
            a = temp;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
    }

    fn write_state(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= 20 && out.len() % 4 == 0);
        for (word, bytes) in self.h.iter().zip(out.chunks_exact_mut(4)) {
            word.store_be(bytes);
        }
    }
}

/// Word-width parameters of the SHA-2 compression function.
pub trait Sha2Word: Word {
    type Block: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync + 'static;
    /// One schedule entry per round.
    type Schedule: AsRef<[Self]> + AsMut<[Self]> + Copy + Send + Sync + 'static;

    const ZERO_BLOCK: Self::Block;
    const ZERO_SCHEDULE: Self::Schedule;
    /// Round constants, one per round.
    const K: &'static [Self];

    /// Rotation amounts of Σ0 and Σ1.
    const BIG_SIGMA0: [u32; 3];
    const BIG_SIGMA1: [u32; 3];
    /// Two rotations then a right shift, for σ0 and σ1.
    const SMALL_SIGMA0: [u32; 3];
    const SMALL_SIGMA1: [u32; 3];
}

impl Sha2Word for u32 {
    type Block = [u8; 64];
    type Schedule = [u32; 64];

    const ZERO_BLOCK: [u8; 64] = [0; 64];
    const ZERO_SCHEDULE: [u32; 64] = [0; 64];
    const K: &'static [u32] = &K32;

    const BIG_SIGMA0: [u32; 3] = [2, 13, 22];
    const BIG_SIGMA1: [u32; 3] = [6, 11, 25];
    const SMALL_SIGMA0: [u32; 3] = [7, 18, 3];
    const SMALL_SIGMA1: [u32; 3] = [17, 19, 10];
}

impl Sha2Word for u64 {
    type Block = [u8; 128];
    type Schedule = [u64; 80];

    const ZERO_BLOCK: [u8; 128] = [0; 128];
    const ZERO_SCHEDULE: [u64; 80] = [0; 80];
    const K: &'static [u64] = &K64;

    const BIG_SIGMA0: [u32; 3] = [28, 34, 39];
    const BIG_SIGMA1: [u32; 3] = [14, 18, 41];
    const SMALL_SIGMA0: [u32; 3] = [1, 8, 7];
    const SMALL_SIGMA1: [u32; 3] = [19, 61, 6];
}

#[inline(always)]
pub(crate) fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

#[inline(always)]
pub(crate) fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
pub(crate) fn big_sigma0<W: Sha2Word>(x: W) -> W {
    let [r0, r1, r2] = W::BIG_SIGMA0;
    x.rotr(r0) ^ x.rotr(r1) ^ x.rotr(r2)
}

#[inline(always)]
pub(crate) fn big_sigma1<W: Sha2Word>(x: W) -> W {
    let [r0, r1, r2] = W::BIG_SIGMA1;
    x.rotr(r0) ^ x.rotr(r1) ^ x.rotr(r2)
}

#[inline(always)]
pub(crate) fn small_sigma0<W: Sha2Word>(x: W) -> W {
    let [r0, r1, s] = W::SMALL_SIGMA0;
    x.rotr(r0) ^ x.rotr(r1) ^ (x >> s)
}

#[inline(always)]
pub(crate) fn small_sigma1<W: Sha2Word>(x: W) -> W {
    let [r0, r1, s] = W::SMALL_SIGMA1;
    x.rotr(r0) ^ x.rotr(r1) ^ (x >> s)
}

/// SHA-2 compression engine over 32-bit or 64-bit words.
#[derive(Clone, Copy)]
pub struct Sha2Core<W: Sha2Word> {
    h: [W; 8],
    w: W::Schedule,
}

impl<W: Sha2Word> Sha2Core<W> {
    pub fn new(iv: [W; 8]) -> Self {
        Sha2Core { h: iv, w: W::ZERO_SCHEDULE }
    }

    pub fn state(&self) -> &[W; 8] {
        &self.h
    }
}

impl<W: Sha2Word> Compressor for Sha2Core<W> {
    type Block = W::Block;

    const BLOCK_LEN: usize = 16 * W::BYTES;
    const LENGTH_FIELD_LEN: usize = 2 * W::BYTES;
    const ZERO_BLOCK: W::Block = W::ZERO_BLOCK;

    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), Self::BLOCK_LEN);
        let w = self.w.as_mut();

        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(W::BYTES)) {
            *word = W::from_be_slice(bytes);
        }
        for t in 16..w.len() {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = self.h;

        for (&kt, &wt) in W::K.iter().zip(w.iter()) {
            let t1 = hh
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(kt)
                .wrapping_add(wt);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
            hh = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (h, v) in self.h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
            *h = h.wrapping_add(v);
        }
    }

    fn write_state(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= 8 * W::BYTES && out.len() % W::BYTES == 0);
        for (word, bytes) in self.h.iter().zip(out.chunks_exact_mut(W::BYTES)) {
            word.store_be(bytes);
        }
    }
}
