//! Block feeding: the incremental [`Hasher`] and the one-shot drivers.
//!
//! Incremental input is staged in a pending buffer that never holds a full
//! block at rest; full blocks are compressed straight out of the caller's
//! slice. The one-shot drivers skip the pending buffer entirely and pad the
//! true remainder once.

use std::fmt;
use std::io::{self, ErrorKind, Read, Write};
use std::marker::PhantomData;

use log::{debug, warn};

use super::compress::Compressor;
use super::digest::{Digest, MAX_DIGEST_LEN};
use super::padding::pad_and_finish;
use super::variants::Variant;
use crate::error::{HashError, Result};

type Block<V> = <<V as Variant>::Core as Compressor>::Block;

/// Incremental hasher for the variant `V`.
///
/// One instance owns one state and one pending buffer; `&mut self` on every
/// feeding method keeps a single computation from being driven from two
/// places at once. Separate instances share nothing and may run on separate
/// threads.
pub struct Hasher<V: Variant> {
    core: V::Core,
    pending: Block<V>,
    pending_len: usize,
    total_len: u128,
    _variant: PhantomData<V>,
}

impl<V: Variant> Hasher<V> {
    /// Display name, e.g. `"SHA-256"`.
    pub const NAME: &'static str = V::NAME;
    /// Digest size in bytes.
    pub const DIGEST_LEN: usize = V::DIGEST_LEN;
    pub const DIGEST_BITS: usize = V::DIGEST_LEN * 8;
    /// Block size in bytes.
    pub const BLOCK_LEN: usize = <V::Core as Compressor>::BLOCK_LEN;

    pub fn new() -> Self {
        Hasher {
            core: V::initial_core(),
            pending: <V::Core as Compressor>::ZERO_BLOCK,
            pending_len: 0,
            total_len: 0,
            _variant: PhantomData,
        }
    }

    /// Absorb `data`. Any length is accepted; an empty slice is a no-op.
    pub fn update(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.total_len += data.len() as u128;

        if self.pending_len > 0 {
            let take = (Self::BLOCK_LEN - self.pending_len).min(data.len());
            self.pending.as_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];

            if self.pending_len < Self::BLOCK_LEN {
                return;
            }
            self.core.compress(self.pending.as_ref());
            self.pending_len = 0;
        }

        let mut blocks = data.chunks_exact(Self::BLOCK_LEN);
        for block in &mut blocks {
            self.core.compress(block);
        }
        let rest = blocks.remainder();
        self.pending.as_mut()[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
    }

    /// Absorb `data[start..start + len]`.
    ///
    /// Fails without consuming anything when the range does not lie inside
    /// `data`.
    pub fn update_range(&mut self, data: &[u8], start: usize, len: usize) -> Result<()> {
        match start.checked_add(len) {
            Some(end) if end <= data.len() => {
                self.update(&data[start..end]);
                Ok(())
            }
            _ => {
                warn!(
                    "{}: rejected feed range {}+{} over {} bytes",
                    V::NAME,
                    start,
                    len,
                    data.len()
                );
                Err(HashError::RangeOutOfBounds {
                    start,
                    len,
                    available: data.len(),
                })
            }
        }
    }

    /// Digest of everything fed so far.
    ///
    /// Padding runs on a copy of the state, so the hasher is left as it was:
    /// more input may follow, or it can be [`reset`](Self::reset).
    pub fn finalize(&self) -> Digest {
        let mut core = self.core.clone();
        pad_and_finish(
            &mut core,
            &self.pending.as_ref()[..self.pending_len],
            self.total_len,
        );
        Self::digest_of(&core)
    }

    /// [`finalize`](Self::finalize) followed by [`reset`](Self::reset).
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finalize();
        self.reset();
        digest
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.core = V::initial_core();
        self.pending_len = 0;
        self.total_len = 0;
    }

    /// Bytes fed since construction or the last reset.
    pub fn bytes_processed(&self) -> u128 {
        self.total_len
    }

    /// One-shot digest of an in-memory buffer.
    pub fn compute(data: &[u8]) -> Digest {
        let mut core = V::initial_core();
        let mut blocks = data.chunks_exact(Self::BLOCK_LEN);
        for block in &mut blocks {
            core.compress(block);
        }
        pad_and_finish(&mut core, blocks.remainder(), data.len() as u128);
        Self::digest_of(&core)
    }

    /// One-shot digest of everything `reader` yields until it is exhausted.
    ///
    /// Reads one block at a time into a stack buffer; wrap unbuffered
    /// sources such as files in a `BufReader`.
    pub fn compute_reader<R: Read>(mut reader: R) -> Result<Digest> {
        let mut core = V::initial_core();
        let mut block = <V::Core as Compressor>::ZERO_BLOCK;
        let mut total: u128 = 0;

        loop {
            let n = fill_block(&mut reader, block.as_mut())?;
            total += n as u128;
            if n < Self::BLOCK_LEN {
                debug!("{}: hashed {} bytes from reader", V::NAME, total);
                pad_and_finish(&mut core, &block.as_ref()[..n], total);
                return Ok(Self::digest_of(&core));
            }
            core.compress(block.as_ref());
        }
    }

    fn digest_of(core: &V::Core) -> Digest {
        let mut out = [0u8; MAX_DIGEST_LEN];
        let out = &mut out[..V::DIGEST_LEN];
        core.write_state(out);
        Digest::from_slice(out)
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input.
///
/// Returns the number of bytes placed in `buf`; anything short of
/// `buf.len()` means the reader is exhausted.
fn fill_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl<V: Variant> Default for Hasher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Hasher<V> {
    fn clone(&self) -> Self {
        Hasher {
            core: self.core.clone(),
            pending: self.pending,
            pending_len: self.pending_len,
            total_len: self.total_len,
            _variant: PhantomData,
        }
    }
}

impl<V: Variant> fmt::Debug for Hasher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &V::NAME)
            .field("pending", &self.pending_len)
            .field("total_len", &self.total_len)
            .finish()
    }
}

/// Lets a hasher be the sink of `io::copy`.
impl<V: Variant> Write for Hasher<V> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
