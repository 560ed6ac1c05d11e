//! The five named variants and runtime algorithm selection.
//!
//! A variant is a zero-sized descriptor binding an initial state, a
//! compression core and an output length. SHA-224 and SHA-384 are the
//! SHA-256 and SHA-512 cores with their own initial values and a shorter
//! output; nothing else differs.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use log::debug;

use super::compress::{Compressor, Sha1Core, Sha2Core};
use super::constants::{SHA1_IV, SHA224_IV, SHA256_IV, SHA384_IV, SHA512_IV};
use super::digest::Digest;
use super::hasher::Hasher;
use crate::error::{HashError, Result};

/// Compile-time description of one SHA variant.
pub trait Variant: Send + Sync + 'static {
    type Core: Compressor;

    const NAME: &'static str;
    /// Output size in bytes, at most the core's full state size.
    const DIGEST_LEN: usize;
    const ALGORITHM: Algorithm;

    fn initial_core() -> Self::Core;
}

macro_rules! sha_variant {
    ($variant:ident, $alias:ident, $alg:ident, $name:expr, $core:ty, $iv:expr, $len:expr) => {
        #[doc = concat!($name, " variant descriptor.")]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $variant;

        impl Variant for $variant {
            type Core = $core;

            const NAME: &'static str = $name;
            const DIGEST_LEN: usize = $len;
            const ALGORITHM: Algorithm = Algorithm::$alg;

            fn initial_core() -> $core {
                <$core>::new($iv)
            }
        }

        #[doc = concat!($name, " hasher.")]
        pub type $alias = Hasher<$variant>;
    };
}

sha_variant!(Sha1Variant, Sha1, Sha1, "SHA-1", Sha1Core, SHA1_IV, 20);
sha_variant!(Sha224Variant, Sha224, Sha224, "SHA-224", Sha2Core<u32>, SHA224_IV, 28);
sha_variant!(Sha256Variant, Sha256, Sha256, "SHA-256", Sha2Core<u32>, SHA256_IV, 32);
sha_variant!(Sha384Variant, Sha384, Sha384, "SHA-384", Sha2Core<u64>, SHA384_IV, 48);
sha_variant!(Sha512Variant, Sha512, Sha512, "SHA-512", Sha2Core<u64>, SHA512_IV, 64);

/// Object-safe view of a hasher, for picking the algorithm at runtime.
pub trait HashAlgorithm: Send {
    fn algorithm(&self) -> Algorithm;
    fn name(&self) -> &'static str;
    fn digest_len(&self) -> usize;
    fn update(&mut self, data: &[u8]);
    /// Feed `data[start..start + len]`; out-of-range windows feed nothing.
    fn update_range(&mut self, data: &[u8], start: usize, len: usize) -> Result<()>;
    fn finalize(&self) -> Digest;
    fn finalize_reset(&mut self) -> Digest;
    fn reset(&mut self);
}

impl<V: Variant> HashAlgorithm for Hasher<V> {
    fn algorithm(&self) -> Algorithm {
        V::ALGORITHM
    }

    fn name(&self) -> &'static str {
        V::NAME
    }

    fn digest_len(&self) -> usize {
        V::DIGEST_LEN
    }

    fn update(&mut self, data: &[u8]) {
        Hasher::update(self, data)
    }

    fn update_range(&mut self, data: &[u8], start: usize, len: usize) -> Result<()> {
        Hasher::update_range(self, data, start, len)
    }

    fn finalize(&self) -> Digest {
        Hasher::finalize(self)
    }

    fn finalize_reset(&mut self) -> Digest {
        Hasher::finalize_reset(self)
    }

    fn reset(&mut self) {
        Hasher::reset(self)
    }
}

/// The supported algorithms, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => Sha1::NAME,
            Algorithm::Sha224 => Sha224::NAME,
            Algorithm::Sha256 => Sha256::NAME,
            Algorithm::Sha384 => Sha384::NAME,
            Algorithm::Sha512 => Sha512::NAME,
        }
    }

    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => Sha1::DIGEST_LEN,
            Algorithm::Sha224 => Sha224::DIGEST_LEN,
            Algorithm::Sha256 => Sha256::DIGEST_LEN,
            Algorithm::Sha384 => Sha384::DIGEST_LEN,
            Algorithm::Sha512 => Sha512::DIGEST_LEN,
        }
    }

    pub fn block_len(self) -> usize {
        match self {
            Algorithm::Sha1 => Sha1::BLOCK_LEN,
            Algorithm::Sha224 => Sha224::BLOCK_LEN,
            Algorithm::Sha256 => Sha256::BLOCK_LEN,
            Algorithm::Sha384 => Sha384::BLOCK_LEN,
            Algorithm::Sha512 => Sha512::BLOCK_LEN,
        }
    }

    pub fn compute(self, data: &[u8]) -> Digest {
        match self {
            Algorithm::Sha1 => Sha1::compute(data),
            Algorithm::Sha224 => Sha224::compute(data),
            Algorithm::Sha256 => Sha256::compute(data),
            Algorithm::Sha384 => Sha384::compute(data),
            Algorithm::Sha512 => Sha512::compute(data),
        }
    }

    pub fn compute_reader<R: Read>(self, reader: R) -> Result<Digest> {
        match self {
            Algorithm::Sha1 => Sha1::compute_reader(reader),
            Algorithm::Sha224 => Sha224::compute_reader(reader),
            Algorithm::Sha256 => Sha256::compute_reader(reader),
            Algorithm::Sha384 => Sha384::compute_reader(reader),
            Algorithm::Sha512 => Sha512::compute_reader(reader),
        }
    }

    /// A fresh incremental hasher for this algorithm.
    pub fn hasher(self) -> Box<dyn HashAlgorithm> {
        match self {
            Algorithm::Sha1 => Box::new(Sha1::new()),
            Algorithm::Sha224 => Box::new(Sha224::new()),
            Algorithm::Sha256 => Box::new(Sha256::new()),
            Algorithm::Sha384 => Box::new(Sha384::new()),
            Algorithm::Sha512 => Box::new(Sha512::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `SHA256`, `SHA-256`, `sha_256` and similar spellings.
impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Algorithm> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA224" => Ok(Algorithm::Sha224),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA384" => Ok(Algorithm::Sha384),
            "SHA512" => Ok(Algorithm::Sha512),
            _ => {
                debug!("no hash algorithm named {:?}", s);
                Err(HashError::UnknownAlgorithm(s.to_string()))
            }
        }
    }
}
