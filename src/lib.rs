//! Pure-Rust SHA family: SHA-1, SHA-224, SHA-256, SHA-384, SHA-512.
//!
//! Every variant can be driven three ways:
//!
//! * one-shot over a buffer: [`Sha256::compute`]
//! * one-shot over a reader: [`Sha256::compute_reader`]
//! * incrementally: [`Hasher::update`] then [`Hasher::finalize`]
//!
//! All three produce the same digest for the same bytes, however the input
//! is split.
//!
//! ```
//! use sha_family::{Algorithm, Sha256};
//!
//! let one_shot = Sha256::compute(b"abc");
//!
//! let mut h = Sha256::new();
//! h.update(b"a");
//! h.update(b"bc");
//! assert_eq!(h.finalize(), one_shot);
//!
//! let by_name: Algorithm = "sha-256".parse().unwrap();
//! assert_eq!(by_name.compute(b"abc"), one_shot);
//! assert_eq!(
//!     one_shot.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod error;
pub mod sha;

pub use error::{HashError, Result};
pub use sha::digest::Digest;
pub use sha::hasher::Hasher;
pub use sha::variants::{
    Algorithm, HashAlgorithm, Sha1, Sha1Variant, Sha224, Sha224Variant, Sha256, Sha256Variant,
    Sha384, Sha384Variant, Sha512, Sha512Variant, Variant,
};
