//! SHA family internals: word primitives, constant tables, compression
//! cores, padding, the buffering hasher and the digest value.

pub mod compress;
pub mod constants;
pub mod digest;
pub mod hasher;
pub mod padding;
pub mod variants;
pub mod word;
