//! Block cipher modes of operation over [`aes_core`].
//!
//! A [`Context`] owns the expanded round keys and, when CBC or CTR is
//! enabled, a 16-byte IV/counter register. Each mode lives behind its own
//! cargo feature (`ecb`, `cbc`, `ctr`) and can be built and tested alone.
//!
//! None of the drivers authenticate, pad, or validate their input:
//! - ECB and CBC expect buffers whose length is a multiple of [`BLOCK_LEN`].
//!   A trailing partial block is left untouched and the output is meaningless
//!   to the caller.
//! - CBC and CTR expect a fresh IV per message under a given key.
//!
//! Callers that need those guarantees must enforce them before calling in.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;

#[cfg(feature = "cbc")]
pub mod cbc;
#[cfg(feature = "ctr")]
pub mod ctr;
#[cfg(feature = "ecb")]
pub mod ecb;

pub use aes_core::{
    Aes128Key, Aes192Key, Aes256Key, Block, Key, KeyLengthError, KeySize, BLOCK_LEN,
};

pub use crate::context::Context;

#[cfg(feature = "cbc")]
pub use crate::cbc::{decrypt_buffer as cbc_decrypt, encrypt_buffer as cbc_encrypt};
#[cfg(feature = "ctr")]
pub use crate::ctr::xcrypt_buffer as ctr_xcrypt;
#[cfg(feature = "ecb")]
pub use crate::ecb::{decrypt as ecb_decrypt, encrypt as ecb_encrypt};

/// Reinterprets a full-length chunk produced by `chunks_exact_mut(BLOCK_LEN)`.
#[cfg(feature = "cbc")]
pub(crate) fn as_block(chunk: &mut [u8]) -> &mut Block {
    chunk
        .try_into()
        .expect("chunks_exact_mut yields full blocks")
}
