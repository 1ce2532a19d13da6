//! AES block cipher core shared by the mode drivers and the CLI.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128, AES-192 and AES-256.
//! - The four round transformations and their inverses.
//! - Single-block encryption and decryption, in place.
//!
//! The implementation aims for clarity and predictability rather than
//! constant-time guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{
    Aes128Key, Aes192Key, Aes256Key, Key, KeyLengthError, KeySize, RoundKeys, MAX_ROUNDS,
};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, multiply,
    shift_rows, sub_bytes, xtime,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
