//! Per-stream cipher state.

use core::fmt;

use aes_core::{expand_key, Key, KeySize, RoundKeys};
#[cfg(any(feature = "cbc", feature = "ctr"))]
use aes_core::Block;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Expanded key schedule plus the IV/counter register for chaining modes.
///
/// The schedule is fixed at construction. The IV register is rewritten by
/// every CBC/CTR call, so one context serves exactly one logical stream;
/// the `&mut` receivers of those drivers enforce single ownership.
/// Everything is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Context {
    round_keys: RoundKeys,
    #[cfg(any(feature = "cbc", feature = "ctr"))]
    iv: Block,
}

impl Context {
    /// Expands `key` into a new context. The IV register starts zeroed.
    pub fn new(key: impl Into<Key>) -> Self {
        let mut key = key.into();
        let round_keys = expand_key(&key);
        zeroize_key(&mut key);
        Self {
            round_keys,
            #[cfg(any(feature = "cbc", feature = "ctr"))]
            iv: [0u8; 16],
        }
    }

    /// Expands `key` and installs `iv` in one step.
    #[cfg(any(feature = "cbc", feature = "ctr"))]
    pub fn with_iv(key: impl Into<Key>, iv: Block) -> Self {
        let mut ctx = Self::new(key);
        ctx.set_iv(iv);
        ctx
    }

    /// Replaces the IV/counter register, e.g. to start a new message.
    #[cfg(any(feature = "cbc", feature = "ctr"))]
    pub fn set_iv(&mut self, iv: Block) {
        self.iv = iv;
    }

    /// Current IV/counter register.
    #[cfg(any(feature = "cbc", feature = "ctr"))]
    pub fn iv(&self) -> &Block {
        &self.iv
    }

    /// Expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Variant selected at construction.
    pub fn key_size(&self) -> KeySize {
        self.round_keys.key_size()
    }

    #[cfg(any(feature = "cbc", feature = "ctr"))]
    pub(crate) fn split_mut(&mut self) -> (&RoundKeys, &mut Block) {
        (&self.round_keys, &mut self.iv)
    }
}

fn zeroize_key(key: &mut Key) {
    match key {
        Key::Aes128(k) => k.0.zeroize(),
        Key::Aes192(k) => k.0.zeroize(),
        Key::Aes256(k) => k.0.zeroize(),
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}
