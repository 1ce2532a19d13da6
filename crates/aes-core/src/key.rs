//! Key types and the expanded round-key schedule.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Largest round count of any supported variant (AES-256).
pub const MAX_ROUNDS: usize = 14;

/// AES variant, fixed by the key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Returns the variant whose key is `len` bytes long.
    pub const fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }
}

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

/// AES-192 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes192Key(pub [u8; 24]);

/// AES-256 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes256Key(pub [u8; 32]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl From<[u8; 24]> for Aes192Key {
    fn from(value: [u8; 24]) -> Self {
        Self(value)
    }
}

impl From<[u8; 32]> for Aes256Key {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

/// A cipher key of any supported size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// AES-128 key.
    Aes128(Aes128Key),
    /// AES-192 key.
    Aes192(Aes192Key),
    /// AES-256 key.
    Aes256(Aes256Key),
}

impl Key {
    /// The variant selected by this key.
    pub fn size(&self) -> KeySize {
        match self {
            Self::Aes128(_) => KeySize::Aes128,
            Self::Aes192(_) => KeySize::Aes192,
            Self::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(key) => &key.0,
            Self::Aes192(key) => &key.0,
            Self::Aes256(key) => &key.0,
        }
    }
}

impl From<Aes128Key> for Key {
    fn from(value: Aes128Key) -> Self {
        Self::Aes128(value)
    }
}

impl From<Aes192Key> for Key {
    fn from(value: Aes192Key) -> Self {
        Self::Aes192(value)
    }
}

impl From<Aes256Key> for Key {
    fn from(value: Aes256Key) -> Self {
        Self::Aes256(value)
    }
}

impl From<[u8; 16]> for Key {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(Aes128Key(value))
    }
}

impl From<[u8; 24]> for Key {
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(Aes192Key(value))
    }
}

impl From<[u8; 32]> for Key {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(Aes256Key(value))
    }
}

/// Returned when a byte slice is not 16, 24 or 32 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("AES key must be 16, 24 or 32 bytes, got {len}")]
pub struct KeyLengthError {
    /// Length of the rejected slice.
    pub len: usize,
}

impl TryFrom<&[u8]> for Key {
    type Error = KeyLengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let len = bytes.len();
        let err = KeyLengthError { len };
        match KeySize::from_key_len(len).ok_or(err)? {
            KeySize::Aes128 => Ok(Self::from(<[u8; 16]>::try_from(bytes).map_err(|_| err)?)),
            KeySize::Aes192 => Ok(Self::from(<[u8; 24]>::try_from(bytes).map_err(|_| err)?)),
            KeySize::Aes256 => Ok(Self::from(<[u8; 32]>::try_from(bytes).map_err(|_| err)?)),
        }
    }
}

/// Expanded round keys.
///
/// Storage is sized for the largest variant; only the first `rounds + 1`
/// blocks are populated.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn from_parts(keys: [Block; MAX_ROUNDS + 1], size: KeySize) -> Self {
        Self { keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// Number of rounds (`Nr`) this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Variant the schedule was expanded for.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Populated round keys, `rounds() + 1` of them.
    pub fn as_blocks(&self) -> &[Block] {
        &self.keys[..=self.rounds()]
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
