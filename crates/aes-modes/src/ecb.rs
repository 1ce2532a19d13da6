//! Electronic codebook mode: one independent block at a time.
//!
//! Stateless and reentrant. The IV register is never read, and a shared
//! `&Context` may serve any number of threads at once. Larger buffers are
//! the caller's loop.

use aes_core::{decrypt_block, encrypt_block, Block};

use crate::Context;

/// Encrypts one block in place.
#[inline]
pub fn encrypt(ctx: &Context, block: &mut Block) {
    encrypt_block(block, ctx.round_keys());
}

/// Decrypts one block in place.
#[inline]
pub fn decrypt(ctx: &Context, block: &mut Block) {
    decrypt_block(block, ctx.round_keys());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn nist_aes128_block() {
        let key: [u8; 16] = hex::decode("2b7e151628aed2a6abf7158809cf4f3c")
            .unwrap()
            .try_into()
            .unwrap();
        let ctx = Context::new(key);
        let mut block: Block = hex::decode("6bc1bee22e409f96e93d7e117393172a")
            .unwrap()
            .try_into()
            .unwrap();
        encrypt(&ctx, &mut block);
        assert_eq!(hex::encode(block), "3ad77bb40d7a3660a89ecaf32466ef97");
        decrypt(&ctx, &mut block);
        assert_eq!(hex::encode(block), "6bc1bee22e409f96e93d7e117393172a");
    }

    #[test]
    fn identical_blocks_encrypt_identically() {
        let ctx = Context::new([0x11u8; 32]);
        let mut first = *b"sixteen byte msg";
        let mut second = first;
        encrypt(&ctx, &mut first);
        encrypt(&ctx, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn round_trip_random_all_key_sizes() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xec8);
        for len in [16usize, 24, 32] {
            let mut key = vec![0u8; len];
            rng.fill_bytes(&mut key);
            let ctx = Context::new(aes_core::Key::try_from(key.as_slice()).unwrap());
            for _ in 0..32 {
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut block);
                let original = block;
                encrypt(&ctx, &mut block);
                decrypt(&ctx, &mut block);
                assert_eq!(block, original);
            }
        }
    }

    #[test]
    fn shared_context_across_threads() {
        let ctx = Context::new([0x5au8; 16]);
        let mut expected = [7u8; 16];
        encrypt(&ctx, &mut expected);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let mut block = [7u8; 16];
                    encrypt(&ctx, &mut block);
                    assert_eq!(block, expected);
                });
            }
        });
    }
}
