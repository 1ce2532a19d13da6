//! Cipher block chaining mode.
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first) before encryption. The context's IV register carries the
//! chain across calls, so one message may be fed in several block-aligned
//! pieces.
//!
//! Buffers must be a multiple of [`BLOCK_LEN`](aes_core::BLOCK_LEN) bytes. Any
//! trailing partial block is neither read nor written.

use aes_core::{decrypt_block, encrypt_block, xor_in_place, BLOCK_LEN};

use crate::{as_block, Context};

/// Encrypts `buf` in place and leaves the last ciphertext block in the IV
/// register.
pub fn encrypt_buffer(ctx: &mut Context, buf: &mut [u8]) {
    let (round_keys, iv) = ctx.split_mut();
    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        let block = as_block(chunk);
        xor_in_place(block, iv);
        encrypt_block(block, round_keys);
        *iv = *block;
    }
}

/// Decrypts `buf` in place and leaves the last ciphertext block in the IV
/// register.
pub fn decrypt_buffer(ctx: &mut Context, buf: &mut [u8]) {
    let (round_keys, iv) = ctx.split_mut();
    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        let block = as_block(chunk);
        let next_iv = *block;
        decrypt_block(block, round_keys);
        xor_in_place(block, iv);
        *iv = next_iv;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    const IV: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn nist_aes128_two_blocks() {
        let mut ctx = Context::with_iv(KEY, IV);
        let mut buf =
            hex::decode("6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51")
                .unwrap();
        encrypt_buffer(&mut ctx, &mut buf);
        assert_eq!(
            hex::encode(&buf),
            "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2"
        );
        assert_eq!(ctx.iv()[..], buf[16..]);
    }

    #[test]
    fn identical_plaintext_blocks_differ() {
        let mut ctx = Context::with_iv(KEY, IV);
        let mut buf = [0x61u8; 32];
        encrypt_buffer(&mut ctx, &mut buf);
        assert_ne!(buf[..16], buf[16..]);
    }

    #[test]
    fn iv_register_tracks_last_ciphertext_block() {
        let mut enc = Context::with_iv([5u8; 24], IV);
        let mut buf = [0x42u8; 48];
        encrypt_buffer(&mut enc, &mut buf);
        let last = &buf[32..];
        assert_eq!(&enc.iv()[..], last);

        let mut dec = Context::with_iv([5u8; 24], IV);
        let ciphertext = buf;
        decrypt_buffer(&mut dec, &mut buf);
        assert_eq!(buf, [0x42u8; 48]);
        assert_eq!(dec.iv()[..], ciphertext[32..]);
    }

    #[test]
    fn chain_continues_across_calls() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xcbc);
        let mut data = vec![0u8; 16 * 6];
        rng.fill_bytes(&mut data);

        let mut whole = data.clone();
        let mut ctx = Context::with_iv([9u8; 32], IV);
        encrypt_buffer(&mut ctx, &mut whole);

        let mut pieces = data.clone();
        let mut ctx = Context::with_iv([9u8; 32], IV);
        let (head, tail) = pieces.split_at_mut(32);
        encrypt_buffer(&mut ctx, head);
        encrypt_buffer(&mut ctx, tail);
        assert_eq!(pieces, whole);

        let mut ctx = Context::with_iv([9u8; 32], IV);
        let (head, tail) = pieces.split_at_mut(48);
        decrypt_buffer(&mut ctx, head);
        decrypt_buffer(&mut ctx, tail);
        assert_eq!(pieces, data);
    }

    #[test]
    fn round_trip_random_all_key_sizes() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xc0ffee);
        for len in [16usize, 24, 32] {
            for _ in 0..20 {
                let mut key = vec![0u8; len];
                let mut iv = [0u8; 16];
                rng.fill_bytes(&mut key);
                rng.fill_bytes(&mut iv);
                let blocks = rng.gen_range(0..8);
                let mut data = vec![0u8; blocks * BLOCK_LEN];
                rng.fill_bytes(&mut data);

                let key = aes_core::Key::try_from(key.as_slice()).unwrap();
                let mut buf = data.clone();
                encrypt_buffer(&mut Context::with_iv(key, iv), &mut buf);
                decrypt_buffer(&mut Context::with_iv(key, iv), &mut buf);
                assert_eq!(buf, data);
            }
        }
    }

    #[test]
    fn trailing_partial_block_is_left_alone() {
        let mut ctx = Context::with_iv(KEY, IV);
        let mut buf = [0x33u8; 20];
        encrypt_buffer(&mut ctx, &mut buf);
        assert_ne!(buf[..16], [0x33u8; 16]);
        assert_eq!(buf[16..], [0x33u8; 4]);
    }

    #[test]
    fn empty_buffer_keeps_iv() {
        let mut ctx = Context::with_iv(KEY, IV);
        encrypt_buffer(&mut ctx, &mut []);
        decrypt_buffer(&mut ctx, &mut []);
        assert_eq!(ctx.iv(), &IV);
    }
}
