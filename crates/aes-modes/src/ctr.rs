//! Counter mode: a keystream of encrypted counter blocks XORed into the data.
//!
//! The same call encrypts and decrypts. Buffers may have any length. The
//! IV register holds the next counter block and is incremented as a 128-bit
//! big-endian integer once per keystream block.
//!
//! The keystream position is not carried across calls: each call starts on a
//! fresh counter block, so a message fed in pieces must be split on
//! 16-byte boundaries to match a single call.

use aes_core::{encrypt_block, Block, BLOCK_LEN};
use zeroize::Zeroize;

use crate::Context;

/// XORs `buf` in place with the keystream generated from the IV register.
///
/// An empty buffer leaves the counter untouched.
pub fn xcrypt_buffer(ctx: &mut Context, buf: &mut [u8]) {
    let (round_keys, counter) = ctx.split_mut();
    let mut keystream: Block = [0u8; BLOCK_LEN];
    for chunk in buf.chunks_mut(BLOCK_LEN) {
        keystream = *counter;
        encrypt_block(&mut keystream, round_keys);
        increment_counter(counter);
        for (byte, key_byte) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= *key_byte;
        }
    }
    keystream.zeroize();
}

/// Adds one to `counter` read as a big-endian 128-bit integer, wrapping from
/// all-`0xff` to all-zero.
#[inline]
pub fn increment_counter(counter: &mut Block) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
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
    const COUNTER: [u8; 16] = [
        0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe,
        0xff,
    ];

    #[test]
    fn increment_carries_leftward() {
        let mut counter = [0u8; 16];
        counter[15] = 0xff;
        counter[14] = 0xff;
        increment_counter(&mut counter);
        assert_eq!(counter[13..], [0x01, 0x00, 0x00]);

        let mut counter = COUNTER;
        increment_counter(&mut counter);
        assert_eq!(counter[14..], [0xff, 0x00]);
        assert_eq!(counter[13], 0xfd);
    }

    #[test]
    fn increment_wraps_all_ones_to_zero() {
        let mut counter = [0xffu8; 16];
        increment_counter(&mut counter);
        assert_eq!(counter, [0u8; 16]);
    }

    #[test]
    fn increment_matches_u128_arithmetic() {
        let mut rng = ChaCha20Rng::seed_from_u64(128);
        for _ in 0..256 {
            let value: u128 = rng.gen();
            let mut counter = value.to_be_bytes();
            increment_counter(&mut counter);
            assert_eq!(u128::from_be_bytes(counter), value.wrapping_add(1));
        }
    }

    #[test]
    fn nist_aes128_partial_message() {
        let mut ctx = Context::with_iv(KEY, COUNTER);
        let mut buf = hex::decode("6bc1bee22e409f96e93d7e117393172aae2d8a57").unwrap();
        xcrypt_buffer(&mut ctx, &mut buf);
        assert_eq!(
            hex::encode(&buf),
            "874d6191b620e3261bef6864990db6ce9806f66b"
        );
    }

    #[test]
    fn applying_twice_restores_plaintext() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xc7);
        for len in [16usize, 24, 32] {
            for _ in 0..20 {
                let mut key = vec![0u8; len];
                let mut iv = [0u8; 16];
                rng.fill_bytes(&mut key);
                rng.fill_bytes(&mut iv);
                let mut data = vec![0u8; rng.gen_range(0..100)];
                rng.fill_bytes(&mut data);

                let key = aes_core::Key::try_from(key.as_slice()).unwrap();
                let mut buf = data.clone();
                xcrypt_buffer(&mut Context::with_iv(key, iv), &mut buf);
                xcrypt_buffer(&mut Context::with_iv(key, iv), &mut buf);
                assert_eq!(buf, data);
            }
        }
    }

    #[test]
    fn counter_advances_once_per_keystream_block() {
        for (len, steps) in [(1usize, 1u128), (16, 1), (17, 2), (48, 3), (50, 4)] {
            let mut ctx = Context::with_iv(KEY, [0u8; 16]);
            let mut buf = vec![0u8; len];
            xcrypt_buffer(&mut ctx, &mut buf);
            assert_eq!(u128::from_be_bytes(*ctx.iv()), steps, "len {len}");
        }
    }

    #[test]
    fn block_aligned_pieces_match_one_shot() {
        let data: Vec<u8> = (0..70u8).collect();
        let mut whole = data.clone();
        xcrypt_buffer(&mut Context::with_iv(KEY, COUNTER), &mut whole);

        let mut pieces = data;
        let mut ctx = Context::with_iv(KEY, COUNTER);
        let (head, tail) = pieces.split_at_mut(32);
        xcrypt_buffer(&mut ctx, head);
        xcrypt_buffer(&mut ctx, tail);
        assert_eq!(pieces, whole);
    }

    #[test]
    fn counter_wraps_during_keystream() {
        let mut ctx = Context::with_iv(KEY, [0xffu8; 16]);
        let mut buf = [0u8; 32];
        xcrypt_buffer(&mut ctx, &mut buf);
        assert_eq!(u128::from_be_bytes(*ctx.iv()), 1);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut ctx = Context::with_iv(KEY, COUNTER);
        xcrypt_buffer(&mut ctx, &mut []);
        assert_eq!(ctx.iv(), &COUNTER);
    }
}
