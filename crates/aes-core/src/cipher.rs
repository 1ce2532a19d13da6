//! AES key schedule and block encryption/decryption.

use crate::block::{Block, BLOCK_LEN};
use crate::key::{Key, RoundKeys, MAX_ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

/// Words per block (`Nb`).
const NB: usize = 4;
/// Schedule length in words for the largest variant.
const MAX_WORDS: usize = NB * (MAX_ROUNDS + 1);

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a cipher key into `Nr + 1` round keys.
///
/// Pure function of the key: the same key always yields the same schedule.
pub fn expand_key(key: &Key) -> RoundKeys {
    let size = key.size();
    let nk = size.nk();
    let total_words = NB * (size.rounds() + 1);

    let mut w = [0u32; MAX_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_LEN]; MAX_ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w[..total_words].chunks_exact(NB)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
    w.fill(0);

    RoundKeys::from_parts(round_keys, size)
}

/// Encrypts a single 16-byte block in place with pre-expanded round keys.
pub fn encrypt_block(state: &mut Block, round_keys: &RoundKeys) {
    let rounds = round_keys.rounds();

    add_round_key(state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys.get(rounds));
}

/// Decrypts a single 16-byte block in place with pre-expanded round keys.
pub fn decrypt_block(state: &mut Block, round_keys: &RoundKeys) {
    let rounds = round_keys.rounds();

    add_round_key(state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_keys.get(round));
        inv_mix_columns(state);
    }
    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0));
}
