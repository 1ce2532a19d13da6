//! Known-answer vectors from FIPS-197 appendix C and SP 800-38A appendix F.

use aes_core::{decrypt_block, encrypt_block, expand_key, Block, Key};
use aes_modes::{cbc_decrypt, cbc_encrypt, ctr_xcrypt, ecb_decrypt, ecb_encrypt, Context};

const FIPS_PLAIN: &str = "00112233445566778899aabbccddeeff";

const FIPS: [(&str, &str, &str); 3] = [
    (
        "fips197-c1-aes128",
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "fips197-c2-aes192",
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "fips197-c3-aes256",
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

const SP_PLAIN: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);
const SP_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP_COUNTER: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

#[derive(Clone, Copy)]
enum Kind {
    Ecb,
    Cbc,
    Ctr,
}

const SP800_38A: [(&str, Kind, &str, &str); 9] = [
    (
        "sp800-38a-f1.1-ecb-aes128",
        Kind::Ecb,
        "2b7e151628aed2a6abf7158809cf4f3c",
        concat!(
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ),
    ),
    (
        "sp800-38a-f1.3-ecb-aes192",
        Kind::Ecb,
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        concat!(
            "bd334f1d6e45f25ff712a214571fa5cc",
            "974104846d0ad3ad7734ecb3ecee4eef",
            "ef7afd2270e2e60adce0ba2face6444e",
            "9a4b41ba738d6c72fb16691603c18e0e",
        ),
    ),
    (
        "sp800-38a-f1.5-ecb-aes256",
        Kind::Ecb,
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        concat!(
            "f3eed1bdb5d2a03c064b5a7e3db181f8",
            "591ccb10d410ed26dc5ba74a31362870",
            "b6ed21b99ca6f4f9f153e7b1beafed1d",
            "23304b7a39f9f3ff067d8d8f9e24ecc7",
        ),
    ),
    (
        "sp800-38a-f2.1-cbc-aes128",
        Kind::Cbc,
        "2b7e151628aed2a6abf7158809cf4f3c",
        concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    ),
    (
        "sp800-38a-f2.3-cbc-aes192",
        Kind::Cbc,
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        concat!(
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ),
    ),
    (
        "sp800-38a-f2.5-cbc-aes256",
        Kind::Cbc,
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ),
    ),
    (
        "sp800-38a-f5.1-ctr-aes128",
        Kind::Ctr,
        "2b7e151628aed2a6abf7158809cf4f3c",
        concat!(
            "874d6191b620e3261bef6864990db6ce",
            "9806f66b7970fdff8617187bb9fffdff",
            "5ae4df3edbd5d35e5b4f09020db03eab",
            "1e031dda2fbe03d1792170a0f3009cee",
        ),
    ),
    (
        "sp800-38a-f5.3-ctr-aes192",
        Kind::Ctr,
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        concat!(
            "1abc932417521ca24f2b0459fe7e6e0b",
            "090339ec0aa6faefd5ccc2c6f4ce8e94",
            "1e36b26bd1ebc670d1bd1d665620abf7",
            "4f78a7f6d29809585a97daec58c6b050",
        ),
    ),
    (
        "sp800-38a-f5.5-ctr-aes256",
        Kind::Ctr,
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        concat!(
            "601ec313775789a5b7a7f504bbf3d228",
            "f443e3ca4d62b59aca84e990cacaf5c5",
            "2b0930daa23de94ce87017ba2d84988d",
            "dfc9c58db67aada613c2dd08457941a6",
        ),
    ),
];

/// Result of one vector.
pub struct Outcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Runs every vector in both directions.
pub fn run_all() -> Vec<Outcome> {
    let fips = FIPS.iter().map(|&(name, key, expected)| Outcome {
        name,
        passed: check_block(key, expected),
    });
    let modes = SP800_38A.iter().map(|&(name, kind, key, expected)| Outcome {
        name,
        passed: check_mode(kind, key, expected),
    });
    fips.chain(modes).collect()
}

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("vector tables hold valid hex")
}

fn decode_key(hex_str: &str) -> Key {
    Key::try_from(decode(hex_str).as_slice()).expect("vector tables hold valid key lengths")
}

fn decode_block(hex_str: &str) -> Block {
    let mut block = [0u8; 16];
    block.copy_from_slice(&decode(hex_str));
    block
}

fn check_block(key_hex: &str, expected_hex: &str) -> bool {
    let round_keys = expand_key(&decode_key(key_hex));
    let plain = decode_block(FIPS_PLAIN);
    let mut state = plain;
    encrypt_block(&mut state, &round_keys);
    let encrypted_ok = state == decode_block(expected_hex);
    decrypt_block(&mut state, &round_keys);
    encrypted_ok && state == plain
}

fn check_mode(kind: Kind, key_hex: &str, expected_hex: &str) -> bool {
    let key = decode_key(key_hex);
    let plain = decode(SP_PLAIN);
    let expected = decode(expected_hex);
    let mut buf = plain.clone();

    match kind {
        Kind::Ecb => {
            let ctx = Context::new(key);
            for_each_block(&mut buf, |block| ecb_encrypt(&ctx, block));
            if buf != expected {
                return false;
            }
            for_each_block(&mut buf, |block| ecb_decrypt(&ctx, block));
        }
        Kind::Cbc => {
            let iv = decode_block(SP_IV);
            cbc_encrypt(&mut Context::with_iv(key, iv), &mut buf);
            if buf != expected {
                return false;
            }
            cbc_decrypt(&mut Context::with_iv(key, iv), &mut buf);
        }
        Kind::Ctr => {
            let counter = decode_block(SP_COUNTER);
            ctr_xcrypt(&mut Context::with_iv(key, counter), &mut buf);
            if buf != expected {
                return false;
            }
            ctr_xcrypt(&mut Context::with_iv(key, counter), &mut buf);
        }
    }
    buf == plain
}

fn for_each_block(buf: &mut [u8], mut f: impl FnMut(&mut Block)) {
    for chunk in buf.chunks_exact_mut(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        f(&mut block);
        chunk.copy_from_slice(&block);
    }
}
