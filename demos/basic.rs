//! Encrypts a short message in each mode and decrypts it back.

use aes_modes::{cbc_decrypt, cbc_encrypt, ctr_xcrypt, ecb_decrypt, ecb_encrypt, Context};

fn main() {
    // Fixed key and IV for reproducibility in the example.
    let key = [0x2bu8; 32];
    let iv = [0x00u8; 16];

    let mut block = *b"first block here";
    let ctx = Context::new(key);
    ecb_encrypt(&ctx, &mut block);
    println!("ecb: {}", hex::encode(block));
    ecb_decrypt(&ctx, &mut block);
    assert_eq!(&block, b"first block here");

    // CBC needs whole blocks; the caller pads.
    let mut message = *b"two blocks of message, padded...";
    let mut ctx = Context::with_iv(key, iv);
    cbc_encrypt(&mut ctx, &mut message);
    println!("cbc: {}", hex::encode(message));
    ctx.set_iv(iv);
    cbc_decrypt(&mut ctx, &mut message);
    assert_eq!(&message, b"two blocks of message, padded...");

    let mut stream = b"any length works in ctr".to_vec();
    let mut ctx = Context::with_iv(key, iv);
    ctr_xcrypt(&mut ctx, &mut stream);
    println!("ctr: {}", hex::encode(&stream));
    ctx.set_iv(iv);
    ctr_xcrypt(&mut ctx, &mut stream);
    assert_eq!(stream, b"any length works in ctr");

    println!("example succeeded; every mode round-tripped");
}
