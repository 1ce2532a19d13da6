//! Property tests over random keys, IVs and buffers.

use aes_modes::{cbc_decrypt, cbc_encrypt, ctr_xcrypt, ecb_decrypt, ecb_encrypt, Context, Key};
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        any::<[u8; 16]>().prop_map(Key::from),
        any::<[u8; 24]>().prop_map(Key::from),
        any::<[u8; 32]>().prop_map(Key::from),
    ]
}

fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (0usize..16).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

proptest! {
    #[test]
    fn ecb_round_trip(key in any_key(), block in any::<[u8; 16]>()) {
        let ctx = Context::new(key);
        let mut state = block;
        ecb_encrypt(&ctx, &mut state);
        ecb_decrypt(&ctx, &mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn cbc_round_trip(key in any_key(), iv in any::<[u8; 16]>(), data in block_aligned_data()) {
        let mut buf = data.clone();
        cbc_encrypt(&mut Context::with_iv(key, iv), &mut buf);
        cbc_decrypt(&mut Context::with_iv(key, iv), &mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn ctr_is_an_involution(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut buf = data.clone();
        ctr_xcrypt(&mut Context::with_iv(key, iv), &mut buf);
        ctr_xcrypt(&mut Context::with_iv(key, iv), &mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn schedule_depends_only_on_key(key in any_key()) {
        let first = Context::new(key);
        let second = Context::new(key);
        prop_assert_eq!(first.round_keys(), second.round_keys());
    }
}
