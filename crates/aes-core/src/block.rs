//! Block representation helpers.

/// Length of an AES block in bytes, independent of the key size.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
///
/// Bytes are laid out column-major: byte `col * 4 + row` is the state
/// element at `(row, col)`.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
