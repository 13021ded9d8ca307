//! Byte-wise XOR kernels
//!
//! XOR is the only arithmetic single parity needs: it is associative,
//! commutative and its own inverse, so the same kernel builds parity and
//! recovers a lost chunk.
//!
//! When both buffers share the same alignment the bulk of the work is done on
//! `u64` words through `bytemuck`, with byte loops for the unaligned head and
//! tail. Mismatched alignments fall back to the plain byte loop.

use std::mem::align_of;

/// XOR `src` into `dst` byte by byte over the common prefix of both slices
#[inline]
fn xor_bytes(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// XOR `src` into `dst` in place: `dst[i] ^= src[i]`
///
/// Only the common prefix `min(dst.len(), src.len())` is touched.
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    let len = dst.len().min(src.len());
    let dst = &mut dst[..len];
    let src = &src[..len];

    let word_align = align_of::<u64>();
    if dst.as_ptr().align_offset(word_align) != src.as_ptr().align_offset(word_align) {
        xor_bytes(dst, src);
        return;
    }

    // Equal offsets give equal head/body/tail splits on both sides
    let (dst_head, dst_words, dst_tail) = bytemuck::pod_align_to_mut::<u8, u64>(dst);
    let (src_head, src_words, src_tail) = bytemuck::pod_align_to::<u8, u64>(src);

    xor_bytes(dst_head, src_head);
    for (d, s) in dst_words.iter_mut().zip(src_words) {
        *d ^= *s;
    }
    xor_bytes(dst_tail, src_tail);
}

/// XOR every chunk in `chunks` together into a fresh buffer of `len` bytes
///
/// An empty iterator yields the all-zero buffer, the XOR identity.
pub fn xor_all<'a, I>(chunks: I, len: usize) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut acc = vec![0u8; len];
    for chunk in chunks {
        xor_into(&mut acc, chunk);
    }
    acc
}

/// Returns true when every byte is zero
#[inline]
pub fn is_zero(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0)
}
