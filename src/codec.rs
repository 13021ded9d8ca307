//! Single-parity XOR erasure coding (RAID-5 style)
//!
//! Data is split into N equal-size chunks and one parity chunk is generated as
//! the byte-wise XOR of all of them. Because `A ⊕ B ⊕ C ⊕ P = 0`, any one lost
//! data chunk is the XOR of the survivors and the parity.
//!
//! ```
//! use xorpar::codec::{decode, encode, recover_chunk};
//!
//! let data = b"HELLO WORLD";
//! let encoded = encode(data, 3).unwrap();
//! assert_eq!(encoded.chunk_size(), 4);
//!
//! // Simulate losing chunk 1
//! let recovered = recover_chunk(&encoded, 1).unwrap();
//! assert_eq!(recovered, encoded.data_chunks()[1]);
//!
//! assert_eq!(decode(&encoded, data.len()).unwrap(), data);
//! ```
//!
//! An [`EncodedSet`] is immutable once built. Its fields are private so the
//! parity invariant cannot be broken by a caller writing into a chunk; to
//! change data, encode again.

use crate::error::{CodecError, Result};
use crate::stripe::Stripe;
use crate::xor::{is_zero, xor_all, xor_into};
use log::{debug, trace};

/// Data chunks plus their XOR parity, as produced by [`encode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSet {
    data_chunks: Vec<Vec<u8>>,
    parity_chunk: Vec<u8>,
    chunk_size: usize,
}

impl EncodedSet {
    /// Assemble a set from complete chunks whose parity is already known to hold
    ///
    /// Callers either computed the parity from these chunks or used it to
    /// rebuild one of them; either way the invariant holds by construction.
    pub(crate) fn from_verified_parts(
        data_chunks: Vec<Vec<u8>>,
        parity_chunk: Vec<u8>,
        chunk_size: usize,
    ) -> Self {
        debug_assert!(data_chunks.iter().all(|c| c.len() == chunk_size));
        debug_assert_eq!(parity_chunk.len(), chunk_size);
        debug_assert!({
            let mut check = parity_chunk.clone();
            data_chunks.iter().for_each(|c| xor_into(&mut check, c));
            is_zero(&check)
        });
        Self {
            data_chunks,
            parity_chunk,
            chunk_size,
        }
    }

    /// The data chunks in order
    pub fn data_chunks(&self) -> &[Vec<u8>] {
        &self.data_chunks
    }

    /// The parity chunk
    pub fn parity_chunk(&self) -> &[u8] {
        &self.parity_chunk
    }

    /// Padded length of every chunk, parity included
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of data chunks
    pub fn num_chunks(&self) -> usize {
        self.data_chunks.len()
    }

    /// Data chunks plus the parity chunk
    pub fn total_chunks(&self) -> usize {
        self.num_chunks() + 1
    }

    /// Bytes held by the data chunks, padding included
    pub fn capacity(&self) -> usize {
        self.num_chunks() * self.chunk_size
    }

    /// Extra storage spent on parity, as a percentage of the data chunks
    pub fn storage_overhead(&self) -> f64 {
        100.0 / self.num_chunks() as f64
    }

    /// Check that every data chunk XOR the parity is the zero buffer
    pub fn parity_holds(&self) -> bool {
        let mut acc = self.xor_data_except(None);
        xor_into(&mut acc, &self.parity_chunk);
        is_zero(&acc)
    }

    /// Resolve a signed index against this set's data chunks
    ///
    /// Negative and too-large values both fail with `InvalidChunkIndex`.
    pub fn resolve_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.num_chunks())
            .ok_or(CodecError::InvalidChunkIndex {
                index,
                num_chunks: self.num_chunks(),
            })
    }

    /// XOR of every data chunk, optionally skipping one index
    fn xor_data_except(&self, skip: Option<usize>) -> Vec<u8> {
        xor_all(
            self.data_chunks
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .map(|(_, chunk)| chunk.as_slice()),
            self.chunk_size,
        )
    }
}

/// Split `data` into `num_chunks` zero-padded chunks and compute their parity
///
/// `chunk_size` is `ceil(data.len() / num_chunks)`. Chunks that run past the
/// end of `data` are padded with zero bytes; chunks lying entirely past the end
/// are all padding. No chunk is ever shorter than `chunk_size`.
///
/// # Errors
///
/// * `EmptyInput` if `data` is empty
/// * `InvalidChunkCount` if `num_chunks < 2`
///
/// No upper bound is placed on `num_chunks`.
pub fn encode(data: &[u8], num_chunks: usize) -> Result<EncodedSet> {
    if data.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    if num_chunks < 2 {
        return Err(CodecError::InvalidChunkCount {
            requested: num_chunks,
        });
    }

    let chunk_size = data.len().div_ceil(num_chunks);
    debug!(
        "Encoding {} bytes into {} chunks of {} bytes",
        data.len(),
        num_chunks,
        chunk_size
    );

    let data_chunks: Vec<Vec<u8>> = (0..num_chunks)
        .map(|i| {
            let mut chunk = vec![0u8; chunk_size];
            let start = (i * chunk_size).min(data.len());
            let end = (start + chunk_size).min(data.len());
            chunk[..end - start].copy_from_slice(&data[start..end]);
            chunk
        })
        .collect();

    let parity_chunk = generate_parity(&data_chunks, chunk_size);

    Ok(EncodedSet {
        data_chunks,
        parity_chunk,
        chunk_size,
    })
}

/// XOR all data chunks together
fn generate_parity(chunks: &[Vec<u8>], chunk_size: usize) -> Vec<u8> {
    xor_all(chunks.iter().map(Vec::as_slice), chunk_size)
}

/// Rebuild the data chunk at `lost_index` from the other chunks and the parity
///
/// The set is only read; the recovered chunk is a fresh buffer, so calling
/// this twice for the same index yields identical bytes.
///
/// # Errors
///
/// * `InvalidChunkIndex` if `lost_index >= num_chunks`
pub fn recover_chunk(encoded: &EncodedSet, lost_index: usize) -> Result<Vec<u8>> {
    if lost_index >= encoded.num_chunks() {
        return Err(CodecError::invalid_index(lost_index, encoded.num_chunks()));
    }
    trace!(
        "Recovering chunk {} of {} from survivors and parity",
        lost_index,
        encoded.num_chunks()
    );

    let mut recovered = encoded.xor_data_except(Some(lost_index));
    xor_into(&mut recovered, &encoded.parity_chunk);
    Ok(recovered)
}

/// Recompute the parity chunk from the data chunks of a stripe
///
/// This is the parity step of [`encode`] re-run over the survivors, so every
/// data chunk has to be present.
///
/// # Errors
///
/// * `ChunkMissing` naming the first lost data chunk
pub fn recover_parity(stripe: &Stripe) -> Result<Vec<u8>> {
    let mut chunks = Vec::with_capacity(stripe.num_chunks());
    for (index, chunk) in stripe.data_chunks().iter().enumerate() {
        match chunk {
            Some(chunk) => chunks.push(chunk.as_slice()),
            None => return Err(CodecError::ChunkMissing { index }),
        }
    }
    trace!("Recomputing parity over {} data chunks", chunks.len());
    Ok(xor_all(chunks, stripe.chunk_size()))
}

/// Concatenate the data chunks and truncate to `original_size` bytes
///
/// Passing the length of the original input strips the zero padding added
/// by [`encode`].
///
/// # Errors
///
/// * `InvalidSize` if `original_size` exceeds `num_chunks * chunk_size`
pub fn decode(encoded: &EncodedSet, original_size: usize) -> Result<Vec<u8>> {
    let available = encoded.capacity();
    if original_size > available {
        return Err(CodecError::InvalidSize {
            requested: original_size,
            available,
        });
    }
    debug!(
        "Decoding {} bytes ({} bytes of padding dropped)",
        original_size,
        available - original_size
    );

    let mut data = Vec::with_capacity(available);
    for chunk in &encoded.data_chunks {
        data.extend_from_slice(chunk);
    }
    data.truncate(original_size);
    Ok(data)
}
