//! Surviving chunks of an encoded set
//!
//! A [`Stripe`] records which chunks are present and which have been lost,
//! the same present/missing bookkeeping a repair engine keeps per slice. It is
//! how callers holding a damaged set talk to the codec: drop chunks with
//! [`Stripe::lose`], then recover data or parity, or [`Stripe::repair`] the
//! whole thing back into an [`EncodedSet`].
//!
//! Single parity can rebuild at most one missing chunk. Anything more is
//! reported as `TooManyLosses`.

use crate::codec::{recover_parity, EncodedSet};
use crate::error::{CodecError, Result};
use crate::xor::xor_into;
use log::debug;
use std::fmt;

/// A chunk that has gone missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loss {
    /// Data chunk at this index
    Data(usize),
    /// The parity chunk
    Parity,
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loss::Data(index) => write!(f, "data chunk {}", index),
            Loss::Parity => write!(f, "parity chunk"),
        }
    }
}

/// Data and parity chunks, each either present or lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripe {
    data: Vec<Option<Vec<u8>>>,
    parity: Option<Vec<u8>>,
    chunk_size: usize,
}

impl Stripe {
    /// A stripe with every chunk of `encoded` present
    pub fn from_encoded(encoded: &EncodedSet) -> Self {
        Self {
            data: encoded.data_chunks().iter().cloned().map(Some).collect(),
            parity: Some(encoded.parity_chunk().to_vec()),
            chunk_size: encoded.chunk_size(),
        }
    }

    /// Assemble a stripe from chunks held by the caller
    ///
    /// The chunk size is taken from the first present chunk and every other
    /// present chunk must match it.
    ///
    /// # Errors
    ///
    /// * `InvalidChunkCount` if fewer than two data slots are given
    /// * `EmptyInput` if no chunk at all is present
    /// * `ChunkSizeMismatch` if present chunks differ in length (parity is
    ///   reported with index `data.len()`)
    pub fn from_parts(data: Vec<Option<Vec<u8>>>, parity: Option<Vec<u8>>) -> Result<Self> {
        if data.len() < 2 {
            return Err(CodecError::InvalidChunkCount {
                requested: data.len(),
            });
        }

        let parity_index = data.len();
        let mut present = data
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i, c.len())))
            .chain(parity.as_ref().map(|p| (parity_index, p.len())));

        let (_, chunk_size) = present.next().ok_or(CodecError::EmptyInput)?;
        if let Some((index, actual)) = present.find(|&(_, len)| len != chunk_size) {
            return Err(CodecError::ChunkSizeMismatch {
                index,
                expected: chunk_size,
                actual,
            });
        }

        Ok(Self {
            data,
            parity,
            chunk_size,
        })
    }

    /// Number of data slots, present or not
    pub fn num_chunks(&self) -> usize {
        self.data.len()
    }

    /// Length of every chunk in the stripe
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Data slots in order; `None` marks a lost chunk
    pub fn data_chunks(&self) -> &[Option<Vec<u8>>] {
        &self.data
    }

    /// The parity chunk, if it survived
    pub fn parity_chunk(&self) -> Option<&[u8]> {
        self.parity.as_deref()
    }

    /// Return a copy of this stripe with one more chunk lost
    ///
    /// Losing a chunk that is already gone changes nothing.
    pub fn lose(&self, loss: Loss) -> Result<Stripe> {
        let mut next = self.clone();
        match loss {
            Loss::Data(index) => {
                let slot = next
                    .data
                    .get_mut(index)
                    .ok_or_else(|| CodecError::invalid_index(index, self.num_chunks()))?;
                *slot = None;
            }
            Loss::Parity => next.parity = None,
        }
        Ok(next)
    }

    /// Every missing chunk, data first in index order, then parity
    pub fn missing(&self) -> Vec<Loss> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Loss::Data(i))
            .chain(self.parity.is_none().then_some(Loss::Parity))
            .collect()
    }

    /// True when nothing is missing
    pub fn is_complete(&self) -> bool {
        self.parity.is_some() && self.data.iter().all(Option::is_some)
    }

    /// Rebuild the data chunk at `index` from the other data chunks and parity
    ///
    /// Works whether or not the chunk at `index` is itself present.
    ///
    /// # Errors
    ///
    /// * `InvalidChunkIndex` if `index` is out of range
    /// * `ParityMissing` if the parity chunk is gone
    /// * `TooManyLosses` if another data chunk is also gone
    pub fn recover_data(&self, index: usize) -> Result<Vec<u8>> {
        if index >= self.num_chunks() {
            return Err(CodecError::invalid_index(index, self.num_chunks()));
        }
        let parity = self.parity.as_deref().ok_or(CodecError::ParityMissing)?;

        let mut recovered = parity.to_vec();
        for (i, chunk) in self.data.iter().enumerate() {
            if i == index {
                continue;
            }
            match chunk {
                Some(chunk) => xor_into(&mut recovered, chunk),
                None => {
                    // The chunk being rebuilt counts as lost too
                    let others = self
                        .missing()
                        .into_iter()
                        .filter(|&loss| loss != Loss::Data(index))
                        .count();
                    return Err(CodecError::TooManyLosses {
                        missing: others + 1,
                    });
                }
            }
        }
        Ok(recovered)
    }

    /// Rebuild a complete [`EncodedSet`] from this stripe
    ///
    /// At most one chunk, data or parity, may be missing. A complete stripe
    /// has its parity checked against the data before it is accepted.
    ///
    /// # Errors
    ///
    /// * `TooManyLosses` if more than one chunk is missing
    /// * `ParityMismatch` if nothing is missing but the parity is wrong
    pub fn repair(&self) -> Result<EncodedSet> {
        let missing = self.missing();
        if missing.len() > 1 {
            return Err(CodecError::TooManyLosses {
                missing: missing.len(),
            });
        }

        let (data, parity) = match missing.first() {
            None => (self.present_data()?, self.checked_parity()?),
            Some(Loss::Parity) => {
                debug!("Repairing stripe: recomputing parity");
                (self.present_data()?, recover_parity(self)?)
            }
            Some(&Loss::Data(index)) => {
                debug!("Repairing stripe: recovering data chunk {}", index);
                let recovered = self.recover_data(index)?;
                let mut data = Vec::with_capacity(self.num_chunks());
                for (i, chunk) in self.data.iter().enumerate() {
                    match chunk {
                        Some(chunk) => data.push(chunk.clone()),
                        None if i == index => data.push(recovered.clone()),
                        None => return Err(CodecError::ChunkMissing { index: i }),
                    }
                }
                (data, self.parity_or_recompute()?)
            }
        };

        let repaired = EncodedSet::from_verified_parts(data, parity, self.chunk_size);
        Ok(repaired)
    }

    fn present_data(&self) -> Result<Vec<Vec<u8>>> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, c)| c.clone().ok_or(CodecError::ChunkMissing { index }))
            .collect()
    }

    /// Stored parity, provided it matches the data it claims to cover
    fn checked_parity(&self) -> Result<Vec<u8>> {
        let expected = recover_parity(self)?;
        match &self.parity {
            Some(parity) if *parity == expected => Ok(expected),
            Some(_) => {
                debug!("Repairing stripe: stored parity does not match the data");
                Err(CodecError::ParityMismatch)
            }
            None => Ok(expected),
        }
    }

    fn parity_or_recompute(&self) -> Result<Vec<u8>> {
        match &self.parity {
            Some(parity) => Ok(parity.clone()),
            None => recover_parity(self),
        }
    }
}
