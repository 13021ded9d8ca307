//! Error types for XOR parity operations

use thiserror::Error;

/// Errors that can occur while encoding, recovering or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input data is empty
    #[error("Input data cannot be empty")]
    EmptyInput,

    /// Fewer than two data chunks were requested
    #[error("Number of chunks must be at least 2 (requested {requested})")]
    InvalidChunkCount { requested: usize },

    /// Chunk index outside `[0, num_chunks)`
    #[error("Chunk index {index} is out of bounds for {num_chunks} data chunks")]
    InvalidChunkIndex { index: i64, num_chunks: usize },

    /// Decode asked for more bytes than the chunks hold
    #[error("Requested size {requested} exceeds the {available} bytes held by the chunks")]
    InvalidSize { requested: usize, available: usize },

    /// A caller-supplied chunk does not have the stripe's chunk size
    #[error("Chunk {index} is {actual} bytes, expected {expected}")]
    ChunkSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A data chunk needed for the computation is itself missing
    #[error("Data chunk {index} is missing")]
    ChunkMissing { index: usize },

    /// The parity chunk is needed but missing
    #[error("Parity chunk is missing")]
    ParityMissing,

    /// The stored parity chunk is not the XOR of the data chunks
    #[error("Parity chunk does not match the XOR of the data chunks")]
    ParityMismatch,

    /// XOR parity tolerates at most one lost chunk
    #[error("Cannot recover: {missing} chunks are missing but single parity tolerates only one")]
    TooManyLosses { missing: usize },
}

impl CodecError {
    /// Build an `InvalidChunkIndex` from an unsigned index
    pub(crate) fn invalid_index(index: usize, num_chunks: usize) -> Self {
        CodecError::InvalidChunkIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            num_chunks,
        }
    }
}

/// Type alias for Result with CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_condition() {
        let err = CodecError::InvalidChunkIndex {
            index: -1,
            num_chunks: 3,
        };
        assert_eq!(
            err.to_string(),
            "Chunk index -1 is out of bounds for 3 data chunks"
        );

        let err = CodecError::InvalidSize {
            requested: 20,
            available: 12,
        };
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_invalid_index_saturates() {
        let err = CodecError::invalid_index(usize::MAX, 2);
        assert!(matches!(
            err,
            CodecError::InvalidChunkIndex { index: i64::MAX, num_chunks: 2 }
        ));
    }
}
