//! Codec integration tests
//!
//! Concrete encode/recover/decode scenarios and the error boundary,
//! exercised through the public API only.

use xorpar::{decode, encode, recover_chunk, CodecError};

fn xor3(a: &[u8], b: &[u8], c: &[u8]) -> Vec<u8> {
    a.iter()
        .zip(b)
        .zip(c)
        .map(|((x, y), z)| x ^ y ^ z)
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn hello_world_three_chunks() {
        let encoded = encode(b"HELLO WORLD", 3).unwrap();

        assert_eq!(encoded.chunk_size(), 4);
        assert_eq!(
            encoded.data_chunks(),
            &[b"HELL".to_vec(), b"O WO".to_vec(), b"RLD\0".to_vec()]
        );
        assert_eq!(
            encoded.parity_chunk(),
            xor3(b"HELL", b"O WO", b"RLD\0").as_slice()
        );
        assert_eq!(decode(&encoded, 11).unwrap(), b"HELLO WORLD");
    }

    #[test]
    fn exact_division_has_no_padding() {
        let encoded = encode(b"EXACT12BYTES", 3).unwrap();

        assert_eq!(encoded.chunk_size(), 4);
        assert_eq!(
            encoded.data_chunks(),
            &[b"EXAC".to_vec(), b"T12B".to_vec(), b"YTES".to_vec()]
        );
        assert_eq!(decode(&encoded, 12).unwrap(), b"EXACT12BYTES");
    }

    #[test]
    fn single_byte_two_chunks() {
        let encoded = encode(b"A", 2).unwrap();

        assert_eq!(encoded.chunk_size(), 1);
        assert_eq!(encoded.data_chunks(), &[b"A".to_vec(), b"\0".to_vec()]);
        assert_eq!(encoded.parity_chunk(), b"A");
        assert_eq!(recover_chunk(&encoded, 0).unwrap(), b"A");
        assert_eq!(recover_chunk(&encoded, 1).unwrap(), b"\0");
    }

    #[test]
    fn large_chunk_count_is_not_capped() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data, 100).unwrap();

        assert_eq!(encoded.num_chunks(), 100);
        assert_eq!(encoded.chunk_size(), 3);
        assert!(encoded.parity_holds());
        assert_eq!(recover_chunk(&encoded, 99).unwrap(), vec![0u8; 3]);
        assert_eq!(decode(&encoded, data.len()).unwrap(), data);
    }

    #[test]
    fn binary_data_with_zero_bytes() {
        let data = [0u8, 0, 0, 1, 0, 0, 0xFF];
        let encoded = encode(&data, 3).unwrap();

        for i in 0..3 {
            assert_eq!(recover_chunk(&encoded, i).unwrap(), encoded.data_chunks()[i]);
        }
        assert_eq!(decode(&encoded, data.len()).unwrap(), data);
    }
}

mod error_boundary {
    use super::*;

    #[test]
    fn empty_input_for_any_count() {
        for n in [0, 1, 2, 3, 1000] {
            assert_eq!(encode(b"", n), Err(CodecError::EmptyInput));
        }
    }

    #[test]
    fn chunk_count_below_two() {
        assert_eq!(
            encode(b"data", 0),
            Err(CodecError::InvalidChunkCount { requested: 0 })
        );
        assert_eq!(
            encode(b"data", 1),
            Err(CodecError::InvalidChunkCount { requested: 1 })
        );
    }

    #[test]
    fn recover_index_out_of_range() {
        let encoded = encode(b"HELLO WORLD", 3).unwrap();

        assert_eq!(
            recover_chunk(&encoded, 3),
            Err(CodecError::InvalidChunkIndex {
                index: 3,
                num_chunks: 3
            })
        );
        assert_eq!(
            encoded.resolve_index(-1),
            Err(CodecError::InvalidChunkIndex {
                index: -1,
                num_chunks: 3
            })
        );
    }

    #[test]
    fn decode_past_capacity() {
        let encoded = encode(b"HELLO WORLD", 3).unwrap();
        assert_eq!(
            decode(&encoded, 100),
            Err(CodecError::InvalidSize {
                requested: 100,
                available: 12
            })
        );
    }

    #[test]
    fn errors_leave_prior_sets_untouched() {
        let encoded = encode(b"HELLO WORLD", 3).unwrap();
        let snapshot = encoded.clone();

        let _ = recover_chunk(&encoded, 10);
        let _ = decode(&encoded, 100);
        let _ = encode(b"", 3);

        assert_eq!(encoded, snapshot);
    }
}
