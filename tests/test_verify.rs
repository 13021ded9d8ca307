use xorpar::encode;
use xorpar::verify::{verify_encoded, VerifyConfig};

#[test]
fn test_verify_config_default() {
    let config = VerifyConfig::default();
    assert_eq!(config.threads, 0); // 0 means auto-detect
    assert!(config.parallel);
}

#[test]
fn test_verify_config_combinations() {
    let combinations = [(0, true), (0, false), (1, true), (4, true), (4, false)];

    for (threads, parallel) in combinations {
        let config = VerifyConfig::new(threads, parallel);
        assert_eq!(config.threads, threads);
        assert_eq!(config.parallel, parallel);
        assert!(config.effective_threads() >= 1);
        if !parallel {
            assert_eq!(config.effective_threads(), 1);
        }
    }
}

#[test]
fn test_verify_reports_every_index() {
    let data = b"Testing with different chunk counts";

    for num_chunks in 2..=10 {
        let encoded = encode(data, num_chunks).unwrap();
        let report = verify_encoded(&encoded, data, &VerifyConfig::new(2, true)).unwrap();

        assert!(report.is_success(), "{}", report);
        assert_eq!(report.num_chunks, num_chunks);
        assert_eq!(report.chunk_size, encoded.chunk_size());
        assert_eq!(report.recoveries.len(), num_chunks);
        assert!(report.failed_indices().is_empty());
    }
}

#[test]
fn test_verify_sequential_matches_parallel() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    let encoded = encode(&data, 9).unwrap();

    let sequential = verify_encoded(&encoded, &data, &VerifyConfig::new(0, false)).unwrap();
    let parallel = verify_encoded(&encoded, &data, &VerifyConfig::new(0, true)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_verify_summary_text() {
    let encoded = encode(b"HELLO WORLD", 3).unwrap();
    let report = verify_encoded(&encoded, b"HELLO WORLD", &VerifyConfig::default()).unwrap();
    let text = report.to_string();

    assert!(text.contains("3 data chunks of 4 bytes plus 1 parity chunk."));
    assert!(text.contains("Recovered 3 out of 3 lost data chunks."));
    assert!(text.contains("Round trip: ok"));
}
