//! Rendering encoded chunks for people to read

use xorpar::display::{chunk_to_ascii, chunk_to_binary, chunk_to_hex, is_printable, ChunkFormat};
use xorpar::encode;

#[test]
fn test_padding_renders_as_dots() {
    let encoded = encode(b"HELLO WORLD", 3).unwrap();
    let rendered: Vec<String> = encoded
        .data_chunks()
        .iter()
        .map(|c| chunk_to_ascii(c))
        .collect();
    assert_eq!(rendered, ["HELL", "O WO", "RLD."]);
    assert_eq!(chunk_to_hex(&encoded.data_chunks()[2]), "524c4400");
}

#[test]
fn test_parity_of_two_chunks() {
    // 'A' ^ 'B' = 0x03, below the printable range
    let encoded = encode(b"AB", 2).unwrap();
    let parity = encoded.parity_chunk();

    assert!(!is_printable(parity[0]));
    assert_eq!(chunk_to_ascii(parity), ".");
    assert_eq!(chunk_to_binary(parity), "00000011");
    assert_eq!(chunk_to_hex(parity), "03");
}

#[test]
fn test_every_format_renders_the_same_bytes() {
    let chunk = b"Hi~\x7f";
    let expected = [
        (ChunkFormat::Ascii, "Hi~."),
        (ChunkFormat::Binary, "01001000 01101001 01111110 01111111"),
        (ChunkFormat::Hex, "48697e7f"),
    ];
    for (format, text) in expected {
        assert_eq!(format.render(chunk), text, "rendering as {}", format);
        assert_eq!(format.to_string().parse::<ChunkFormat>(), Ok(format));
    }
}

#[test]
fn test_unknown_format_names_the_input() {
    let err = "octal".parse::<ChunkFormat>().unwrap_err();
    assert!(err.contains("octal"));
    assert_eq!(ChunkFormat::default(), ChunkFormat::Ascii);
}
