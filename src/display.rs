//! Chunk rendering for diagnostics
//!
//! None of this affects codec correctness; it only turns chunk bytes into
//! something a person can read.

use std::fmt;
use std::str::FromStr;

/// Format a byte as an 8-digit binary string
pub fn byte_to_binary(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Format a chunk as space-separated binary bytes
pub fn chunk_to_binary(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|&b| byte_to_binary(b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a chunk as ASCII, replacing non-printable bytes with '.'
pub fn chunk_to_ascii(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|&b| if is_printable(b) { b as char } else { '.' })
        .collect()
}

/// Format a chunk as lowercase hex
pub fn chunk_to_hex(chunk: &[u8]) -> String {
    hex::encode(chunk)
}

/// Printable ASCII range, space through tilde
#[inline]
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// How chunks are rendered in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkFormat {
    #[default]
    Ascii,
    Binary,
    Hex,
}

impl ChunkFormat {
    pub fn render(&self, chunk: &[u8]) -> String {
        match self {
            ChunkFormat::Ascii => chunk_to_ascii(chunk),
            ChunkFormat::Binary => chunk_to_binary(chunk),
            ChunkFormat::Hex => chunk_to_hex(chunk),
        }
    }
}

impl FromStr for ChunkFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(ChunkFormat::Ascii),
            "binary" | "bin" => Ok(ChunkFormat::Binary),
            "hex" => Ok(ChunkFormat::Hex),
            other => Err(format!("Unknown chunk format: {}", other)),
        }
    }
}

impl fmt::Display for ChunkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkFormat::Ascii => "ascii",
            ChunkFormat::Binary => "binary",
            ChunkFormat::Hex => "hex",
        };
        f.write_str(name)
    }
}
