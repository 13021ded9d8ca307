//! Console reporter
//!
//! Prints encoding details and a walkthrough of each recovery: which chunks
//! were XORed together and what the first byte works out to.

use super::{CodecReporter, Reporter};
use crate::codec::EncodedSet;
use crate::display::{byte_to_binary, chunk_to_ascii, is_printable, ChunkFormat};
use crate::verify::VerificationReport;

/// Console implementation for codec operations
#[derive(Default)]
pub struct ConsoleReporter {
    format: ChunkFormat,
}

impl ConsoleReporter {
    pub fn new(format: ChunkFormat) -> Self {
        Self { format }
    }

    /// Render the encoding summary printed by [`CodecReporter::report_encoding`]
    pub fn format_encoding(&self, encoded: &EncodedSet, original: &[u8]) -> String {
        let mut lines = vec![
            "Encoding Process:".to_string(),
            "-----------------".to_string(),
            format!(
                "Original Data: \"{}\" ({} bytes)",
                String::from_utf8_lossy(original),
                original.len()
            ),
            String::new(),
        ];

        for (i, chunk) in encoded.data_chunks().iter().enumerate() {
            lines.push(format!(
                "Chunk {}: \"{}\"  ({} bytes)",
                i,
                chunk_to_ascii(chunk),
                chunk.len()
            ));
            lines.extend(self.extra_rendering(chunk));
        }

        let parity = encoded.parity_chunk();
        lines.push(String::new());
        lines.push("Parity Chunk (XOR of all chunks):".to_string());
        lines.push(format!("  ascii: \"{}\"", chunk_to_ascii(parity)));
        lines.extend(self.extra_rendering(parity));
        lines.push(String::new());

        lines.push(format!(
            "Total storage: {} chunks (original {} + 1 parity)",
            encoded.total_chunks(),
            encoded.num_chunks()
        ));
        lines.push(format!("Storage overhead: {:.1}%", encoded.storage_overhead()));
        finish(lines)
    }

    /// Render the walkthrough printed by [`CodecReporter::report_recovery`]
    pub fn format_recovery(
        &self,
        encoded: &EncodedSet,
        lost_index: usize,
        recovered: &[u8],
    ) -> String {
        let mut lines = vec![
            "Recovery Demonstration:".to_string(),
            "-----------------------".to_string(),
            format!("Simulating loss of Chunk {}...", lost_index),
            String::new(),
        ];

        let survivors: Vec<(usize, &Vec<u8>)> = encoded
            .data_chunks()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != lost_index)
            .collect();

        let mut terms: Vec<String> = survivors.iter().map(|(i, _)| format!("Chunk{}", i)).collect();
        terms.push("Parity".to_string());
        lines.push("Recovery calculation:".to_string());
        lines.push(format!("  {}", terms.join(" XOR ")));

        if let Some(&first) = recovered.first() {
            let mut bits: Vec<String> = survivors
                .iter()
                .map(|(_, chunk)| byte_to_binary(chunk[0]))
                .collect();
            bits.push(byte_to_binary(encoded.parity_chunk()[0]));
            lines.push(format!("  = {} (first byte)", bits.join(" XOR ")));
            lines.push(if is_printable(first) {
                format!("  = {} (ASCII: '{}')", byte_to_binary(first), first as char)
            } else {
                format!("  = {}", byte_to_binary(first))
            });
        }

        lines.push(String::new());
        lines.push(format!(
            "Recovered Chunk {}: \"{}\"",
            lost_index,
            self.format.render(recovered)
        ));

        let matches = encoded
            .data_chunks()
            .get(lost_index)
            .is_some_and(|original| original.as_slice() == recovered);
        lines.push(if matches {
            "SUCCESS! Recovery matches original chunk.".to_string()
        } else {
            "FAILURE! Recovery does not match.".to_string()
        });
        finish(lines)
    }

    /// The chunk in the chosen format, unless that format is plain ASCII
    fn extra_rendering(&self, chunk: &[u8]) -> Option<String> {
        (self.format != ChunkFormat::Ascii)
            .then(|| format!("  {}: {}", self.format, self.format.render(chunk)))
    }
}

/// Join rendered lines, each terminated by a newline
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

impl Reporter for ConsoleReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl CodecReporter for ConsoleReporter {
    fn report_encoding(&self, encoded: &EncodedSet, original: &[u8]) {
        print!("{}", self.format_encoding(encoded, original));
    }

    fn report_recovery(&self, encoded: &EncodedSet, lost_index: usize, recovered: &[u8]) {
        println!();
        print!("{}", self.format_recovery(encoded, lost_index, recovered));
    }

    fn report_parity_recovery(&self, encoded: &EncodedSet, recovered: &[u8]) {
        println!();
        println!("Simulating loss of the parity chunk...");
        println!("Recomputed parity: \"{}\"", self.format.render(recovered));
        if encoded.parity_chunk() == recovered {
            println!("SUCCESS! Recomputed parity matches.");
        } else {
            println!("FAILURE! Recomputed parity does not match.");
        }
    }

    fn report_decoded(&self, decoded: &[u8]) {
        println!(
            "Decoded {} bytes: \"{}\"",
            decoded.len(),
            String::from_utf8_lossy(decoded)
        );
    }

    fn report_verification(&self, report: &VerificationReport) {
        print!("{}", report);
    }
}
