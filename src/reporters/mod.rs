//! Progress and output reporting for codec operations
//!
//! This module provides traits and implementations for reporting what the
//! codec did (encoding, recovery, decoding, verification). It keeps the
//! library free of printing; only the binary picks a reporter.

mod console;
mod silent;

pub use console::ConsoleReporter;
pub use silent::SilentReporter;

use crate::codec::EncodedSet;
use crate::verify::VerificationReport;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting codec results
///
/// Extends the base Reporter trait with encode/recover/decode methods
pub trait CodecReporter: Reporter {
    /// Report the chunks and parity produced from `original`
    fn report_encoding(&self, encoded: &EncodedSet, original: &[u8]);

    /// Report the recovery of data chunk `lost_index`
    fn report_recovery(&self, encoded: &EncodedSet, lost_index: usize, recovered: &[u8]);

    /// Report the recomputation of a lost parity chunk
    fn report_parity_recovery(&self, encoded: &EncodedSet, recovered: &[u8]);

    /// Report bytes restored by decode
    fn report_decoded(&self, decoded: &[u8]);

    /// Report the result of a verification sweep
    fn report_verification(&self, report: &VerificationReport);
}
