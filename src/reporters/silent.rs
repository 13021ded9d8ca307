//! Silent reporter
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{CodecReporter, Reporter};
use crate::codec::EncodedSet;
use crate::verify::VerificationReport;

/// Silent implementation for all codec operations
#[derive(Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl CodecReporter for SilentReporter {
    fn report_encoding(&self, _encoded: &EncodedSet, _original: &[u8]) {}
    fn report_recovery(&self, _encoded: &EncodedSet, _lost_index: usize, _recovered: &[u8]) {}
    fn report_parity_recovery(&self, _encoded: &EncodedSet, _recovered: &[u8]) {}
    fn report_decoded(&self, _decoded: &[u8]) {}
    fn report_verification(&self, _report: &VerificationReport) {}
}
