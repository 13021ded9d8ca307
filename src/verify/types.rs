//! Result types for the recovery verification sweep

use std::fmt;

/// Outcome of simulating the loss of one data chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryCheck {
    pub index: usize,
    pub recovered: bool,
}

/// Everything a verification sweep found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub num_chunks: usize,
    pub chunk_size: usize,
    /// Data chunks XOR parity is the zero buffer
    pub parity_ok: bool,
    /// One entry per data chunk index, in order
    pub recoveries: Vec<RecoveryCheck>,
    /// Parity recomputed after losing it matches the stored parity
    pub parity_recovered: bool,
    /// Decoding with the original length gives back the original bytes
    pub round_trip_ok: bool,
}

impl VerificationReport {
    /// Indices whose recovered bytes did not match
    pub fn failed_indices(&self) -> Vec<usize> {
        self.recoveries
            .iter()
            .filter(|check| !check.recovered)
            .map(|check| check.index)
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.parity_ok
            && self.parity_recovered
            && self.round_trip_ok
            && self.recoveries.iter().all(|check| check.recovered)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verification Results:")?;
        writeln!(f, "====================")?;
        writeln!(
            f,
            "{} data chunks of {} bytes plus 1 parity chunk.",
            self.num_chunks, self.chunk_size
        )?;

        let ok = |flag: bool| if flag { "ok" } else { "FAILED" };
        writeln!(f, "Parity invariant: {}", ok(self.parity_ok))?;

        let failed = self.failed_indices();
        let recovered = self.recoveries.len() - failed.len();
        writeln!(
            f,
            "Recovered {} out of {} lost data chunks.",
            recovered,
            self.recoveries.len()
        )?;
        if !failed.is_empty() {
            writeln!(f, "Chunks that did not recover: {:?}", failed)?;
        }

        writeln!(f, "Parity recovery: {}", ok(self.parity_recovered))?;
        writeln!(f, "Round trip: {}", ok(self.round_trip_ok))?;

        if self.is_success() {
            writeln!(f, "Any single lost chunk can be recovered.")?;
        }
        Ok(())
    }
}
