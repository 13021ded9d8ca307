//! How the recovery sweep is scheduled
//!
//! Each simulated loss is independent of the others, so the sweep can spread
//! chunk indices across a rayon pool. A sweep never needs more workers than
//! it has indices to recover.

use clap::ArgMatches;
use std::num::NonZeroUsize;

/// Worker count used when the host cannot report its parallelism
const FALLBACK_THREADS: usize = 4;

/// Scheduling options for [`verify_encoded`](super::verify_encoded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Requested worker count; 0 picks one per available core
    pub threads: usize,
    /// Recover indices on a rayon pool rather than one after another
    pub parallel: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self::new(0, true)
    }
}

impl VerifyConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Read `--threads` and `--no-parallel` from the `verify` subcommand
    ///
    /// `--threads` is parsed by clap, so a malformed count never reaches here.
    pub fn from_args(matches: &ArgMatches) -> Self {
        Self::new(
            matches.get_one::<usize>("threads").copied().unwrap_or(0),
            !matches.get_flag("no-parallel"),
        )
    }

    /// Worker count after resolving auto-detection
    pub fn effective_threads(&self) -> usize {
        if !self.parallel {
            return 1;
        }
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(FALLBACK_THREADS),
            n => n,
        }
    }

    /// Workers worth starting for a set of `num_chunks` data chunks
    pub fn sweep_threads(&self, num_chunks: usize) -> usize {
        self.effective_threads().min(num_chunks).max(1)
    }
}
