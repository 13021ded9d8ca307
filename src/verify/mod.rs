//! Recovery verification sweep
//!
//! Simulates the loss of every chunk of an [`EncodedSet`] in turn and checks
//! that each one comes back byte-identical, then checks the decode round trip.
//! The set is only ever read, so the per-index recoveries run in parallel on a
//! rayon pool sized by [`VerifyConfig`].

mod config;
mod types;

pub use config::VerifyConfig;
pub use types::{RecoveryCheck, VerificationReport};

use crate::codec::{decode, recover_chunk, recover_parity, EncodedSet};
use crate::error::{CodecError, Result};
use crate::stripe::{Loss, Stripe};
use log::{debug, warn};
use rayon::prelude::*;

/// Verify every single-loss recovery of `encoded` against its `original` input
///
/// # Errors
///
/// * `InvalidSize` if `original` is longer than the set can hold
pub fn verify_encoded(
    encoded: &EncodedSet,
    original: &[u8],
    config: &VerifyConfig,
) -> Result<VerificationReport> {
    let threads = config.sweep_threads(encoded.num_chunks());
    debug!(
        "Verifying {} chunks ({} threads)",
        encoded.num_chunks(),
        threads
    );

    let recoveries = if config.parallel {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| check_recoveries_parallel(encoded))?,
            Err(e) => {
                warn!(
                    "Could not build a {}-thread pool ({}), verifying sequentially",
                    threads, e
                );
                check_recoveries(encoded)?
            }
        }
    } else {
        check_recoveries(encoded)?
    };

    let parity_recovered = {
        let stripe = Stripe::from_encoded(encoded).lose(Loss::Parity)?;
        recover_parity(&stripe)? == encoded.parity_chunk()
    };

    let round_trip_ok = decode(encoded, original.len())? == original;

    Ok(VerificationReport {
        num_chunks: encoded.num_chunks(),
        chunk_size: encoded.chunk_size(),
        parity_ok: encoded.parity_holds(),
        recoveries,
        parity_recovered,
        round_trip_ok,
    })
}

fn check_index(encoded: &EncodedSet, index: usize) -> Result<RecoveryCheck> {
    let recovered = recover_chunk(encoded, index)?;
    Ok(RecoveryCheck {
        index,
        recovered: recovered == encoded.data_chunks()[index],
    })
}

fn check_recoveries(encoded: &EncodedSet) -> Result<Vec<RecoveryCheck>> {
    (0..encoded.num_chunks())
        .map(|index| check_index(encoded, index))
        .collect()
}

fn check_recoveries_parallel(encoded: &EncodedSet) -> Result<Vec<RecoveryCheck>> {
    (0..encoded.num_chunks())
        .into_par_iter()
        .map(|index| check_index(encoded, index))
        .collect::<std::result::Result<Vec<_>, CodecError>>()
}
