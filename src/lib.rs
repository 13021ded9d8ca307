//! Single-parity (RAID-5 style) XOR erasure coding
//!
//! Split data into N equal chunks, keep one XOR parity chunk beside them, and
//! rebuild any one lost chunk from the rest. See [`codec`] for the entry points.

pub mod args;
pub mod codec;
pub mod display;
pub mod error;
pub mod reporters;
pub mod stripe;
pub mod verify;
pub mod xor;

pub use args::parse_args;
pub use codec::{decode, encode, recover_chunk, recover_parity, EncodedSet};
pub use error::{CodecError, Result};
pub use stripe::{Loss, Stripe};
