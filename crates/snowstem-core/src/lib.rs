//! Shared types for the snowstem stemming bridge.
//!
//! - [`codec`] -- UTF-8 conversion with the lossy "ignore" policy
//! - [`item`] -- text-or-not view of host values handed to a batch
//! - [`error`] -- error taxonomy surfaced to callers

pub mod codec;
pub mod error;
pub mod item;

pub use codec::{Text, TextCodec};
pub use error::StemError;
pub use item::BatchItem;
