//! Language registry, stemmer handles and batch stemming.
//!
//! The stemming algorithms are an external collaborator reached through the
//! [`engine::StemmingEngine`] seam; the default `snowball` feature plugs in the
//! Snowball algorithms from `rust-stemmers`.
//!
//! # Architecture
//!
//! - [`engine`] -- engine/instance traits and the Snowball engine
//! - [`registry`] -- sorted language enumeration and handle construction
//! - [`handle`] -- owned, language-bound engine instance
//! - [`batch`] -- all-or-nothing stemming of an ordered sequence
//!
//! ```
//! let mut stemmer = snowstem::create_stemmer("english")?;
//! let stems = stemmer.stem(["running", "flies", "happiness"])?;
//! assert_eq!(stems, ["run", "fli", "happi"]);
//! stemmer.release();
//! # Ok::<(), snowstem::StemError>(())
//! ```

pub mod batch;
pub mod engine;
pub mod handle;
pub mod registry;

pub use batch::BatchStemmer;
pub use handle::StemmerHandle;
pub use registry::AlgorithmRegistry;
pub use snowstem_core::{BatchItem, StemError, Text, TextCodec};

#[cfg(feature = "snowball")]
pub use handle::SnowballStemmer;
#[cfg(feature = "snowball")]
pub use registry::{REGISTRY, create_stemmer, list_languages};
