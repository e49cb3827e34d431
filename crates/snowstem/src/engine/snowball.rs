// Snowball stemming engine backed by rust-stemmers.
//
// The capability list holds canonical lowercase names. Lookup additionally
// accepts the ISO 639-1 and ISO 639-2 (bibliographic and terminologic) codes
// that the Snowball C library registers for each algorithm. Matching is
// exact: "English" and "EN" are rejected.

use rust_stemmers::{Algorithm, Stemmer};
use snowstem_core::TextCodec;

use super::{EngineInstance, StemmingEngine};

/// Canonical names of the bundled algorithms.
pub const ALGORITHM_NAMES: [&str; 18] = [
    "arabic",
    "danish",
    "dutch",
    "english",
    "finnish",
    "french",
    "german",
    "greek",
    "hungarian",
    "italian",
    "norwegian",
    "portuguese",
    "romanian",
    "russian",
    "spanish",
    "swedish",
    "tamil",
    "turkish",
];

/// Resolve a canonical name or ISO code to its algorithm.
fn algorithm_for(language: &str) -> Option<Algorithm> {
    let algorithm = match language {
        "arabic" | "ar" | "ara" => Algorithm::Arabic,
        "danish" | "da" | "dan" => Algorithm::Danish,
        "dutch" | "nl" | "dut" | "nld" => Algorithm::Dutch,
        "english" | "en" | "eng" => Algorithm::English,
        "finnish" | "fi" | "fin" => Algorithm::Finnish,
        "french" | "fr" | "fra" | "fre" => Algorithm::French,
        "german" | "de" | "deu" | "ger" => Algorithm::German,
        "greek" | "el" | "ell" | "gre" => Algorithm::Greek,
        "hungarian" | "hu" | "hun" => Algorithm::Hungarian,
        "italian" | "it" | "ita" => Algorithm::Italian,
        "norwegian" | "no" | "nor" => Algorithm::Norwegian,
        "portuguese" | "pt" | "por" => Algorithm::Portuguese,
        "romanian" | "ro" | "ron" | "rum" => Algorithm::Romanian,
        "russian" | "ru" | "rus" => Algorithm::Russian,
        "spanish" | "es" | "esl" | "spa" => Algorithm::Spanish,
        "swedish" | "sv" | "swe" => Algorithm::Swedish,
        "tamil" | "ta" | "tam" => Algorithm::Tamil,
        "turkish" | "tr" | "tur" => Algorithm::Turkish,
        _ => return None,
    };
    Some(algorithm)
}

/// The Snowball algorithm collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnowballEngine;

impl StemmingEngine for SnowballEngine {
    type Instance = SnowballInstance;

    fn algorithm_names(&self) -> &[&'static str] {
        &ALGORITHM_NAMES
    }

    fn new_instance(&self, language: &str) -> Option<SnowballInstance> {
        let algorithm = algorithm_for(language)?;
        Some(SnowballInstance {
            stemmer: Stemmer::create(algorithm),
            codec: TextCodec::new(),
            output: Vec::new(),
        })
    }
}

/// One Snowball stemmer plus the buffer its results are written to.
pub struct SnowballInstance {
    stemmer: Stemmer,
    codec: TextCodec,
    output: Vec<u8>,
}

impl EngineInstance for SnowballInstance {
    fn stem(&mut self, word: &[u8]) -> &[u8] {
        // rust-stemmers works on &str; bytes from the codec are already valid
        let word = self.codec.decode(word);
        let stemmed = self.stemmer.stem(&word);
        self.output.clear();
        self.output.extend_from_slice(stemmed.as_bytes());
        &self.output
    }
}
