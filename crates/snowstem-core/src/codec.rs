// UTF-8 text codec with the lossy "ignore" fallback policy.
//
// The stemming engine works on UTF-8 bytes. Host text arrives as Rust
// strings, as C strings that only claim to be UTF-8, or as UTF-16 code
// units from JavaScript. Anything that cannot be represented validly is
// dropped rather than reported: a malformed byte never fails a batch, but
// it does disappear from the output.

use std::borrow::Cow;

/// Host text in one of the encodings a bridge receives it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text<'a> {
    /// Already valid UTF-8.
    Str(&'a str),
    /// Bytes that are expected, but not guaranteed, to be UTF-8.
    Bytes(&'a [u8]),
    /// UTF-16 code units, possibly containing unpaired surrogates.
    Utf16(Cow<'a, [u16]>),
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Text::Str(s)
    }
}

/// Converts between host text and UTF-8 bytes, silently dropping invalid
/// subsequences in both directions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec;

impl TextCodec {
    pub const fn new() -> Self {
        TextCodec
    }

    /// Encode host text as UTF-8. Unencodable parts are dropped.
    pub fn encode(&self, text: &Text<'_>) -> Vec<u8> {
        match text {
            Text::Str(s) => s.as_bytes().to_vec(),
            Text::Bytes(bytes) => {
                let mut out = Vec::with_capacity(bytes.len());
                for chunk in bytes.utf8_chunks() {
                    out.extend_from_slice(chunk.valid().as_bytes());
                }
                out
            }
            Text::Utf16(units) => {
                let mut out = String::with_capacity(units.len());
                out.extend(char::decode_utf16(units.iter().copied()).filter_map(Result::ok));
                out.into_bytes()
            }
        }
    }

    /// Decode UTF-8 bytes into a string. Invalid sequences are dropped.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            out.push_str(chunk.valid());
        }
        out
    }
}
