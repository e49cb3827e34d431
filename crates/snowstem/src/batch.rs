// BatchStemmer: all-or-nothing stemming of an ordered sequence.
//
// Each item is encoded, stemmed through the handle's engine instance and
// decoded into a local accumulator. The first non-text item aborts the call;
// the accumulator is dropped and nothing partial reaches the caller. The
// handle itself is left untouched and stays usable.

use snowstem_core::{BatchItem, StemError, Text, TextCodec};

use crate::engine::EngineInstance;
use crate::handle::StemmerHandle;

#[derive(Debug, Default, Clone, Copy)]
pub struct BatchStemmer {
    codec: TextCodec,
}

impl BatchStemmer {
    pub const fn new() -> Self {
        BatchStemmer { codec: TextCodec::new() }
    }

    /// Stem `items` in order with `handle`.
    ///
    /// Returns one stem per item at the same position. Fails with
    /// [`StemError::InvalidInputType`] if any item is not text; in that case
    /// no stems are returned.
    pub fn stem<I, It>(
        &self,
        handle: &mut StemmerHandle<I>,
        items: It,
    ) -> Result<Vec<String>, StemError>
    where
        I: EngineInstance,
        It: IntoIterator,
        It::Item: BatchItem,
    {
        let items = items.into_iter();
        let mut stems = Vec::with_capacity(items.size_hint().0);

        for (index, item) in items.enumerate() {
            let Some(text) = item.as_text() else {
                return Err(StemError::InvalidInputType { index, value: item.describe() });
            };
            stems.push(self.stem_text(handle, &text));
        }

        tracing::trace!(language = handle.language(), items = stems.len(), "batch stemmed");
        Ok(stems)
    }

    /// Encode, stem and decode one piece of text.
    pub fn stem_text<I: EngineInstance>(&self, handle: &mut StemmerHandle<I>, text: &Text<'_>) -> String {
        let word = self.codec.encode(text);
        let stemmed = handle.instance_mut().stem(&word);
        self.codec.decode(stemmed)
    }
}
