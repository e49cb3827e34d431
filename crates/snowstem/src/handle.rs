// StemmerHandle: caller-owned binding of a language to one engine instance.
//
// The instance is released exactly once: by `release(self)` or when the
// handle goes out of scope. `release` consumes the handle, so any use after
// release fails to compile. Stemming takes `&mut self`; sharing one handle
// between threads requires the caller to wrap it in a lock.

use std::fmt;

use snowstem_core::{BatchItem, StemError, Text};

use crate::batch::BatchStemmer;
use crate::engine::{EngineInstance, StemmingEngine};

#[cfg(feature = "snowball")]
use crate::engine::SnowballInstance;

/// A handle over the Snowball engine.
#[cfg(feature = "snowball")]
pub type SnowballStemmer = StemmerHandle<SnowballInstance>;

/// Exclusive owner of one language-bound engine instance.
pub struct StemmerHandle<I: EngineInstance> {
    language: String,
    instance: I,
}

impl<I: EngineInstance> StemmerHandle<I> {
    /// Ask `engine` for an instance bound to `language`.
    ///
    /// The engine performs the lookup, so identifiers it accepts beyond its
    /// listed algorithm names (aliases) succeed here as well.
    pub fn create<E>(engine: &E, language: &str) -> Result<Self, StemError>
    where
        E: StemmingEngine<Instance = I>,
    {
        let instance = engine
            .new_instance(language)
            .ok_or_else(|| StemError::UnsupportedLanguage { language: language.to_string() })?;
        tracing::debug!(language, "stemmer created");
        Ok(StemmerHandle { language: language.to_string(), instance })
    }

    /// The identifier this handle was created with.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Stem an ordered sequence of items. See [`BatchStemmer::stem`].
    pub fn stem<It>(&mut self, items: It) -> Result<Vec<String>, StemError>
    where
        It: IntoIterator,
        It::Item: BatchItem,
    {
        BatchStemmer::new().stem(self, items)
    }

    /// Stem a single word.
    pub fn stem_word(&mut self, word: &str) -> String {
        BatchStemmer::new().stem_text(self, &Text::Str(word))
    }

    /// Free the engine instance now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }

    pub(crate) fn instance_mut(&mut self) -> &mut I {
        &mut self.instance
    }
}

impl<I: EngineInstance> Drop for StemmerHandle<I> {
    fn drop(&mut self) {
        tracing::debug!(language = %self.language, "stemmer released");
    }
}

impl<I: EngineInstance> fmt::Debug for StemmerHandle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmerHandle").field("language", &self.language).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::MockEngine;

    #[test]
    fn create_binds_language() {
        let engine = MockEngine::new(&["english"]);
        let handle = StemmerHandle::create(&engine, "english").unwrap();
        assert_eq!(handle.language(), "english");
        assert_eq!(engine.created(), 1);
    }

    #[test]
    fn create_unknown_language_fails() {
        let engine = MockEngine::new(&["english"]);
        let err = StemmerHandle::create(&engine, "klingon").unwrap_err();
        assert_eq!(err, StemError::UnsupportedLanguage { language: "klingon".into() });
    }

    #[test]
    fn release_frees_instance_once() {
        let engine = MockEngine::new(&["english"]);
        let handle = StemmerHandle::create(&engine, "english").unwrap();
        assert_eq!(engine.dropped(), 0);
        handle.release();
        assert_eq!(engine.dropped(), 1);
    }

    #[test]
    fn scope_exit_frees_instance() {
        let engine = MockEngine::new(&["english"]);
        {
            let mut handle = StemmerHandle::create(&engine, "english").unwrap();
            assert_eq!(handle.stem_word("cats"), "cat");
        }
        assert_eq!(engine.dropped(), 1);
    }

    #[test]
    fn releasing_one_handle_leaves_others_usable() {
        let engine = MockEngine::new(&["english"]);
        let first = StemmerHandle::create(&engine, "english").unwrap();
        let mut second = StemmerHandle::create(&engine, "english").unwrap();
        first.release();
        assert_eq!(second.stem(["dogs"]).unwrap(), ["dog"]);
        assert_eq!(engine.created(), 2);
        assert_eq!(engine.dropped(), 1);
    }

    #[test]
    fn debug_shows_language() {
        let engine = MockEngine::new(&["english"]);
        let handle = StemmerHandle::create(&engine, "english").unwrap();
        assert_eq!(format!("{handle:?}"), "StemmerHandle { language: \"english\", .. }");
    }
}
