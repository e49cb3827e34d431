// Seam between the bridge and the stemming algorithms.
//
// An engine reports the languages it supports and builds one instance per
// language. An instance stems UTF-8 bytes into its own output buffer and is
// freed by dropping it.

#[cfg(feature = "snowball")]
pub mod snowball;

#[cfg(feature = "snowball")]
pub use snowball::{SnowballEngine, SnowballInstance};

/// A stemming engine: a static capability list plus an instance constructor.
pub trait StemmingEngine {
    type Instance: EngineInstance;

    /// Language identifiers the engine was built with. May be unsorted and
    /// may contain duplicates; [`AlgorithmRegistry`](crate::AlgorithmRegistry)
    /// normalizes it.
    fn algorithm_names(&self) -> &[&'static str];

    /// Create an instance for `language`, or `None` if the engine does not
    /// recognize it. The engine may accept identifiers (aliases) that are not
    /// listed by [`algorithm_names`](Self::algorithm_names).
    fn new_instance(&self, language: &str) -> Option<Self::Instance>;
}

/// One live, language-bound engine instance.
///
/// Stemming mutates per-instance working state, so it takes `&mut self`.
pub trait EngineInstance {
    /// Stem a UTF-8 word. The result borrows the instance's output buffer and
    /// is valid until the next call.
    fn stem(&mut self, word: &[u8]) -> &[u8];
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{EngineInstance, StemmingEngine};

    /// Engine that strips one trailing `s` and counts instance lifetimes.
    pub(crate) struct MockEngine {
        pub names: Vec<&'static str>,
        pub created: Arc<AtomicUsize>,
        pub dropped: Arc<AtomicUsize>,
    }

    impl MockEngine {
        pub(crate) fn new(names: &[&'static str]) -> Self {
            MockEngine {
                names: names.to_vec(),
                created: Arc::new(AtomicUsize::new(0)),
                dropped: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub(crate) fn created(&self) -> usize {
            self.created.load(Ordering::SeqCst)
        }

        pub(crate) fn dropped(&self) -> usize {
            self.dropped.load(Ordering::SeqCst)
        }
    }

    pub(crate) struct MockInstance {
        output: Vec<u8>,
        dropped: Arc<AtomicUsize>,
    }

    impl StemmingEngine for MockEngine {
        type Instance = MockInstance;

        fn algorithm_names(&self) -> &[&'static str] {
            &self.names
        }

        fn new_instance(&self, language: &str) -> Option<MockInstance> {
            if !self.names.iter().any(|name| *name == language) {
                return None;
            }
            self.created.fetch_add(1, Ordering::SeqCst);
            Some(MockInstance { output: Vec::new(), dropped: Arc::clone(&self.dropped) })
        }
    }

    impl EngineInstance for MockInstance {
        fn stem(&mut self, word: &[u8]) -> &[u8] {
            self.output.clear();
            self.output.extend_from_slice(word.strip_suffix(b"s").unwrap_or(word));
            &self.output
        }
    }

    impl Drop for MockInstance {
        fn drop(&mut self) {
            self.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }
}
