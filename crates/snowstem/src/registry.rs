// AlgorithmRegistry: language enumeration and handle construction.
//
// The registry is an immutable value wrapping an engine. The Snowball
// registry lives in a `static` and is shared process-wide without locking.

use snowstem_core::StemError;

use crate::engine::StemmingEngine;
use crate::handle::StemmerHandle;

#[cfg(feature = "snowball")]
use crate::engine::SnowballEngine;
#[cfg(feature = "snowball")]
use crate::handle::SnowballStemmer;

/// Process-wide registry over the Snowball algorithms.
#[cfg(feature = "snowball")]
pub static REGISTRY: AlgorithmRegistry<SnowballEngine> = AlgorithmRegistry::new(SnowballEngine);

/// Languages supported by the Snowball engine, sorted and deduplicated.
#[cfg(feature = "snowball")]
pub fn list_languages() -> Vec<&'static str> {
    REGISTRY.list_languages()
}

/// Create a Snowball stemmer for `language`.
#[cfg(feature = "snowball")]
pub fn create_stemmer(language: &str) -> Result<SnowballStemmer, StemError> {
    REGISTRY.create(language)
}

/// Read-only view over the languages an engine supports.
#[derive(Debug, Default, Clone)]
pub struct AlgorithmRegistry<E> {
    engine: E,
}

impl<E> AlgorithmRegistry<E> {
    pub const fn new(engine: E) -> Self {
        AlgorithmRegistry { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: StemmingEngine> AlgorithmRegistry<E> {
    /// Every language identifier the engine reports, sorted ascending with
    /// duplicates removed. Recomputed on each call.
    pub fn list_languages(&self) -> Vec<&'static str> {
        let mut names = self.engine.algorithm_names().to_vec();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Whether the engine accepts `language`, aliases included.
    pub fn supports(&self, language: &str) -> bool {
        self.engine.new_instance(language).is_some()
    }

    /// Create a handle bound to `language`.
    pub fn create(&self, language: &str) -> Result<StemmerHandle<E::Instance>, StemError> {
        StemmerHandle::create(&self.engine, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::MockEngine;

    #[test]
    fn list_is_sorted_and_deduplicated() {
        let registry = AlgorithmRegistry::new(MockEngine::new(&["swedish", "danish", "swedish", "arabic"]));
        assert_eq!(registry.list_languages(), ["arabic", "danish", "swedish"]);
    }

    #[test]
    fn empty_engine_yields_empty_list() {
        let registry = AlgorithmRegistry::new(MockEngine::new(&[]));
        assert!(registry.list_languages().is_empty());
    }

    #[test]
    fn supports_does_not_leak_instances() {
        let registry = AlgorithmRegistry::new(MockEngine::new(&["english"]));
        assert!(registry.supports("english"));
        assert!(!registry.supports("klingon"));
        assert_eq!(registry.engine().created(), 1);
        assert_eq!(registry.engine().dropped(), 1);
    }

    #[test]
    fn create_rejects_unknown_language() {
        let registry = AlgorithmRegistry::new(MockEngine::new(&["english"]));
        let err = registry.create("not-a-real-language").unwrap_err();
        assert_eq!(
            err,
            StemError::UnsupportedLanguage { language: "not-a-real-language".into() }
        );
        assert_eq!(registry.engine().created(), 0);
    }

    #[cfg(feature = "snowball")]
    #[test]
    fn snowball_registry_lists_canonical_names_only() {
        let languages = list_languages();
        assert!(languages.contains(&"english"));
        assert!(!languages.contains(&"en"));
        assert!(REGISTRY.supports("en"));
        assert!(languages.windows(2).all(|w| w[0] < w[1]));
    }

    #[cfg(feature = "snowball")]
    #[test]
    fn snowball_registry_creates_every_listed_language() {
        for language in list_languages() {
            let stemmer = create_stemmer(language).unwrap();
            assert_eq!(stemmer.language(), language);
        }
    }
}
