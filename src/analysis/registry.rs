//! Named analyzer registry.
//!
//! The registry maps analyzer names to analyzer instances. Built-in analyzers
//! (`standard`, `whitespace`, `keyword`, `english`) are always present;
//! [`AnalysisSettings`] add or override entries.
//!
//! Combo analyzers look their sub-analyzers up in the registry that owns
//! them. They hold a weak handle and resolve only on first use, so a combo
//! can be declared before (or alongside) the analyzers it names.
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::registry::{AnalysisSettings, AnalyzerRegistry};
//!
//! let settings = AnalysisSettings::from_json(
//!     r#"{"analyzer": {"both": {"type": "combo", "sub_analyzers": ["whitespace", "english"]}}}"#,
//! )
//! .unwrap();
//! let registry = AnalyzerRegistry::from_settings(&settings).unwrap();
//!
//! let tokens = registry.analyze("both", "running").unwrap();
//! let terms: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(terms, vec!["running", "run"]);
//! ```

pub mod settings;

use std::sync::{Arc, Weak};

use ahash::AHashMap;

use crate::analysis::analyzer::{
    Analyzer, EnglishAnalyzer, KeywordAnalyzer, StandardAnalyzer, WhitespaceAnalyzer,
};
use crate::analysis::combo::{ComboAnalyzer, ComboConfig};
use crate::analysis::token::Token;
use crate::error::{PhalanxError, Result};

pub use settings::{AnalysisSettings, AnalyzerSettings};

/// Looks up sub-analyzers by name.
///
/// `Ok(None)` means the name is unknown. An `Err` means the lookup itself
/// could not be performed.
pub trait AnalyzerResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<Option<Arc<dyn Analyzer>>>;
}

impl<F> AnalyzerResolver for F
where
    F: Fn(&str) -> Option<Arc<dyn Analyzer>> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Result<Option<Arc<dyn Analyzer>>> {
        Ok(self(name))
    }
}

/// Resolver handed to combo analyzers owned by a registry.
struct RegistryResolver {
    registry: Weak<AnalyzerRegistry>,
}

impl AnalyzerResolver for RegistryResolver {
    fn resolve(&self, name: &str) -> Result<Option<Arc<dyn Analyzer>>> {
        let registry = self
            .registry
            .upgrade()
            .ok_or_else(|| PhalanxError::analysis("analyzer registry is no longer available"))?;
        Ok(registry.sub_analyzer(name))
    }
}

/// A set of named analyzers.
pub struct AnalyzerRegistry {
    analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding only the built-in analyzers.
    pub fn with_builtins() -> Arc<Self> {
        let analyzers = RegistryBuilder::new().analyzers.into_iter().collect();
        Arc::new(AnalyzerRegistry { analyzers })
    }

    pub fn from_settings(settings: &AnalysisSettings) -> Result<Arc<Self>> {
        RegistryBuilder::new().settings(settings.clone()).build()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Analyzer>> {
        self.analyzers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.analyzers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.analyzers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Run the named analyzer over `text` and collect its tokens.
    pub fn analyze(&self, name: &str, text: &str) -> Result<Vec<Token>> {
        let analyzer = self
            .get(name)
            .ok_or_else(|| PhalanxError::not_found(format!("analyzer '{name}'")))?;
        Ok(analyzer.analyze(text)?.collect())
    }

    /// Lookup used by combo analyzers: other combos never resolve.
    fn sub_analyzer(&self, name: &str) -> Option<Arc<dyn Analyzer>> {
        self.get(name).filter(|analyzer| !is_combo(analyzer.as_ref()))
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("analyzers", &self.names())
            .finish()
    }
}

fn is_combo(analyzer: &dyn Analyzer) -> bool {
    analyzer.as_any().is::<ComboAnalyzer>()
}

/// Builder for [`AnalyzerRegistry`].
pub struct RegistryBuilder {
    analyzers: Vec<(String, Arc<dyn Analyzer>)>,
    settings: Option<AnalysisSettings>,
}

impl RegistryBuilder {
    /// Start from the built-in analyzers.
    pub fn new() -> Self {
        let builtins: Vec<(String, Arc<dyn Analyzer>)> = vec![
            ("standard".to_string(), Arc::new(StandardAnalyzer::new())),
            ("whitespace".to_string(), Arc::new(WhitespaceAnalyzer::new())),
            ("keyword".to_string(), Arc::new(KeywordAnalyzer::new())),
            ("english".to_string(), Arc::new(EnglishAnalyzer::new())),
        ];
        RegistryBuilder {
            analyzers: builtins,
            settings: None,
        }
    }

    /// Register an analyzer instance under `name`, replacing any earlier entry.
    pub fn register<S: Into<String>>(mut self, name: S, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzers.push((name.into(), analyzer));
        self
    }

    /// Declarations applied on top of the registered analyzers.
    pub fn settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn build(self) -> Result<Arc<AnalyzerRegistry>> {
        let mut analyzers: AHashMap<String, Arc<dyn Analyzer>> =
            self.analyzers.into_iter().collect();
        let mut combos = Vec::new();

        if let Some(settings) = self.settings {
            for (name, declaration) in settings.analyzer {
                match declaration {
                    AnalyzerSettings::Combo(combo) => {
                        combos.push((name, ComboConfig::from_settings(&combo)?));
                    }
                    other => {
                        let analyzer = other.build(&name)?;
                        analyzers.insert(name, analyzer);
                    }
                }
            }
        }

        for (name, _) in &combos {
            analyzers.remove(name);
        }

        let registry = Arc::new_cyclic(|weak: &Weak<AnalyzerRegistry>| {
            for (name, config) in combos {
                let resolver = Arc::new(RegistryResolver {
                    registry: weak.clone(),
                });
                let combo = ComboAnalyzer::new(name.clone(), config, resolver);
                analyzers.insert(name, Arc::new(combo));
            }
            AnalyzerRegistry { analyzers }
        });

        log::debug!("analyzer registry built with {} analyzers", registry.len());
        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(json: &str) -> AnalysisSettings {
        AnalysisSettings::from_json(json).unwrap()
    }

    fn terms(registry: &AnalyzerRegistry, name: &str, text: &str) -> Vec<String> {
        registry
            .analyze(name, text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_builtins_registered() {
        let registry = AnalyzerRegistry::with_builtins();

        assert_eq!(
            registry.names(),
            vec!["english", "keyword", "standard", "whitespace"]
        );
        assert_eq!(terms(&registry, "keyword", "a b"), vec!["a b"]);
    }

    #[test]
    fn test_unknown_analyzer_is_error() {
        let registry = AnalyzerRegistry::with_builtins();
        assert!(matches!(
            registry.analyze("missing", "text"),
            Err(PhalanxError::Analysis(_))
        ));
    }

    #[test]
    fn test_combo_resolves_declared_analyzers() {
        let registry = AnalyzerRegistry::from_settings(&settings(
            r#"{"analyzer": {
                "combined": {"type": "combo", "sub_analyzers": "lower, folded", "deduplication": true},
                "lower": {"type": "custom", "tokenizer": "whitespace", "filter": ["lowercase"]},
                "folded": {"type": "custom", "tokenizer": "whitespace", "filter": ["asciifolding"]}
            }}"#,
        ))
        .unwrap();

        assert_eq!(terms(&registry, "combined", "kot Łódź"), vec!["kot", "łódź", "Lodz"]);
    }

    #[test]
    fn test_combo_does_not_nest() {
        let registry = AnalyzerRegistry::from_settings(&settings(
            r#"{"analyzer": {
                "inner": {"type": "combo", "sub_analyzers": ["keyword"]},
                "outer": {"type": "combo", "sub_analyzers": ["inner", "whitespace"]}
            }}"#,
        ))
        .unwrap();

        assert_eq!(terms(&registry, "outer", "a b"), vec!["a", "b"]);
        assert_eq!(terms(&registry, "inner", "a b"), vec!["a b"]);
    }

    #[test]
    fn test_combo_without_names_fails_build() {
        let result = AnalyzerRegistry::from_settings(&settings(
            r#"{"analyzer": {"broken": {"type": "combo"}}}"#,
        ));
        assert!(matches!(result, Err(PhalanxError::Config(_))));
    }

    #[test]
    fn test_settings_override_builtin() {
        let registry = AnalyzerRegistry::from_settings(&settings(
            r#"{"analyzer": {"standard": {"type": "keyword"}}}"#,
        ))
        .unwrap();

        assert_eq!(terms(&registry, "standard", "A B"), vec!["A B"]);
    }

    #[test]
    fn test_registered_instance() {
        let registry = AnalyzerRegistry::builder()
            .register("verbatim", Arc::new(WhitespaceAnalyzer::new()))
            .build()
            .unwrap();

        assert!(registry.contains("verbatim"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_dropped_registry_is_error() {
        let registry = AnalyzerRegistry::from_settings(&settings(
            r#"{"analyzer": {"c": {"type": "combo", "sub_analyzers": ["keyword"]}}}"#,
        ))
        .unwrap();
        let combo = registry.get("c").unwrap();
        drop(registry);

        assert!(matches!(combo.analyze("x"), Err(PhalanxError::Analysis(_))));
    }
}
