//! Combo analyzer: several analyzers merged into one token stream.
//!
//! A combo analyzer runs every configured sub-analyzer over the same text and
//! interleaves their outputs by absolute position, so one field can carry,
//! for instance, verbatim words, stemmed words and the whole input as a
//! keyword at once.
//!
//! ```text
//! "just a little test"
//!
//!   whitespace: just  a  little  test
//!   english:    just     littl   test
//!   keyword:    just a little test
//!
//!   merged:  pos 0: just, just, "just a little test"
//!            pos 1: a
//!            pos 2: little, littl
//!            pos 3: test, test
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use phalanx::analysis::analyzer::{Analyzer, EnglishAnalyzer, WhitespaceAnalyzer};
//! use phalanx::analysis::combo::{ComboAnalyzer, ComboConfig};
//!
//! let resolver = |name: &str| -> Option<Arc<dyn Analyzer>> {
//!     match name {
//!         "whitespace" => Some(Arc::new(WhitespaceAnalyzer::new())),
//!         "english" => Some(Arc::new(EnglishAnalyzer::new())),
//!         _ => None,
//!     }
//! };
//!
//! let config = ComboConfig::new(["whitespace", "english"]).unwrap().with_deduplication(true);
//! let combo = ComboAnalyzer::new("my_combo", config, Arc::new(resolver));
//!
//! let terms: Vec<_> = combo.analyze("Little tests").unwrap().map(|t| t.text).collect();
//! assert_eq!(terms, vec!["Little", "littl", "tests", "test"]);
//! ```

pub mod adapter;
pub mod config;
pub mod dedup;
pub mod position;
pub mod queue;
pub mod scheduler;
pub mod stream;

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::registry::AnalyzerResolver;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

pub use adapter::{PipelineAdapter, PositionedToken};
pub use config::{ComboConfig, ComboSettings, NameList, TieBreak};
pub use dedup::DeduplicationFilter;
pub use position::PositionTracker;
pub use queue::MergeQueue;
pub use scheduler::{MergeScheduler, PositionBatch, SchedulerState};
pub use stream::ComboTokenStream;

/// A sub-analyzer that resolved successfully, with the name it was declared under.
#[derive(Clone)]
pub struct ResolvedPipeline {
    name: String,
    analyzer: Arc<dyn Analyzer>,
}

impl ResolvedPipeline {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    fn shares_analyzer(&self, other: &ResolvedPipeline) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.analyzer), Arc::as_ptr(&other.analyzer))
    }
}

impl std::fmt::Debug for ResolvedPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedPipeline")
            .field("name", &self.name)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// An analyzer that merges the output of several sub-analyzers.
///
/// Sub-analyzer names are resolved on first use, not at construction, and
/// the resolved list is kept for the lifetime of the analyzer. Concurrent
/// first calls wait for a single resolution. Names that do not resolve are
/// skipped; if none resolve, every analysis yields an empty stream.
pub struct ComboAnalyzer {
    name: String,
    config: ComboConfig,
    resolver: Arc<dyn AnalyzerResolver>,
    pipelines: OnceCell<Vec<ResolvedPipeline>>,
}

impl ComboAnalyzer {
    pub fn new<S: Into<String>>(
        name: S,
        config: ComboConfig,
        resolver: Arc<dyn AnalyzerResolver>,
    ) -> Self {
        ComboAnalyzer {
            name: name.into(),
            config,
            resolver,
            pipelines: OnceCell::new(),
        }
    }

    /// Build from raw settings. Fails when `sub_analyzers` is missing or empty.
    pub fn from_settings<S: Into<String>>(
        name: S,
        settings: &ComboSettings,
        resolver: Arc<dyn AnalyzerResolver>,
    ) -> Result<Self> {
        let config = ComboConfig::from_settings(settings)?;
        Ok(Self::new(name, config, resolver))
    }

    /// The name this analyzer was registered under.
    pub fn label(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    /// The resolved sub-analyzers in declaration order, resolving them on first call.
    pub fn pipelines(&self) -> Result<&[ResolvedPipeline]> {
        self.pipelines
            .get_or_try_init(|| self.resolve_pipelines())
            .map(Vec::as_slice)
    }

    fn resolve_pipelines(&self) -> Result<Vec<ResolvedPipeline>> {
        let mut pipelines = Vec::with_capacity(self.config.sub_analyzers().len());
        for name in self.config.sub_analyzers() {
            match self.resolver.resolve(name)? {
                Some(analyzer) => pipelines.push(ResolvedPipeline {
                    name: name.clone(),
                    analyzer,
                }),
                None => log::debug!(
                    "combo analyzer '{}': sub-analyzer '{}' not found, skipping",
                    self.name,
                    name
                ),
            }
        }

        log::debug!(
            "combo analyzer '{}': resolved {} of {} sub-analyzers",
            self.name,
            pipelines.len(),
            self.config.sub_analyzers().len()
        );
        Ok(pipelines)
    }

    fn open_adapters(
        &self,
        pipelines: &[ResolvedPipeline],
        text: &str,
    ) -> Result<Vec<PipelineAdapter>> {
        let mut buffered: Vec<(usize, Arc<[Token]>)> = Vec::new();
        let mut adapters = Vec::with_capacity(pipelines.len());

        for (index, pipeline) in pipelines.iter().enumerate() {
            let shared = self.config.tokenstream_caching()
                && pipelines
                    .iter()
                    .filter(|other| other.shares_analyzer(pipeline))
                    .count()
                    > 1;

            if !shared {
                adapters.push(PipelineAdapter::open(index, pipeline.analyzer.as_ref(), text)?);
                continue;
            }

            let cached = buffered
                .iter()
                .find(|(first, _)| pipelines[*first].shares_analyzer(pipeline))
                .map(|(_, tokens)| Arc::clone(tokens));
            let tokens = match cached {
                Some(tokens) => tokens,
                None => {
                    let tokens: Arc<[Token]> = pipeline.analyzer.analyze(text)?.collect();
                    buffered.push((index, Arc::clone(&tokens)));
                    tokens
                }
            };
            adapters.push(PipelineAdapter::replay(index, tokens));
        }

        Ok(adapters)
    }
}

impl Analyzer for ComboAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let pipelines = self.pipelines()?;
        let adapters = self.open_adapters(pipelines, text)?;
        let scheduler = MergeScheduler::new(adapters, self.config.tie_break());
        let dedup = self
            .config
            .deduplication()
            .then(DeduplicationFilter::new);

        Ok(Box::new(ComboTokenStream::new(scheduler, dedup)))
    }

    fn name(&self) -> &'static str {
        "combo"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for ComboAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboAnalyzer")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("pipelines", &self.pipelines.get())
            .finish()
    }
}
