//! JSON analysis settings.
//!
//! ```json
//! {
//!   "analyzer": {
//!     "folded": { "type": "custom", "tokenizer": "whitespace", "filter": ["asciifolding"] },
//!     "everything": { "type": "combo", "sub_analyzers": ["standard", "english", "folded"] }
//!   }
//! }
//! ```
//!
//! The same document may be wrapped as `{"analysis": {...}}` or
//! `{"index": {"analysis": {...}}}`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::analyzer::{
    Analyzer, EnglishAnalyzer, KeywordAnalyzer, PipelineAnalyzer, StandardAnalyzer,
    WhitespaceAnalyzer,
};
use crate::analysis::combo::ComboSettings;
use crate::analysis::token_filter::{
    AsciiFoldingFilter, Filter, LowercaseFilter, StemFilter, StopFilter,
};
use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer, WholeTokenizer,
};
use crate::error::{PhalanxError, Result};

const DEFAULT_SPLIT_PATTERN: &str = r"\W+";

/// All analyzers declared in a settings document, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub analyzer: BTreeMap<String, AnalyzerSettings>,
}

/// One analyzer declaration, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyzerSettings {
    Standard {
        #[serde(default)]
        stop_words: bool,
    },
    Whitespace,
    Keyword,
    English,
    Pattern {
        #[serde(default)]
        pattern: Option<String>,
        #[serde(default = "default_true")]
        lowercase: bool,
    },
    Custom {
        tokenizer: String,
        #[serde(default)]
        filter: Vec<String>,
    },
    Combo(ComboSettings),
}

fn default_true() -> bool {
    true
}

impl AnalysisSettings {
    /// Parse a settings document, unwrapping `index` and `analysis` levels.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;
        for level in ["index", "analysis"] {
            if let Some(inner) = value.get_mut(level) {
                value = inner.take();
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl AnalyzerSettings {
    /// The `type` tag of this declaration.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzerSettings::Standard { .. } => "standard",
            AnalyzerSettings::Whitespace => "whitespace",
            AnalyzerSettings::Keyword => "keyword",
            AnalyzerSettings::English => "english",
            AnalyzerSettings::Pattern { .. } => "pattern",
            AnalyzerSettings::Custom { .. } => "custom",
            AnalyzerSettings::Combo(_) => "combo",
        }
    }

    /// Build every analyzer type except `combo`, which needs the registry.
    pub(crate) fn build(&self, name: &str) -> Result<Arc<dyn Analyzer>> {
        let analyzer: Arc<dyn Analyzer> = match self {
            AnalyzerSettings::Standard { stop_words: false } => Arc::new(StandardAnalyzer::new()),
            AnalyzerSettings::Standard { stop_words: true } => {
                Arc::new(StandardAnalyzer::with_stop_words())
            }
            AnalyzerSettings::Whitespace => Arc::new(WhitespaceAnalyzer::new()),
            AnalyzerSettings::Keyword => Arc::new(KeywordAnalyzer::new()),
            AnalyzerSettings::English => Arc::new(EnglishAnalyzer::new()),
            AnalyzerSettings::Pattern { pattern, lowercase } => {
                let pattern = pattern.as_deref().unwrap_or(DEFAULT_SPLIT_PATTERN);
                let mut analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::with_gaps(pattern)?));
                if *lowercase {
                    analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
                }
                Arc::new(analyzer.with_name(name))
            }
            AnalyzerSettings::Custom { tokenizer, filter } => {
                let mut analyzer = PipelineAnalyzer::new(tokenizer_by_name(tokenizer)?);
                for filter_name in filter {
                    analyzer = analyzer.add_filter(filter_by_name(filter_name)?);
                }
                Arc::new(analyzer.with_name(name))
            }
            AnalyzerSettings::Combo(_) => {
                return Err(PhalanxError::invalid_config(format!(
                    "combo analyzer '{name}' must be built by the registry"
                )));
            }
        };
        Ok(analyzer)
    }
}

fn tokenizer_by_name(name: &str) -> Result<Arc<dyn Tokenizer>> {
    match name {
        "standard" => Ok(Arc::new(UnicodeWordTokenizer::new())),
        "whitespace" => Ok(Arc::new(WhitespaceTokenizer::new())),
        "keyword" => Ok(Arc::new(WholeTokenizer::new())),
        other => Err(PhalanxError::invalid_config(format!(
            "unknown tokenizer '{other}'"
        ))),
    }
}

fn filter_by_name(name: &str) -> Result<Arc<dyn Filter>> {
    match name {
        "lowercase" => Ok(Arc::new(LowercaseFilter::new())),
        "asciifolding" => Ok(Arc::new(AsciiFoldingFilter::new())),
        "stop" => Ok(Arc::new(StopFilter::new())),
        "porter_stem" | "stemmer" => Ok(Arc::new(StemFilter::new())),
        other => Err(PhalanxError::invalid_config(format!(
            "unknown token filter '{other}'"
        ))),
    }
}
