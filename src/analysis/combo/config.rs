//! Combo analyzer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PhalanxError, Result};

/// How tokens that land on the same merged position are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Order by the declaration index of the owning pipeline.
    #[default]
    DeclarationOrder,
    /// Order by start and end offset, leaving full ties to the merge heap.
    OffsetQueue,
}

/// Sub-analyzer names as written in settings: a list or a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    List(Vec<String>),
    Joined(String),
}

impl NameList {
    /// The names in declaration order, trimmed, with blanks removed.
    pub fn names(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            NameList::List(names) => names.iter().map(String::as_str).collect(),
            NameList::Joined(joined) => joined.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Raw combo settings, as found under an analyzer of type `combo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_analyzers: Option<NameList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduplication: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenstream_caching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<TieBreak>,
}

/// Validated configuration of a combo analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboConfig {
    sub_analyzers: Vec<String>,
    deduplication: bool,
    tokenstream_caching: bool,
    tie_break: TieBreak,
}

impl ComboConfig {
    /// Create a configuration over the given sub-analyzer names.
    ///
    /// Fails when the list is empty.
    pub fn new<I, S>(sub_analyzers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sub_analyzers: Vec<String> = sub_analyzers.into_iter().map(Into::into).collect();
        if sub_analyzers.is_empty() {
            return Err(PhalanxError::invalid_config(
                "combo analyzer requires a non-empty sub_analyzers list",
            ));
        }

        Ok(ComboConfig {
            sub_analyzers,
            deduplication: false,
            tokenstream_caching: true,
            tie_break: TieBreak::default(),
        })
    }

    /// Validate raw settings. A missing or empty `sub_analyzers` is an error.
    pub fn from_settings(settings: &ComboSettings) -> Result<Self> {
        let names = settings
            .sub_analyzers
            .as_ref()
            .map(NameList::names)
            .ok_or_else(|| PhalanxError::invalid_config("combo analyzer requires sub_analyzers"))?;

        let config = ComboConfig::new(names)?
            .with_deduplication(settings.deduplication.unwrap_or(false))
            .with_tokenstream_caching(settings.tokenstream_caching.unwrap_or(true))
            .with_tie_break(settings.tie_break.unwrap_or_default());
        Ok(config)
    }

    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplication = enabled;
        self
    }

    pub fn with_tokenstream_caching(mut self, enabled: bool) -> Self {
        self.tokenstream_caching = enabled;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn sub_analyzers(&self) -> &[String] {
        &self.sub_analyzers
    }

    pub fn deduplication(&self) -> bool {
        self.deduplication
    }

    pub fn tokenstream_caching(&self) -> bool {
        self.tokenstream_caching
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComboConfig::new(["whitespace", "english"]).unwrap();

        assert_eq!(config.sub_analyzers(), &["whitespace", "english"]);
        assert!(!config.deduplication());
        assert!(config.tokenstream_caching());
        assert_eq!(config.tie_break(), TieBreak::DeclarationOrder);
    }

    #[test]
    fn test_empty_names_rejected() {
        let err = ComboConfig::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, PhalanxError::Config(_)));
    }

    #[test]
    fn test_settings_from_json_list() {
        let settings: ComboSettings = serde_json::from_str(
            r#"{"sub_analyzers": ["whitespace", "english"], "deduplication": true}"#,
        )
        .unwrap();
        let config = ComboConfig::from_settings(&settings).unwrap();

        assert_eq!(config.sub_analyzers(), &["whitespace", "english"]);
        assert!(config.deduplication());
        assert!(config.tokenstream_caching());
    }

    #[test]
    fn test_settings_from_joined_string() {
        let settings: ComboSettings = serde_json::from_str(
            r#"{"sub_analyzers": "whitespace, english ,,keyword", "tie_break": "offset_queue"}"#,
        )
        .unwrap();
        let config = ComboConfig::from_settings(&settings).unwrap();

        assert_eq!(config.sub_analyzers(), &["whitespace", "english", "keyword"]);
        assert_eq!(config.tie_break(), TieBreak::OffsetQueue);
    }

    #[test]
    fn test_missing_names_rejected() {
        let settings: ComboSettings = serde_json::from_str(r#"{"deduplication": true}"#).unwrap();
        assert!(matches!(
            ComboConfig::from_settings(&settings),
            Err(PhalanxError::Config(_))
        ));

        let settings: ComboSettings = serde_json::from_str(r#"{"sub_analyzers": []}"#).unwrap();
        assert!(ComboConfig::from_settings(&settings).is_err());
    }
}
