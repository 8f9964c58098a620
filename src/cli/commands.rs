//! Command implementations for the Phalanx CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::registry::{AnalysisSettings, AnalyzerRegistry};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{PhalanxError, Result};

/// Execute a CLI command.
pub fn execute_command(args: PhalanxArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::List(list_args) => list_analyzers(list_args, &args),
    }
}

/// Build the registry from a settings file, or the built-ins when none is given.
pub fn load_registry(settings: Option<&Path>) -> Result<Arc<AnalyzerRegistry>> {
    match settings {
        Some(path) => {
            log::info!("Loading analysis settings from {}", path.display());
            AnalyzerRegistry::from_settings(&AnalysisSettings::from_file(path)?)
        }
        None => Ok(AnalyzerRegistry::with_builtins()),
    }
}

/// Analyze each text with the named analyzer. Texts run in parallel; results keep input order.
pub fn analyze_texts(
    registry: &AnalyzerRegistry,
    analyzer: &str,
    texts: &[String],
) -> Result<Vec<AnalyzeResult>> {
    if !registry.contains(analyzer) {
        return Err(PhalanxError::not_found(format!("analyzer '{analyzer}'")));
    }

    texts
        .par_iter()
        .map(|text| -> Result<AnalyzeResult> {
            let tokens = registry.analyze(analyzer, text)?;
            Ok(AnalyzeResult {
                text: text.clone(),
                tokens: tokens.into_iter().map(AnalyzedToken::from).collect(),
            })
        })
        .collect()
}

fn analyze(args: &AnalyzeArgs, cli_args: &PhalanxArgs) -> Result<()> {
    let registry = load_registry(args.settings.as_deref())?;

    let texts = match (&args.text, &args.input) {
        (Some(text), _) => vec![text.clone()],
        (None, Some(path)) => fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        (None, None) => {
            return Err(PhalanxError::invalid_config(
                "either TEXT or --input must be given",
            ));
        }
    };
    log::info!("Analyzing {} text(s) with '{}'", texts.len(), args.analyzer);

    let results = analyze_texts(&registry, &args.analyzer, &texts)?;

    output_result(
        "Analysis completed",
        &AnalyzeOutput {
            analyzer: args.analyzer.clone(),
            results,
        },
        cli_args,
    )
}

fn list_analyzers(args: &ListArgs, cli_args: &PhalanxArgs) -> Result<()> {
    let registry = load_registry(args.settings.as_deref())?;

    let analyzers = registry
        .names()
        .into_iter()
        .filter_map(|name| {
            registry.get(name).map(|analyzer| AnalyzerEntry {
                name: name.to_string(),
                kind: analyzer.name().to_string(),
            })
        })
        .collect();

    output_result("Registered analyzers", &AnalyzerList { analyzers }, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn settings_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_registry_from_file() {
        let file = settings_file(
            r#"{"analysis": {"analyzer": {"both": {"type": "combo", "sub_analyzers": ["whitespace", "english"]}}}}"#,
        );

        let registry = load_registry(Some(file.path())).unwrap();

        assert!(registry.contains("both"));
        assert!(registry.contains("english"));
    }

    #[test]
    fn test_load_registry_missing_file() {
        let result = load_registry(Some(Path::new("/nonexistent/phalanx/settings.json")));
        assert!(matches!(result, Err(PhalanxError::Io(_))));
    }

    #[test]
    fn test_analyze_texts_keeps_order() {
        let registry = AnalyzerRegistry::with_builtins();
        let texts: Vec<String> = (0..32).map(|i| format!("line {i}")).collect();

        let results = analyze_texts(&registry, "whitespace", &texts).unwrap();

        assert_eq!(results.len(), 32);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.text, texts[i]);
            assert_eq!(result.tokens[1].token, i.to_string());
            assert_eq!(result.tokens[1].position, 1);
        }
    }

    #[test]
    fn test_analyze_texts_unknown_analyzer() {
        let registry = AnalyzerRegistry::with_builtins();
        let result = analyze_texts(&registry, "missing", &["text".to_string()]);
        assert!(result.is_err());
    }
}
