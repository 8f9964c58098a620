//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};
use crate::cli::args::{OutputFormat, PhalanxArgs};
use crate::error::Result;

/// One token as printed by `analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub token: String,
    pub start_offset: usize,
    pub end_offset: usize,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenType>,
    pub position: usize,
}

impl From<Token> for AnalyzedToken {
    fn from(token: Token) -> Self {
        AnalyzedToken {
            token: token.text,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            token_type: token.token_type,
            position: token.position,
        }
    }
}

/// Tokens produced for one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub text: String,
    pub tokens: Vec<AnalyzedToken>,
}

/// Result of the `analyze` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeOutput {
    pub analyzer: String,
    pub results: Vec<AnalyzeResult>,
}

/// One registered analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Result of the `list` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerList {
    pub analyzers: Vec<AnalyzerEntry>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PhalanxArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PhalanxArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    let lines = match value.get("results").and_then(|r| r.as_array()) {
        Some(results) => format_results_human(results),
        None => match value.get("analyzers").and_then(|a| a.as_array()) {
            Some(analyzers) => format_analyzers_human(analyzers),
            None => vec![format_value(&value)],
        },
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn format_results_human(results: &[serde_json::Value]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, result) in results.iter().enumerate() {
        if results.len() > 1 {
            if i > 0 {
                lines.push(String::new());
            }
            let text = result.get("text").map(format_value).unwrap_or_default();
            lines.push(format!("# {text}"));
        }

        let tokens = result
            .get("tokens")
            .and_then(|t| t.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        for token in tokens {
            let field = |name: &str| token.get(name).map(format_value).unwrap_or_default();
            lines.push(format!(
                "{:>4}  {:<24} [{}..{}] {}",
                field("position"),
                field("token"),
                field("start_offset"),
                field("end_offset"),
                field("type"),
            ));
        }
    }
    lines
}

fn format_analyzers_human(analyzers: &[serde_json::Value]) -> Vec<String> {
    analyzers
        .iter()
        .map(|entry| {
            let name = entry.get("name").map(format_value).unwrap_or_default();
            let kind = entry.get("type").map(format_value).unwrap_or_default();
            format!("{name:<24} {kind}")
        })
        .collect()
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PhalanxArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analyzed_token_json_shape() {
        let token = Token::with_offsets("littl", 2, 7, 13).with_token_type(TokenType::Alphanum);
        let value = serde_json::to_value(AnalyzedToken::from(token)).unwrap();

        assert_eq!(
            value,
            json!({"token": "littl", "start_offset": 7, "end_offset": 13, "type": "alphanum", "position": 2})
        );
    }

    #[test]
    fn test_format_results_human() {
        let results = vec![json!({
            "text": "a b",
            "tokens": [
                {"token": "a", "start_offset": 0, "end_offset": 1, "position": 0},
            ]
        })];

        let lines = format_results_human(&results);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("a"));
        assert!(lines[0].contains("[0..1]"));
    }

    #[test]
    fn test_format_analyzers_human() {
        let analyzers = vec![json!({"name": "english", "type": "english"})];
        let lines = format_analyzers_human(&analyzers);
        assert_eq!(lines, vec![format!("{:<24} english", "english")]);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("test")), "test");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!([1, 2])), "[1, 2]");
        assert_eq!(format_value(&json!(null)), "null");
    }
}
