//! Core types for fixture files.
//!
//! A fixture pairs an input text with the annotation an annotator produced
//! for it and the document the pipeline is expected to build from that
//! annotation.

use lingua_pipeline::{AnnotationGraph, DependencyMode, PipelineConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// A parsed fixture document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineFixture {
    /// Optional human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// The raw input text
    pub text: String,
    /// Dependency graph variant to consume; the standard one when absent
    #[serde(default)]
    pub dependency_mode: Option<DependencyMode>,
    /// Recorded annotator output for `text`
    #[serde(default)]
    pub annotation: AnnotationGraph,
    /// What the built document should look like
    #[serde(default)]
    pub expect: Expectations,
}

impl PipelineFixture {
    /// Pipeline configuration this fixture runs under.
    pub fn config(&self) -> PipelineConfig {
        let config = PipelineConfig::standard();
        match self.dependency_mode {
            Some(mode) => config.with_dependency_mode(mode),
            None => config,
        }
    }
}

/// Document-level expectations. Absent fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub sentence_count: Option<usize>,
    /// Number of diagnostics the transformation should report
    #[serde(default)]
    pub warning_count: Option<usize>,
    #[serde(default)]
    pub sentences: Vec<SentenceExpectation>,
}

/// Expectations for one sentence, compared in their rendered forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceExpectation {
    /// Sentence index (0-based)
    pub index: usize,
    /// Token words in order
    #[serde(default)]
    pub tokens: Option<Vec<String>>,
    /// Dependency edges as `rel(gov-i, dep-j)`
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    /// Attached chains as `rep => m1 <=> m2`
    #[serde(default)]
    pub chains: Option<Vec<String>>,
    /// `is_multi_sentence` of each attached chain
    #[serde(default)]
    pub multi_sentence: Option<Vec<bool>>,
}

/// Serialization formats a fixture may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Toml,
    Json,
    Ron,
}

impl FixtureFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(FixtureFormat::Toml),
            "json" => Some(FixtureFormat::Json),
            "ron" => Some(FixtureFormat::Ron),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FixtureFormat::Toml => "toml",
            FixtureFormat::Json => "json",
            FixtureFormat::Ron => "ron",
        }
    }
}

/// Parse a fixture from its text.
pub fn parse_fixture(content: &str, format: FixtureFormat) -> SpecResult<PipelineFixture> {
    let parse_error = |message: String| SpecError::Parse {
        format: format.name(),
        message,
    };

    match format {
        FixtureFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        FixtureFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        FixtureFormat::Ron => ron::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("a/b.toml")),
            Some(FixtureFormat::Toml)
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("b.json")),
            Some(FixtureFormat::Json)
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("b.ron")),
            Some(FixtureFormat::Ron)
        );
        assert_eq!(FixtureFormat::from_path(Path::new("README.md")), None);
        assert_eq!(FixtureFormat::from_path(Path::new("fixtures")), None);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let fixture = parse_fixture(r#"text = """#, FixtureFormat::Toml).unwrap();
        assert_eq!(fixture.text, "");
        assert!(fixture.annotation.is_empty());
        assert!(fixture.expect.sentence_count.is_none());
        assert_eq!(fixture.config(), PipelineConfig::standard());
    }

    #[test]
    fn test_parse_ron() {
        let fixture = parse_fixture(
            r#"
#![enable(implicit_some)]
(
    title: "Single word",
    text: "Hi.",
    dependency_mode: basic,
    annotation: (
        sentences: [
            (
                text: "Hi.",
                tokens: [
                    (word: "Hi", pos: "UH", ner: "O", lemma: "hi"),
                    (word: "."),
                ],
            ),
        ],
    ),
    expect: (sentence_count: 1),
)
"#,
            FixtureFormat::Ron,
        )
        .unwrap();

        assert_eq!(fixture.title.as_deref(), Some("Single word"));
        assert_eq!(fixture.dependency_mode, Some(DependencyMode::Basic));
        assert_eq!(fixture.annotation.sentences[0].tokens.len(), 2);
        assert_eq!(fixture.expect.sentence_count, Some(1));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = parse_fixture("{ not json", FixtureFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("parse error in json fixture"));
    }
}
