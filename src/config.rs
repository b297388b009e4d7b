//! Pipeline configuration.
//!
//! Configuration can be built in code, read from a TOML file, or derived
//! from a flat property map using the same keys the annotator's own
//! property files use (`annotators`, `lingua.dependency-mode`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property key selecting the dependency graph variant.
pub const DEPENDENCY_MODE_PROPERTY: &str = "lingua.dependency-mode";

/// Property key listing the annotators to run, comma separated.
pub const ANNOTATORS_PROPERTY: &str = "annotators";

/// Annotators run when nothing else is configured.
pub const DEFAULT_ANNOTATORS: &[&str] = &["tokenize", "ssplit", "pos", "lemma", "ner", "parse", "dcoref"];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unknown dependency mode '{0}' (expected basic, collapsed or processed)")]
    UnknownDependencyMode(String),
}

/// Which dependency graph variant the transformation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyMode {
    /// Basic (tree-shaped) dependencies.
    Basic,
    /// Collapsed dependencies: prepositions and conjunctions folded into
    /// relation names.
    Collapsed,
    /// Collapsed dependencies with propagated conjunct dependencies.
    #[default]
    Processed,
}

impl DependencyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyMode::Basic => "basic",
            DependencyMode::Collapsed => "collapsed",
            DependencyMode::Processed => "processed",
        }
    }

    /// Lenient parse used for property maps: anything unrecognised selects
    /// [`DependencyMode::Processed`].
    pub fn from_property(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: ConfigError| {
            log::warn!("{}; using {}", err, DependencyMode::Processed);
            DependencyMode::Processed
        })
    }
}

impl FromStr for DependencyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(DependencyMode::Basic),
            "collapsed" => Ok(DependencyMode::Collapsed),
            "processed" => Ok(DependencyMode::Processed),
            _ => Err(ConfigError::UnknownDependencyMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for DependencyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by every document a [`Pipeline`](crate::Pipeline)
/// processes. Read-only once the pipeline is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Annotators the external pipeline should run, in order.
    pub annotators: Vec<String>,
    /// Dependency graph variant used for edge resolution.
    pub dependency_mode: DependencyMode,
}

impl PipelineConfig {
    /// Full annotation with processed dependencies.
    pub fn standard() -> Self {
        Self {
            annotators: DEFAULT_ANNOTATORS.iter().map(|a| a.to_string()).collect(),
            dependency_mode: DependencyMode::Processed,
        }
    }

    pub fn with_dependency_mode(mut self, mode: DependencyMode) -> Self {
        self.dependency_mode = mode;
        self
    }

    /// Build a configuration from a flat property map.
    ///
    /// An empty map yields [`PipelineConfig::standard`]. Missing keys keep
    /// their standard values.
    pub fn from_properties(props: &BTreeMap<String, String>) -> Self {
        let mut config = Self::standard();

        if let Some(annotators) = props.get(ANNOTATORS_PROPERTY) {
            config.annotators = annotators
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(mode) = props.get(DEPENDENCY_MODE_PROPERTY) {
            config.dependency_mode = DependencyMode::from_property(mode);
        }

        config
    }

    /// Render this configuration as a property map.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        props.insert(ANNOTATORS_PROPERTY.to_string(), self.annotators.join(", "));
        props.insert(
            DEPENDENCY_MODE_PROPERTY.to_string(),
            self.dependency_mode.to_string(),
        );
        props
    }

    /// Parse a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.dependency_mode, DependencyMode::Processed);
        assert_eq!(
            config.annotators,
            vec!["tokenize", "ssplit", "pos", "lemma", "ner", "parse", "dcoref"]
        );
    }

    #[test]
    fn test_dependency_mode_from_str() {
        assert_eq!("basic".parse::<DependencyMode>().unwrap(), DependencyMode::Basic);
        assert_eq!(" Collapsed ".parse::<DependencyMode>().unwrap(), DependencyMode::Collapsed);
        assert_eq!("PROCESSED".parse::<DependencyMode>().unwrap(), DependencyMode::Processed);

        let err = "tree".parse::<DependencyMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDependencyMode(ref m) if m == "tree"));
    }

    #[test]
    fn test_from_property_falls_back_to_processed() {
        assert_eq!(DependencyMode::from_property("basic"), DependencyMode::Basic);
        assert_eq!(DependencyMode::from_property("nonsense"), DependencyMode::Processed);
    }

    #[test]
    fn test_from_empty_properties() {
        assert_eq!(
            PipelineConfig::from_properties(&BTreeMap::new()),
            PipelineConfig::standard()
        );
    }

    #[test]
    fn test_from_properties() {
        let mut props = BTreeMap::new();
        props.insert("annotators".to_string(), "tokenize, ssplit,, parse".to_string());
        props.insert("lingua.dependency-mode".to_string(), "collapsed".to_string());

        let config = PipelineConfig::from_properties(&props);
        assert_eq!(config.annotators, vec!["tokenize", "ssplit", "parse"]);
        assert_eq!(config.dependency_mode, DependencyMode::Collapsed);
    }

    #[test]
    fn test_properties_round_trip() {
        let config = PipelineConfig::standard().with_dependency_mode(DependencyMode::Basic);
        let props = config.to_properties();
        assert_eq!(props["lingua.dependency-mode"], "basic");
        assert_eq!(PipelineConfig::from_properties(&props), config);
    }

    #[test]
    fn test_from_toml_str_partial() {
        let config = PipelineConfig::from_toml_str(r#"dependency_mode = "basic""#).unwrap();
        assert_eq!(config.dependency_mode, DependencyMode::Basic);
        assert_eq!(config.annotators.len(), DEFAULT_ANNOTATORS.len());
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_mode() {
        let err = PipelineConfig::from_toml_str(r#"dependency_mode = "tree""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
annotators = ["tokenize", "ssplit", "parse"]
dependency_mode = "collapsed"
"#
        )
        .unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.annotators, vec!["tokenize", "ssplit", "parse"]);
        assert_eq!(config.dependency_mode, DependencyMode::Collapsed);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineConfig::load(Path::new("/nonexistent/lingua.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
