//! The annotator's raw output.
//!
//! These types mirror what an annotation pipeline produces, using its own
//! conventions: sentence numbers and token positions are 1-based, and
//! coreference chains carry the annotator's chain ids in no particular
//! order. Nothing here is validated;
//! [`Pipeline`](crate::Pipeline) is responsible for turning it into a
//! [`Document`](crate::Document).
//!
//! All types round-trip through serde so that recorded annotations can be
//! stored on disk and replayed.

use serde::{Deserialize, Serialize};

use crate::config::DependencyMode;

/// Everything the annotator produced for one input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationGraph {
    /// Sentences in pipeline order.
    #[serde(default)]
    pub sentences: Vec<AnnotatedSentence>,
    /// Coreference chains in any order, or `None` when coreference was not
    /// run.
    #[serde(default)]
    pub coref_chains: Option<Vec<AnnotatedChain>>,
}

impl AnnotationGraph {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self {
            sentences,
            coref_chains: None,
        }
    }

    /// An annotation with no sentences and no chains.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a coreference chain.
    pub fn with_chain(mut self, chain: AnnotatedChain) -> Self {
        self.coref_chains.get_or_insert_with(Vec::new).push(chain);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// One sentence as annotated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Sentence text exactly as covered by the sentence span.
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<AnnotatedToken>,
    #[serde(default)]
    pub dependencies: DependencyGraphs,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<AnnotatedToken>) -> Self {
        Self {
            text: text.into(),
            tokens,
            dependencies: DependencyGraphs::default(),
        }
    }

    /// Set the dependency graph for one variant.
    pub fn with_dependencies(mut self, mode: DependencyMode, edges: Vec<AnnotatedEdge>) -> Self {
        self.dependencies.set(mode, edges);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub word: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub ner: String,
    #[serde(default)]
    pub lemma: String,
}

impl AnnotatedToken {
    pub fn new(
        word: impl Into<String>,
        pos: impl Into<String>,
        ner: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            ner: ner.into(),
            lemma: lemma.into(),
        }
    }
}

/// The dependency graph variants an annotator may emit for a sentence.
///
/// Which one is consumed is decided by
/// [`PipelineConfig::dependency_mode`](crate::PipelineConfig::dependency_mode).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraphs {
    #[serde(default)]
    pub basic: Option<Vec<AnnotatedEdge>>,
    #[serde(default)]
    pub collapsed: Option<Vec<AnnotatedEdge>>,
    /// Collapsed dependencies with conjunction processing.
    #[serde(default)]
    pub processed: Option<Vec<AnnotatedEdge>>,
}

impl DependencyGraphs {
    pub fn get(&self, mode: DependencyMode) -> Option<&[AnnotatedEdge]> {
        match mode {
            DependencyMode::Basic => self.basic.as_deref(),
            DependencyMode::Collapsed => self.collapsed.as_deref(),
            DependencyMode::Processed => self.processed.as_deref(),
        }
    }

    pub fn set(&mut self, mode: DependencyMode, edges: Vec<AnnotatedEdge>) {
        let slot = match mode {
            DependencyMode::Basic => &mut self.basic,
            DependencyMode::Collapsed => &mut self.collapsed,
            DependencyMode::Processed => &mut self.processed,
        };
        *slot = Some(edges);
    }
}

/// A dependency edge with 1-based token positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedEdge {
    pub governor: i64,
    pub dependent: i64,
    pub relation: String,
}

impl AnnotatedEdge {
    pub fn new(governor: i64, dependent: i64, relation: impl Into<String>) -> Self {
        Self {
            governor,
            dependent,
            relation: relation.into(),
        }
    }
}

impl std::fmt::Display for AnnotatedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.relation, self.governor, self.dependent)
    }
}

/// A coreference chain as produced by the annotator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedChain {
    /// The annotator's identifier for this chain.
    pub id: u32,
    #[serde(default)]
    pub representative: Option<AnnotatedMention>,
    /// All mentions in textual order, usually including the representative.
    #[serde(default)]
    pub mentions: Vec<AnnotatedMention>,
}

impl AnnotatedChain {
    pub fn new(id: u32, representative: AnnotatedMention, mentions: Vec<AnnotatedMention>) -> Self {
        Self {
            id,
            representative: Some(representative),
            mentions,
        }
    }
}

/// A mention with 1-based sentence number and token positions.
///
/// `end_index` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedMention {
    pub sent_num: i64,
    pub start_index: i64,
    pub end_index: i64,
    pub head_index: i64,
}

impl AnnotatedMention {
    pub fn new(sent_num: i64, start_index: i64, end_index: i64, head_index: i64) -> Self {
        Self {
            sent_num,
            start_index,
            end_index,
            head_index,
        }
    }
}
