//! Normalizes the output of an external annotation pipeline into a
//! serializable document model.
//!
//! An [`Annotator`] turns raw text into an [`AnnotationGraph`]: sentences,
//! tokens, dependency graphs and coreference chains, all using the
//! annotator's 1-based positions. [`Pipeline`] walks that graph and builds a
//! [`Document`] whose indices are 0-based and always safe to use.
//!
//! ## Example
//!
//! ```
//! use lingua_pipeline::{
//!     transform, AnnotatedSentence, AnnotatedToken, AnnotationGraph, PipelineConfig,
//! };
//!
//! let graph = AnnotationGraph::new(vec![AnnotatedSentence::new(
//!     "Hello world.",
//!     vec![
//!         AnnotatedToken::new("Hello", "UH", "O", "hello"),
//!         AnnotatedToken::new("world", "NN", "O", "world"),
//!         AnnotatedToken::new(".", ".", "O", "."),
//!     ],
//! )]);
//!
//! let result = transform(&PipelineConfig::default(), graph);
//! assert_eq!(result.value.len(), 1);
//! assert_eq!(result.value.sentences()[0].tokens().len(), 3);
//! ```

mod annotation;
mod annotator;
mod config;
mod coref;
mod dependency;
mod diagnostic;
mod document;
mod pipeline;
pub mod span;
mod token;

// Annotator input
pub use annotation::{
    AnnotatedChain,
    AnnotatedEdge,
    AnnotatedMention,
    AnnotatedSentence,
    AnnotatedToken,
    AnnotationGraph,
    DependencyGraphs,
};
pub use annotator::Annotator;

// Configuration
pub use config::{
    ConfigError,
    DependencyMode,
    PipelineConfig,
    ANNOTATORS_PROPERTY,
    DEFAULT_ANNOTATORS,
    DEPENDENCY_MODE_PROPERTY,
};

// Document model
pub use coref::{CorefChain, CorefMention};
pub use dependency::DependencyEdge;
pub use document::{Document, Sentence};
pub use token::{join_words, Token};

// Transformation
pub use diagnostic::{Diagnostic, ProcessResult};
pub use pipeline::{transform, Pipeline};
