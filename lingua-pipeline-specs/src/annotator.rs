//! Replaying recorded annotations.

use lingua_pipeline::{AnnotationGraph, Annotator, PipelineConfig};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Asked to annotate text other than the recorded one.
    #[error("no recorded annotation for text {actual:?} (recorded: {recorded:?})")]
    UnknownText { recorded: String, actual: String },
}

/// An [`Annotator`] that answers with one recorded graph.
///
/// The recording is returned for exactly the text it was made from. Blank
/// text always annotates to an empty graph; anything else is an error.
#[derive(Debug, Clone)]
pub struct ReplayAnnotator {
    text: String,
    graph: AnnotationGraph,
}

impl ReplayAnnotator {
    pub fn new(text: impl Into<String>, graph: AnnotationGraph) -> Self {
        Self {
            text: text.into(),
            graph,
        }
    }

    pub fn recorded_text(&self) -> &str {
        &self.text
    }
}

impl Annotator for ReplayAnnotator {
    type Error = ReplayError;

    fn annotate(&self, text: &str, _config: &PipelineConfig) -> Result<AnnotationGraph, ReplayError> {
        if text.trim().is_empty() {
            Ok(AnnotationGraph::empty())
        } else if text == self.text {
            Ok(self.graph.clone())
        } else {
            Err(ReplayError::UnknownText {
                recorded: self.text.clone(),
                actual: text.to_string(),
            })
        }
    }
}
