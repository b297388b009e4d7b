//! Non-fatal diagnostics collected while building a document.

use serde::Serialize;

use crate::annotation::AnnotatedEdge;

/// Something in the annotation graph that could not be used as-is.
///
/// None of these abort the transformation; the offending piece is dropped
/// or left unresolved and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// A dependency edge whose governor or dependent lies outside the
    /// sentence. The edge was dropped.
    DependencyOutOfRange {
        sentence: usize,
        edge: AnnotatedEdge,
        token_count: usize,
    },
    /// A coreference chain without a representative mention. The chain was
    /// skipped.
    MissingRepresentative { chain_id: u32 },
    /// A representative mention pointing at a sentence that does not exist
    /// (0-based). The chain was skipped.
    RepresentativeSentenceOutOfRange {
        chain_id: u32,
        sent_num: i64,
        sentence_count: usize,
    },
    /// A representative mention whose head index (0-based) lies outside its
    /// sentence. The chain was kept without a head token.
    HeadOutOfRange {
        chain_id: u32,
        sent_num: usize,
        head_index: i64,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DependencyOutOfRange {
                sentence,
                edge,
                token_count,
            } => write!(
                f,
                "Sentence {}: index of {} out of range ({} tokens), edge dropped",
                sentence, edge, token_count
            ),
            Diagnostic::MissingRepresentative { chain_id } => write!(
                f,
                "Coref chain {}: no representative mention, chain skipped",
                chain_id
            ),
            Diagnostic::RepresentativeSentenceOutOfRange {
                chain_id,
                sent_num,
                sentence_count,
            } => write!(
                f,
                "Coref chain {}: representative sentence {} out of range ({} sentences), chain skipped",
                chain_id, sent_num, sentence_count
            ),
            Diagnostic::HeadOutOfRange {
                chain_id,
                sent_num,
                head_index,
            } => write!(
                f,
                "Coref chain {}: head index {} out of range in sentence {}",
                chain_id, head_index, sent_num
            ),
        }
    }
}

/// Result wrapper that collects diagnostics without halting processing.
#[derive(Debug)]
pub struct ProcessResult<T> {
    pub value: T,
    pub warnings: Vec<Diagnostic>,
}

impl<T> ProcessResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Record a diagnostic and emit it through the `log` facade.
    pub fn add_warning(&mut self, warning: Diagnostic) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProcessResult<U> {
        ProcessResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Drop the diagnostics and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}
