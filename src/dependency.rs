//! Dependency edge resolution.

use serde::Serialize;

use crate::annotation::AnnotatedEdge;
use crate::span;
use crate::token::Token;

/// A grammatical relation between two tokens of the same sentence.
///
/// Both indices are 0-based and always address a token of the owning
/// [`Sentence`](crate::Sentence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    governor: Token,
    dependent: Token,
    governor_index: usize,
    dependent_index: usize,
    relation: String,
}

impl DependencyEdge {
    /// Resolve an annotator edge against a sentence's tokens.
    ///
    /// Returns `None` when either endpoint falls outside `tokens`.
    pub(crate) fn resolve(edge: &AnnotatedEdge, tokens: &[Token]) -> Option<Self> {
        let governor_index = span::checked_index(span::to_zero_based(edge.governor), tokens.len())?;
        let dependent_index =
            span::checked_index(span::to_zero_based(edge.dependent), tokens.len())?;

        Some(Self {
            governor: tokens[governor_index].clone(),
            dependent: tokens[dependent_index].clone(),
            governor_index,
            dependent_index,
            relation: edge.relation.clone(),
        })
    }

    /// The head token of the relation.
    pub fn governor(&self) -> &Token {
        &self.governor
    }

    pub fn dependent(&self) -> &Token {
        &self.dependent
    }

    pub fn governor_index(&self) -> usize {
        self.governor_index
    }

    pub fn dependent_index(&self) -> usize {
        self.dependent_index
    }

    /// Grammatical relation label, e.g. `nsubj` or `prep_of`.
    pub fn relation(&self) -> &str {
        &self.relation
    }
}

/// Format: `rel(governor-index, dependent-index)`.
impl std::fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}-{}, {}-{})",
            self.relation,
            self.governor.word(),
            self.governor_index,
            self.dependent.word(),
            self.dependent_index
        )
    }
}

/// Edges in the order the transformation consumes them: by governor, then
/// dependent, then relation.
pub(crate) fn sorted_edges(edges: &[AnnotatedEdge]) -> Vec<&AnnotatedEdge> {
    let mut sorted: Vec<&AnnotatedEdge> = edges.iter().collect();
    sorted.sort_by(|a, b| {
        (a.governor, a.dependent, &a.relation).cmp(&(b.governor, b.dependent, &b.relation))
    });
    sorted
}
