//! The document model: sentences in pipeline order.
//!
//! Documents are only built by [`Pipeline`](crate::Pipeline) and expose no
//! mutation once returned.

use serde::Serialize;

use crate::coref::CorefChain;
use crate::dependency::DependencyEdge;
use crate::token::Token;

/// One sentence with its tokens, dependency edges and the coreference
/// chains whose representative mention lies in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    dependencies: Vec<DependencyEdge>,
    coref_chains: Vec<CorefChain>,
}

impl Sentence {
    pub(crate) fn new(text: String, tokens: Vec<Token>) -> Self {
        Self {
            text,
            tokens,
            dependencies: Vec::new(),
            coref_chains: Vec::new(),
        }
    }

    pub(crate) fn add_dependency(&mut self, edge: DependencyEdge) {
        self.dependencies.push(edge);
    }

    pub(crate) fn add_coref_chain(&mut self, chain: CorefChain) {
        self.coref_chains.push(chain);
    }

    /// Sentence text exactly as the annotator reported it.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    /// Chains anchored in this sentence. A chain that merely has a
    /// non-representative mention here is listed on its representative's
    /// sentence instead.
    pub fn coref_chains(&self) -> &[CorefChain] {
        &self.coref_chains
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// An annotated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub(crate) fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Every chain in the document, in sentence order.
    pub fn coref_chains(&self) -> impl Iterator<Item = &CorefChain> {
        self.sentences.iter().flat_map(|s| s.coref_chains.iter())
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Take ownership of the sentences (consuming the document).
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
