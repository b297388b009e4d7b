//! The document transformer.
//!
//! Building a document happens in two phases:
//!
//! 1. every sentence is built in annotator order: tokens first, then the
//!    dependency edges of the configured graph variant;
//! 2. once all sentences exist, the coreference chains are resolved against
//!    them. Mentions may point backwards or forwards across sentences, so
//!    this cannot start before phase 1 is complete.

use crate::annotation::{AnnotatedChain, AnnotatedSentence, AnnotationGraph};
use crate::annotator::Annotator;
use crate::config::{DependencyMode, PipelineConfig};
use crate::coref::{CorefChain, CorefMention};
use crate::dependency::{sorted_edges, DependencyEdge};
use crate::diagnostic::{Diagnostic, ProcessResult};
use crate::document::{Document, Sentence};
use crate::span;
use crate::token::Token;

/// Runs an [`Annotator`] and turns its output into a [`Document`].
///
/// The configuration is fixed at construction; `process` only needs
/// `&self`, so one pipeline can serve many documents (and many threads,
/// when the annotator allows it).
#[derive(Debug, Clone)]
pub struct Pipeline<A> {
    annotator: A,
    config: PipelineConfig,
}

impl<A: Annotator> Pipeline<A> {
    /// Create a pipeline with the standard configuration.
    pub fn new(annotator: A) -> Self {
        Self::with_config(annotator, PipelineConfig::standard())
    }

    pub fn with_config(annotator: A, config: PipelineConfig) -> Self {
        Self { annotator, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Annotate `text` and build its document.
    ///
    /// Malformed pieces of the annotation are reported in
    /// [`ProcessResult::warnings`]; only a failing annotator produces an
    /// `Err`, and its error is returned unchanged.
    pub fn process(&self, text: &str) -> Result<ProcessResult<Document>, A::Error> {
        let graph = self.annotator.annotate(text, &self.config)?;
        Ok(transform(&self.config, graph))
    }

    /// Like [`Pipeline::process`], discarding the diagnostics after they
    /// have been logged.
    pub fn document(&self, text: &str) -> Result<Document, A::Error> {
        self.process(text).map(ProcessResult::into_value)
    }
}

/// Build a document from an annotation graph that was already produced.
///
/// This is the transformation [`Pipeline::process`] applies to its
/// annotator's output; it is exposed for callers that obtain annotations
/// some other way, such as a recording.
pub fn transform(config: &PipelineConfig, graph: AnnotationGraph) -> ProcessResult<Document> {
    let AnnotationGraph {
        sentences,
        coref_chains,
    } = graph;

    let mut result = ProcessResult::ok(Vec::with_capacity(sentences.len()));

    for (sentence_idx, annotated) in sentences.into_iter().enumerate() {
        let sentence = build_sentence(sentence_idx, annotated, config.dependency_mode, &mut result);
        result.value.push(sentence);
    }

    if let Some(chains) = coref_chains {
        attach_coref_chains(chains, &mut result);
    }

    let result = result.map(Document::new);
    log::debug!(
        "built document: {} sentences, {} chains, {} warnings",
        result.value.len(),
        result.value.coref_chains().count(),
        result.warnings.len()
    );
    result
}

fn build_sentence(
    sentence_idx: usize,
    annotated: AnnotatedSentence,
    mode: DependencyMode,
    result: &mut ProcessResult<Vec<Sentence>>,
) -> Sentence {
    let AnnotatedSentence {
        text,
        tokens,
        dependencies,
    } = annotated;

    let tokens: Vec<Token> = tokens
        .into_iter()
        .map(|t| Token::new(t.word, t.pos, t.ner, t.lemma))
        .collect();
    let mut sentence = Sentence::new(text, tokens);

    // A missing graph for the configured variant just means no edges.
    if let Some(edges) = dependencies.get(mode) {
        for edge in sorted_edges(edges) {
            match DependencyEdge::resolve(edge, sentence.tokens()) {
                Some(resolved) => sentence.add_dependency(resolved),
                None => result.add_warning(Diagnostic::DependencyOutOfRange {
                    sentence: sentence_idx,
                    edge: edge.clone(),
                    token_count: sentence.tokens().len(),
                }),
            }
        }
    }

    sentence
}

fn attach_coref_chains(mut chains: Vec<AnnotatedChain>, result: &mut ProcessResult<Vec<Sentence>>) {
    // Chain ids give a stable attachment order regardless of how the
    // annotator enumerated its chains.
    chains.sort_by_key(|chain| chain.id);

    for chain in chains {
        let representative = match chain.representative {
            Some(representative) => representative,
            None => {
                result.add_warning(Diagnostic::MissingRepresentative { chain_id: chain.id });
                continue;
            }
        };

        let mut rep_mention = CorefMention::from_annotated(&representative);
        let sentence_count = result.value.len();
        let rep_sentence = match span::checked_index(rep_mention.sent_num(), sentence_count) {
            Some(idx) => idx,
            None => {
                result.add_warning(Diagnostic::RepresentativeSentenceOutOfRange {
                    chain_id: chain.id,
                    sent_num: rep_mention.sent_num(),
                    sentence_count,
                });
                continue;
            }
        };

        let rep_tokens = result.value[rep_sentence].tokens();
        rep_mention.resolve_tokens(rep_tokens);
        if !rep_mention.resolve_head(rep_tokens) {
            result.add_warning(Diagnostic::HeadOutOfRange {
                chain_id: chain.id,
                sent_num: rep_sentence,
                head_index: rep_mention.head_index(),
            });
        }

        let mut coref_chain = CorefChain::new(chain.id, rep_mention);
        for annotated in &chain.mentions {
            let mut mention = CorefMention::from_annotated(annotated);
            // An unknown sentence leaves the mention with no tokens, like an
            // out-of-range span does.
            if let Some(idx) = span::checked_index(mention.sent_num(), sentence_count) {
                mention.resolve_tokens(result.value[idx].tokens());
            }
            coref_chain.add_mention(mention);
        }

        result.value[rep_sentence].add_coref_chain(coref_chain);
    }
}
