use std::convert::Infallible;
use std::fmt::Write;

use crate::{
    AnnotatedChain, AnnotatedEdge, AnnotatedMention, AnnotatedSentence, AnnotatedToken,
    AnnotationGraph, Annotator, DependencyMode, Document, PipelineConfig,
};

/// Returns the same recorded graph for any non-empty text.
pub struct StaticAnnotator(pub AnnotationGraph);

impl Annotator for StaticAnnotator {
    type Error = Infallible;

    fn annotate(&self, text: &str, _config: &PipelineConfig) -> Result<AnnotationGraph, Infallible> {
        if text.trim().is_empty() {
            Ok(AnnotationGraph::empty())
        } else {
            Ok(self.0.clone())
        }
    }
}

pub fn token(word: &str, pos: &str, ner: &str) -> AnnotatedToken {
    AnnotatedToken::new(word, pos, ner, word.to_lowercase())
}

pub fn sentence(text: &str, words: &[(&str, &str, &str)]) -> AnnotatedSentence {
    AnnotatedSentence::new(
        text,
        words
            .iter()
            .map(|(word, pos, ner)| token(word, pos, ner))
            .collect(),
    )
}

pub fn edge(governor: i64, dependent: i64, relation: &str) -> AnnotatedEdge {
    AnnotatedEdge::new(governor, dependent, relation)
}

/// 1-based single-token mention at `position` of sentence `sent_num`.
pub fn word_mention(sent_num: i64, position: i64) -> AnnotatedMention {
    AnnotatedMention::new(sent_num, position, position + 1, position)
}

/// "John met Mary. He greeted her." with John/He and Mary/her chains.
pub fn john_mary_graph() -> AnnotationGraph {
    let first = sentence(
        "John met Mary.",
        &[
            ("John", "NNP", "PERSON"),
            ("met", "VBD", "O"),
            ("Mary", "NNP", "PERSON"),
            (".", ".", "O"),
        ],
    )
    .with_dependencies(
        DependencyMode::Processed,
        vec![edge(2, 3, "dobj"), edge(2, 1, "nsubj")],
    );

    let second = sentence(
        "He greeted her.",
        &[
            ("He", "PRP", "O"),
            ("greeted", "VBD", "O"),
            ("her", "PRP", "O"),
            (".", ".", "O"),
        ],
    )
    .with_dependencies(
        DependencyMode::Processed,
        vec![edge(2, 1, "nsubj"), edge(2, 3, "dobj")],
    );

    AnnotationGraph::new(vec![first, second])
        .with_chain(AnnotatedChain::new(
            2,
            word_mention(1, 3),
            vec![word_mention(1, 3), word_mention(2, 3)],
        ))
        .with_chain(AnnotatedChain::new(
            1,
            word_mention(1, 1),
            vec![word_mention(1, 1), word_mention(2, 1)],
        ))
}

/// Plain-text rendering of a document for snapshots.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for (idx, sentence) in doc.iter().enumerate() {
        writeln!(out, "{}: {}", idx, sentence).unwrap();
        for dep in sentence.dependencies() {
            writeln!(out, "  {}", dep).unwrap();
        }
        for chain in sentence.coref_chains() {
            writeln!(out, "  #{} {}", chain.chain_id(), chain).unwrap();
        }
    }
    out
}
