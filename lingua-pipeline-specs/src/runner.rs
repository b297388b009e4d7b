//! Runs fixtures through the pipeline and checks their expectations.

use lingua_pipeline::{Diagnostic, Document, Pipeline, Sentence};

use crate::annotator::ReplayAnnotator;
use crate::errors::SpecResult;
use crate::fixture::{PipelineFixture, SentenceExpectation};

/// One expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// What was checked, e.g. `sentence[1].dependencies`
    pub check: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of running one fixture.
#[derive(Debug)]
pub struct FixtureReport {
    /// The document the pipeline built
    pub document: Document,
    /// Diagnostics reported while building it
    pub warnings: Vec<Diagnostic>,
    pub mismatches: Vec<Mismatch>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run a fixture through the pipeline with its recorded annotation and
/// compare the resulting document with the fixture's expectations.
pub fn run_fixture(fixture: &PipelineFixture) -> SpecResult<FixtureReport> {
    let annotator = ReplayAnnotator::new(fixture.text.clone(), fixture.annotation.clone());
    let pipeline = Pipeline::with_config(annotator, fixture.config());
    let result = pipeline.process(&fixture.text)?;

    let mut mismatches = Vec::new();
    let expect = &fixture.expect;

    if let Some(count) = expect.sentence_count {
        check(&mut mismatches, "sentence_count", &count, &result.value.len());
    }
    if let Some(count) = expect.warning_count {
        check(&mut mismatches, "warning_count", &count, &result.warnings.len());
    }
    for expected in &expect.sentences {
        match result.value.sentence(expected.index) {
            Some(sentence) => check_sentence(&mut mismatches, expected, sentence),
            None => mismatches.push(Mismatch {
                check: format!("sentence[{}]", expected.index),
                expected: "present".to_string(),
                actual: format!("missing ({} sentences)", result.value.len()),
            }),
        }
    }

    Ok(FixtureReport {
        document: result.value,
        warnings: result.warnings,
        mismatches,
    })
}

fn check_sentence(mismatches: &mut Vec<Mismatch>, expected: &SentenceExpectation, sentence: &Sentence) {
    let prefix = format!("sentence[{}]", expected.index);

    if let Some(tokens) = &expected.tokens {
        let actual: Vec<String> = sentence.tokens().iter().map(|t| t.word().to_string()).collect();
        check(mismatches, &format!("{prefix}.tokens"), tokens, &actual);
    }
    if let Some(dependencies) = &expected.dependencies {
        let actual: Vec<String> = sentence.dependencies().iter().map(ToString::to_string).collect();
        check(mismatches, &format!("{prefix}.dependencies"), dependencies, &actual);
    }
    if let Some(chains) = &expected.chains {
        let actual: Vec<String> = sentence.coref_chains().iter().map(ToString::to_string).collect();
        check(mismatches, &format!("{prefix}.chains"), chains, &actual);
    }
    if let Some(flags) = &expected.multi_sentence {
        let actual: Vec<bool> = sentence
            .coref_chains()
            .iter()
            .map(|c| c.is_multi_sentence())
            .collect();
        check(mismatches, &format!("{prefix}.multi_sentence"), flags, &actual);
    }
}

fn check<T: PartialEq + std::fmt::Debug>(
    mismatches: &mut Vec<Mismatch>,
    name: &str,
    expected: &T,
    actual: &T,
) {
    if expected != actual {
        mismatches.push(Mismatch {
            check: name.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        });
    }
}
