//! The external annotation pipeline.

use crate::annotation::AnnotationGraph;
use crate::config::PipelineConfig;

/// Anything that can turn raw text into an [`AnnotationGraph`].
///
/// The transformation only relies on the shape of the graph, never on how
/// it was produced, so an implementation may wrap an NLP service, a
/// subprocess, or a store of recorded annotations.
///
/// Failures are returned as the implementation's own error type and are
/// passed through [`Pipeline::process`](crate::Pipeline::process) untouched.
pub trait Annotator {
    type Error;

    /// Annotate `text`. The configuration names the annotators to run and
    /// the dependency graph variant the caller will consume.
    fn annotate(&self, text: &str, config: &PipelineConfig) -> Result<AnnotationGraph, Self::Error>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    type Error = A::Error;

    fn annotate(&self, text: &str, config: &PipelineConfig) -> Result<AnnotationGraph, Self::Error> {
        (**self).annotate(text, config)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    type Error = A::Error;

    fn annotate(&self, text: &str, config: &PipelineConfig) -> Result<AnnotationGraph, Self::Error> {
        (**self).annotate(text, config)
    }
}
