//! Fixture-driven regression testing for lingua-pipeline.
//!
//! Each fixture records an input text together with the annotation an
//! annotator produced for it, and states what the normalized document
//! should look like. Fixtures are replayed through the real pipeline, so
//! they exercise index conversion, edge resolution and chain attachment
//! without needing a live annotator.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and parsing (TOML, JSON, RON)
//! - [`loader`] - Loading fixture files from disk
//! - [`annotator`] - An annotator that replays recorded output
//! - [`runner`] - Runs fixtures and checks their expectations
//! - [`formatter`] - Report formatting
//! - [`errors`] - Error types for the harness

pub mod annotator;
pub mod errors;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use annotator::{ReplayAnnotator, ReplayError};
pub use errors::{SpecError, SpecResult};
pub use fixture::{
    parse_fixture, Expectations, FixtureFormat, PipelineFixture, SentenceExpectation,
};
pub use formatter::{format_report, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_fixture, FixtureReport, Mismatch};
