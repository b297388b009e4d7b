//! Fixture file loading.

use crate::fixture::{parse_fixture, FixtureFormat, PipelineFixture};
use crate::SpecError;
use std::fs;
use std::path::Path;

fn load_error(path: &Path, err: impl ToString) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Load a single fixture file, choosing the format by extension.
pub fn load_fixture(path: &Path) -> Result<PipelineFixture, SpecError> {
    let format = FixtureFormat::from_path(path)
        .ok_or_else(|| load_error(path, "unrecognised fixture extension"))?;
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    parse_fixture(&content, format)
}

/// Load all fixtures from a directory (`**/*.{toml,json,ron}`), sorted by
/// relative path.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, PipelineFixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, PipelineFixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(dir).map_err(|e| load_error(dir, e))?;
    for path in entries.map(|entry| entry.map(|e| e.path())) {
        let path = path.map_err(|e| load_error(dir, e))?;

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
            continue;
        }
        if FixtureFormat::from_path(&path).is_none() {
            continue;
        }

        // Names are reported relative to the fixture root.
        let name = path.strip_prefix(base).unwrap_or(&path).display().to_string();
        fixtures.push((name, load_fixture(&path)?));
    }

    Ok(())
}
