//! Writes the fixture set to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::EmitError;
use crate::fixtures::FixtureFile;
use crate::payload::DEFAULT_SEED;
use crate::routines;
use crate::structured_log::{
    ArtifactIndex, FIXTURE_KIND, LogEmitter, LogEntry, LogLevel, Outcome, sha256_hex,
};

/// Directory the fixtures land in when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "am-kernels/tests/klib-tests/tests";

/// Run identifier used in trace ids and the artifact index.
#[must_use]
pub fn run_id(seed: u64) -> String {
    format!("klibc-fixtures-{seed:x}")
}

/// What one emission produced.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub output_dir: PathBuf,
    /// Fixtures in [`crate::Routine::ALL`] order, as rendered.
    pub fixtures: Vec<FixtureFile>,
    pub index: ArtifactIndex,
}

impl EmitReport {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.fixtures.len()
    }

    #[must_use]
    pub fn case_count(&self) -> usize {
        self.fixtures.iter().map(|f| f.blocks.len()).sum()
    }
}

/// Emits all fixtures into one directory.
#[derive(Debug, Clone)]
pub struct FixtureEmitter {
    pub output_dir: PathBuf,
    pub seed: u64,
}

impl FixtureEmitter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            output_dir: output_dir.into(),
            seed,
        }
    }

    /// Create the directory if needed and write every fixture, replacing
    /// files of the same name.
    pub fn emit(&self, log: &mut LogEmitter) -> Result<EmitReport, EmitError> {
        let fixtures = routines::build_all(self.seed)?;

        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "emit_start").with_details(json!({
                "output_dir": self.output_dir.display().to_string(),
                "seed": self.seed,
                "routines": fixtures.len(),
            })),
        )?;

        fs::create_dir_all(&self.output_dir).map_err(|source| EmitError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut index = ArtifactIndex::new(log.run_id(), self.seed);
        for fixture in &fixtures {
            let path = self.output_dir.join(fixture.file_name());
            let source = fixture.to_c_source();
            write_fixture(&path, &source)?;

            let shown = path.display().to_string();
            index.add(shown.clone(), FIXTURE_KIND, source.as_bytes());
            log.emit_entry(
                LogEntry::new("", LogLevel::Info, "fixture_written")
                    .with_api(fixture.routine.family(), fixture.routine.symbol())
                    .with_outcome(Outcome::Pass)
                    .with_artifacts(vec![shown])
                    .with_details(json!({
                        "cases": fixture.blocks.len(),
                        "bytes": source.len(),
                        "sha256": sha256_hex(source.as_bytes()),
                    })),
            )?;
        }

        let report = EmitReport {
            output_dir: self.output_dir.clone(),
            fixtures,
            index,
        };
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "emit_complete")
                .with_outcome(Outcome::Pass)
                .with_details(json!({
                    "files": report.file_count(),
                    "cases": report.case_count(),
                })),
        )?;
        log.flush()?;
        Ok(report)
    }
}

fn write_fixture(path: &Path, source: &str) -> Result<(), EmitError> {
    fs::write(path, source).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write all 15 fixtures into `output_dir` with the default seed and no
/// structured log.
pub fn generate_tests(output_dir: impl AsRef<Path>) -> Result<EmitReport, EmitError> {
    let mut log = LogEmitter::sink(&run_id(DEFAULT_SEED));
    FixtureEmitter::new(output_dir.as_ref(), DEFAULT_SEED).emit(&mut log)
}
