//! Batch letter writing.
//!
//! Each donor's full-history letter goes to `<output_dir>/<name>.txt`.
//! Existing files are overwritten. A donor whose letter cannot be written
//! is recorded as a failure and the batch moves on to the next donor.

use std::fs;
use std::path::{Path, PathBuf};

use mailroom_ledger::Ledger;
use mailroom_render::LetterTemplate;
use tracing::{info, warn};

use crate::error::{CliError, Result};

/// Outcome of writing every donor's letter.
#[derive(Debug, Default)]
pub struct LetterBatch {
    /// Files written, in ledger order.
    pub written: Vec<PathBuf>,
    /// Donors whose letter could not be written.
    pub failed: Vec<(String, CliError)>,
}

/// File path for a donor's letter inside `dir`.
///
/// Names that would leave `dir` are rejected.
pub fn letter_path(dir: &Path, donor: &str) -> Result<PathBuf> {
    if donor.is_empty() || donor == "." || donor == ".." || donor.contains(['/', '\\']) {
        return Err(CliError::InvalidFileName {
            name: donor.to_string(),
        });
    }
    Ok(dir.join(format!("{donor}.txt")))
}

/// Write a letter for every donor in `ledger` into `dir`, creating it if
/// needed.
///
/// Only failure to create `dir` fails the whole call.
pub fn write_letters(ledger: &Ledger, template: &LetterTemplate, dir: &Path) -> Result<LetterBatch> {
    fs::create_dir_all(dir)?;

    let mut batch = LetterBatch::default();
    for entry in ledger.entries() {
        let letter = template.compose(entry.name(), entry.donations());
        let written = letter_path(dir, entry.name()).and_then(|path| {
            fs::write(&path, letter)?;
            Ok(path)
        });
        match written {
            Ok(path) => batch.written.push(path),
            Err(err) => {
                warn!(donor = entry.name(), %err, "failed to write thank-you letter");
                batch.failed.push((entry.name().to_string(), err));
            }
        }
    }

    info!(
        written = batch.written.len(),
        failed = batch.failed.len(),
        dir = %dir.display(),
        "wrote thank-you letters"
    );
    Ok(batch)
}
