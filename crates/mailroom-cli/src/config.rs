use std::path::{Path, PathBuf};

use mailroom_render::LetterTemplate;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Console settings. Every field has a default, so an empty file (or no
/// file at all) gives the stock mailroom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailroomConfig {
    /// Directory that receives one letter file per donor.
    pub output_dir: PathBuf,
    /// Width of the rules printed around a single thank-you letter.
    pub rule_width: usize,
    /// Letter wording.
    pub letter: LetterTemplate,
}

impl Default for MailroomConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("ThankYous"),
            rule_width: 80,
            letter: LetterTemplate::default(),
        }
    }
}

impl MailroomConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = MailroomConfig::default();
        assert_eq!(c.output_dir, PathBuf::from("ThankYous"));
        assert_eq!(c.rule_width, 80);
        assert_eq!(c.letter.emphasis_threshold, dec!(500));
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"letters\"\n\n[letter]\norganization = \"Dog Rescue\"").unwrap();

        let c = MailroomConfig::load(file.path()).unwrap();
        assert_eq!(c.output_dir, PathBuf::from("letters"));
        assert_eq!(c.rule_width, 80);
        assert_eq!(c.letter.organization, "Dog Rescue");
        assert_eq!(c.letter.signer, "Bungelina Bigglesnorf");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MailroomConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rule_width = \"wide\"").unwrap();
        let err = MailroomConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }
}
