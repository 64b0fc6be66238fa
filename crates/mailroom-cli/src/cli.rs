use std::path::PathBuf;

use clap::Parser;

use crate::config::MailroomConfig;
use crate::error::Result;

#[derive(Parser)]
#[command(
    name = "mailroom",
    about = "Donor ledger console: record gifts, print reports, write thank-you letters",
    version,
)]
pub struct Cli {
    /// TOML file with output directory and letter settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for written thank-you letters (overrides the config file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective configuration from the config file and flags.
    pub fn config(&self) -> Result<MailroomConfig> {
        let mut config = match &self.config {
            Some(path) => MailroomConfig::load(path)?,
            None => MailroomConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::try_parse_from(["mailroom"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.config().unwrap(), MailroomConfig::default());
    }

    #[test]
    fn parse_output_dir() {
        let cli = Cli::try_parse_from(["mailroom", "--output-dir", "/tmp/letters"]).unwrap();
        assert_eq!(cli.config().unwrap().output_dir, PathBuf::from("/tmp/letters"));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["mailroom", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn reject_positional() {
        assert!(Cli::try_parse_from(["mailroom", "extra"]).is_err());
    }
}
