//! The interactive menu loop.
//!
//! [`Controller`] owns the ledger for the whole session and talks to the
//! user through any line reader and writer, so the loop runs the same
//! against a terminal or a scripted buffer.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use mailroom_ledger::{parse_amount, Ledger, LedgerError};
use mailroom_render::{build_report, horizontal_rule};
use tracing::debug;

use crate::config::MailroomConfig;
use crate::letters::write_letters;
use crate::menu::MenuChoice;

const DONOR_PROMPT: &str = "Who donated? (Enter LIST to see current list of donors)\n>";
const AMOUNT_PROMPT: &str = "How much was donated?\n>";

pub struct Controller<R, W> {
    ledger: Ledger,
    config: MailroomConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(ledger: Ledger, config: MailroomConfig, input: R, output: W) -> Self {
        Self {
            ledger,
            config,
            input,
            output,
        }
    }

    /// Show the menu and dispatch selections until the user quits or
    /// input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{}", "Please choose from the following options:".bold())?;
            for choice in MenuChoice::ALL {
                writeln!(self.output, "{} {}", choice.key(), choice.label())?;
            }

            let choice = match self.prompt(">")? {
                Some(answer) => match MenuChoice::parse(&answer) {
                    Some(choice) => choice,
                    None => continue,
                },
                None => MenuChoice::Quit,
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::SendThankYou => self.send_thank_you()?,
                MenuChoice::CreateReport => self.print_report()?,
                MenuChoice::WriteThankYous => self.write_thank_yous()?,
                MenuChoice::Quit => {
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
            }
        }
    }

    // Returns `None` when input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn send_thank_you(&mut self) -> anyhow::Result<()> {
        let donor = loop {
            let Some(answer) = self.prompt(DONOR_PROMPT)? else {
                return Ok(());
            };
            let answer = answer.trim();
            if answer.is_empty() {
                continue;
            }
            if !answer.eq_ignore_ascii_case("list") {
                break answer.to_string();
            }
            writeln!(self.output, "\nCurrent donors:")?;
            for name in self.ledger.sorted_donors() {
                writeln!(self.output, "{name}")?;
            }
            writeln!(self.output)?;
        };

        let (name, amount) = loop {
            let Some(answer) = self.prompt(AMOUNT_PROMPT)? else {
                return Ok(());
            };
            let recorded = match parse_amount(&answer) {
                Ok(amount) => self.ledger.add_donation(&donor, amount).map(|name| (name, amount)),
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    writeln!(self.output, "Please try again.")?;
                    continue;
                }
            };
            match recorded {
                Ok(gift) => break gift,
                Err(err @ LedgerError::AmountTooLarge { .. }) => {
                    writeln!(self.output, "{err}")?;
                    writeln!(self.output, "Please try again.")?;
                }
                Err(err) => return Err(err.into()),
            }
        };

        let letter = self.config.letter.compose(&name, &[amount]);
        let rule = horizontal_rule(self.config.rule_width);
        writeln!(self.output, "{rule}\n{letter}\n{rule}")?;
        Ok(())
    }

    fn print_report(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}\n", build_report(&self.ledger))?;
        Ok(())
    }

    fn write_thank_yous(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Writing new thank yous to all donors...")?;
        let dir = &self.config.output_dir;
        let batch = match write_letters(&self.ledger, &self.config.letter, dir) {
            Ok(batch) => batch,
            Err(err) => {
                writeln!(self.output, "{} cannot create {}: {err}", "✗".red().bold(), dir.display())?;
                return Ok(());
            }
        };

        for (donor, err) in &batch.failed {
            writeln!(self.output, "{} letter for {donor} not written: {err}", "✗".red().bold())?;
        }
        let location = dir.canonicalize().unwrap_or_else(|_| dir.clone());
        writeln!(
            self.output,
            "{} {} thank yous written to\n{}",
            "✓".green().bold(),
            batch.written.len(),
            location.display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
impl<R, W> Controller<R, W> {
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn output(&self) -> &W {
        &self.output
    }
}
