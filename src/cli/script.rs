//! Line-oriented interaction used when `SALARY_ASSISTANT_SCRIPT` is set.
//!
//! One command per line: `start`, `set <key> <value>`, `clear <key>`,
//! `submit`, `back`, `try-again`, `quit`. Reaching end of input quits.

use std::io::{BufRead, Write};

use shell_words::split;

use crate::cli::interaction::{DataEntryAction, Interaction, LandingAction, ResultAction};
use crate::cli::screens::{result_lines, DataEntryView, LandingView};
use crate::errors::AppError;
use crate::presenter::DisplayModel;

pub const SCRIPT_ENV: &str = "SALARY_ASSISTANT_SCRIPT";

pub struct ScriptInteraction<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ScriptInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, lines: &[String]) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Next non-empty command split into words, or `None` at end of input.
    fn next_command(&mut self) -> Result<Option<Vec<String>>, AppError> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let tokens = match split(line.trim()) {
                Ok(tokens) => tokens,
                Err(err) => {
                    self.warn(&format!("Could not parse `{}`: {}", line.trim(), err))?;
                    continue;
                }
            };
            if !tokens.is_empty() {
                return Ok(Some(tokens));
            }
        }
    }

    fn unknown(&mut self, tokens: &[String]) -> Result<(), AppError> {
        self.warn(&format!("Unknown command: {}", tokens.join(" ")))
    }
}

impl<R: BufRead, W: Write> Interaction for ScriptInteraction<R, W> {
    fn landing(&mut self, view: &LandingView) -> Result<LandingAction, AppError> {
        self.emit(&view.lines())?;
        loop {
            let Some(tokens) = self.next_command()? else {
                return Ok(LandingAction::Quit);
            };
            match tokens[0].to_ascii_lowercase().as_str() {
                "start" => return Ok(LandingAction::Start),
                "quit" | "exit" => return Ok(LandingAction::Quit),
                _ => self.unknown(&tokens)?,
            }
        }
    }

    fn data_entry(&mut self, view: &DataEntryView) -> Result<DataEntryAction, AppError> {
        self.emit(&view.lines())?;
        loop {
            let Some(tokens) = self.next_command()? else {
                return Ok(DataEntryAction::Quit);
            };
            match tokens[0].to_ascii_lowercase().as_str() {
                "set" if tokens.len() >= 3 => {
                    return Ok(DataEntryAction::Set {
                        key: tokens[1].clone(),
                        value: tokens[2..].join(" "),
                    })
                }
                "clear" if tokens.len() == 2 => {
                    return Ok(DataEntryAction::Set {
                        key: tokens[1].clone(),
                        value: String::new(),
                    })
                }
                "submit" if view.submit_enabled => return Ok(DataEntryAction::Submit),
                "submit" => self.warn("A submission is already in progress.")?,
                "back" => return Ok(DataEntryAction::Back),
                "quit" | "exit" => return Ok(DataEntryAction::Quit),
                _ => self.unknown(&tokens)?,
            }
        }
    }

    fn result(&mut self, display: &DisplayModel) -> Result<ResultAction, AppError> {
        self.emit(&result_lines(display))?;
        loop {
            let Some(tokens) = self.next_command()? else {
                return Ok(ResultAction::Quit);
            };
            match tokens[0].to_ascii_lowercase().as_str() {
                "try-again" | "again" => return Ok(ResultAction::TryAgain),
                "quit" | "exit" => return Ok(ResultAction::Quit),
                _ => self.unknown(&tokens)?,
            }
        }
    }

    fn submitting(&mut self) -> Result<(), AppError> {
        self.emit(&["Submitting...".to_string()])
    }

    fn warn(&mut self, message: &str) -> Result<(), AppError> {
        self.emit(&[format!("Warning: {}", message)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::screens::ServerStatus;
    use crate::form::FormState;
    use std::io::Cursor;

    fn interaction(script: &str) -> ScriptInteraction<Cursor<Vec<u8>>, Vec<u8>> {
        ScriptInteraction::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn view() -> DataEntryView {
        DataEntryView {
            form: FormState::new(),
            message: None,
            submit_enabled: true,
        }
    }

    #[test]
    fn set_joins_quoted_and_unquoted_values() {
        let mut script = interaction("set jobTitle \"Data Scientist\"\nset country United States\n");
        assert_eq!(
            script.data_entry(&view()).unwrap(),
            DataEntryAction::Set {
                key: "jobTitle".into(),
                value: "Data Scientist".into()
            }
        );
        assert_eq!(
            script.data_entry(&view()).unwrap(),
            DataEntryAction::Set {
                key: "country".into(),
                value: "United States".into()
            }
        );
    }

    #[test]
    fn skips_unknown_commands_with_warning() {
        let mut script = interaction("dance\n\nstart\n");
        let view = LandingView {
            server_status: ServerStatus::Unreachable,
        };
        assert_eq!(script.landing(&view).unwrap(), LandingAction::Start);
        let output = String::from_utf8(script.into_output()).unwrap();
        assert!(output.contains("Unknown command: dance"));
        assert!(output.contains("Server status: unreachable"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut script = interaction("");
        assert_eq!(script.data_entry(&view()).unwrap(), DataEntryAction::Quit);
        assert_eq!(
            script.result(&DisplayModel::default()).unwrap(),
            ResultAction::Quit
        );
    }

    #[test]
    fn submit_is_inert_while_disabled() {
        let mut script = interaction("submit\nback\n");
        let disabled = DataEntryView {
            submit_enabled: false,
            ..view()
        };
        assert_eq!(script.data_entry(&disabled).unwrap(), DataEntryAction::Back);
    }
}
