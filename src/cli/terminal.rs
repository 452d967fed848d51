//! Interactive terminal front-end built on `dialoguer` menus.

use std::io::{self, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Select};

use crate::catalog::{self, FieldDefinition};
use crate::cli::interaction::{DataEntryAction, Interaction, LandingAction, ResultAction};
use crate::cli::output;
use crate::cli::screens::{DataEntryView, LandingView, APP_TITLE, RESULT_HEADING};
use crate::errors::AppError;
use crate::presenter::DisplayModel;

const CLEAR_SELECTION: &str = "Clear selection";

pub struct TerminalInteraction {
    theme: ColorfulTheme,
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Each screen starts on a blank terminal, like a full page load.
    fn clear_screen(&self) -> Result<(), AppError> {
        let mut stdout = io::stdout();
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        stdout.flush()?;
        output::section(APP_TITLE);
        Ok(())
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, AppError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact_opt()?)
    }

    fn choose_value(
        &self,
        definition: &FieldDefinition,
        current: &str,
    ) -> Result<Option<String>, AppError> {
        let mut items: Vec<String> = definition
            .allowed_values
            .iter()
            .map(|allowed| allowed.display_label.to_string())
            .collect();
        items.push(CLEAR_SELECTION.to_string());
        let default = definition
            .allowed_values
            .iter()
            .position(|allowed| allowed.value == current)
            .unwrap_or(0);

        let choice = self.select(definition.label, &items, default)?;
        Ok(choice.map(|index| {
            definition
                .allowed_values
                .get(index)
                .map(|allowed| allowed.value.to_string())
                .unwrap_or_default()
        }))
    }
}

impl Interaction for TerminalInteraction {
    fn landing(&mut self, view: &LandingView) -> Result<LandingAction, AppError> {
        self.clear_screen()?;
        output::info(format!("Server status: {}", view.server_status.describe()));
        let items = vec!["Get started".to_string(), "Quit".to_string()];
        Ok(match self.select("What would you like to do?", &items, 0)? {
            Some(0) => LandingAction::Start,
            _ => LandingAction::Quit,
        })
    }

    fn data_entry(&mut self, view: &DataEntryView) -> Result<DataEntryAction, AppError> {
        self.clear_screen()?;
        if let Some(message) = &view.message {
            output::error(message);
        }

        let definitions = catalog::definitions();
        let mut items: Vec<String> = view
            .form
            .entries()
            .map(|(definition, value)| {
                let shown = definition.display_label_for(value).unwrap_or("-");
                format!("{}: {}", definition.label, shown)
            })
            .collect();
        let submit_index = items.len();
        items.push(if view.submit_enabled {
            "Submit".to_string()
        } else {
            "Submitting...".to_string()
        });
        items.push("Back".to_string());
        items.push("Quit".to_string());

        loop {
            let Some(index) = self.select("Describe the position", &items, 0)? else {
                return Ok(DataEntryAction::Back);
            };
            if let Some(definition) = definitions.get(index) {
                let current = view.form.get(definition.key).unwrap_or_default();
                if let Some(value) = self.choose_value(definition, current)? {
                    return Ok(DataEntryAction::Set {
                        key: definition.key.to_string(),
                        value,
                    });
                }
                continue;
            }
            return Ok(match index - submit_index {
                0 if view.submit_enabled => DataEntryAction::Submit,
                0 => continue,
                1 => DataEntryAction::Back,
                _ => DataEntryAction::Quit,
            });
        }
    }

    fn result(&mut self, display: &DisplayModel) -> Result<ResultAction, AppError> {
        self.clear_screen()?;
        output::info(RESULT_HEADING);
        output::success(&display.amount);
        output::info(&display.unit);
        let items = vec!["Try again".to_string(), "Quit".to_string()];
        Ok(match self.select("Next", &items, 0)? {
            Some(0) => ResultAction::TryAgain,
            _ => ResultAction::Quit,
        })
    }

    fn submitting(&mut self) -> Result<(), AppError> {
        output::info("Submitting...");
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), AppError> {
        output::warning(message);
        Ok(())
    }
}
