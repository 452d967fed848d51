use std::io;
use std::sync::Arc;

use crate::cli::interaction::{DataEntryAction, Interaction, LandingAction, ResultAction};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::screens::{DataEntryScreen, LandingView, ServerStatus, SubmitResult};
use crate::cli::script::{ScriptInteraction, SCRIPT_ENV};
use crate::cli::terminal::TerminalInteraction;
use crate::config::{Config, ConfigManager};
use crate::currency::LocaleConfig;
use crate::errors::AppError;
use crate::navigation::{Location, MemoryHistory, NavigationController, Screen, LANDING_PATH};
use crate::presenter::ResultPresenter;
use crate::storage::{JsonFileStore, MemoryStore, SessionStore};
use crate::submission::{HttpTransport, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Routes the current location to a freshly mounted screen until the user
/// quits.
pub struct App<L: Location, I: Interaction> {
    navigation: NavigationController<L>,
    interaction: I,
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    locale: LocaleConfig,
}

impl<L: Location, I: Interaction> App<L, I> {
    pub fn new(
        navigation: NavigationController<L>,
        interaction: I,
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
        locale: LocaleConfig,
    ) -> Self {
        Self {
            navigation,
            interaction,
            transport,
            store,
            locale,
        }
    }

    pub fn navigation(&self) -> &NavigationController<L> {
        &self.navigation
    }

    pub fn into_interaction(self) -> I {
        self.interaction
    }

    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            let screen = self.navigation.current_screen();
            tracing::debug!(%screen, path = %self.navigation.location().current_path(), "mounting screen");
            let control = match screen {
                Screen::Landing => self.run_landing().await?,
                Screen::DataEntry => self.run_data_entry().await?,
                Screen::Result => self.run_result()?,
            };
            if control == LoopControl::Exit {
                tracing::info!("session ended");
                return Ok(());
            }
        }
    }

    async fn run_landing(&mut self) -> Result<LoopControl, AppError> {
        let health = match self.transport.health().await {
            Ok(health) => Some(health),
            Err(err) => {
                tracing::warn!(error = %err, "health check failed");
                None
            }
        };
        let view = LandingView {
            server_status: ServerStatus::from_health(health.as_ref()),
        };
        match self.interaction.landing(&view)? {
            LandingAction::Start => {
                self.navigation.start()?;
                Ok(LoopControl::Continue)
            }
            LandingAction::Quit => Ok(LoopControl::Exit),
        }
    }

    async fn run_data_entry(&mut self) -> Result<LoopControl, AppError> {
        let mut screen = DataEntryScreen::mount(self.transport.clone(), self.store.clone());
        loop {
            match self.interaction.data_entry(&screen.view())? {
                DataEntryAction::Set { key, value } => {
                    if let Err(err) = screen.update(&key, &value) {
                        self.interaction.warn(&err.to_string())?;
                    }
                }
                DataEntryAction::Submit => {
                    self.interaction.submitting()?;
                    if screen.submit().await == SubmitResult::Succeeded {
                        self.navigation.submit_succeeded()?;
                        return Ok(LoopControl::Continue);
                    }
                }
                DataEntryAction::Back => {
                    if self.navigation.back()? != Screen::DataEntry {
                        return Ok(LoopControl::Continue);
                    }
                }
                DataEntryAction::Quit => return Ok(LoopControl::Exit),
            }
        }
    }

    fn run_result(&mut self) -> Result<LoopControl, AppError> {
        let presenter = ResultPresenter::mount(self.store.as_ref(), self.locale.clone());
        match self.interaction.result(&presenter.render())? {
            ResultAction::TryAgain => {
                presenter.try_again(&mut self.navigation)?;
                Ok(LoopControl::Continue)
            }
            ResultAction::Quit => Ok(LoopControl::Exit),
        }
    }
}

fn session_store(config: &Config) -> Arc<dyn SessionStore> {
    match &config.session_file {
        Some(path) => Arc::new(JsonFileStore::new(path)),
        None => Arc::new(MemoryStore::new()),
    }
}

/// Entry point for the `salary_assistant_cli` binary.
///
/// The optional first argument is the starting path (defaults to `/`).
pub fn run_cli() -> Result<(), AppError> {
    let config = ConfigManager::new()?.load_effective()?;
    let scripted = std::env::var_os(SCRIPT_ENV).is_some();
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && !scripted,
    });

    let start_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| LANDING_PATH.to_string());
    let navigation = NavigationController::new(MemoryHistory::new(start_path));
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.api_base_url)?);
    let store = session_store(&config);
    let locale = config.locale.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if scripted {
        let stdin = io::stdin();
        let interaction = ScriptInteraction::new(stdin.lock(), io::stdout());
        let mut app = App::new(navigation, interaction, transport, store, locale);
        runtime.block_on(app.run())
    } else {
        let mut app = App::new(
            navigation,
            TerminalInteraction::new(),
            transport,
            store,
            locale,
        );
        runtime.block_on(app.run())
    }
}
