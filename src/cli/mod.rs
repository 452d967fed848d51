pub mod app;
pub mod interaction;
pub mod output;
pub mod screens;
pub mod script;
pub mod terminal;

pub use app::{run_cli, App};
pub use interaction::{DataEntryAction, Interaction, LandingAction, ResultAction};
pub use script::ScriptInteraction;
