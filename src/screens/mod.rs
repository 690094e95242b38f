pub mod confirm_quit;
pub mod intro;
pub mod progress;
pub mod prompt_input;
pub mod result;

// Re-exports so you can keep using crate::screens::XYZScreen
pub use confirm_quit::ConfirmQuitScreen;
pub use intro::IntroScreen;
pub use progress::ProgressScreen;
pub use prompt_input::PromptInputScreen;
pub use result::ResultScreen;

use crate::app::{AppCtx, ScreenWidget};
use crate::flow::Screen;

/// Builds the controller for `screen`. Each call starts a fresh set of timers.
pub fn mount(screen: &Screen, ctx: &mut AppCtx) -> Box<dyn ScreenWidget> {
    match screen {
        Screen::Intro => Box::new(IntroScreen::new(ctx)),
        Screen::PromptInput => Box::new(PromptInputScreen::new()),
        Screen::Progress { .. } => Box::new(ProgressScreen::new(ctx)),
        Screen::Result { prompt } => Box::new(ResultScreen::new(prompt.clone())),
    }
}
