//! Screen state machine.
//!
//! The prompt travels inside the `Screen` variants that need it, so a
//! Progress or Result screen without a prompt cannot be constructed.

use std::fmt;

use tracing::{debug, info, warn};

/// Prompt text that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Intro,
    PromptInput,
    Progress { prompt: Prompt },
    Result { prompt: Prompt },
}

/// Payload-free tag of a `Screen`, handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Intro,
    PromptInput,
    Progress,
    Result,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Intro => ScreenKind::Intro,
            Screen::PromptInput => ScreenKind::PromptInput,
            Screen::Progress { .. } => ScreenKind::Progress,
            Screen::Result { .. } => ScreenKind::Result,
        }
    }
}

/// Transition requests a screen can hand back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    ShowInput,
    Submit(String),
    ShowResult,
    Restart,
}

#[derive(Debug)]
pub struct Flow {
    screen: Screen,
}

impl Flow {
    pub fn new() -> Self {
        Self { screen: Screen::Intro }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The submitted prompt, or "" before submission and after restart.
    pub fn prompt_text(&self) -> &str {
        match &self.screen {
            Screen::Progress { prompt } | Screen::Result { prompt } => prompt.as_str(),
            Screen::Intro | Screen::PromptInput => "",
        }
    }

    pub fn advance_to_input(&mut self) -> bool {
        match self.screen {
            Screen::Intro => self.enter(Screen::PromptInput),
            _ => self.reject("advance_to_input"),
        }
    }

    /// Empty or whitespace-only text is ignored without leaving the input screen.
    pub fn advance_to_progress(&mut self, text: &str) -> bool {
        if self.screen != Screen::PromptInput {
            return self.reject("advance_to_progress");
        }
        match Prompt::new(text) {
            Some(prompt) => self.enter(Screen::Progress { prompt }),
            None => {
                debug!("empty prompt ignored");
                false
            }
        }
    }

    pub fn advance_to_result(&mut self) -> bool {
        match &self.screen {
            Screen::Progress { prompt } => {
                let prompt = prompt.clone();
                self.enter(Screen::Result { prompt })
            }
            _ => self.reject("advance_to_result"),
        }
    }

    pub fn restart(&mut self) -> bool {
        match self.screen {
            Screen::Result { .. } => self.enter(Screen::Intro),
            _ => self.reject("restart"),
        }
    }

    pub fn apply(&mut self, event: &FlowEvent) -> bool {
        match event {
            FlowEvent::ShowInput => self.advance_to_input(),
            FlowEvent::Submit(text) => self.advance_to_progress(text),
            FlowEvent::ShowResult => self.advance_to_result(),
            FlowEvent::Restart => self.restart(),
        }
    }

    fn enter(&mut self, next: Screen) -> bool {
        info!(from = ?self.screen.kind(), to = ?next.kind(), "screen transition");
        self.screen = next;
        true
    }

    fn reject(&self, op: &str) -> bool {
        warn!(op = op, current = ?self.screen.kind(), "transition rejected");
        false
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}
