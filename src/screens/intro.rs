use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};
use std::time::Duration;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::defaults::Defaults;
use crate::flow::FlowEvent;
use crate::timer::{TimerId, Timers};
use crate::ui::help::help_intro;
use crate::ui::logo::{render_logo, LOGO_HEIGHT};
use crate::ui::particles::StarField;
use crate::ui::style::{blend, pulse, FAINT, MUTED};

#[derive(Debug, Clone, Copy)]
enum IntroTimer {
    Advance,
}

/// Splash: logo, subtitle, then on to the prompt after a fixed delay.
pub struct IntroScreen {
    timers: Timers<IntroTimer>,
    advance: TimerId,
    stars: StarField,
    done: bool,
}

impl IntroScreen {
    pub fn new(ctx: &mut AppCtx) -> Self {
        let mut timers = Timers::new();
        let advance = timers.after(Defaults::INTRO_DURATION, IntroTimer::Advance);
        Self { timers, advance, stars: StarField::new(&mut ctx.rng, ctx.stars), done: false }
    }

    fn finish(&mut self) -> Transition {
        if self.done {
            return Transition::Stay;
        }
        self.done = true;
        self.timers.cancel(self.advance);
        Transition::Advance(FlowEvent::ShowInput)
    }

    fn logo_reveal(&self) -> f32 {
        let since = self.timers.now().saturating_sub(Defaults::INTRO_LOGO_DELAY);
        (since.as_secs_f32() / 0.4).min(1.0)
    }
}

impl ScreenWidget for IntroScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let now = self.timers.now();
        f.render_widget(Clear, size);
        self.stars.render(f, size, now);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(LOGO_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        if now >= Defaults::INTRO_LOGO_DELAY {
            let shimmer = now.as_millis() as f32 / 4000.0;
            render_logo(f, chunks[1], self.logo_reveal(), shimmer);
        }

        if now >= Defaults::INTRO_SUBTITLE_DELAY {
            // fade in over 600 ms
            let t = (now - Defaults::INTRO_SUBTITLE_DELAY).as_secs_f32() / 0.6;
            let subtitle = Paragraph::new(Line::styled(
                "과거의 선택이 달랐다면?",
                Style::default().fg(blend(FAINT, MUTED, t)),
            ))
            .alignment(Alignment::Center);
            f.render_widget(subtitle, chunks[3]);
        }

        let hint_style = if pulse(now.as_millis(), 2000) > 0.5 {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        f.render_widget(help_intro().alignment(Alignment::Center).style(hint_style), chunks[5]);
    }

    fn on_tick(&mut self, dt: Duration, _ctx: &mut AppCtx) -> Transition {
        let deadline = self.timers.deadline(dt);
        if let Some(IntroTimer::Advance) = self.timers.next_due(deadline) {
            return self.finish();
        }
        Transition::Stay
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Transition {
        match k.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.finish(),
            _ => Transition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn ctx() -> AppCtx {
        AppCtx::new(Some(3), 5)
    }

    fn is_advance(t: &Transition) -> bool {
        matches!(t, Transition::Advance(FlowEvent::ShowInput))
    }

    #[test]
    fn advances_after_three_seconds_exactly_once() {
        let mut ctx = ctx();
        let mut s = IntroScreen::new(&mut ctx);
        let mut fired = 0;
        for _ in 0..600 {
            if is_advance(&s.on_tick(Duration::from_millis(10), &mut ctx)) {
                fired += 1;
                assert_eq!(s.timers.now(), Duration::from_millis(3000));
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn skip_key_advances_and_cancels_the_timer() {
        let mut ctx = ctx();
        let mut s = IntroScreen::new(&mut ctx);
        assert_eq!(s.timers.pending(), 1);
        let t = s.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), &mut ctx);
        assert!(is_advance(&t));
        assert_eq!(s.timers.pending(), 0);
        assert!(!is_advance(&s.on_tick(Duration::from_secs(5), &mut ctx)));
        assert!(!is_advance(&s.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx)));
    }

    #[test]
    fn logo_reveals_after_delay() {
        let mut ctx = ctx();
        let mut s = IntroScreen::new(&mut ctx);
        assert_eq!(s.logo_reveal(), 0.0);
        s.on_tick(Duration::from_millis(700), &mut ctx);
        assert!(s.logo_reveal() > 0.4 && s.logo_reveal() < 0.6);
        s.on_tick(Duration::from_millis(500), &mut ctx);
        assert_eq!(s.logo_reveal(), 1.0);
    }
}
