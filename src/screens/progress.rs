use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    prelude::Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Gauge, Paragraph},
};
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::defaults::Defaults;
use crate::flow::FlowEvent;
use crate::simulation::{ProgressSim, Stage, Step};
use crate::timer::{TimerId, Timers};
use crate::ui::components::card;
use crate::ui::help::help_progress;
use crate::ui::layout::{centered_column, centered_rect_abs, stack};
use crate::ui::particles::{render_burst, StarField};
use crate::ui::style::{blend, muted, pulse, FAINT, MUTED, PINK, PURPLE};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy)]
enum ProgressTimer {
    Tick,
    Settle,
}

/// Fake generation run: a fixed-rate tick fills the bar, then a short pause
/// before handing over to the result.
pub struct ProgressScreen {
    timers: Timers<ProgressTimer>,
    tick: TimerId,
    sim: ProgressSim,
    /// Virtual time at which the bar hit 100.
    completed_at: Option<Duration>,
    stars: StarField,
    done: bool,
}

impl ProgressScreen {
    pub fn new(ctx: &mut AppCtx) -> Self {
        let mut timers = Timers::new();
        let tick = timers.every(Defaults::PROGRESS_TICK, ProgressTimer::Tick);
        Self {
            timers,
            tick,
            sim: ProgressSim::default(),
            completed_at: None,
            stars: StarField::new(&mut ctx.rng, ctx.stars),
            done: false,
        }
    }

    fn advance_sim(&mut self) {
        let before = self.sim.stage();
        match self.sim.step() {
            Step::Running(stage) if stage != before => {
                debug!(stage = ?stage, progress = self.sim.progress(), "stage changed");
            }
            Step::Running(_) => {}
            Step::Completed => {
                self.timers.cancel(self.tick);
                self.completed_at = Some(self.timers.now());
                self.timers.after(Defaults::PROGRESS_SETTLE, ProgressTimer::Settle);
                info!("generation complete");
            }
        }
    }

    fn finish(&mut self) -> Transition {
        if self.done {
            return Transition::Stay;
        }
        self.done = true;
        Transition::Advance(FlowEvent::ShowResult)
    }

    fn burst_fraction(&self) -> Option<f32> {
        let since = self.timers.now().checked_sub(self.completed_at?)?;
        Some(since.as_secs_f32() / Defaults::BURST_DURATION.as_secs_f32())
    }

    fn stage_dots(&self) -> Line<'static> {
        let current = self.sim.stage().index();
        let mut spans = Vec::new();
        for i in 0..3 {
            let (glyph, color) = match i.cmp(&current) {
                std::cmp::Ordering::Less => ("●", PURPLE),
                std::cmp::Ordering::Equal => ("●", PINK),
                std::cmp::Ordering::Greater => ("○", FAINT),
            };
            if i > 0 {
                spans.push(Span::styled(" ── ", Style::default().fg(FAINT)));
            }
            spans.push(Span::styled(glyph, Style::default().fg(color)));
        }
        Line::from(spans)
    }
}

impl ScreenWidget for ProgressScreen {
    fn title(&self) -> &str { " WhatIf 생성 중 " }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let now = self.timers.now();
        f.render_widget(Clear, size);
        self.stars.render(f, size, now);

        let area = centered_rect_abs(64, 14, size);
        f.render_widget(Clear, area);
        f.render_widget(card(true).title(self.title()), area);
        let inner = centered_column(56, area.inner(&Margin { horizontal: 2, vertical: 1 }));
        let rows = stack(inner, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);

        let stage = if self.sim.is_completed() { Stage::Finalizing } else { self.sim.stage() };
        let spinner = if self.sim.is_completed() {
            "✓"
        } else {
            SPINNER[(now.as_millis() / 80) as usize % SPINNER.len()]
        };
        let headline = Line::from(vec![
            Span::styled(spinner, Style::default().fg(PINK).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(stage.message(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        f.render_widget(Paragraph::new(headline).alignment(Alignment::Center), rows[1]);
        f.render_widget(Paragraph::new(self.stage_dots()).alignment(Alignment::Center), rows[3]);

        let percent = self.sim.display_percent();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(blend(PURPLE, PINK, self.sim.elapsed_fraction() as f32)))
            .ratio(self.sim.elapsed_fraction().clamp(0.0, 1.0))
            .label(format!("{percent}%"));
        f.render_widget(gauge, rows[5]);
        f.render_widget(
            Paragraph::new(Line::from(muted(format!("{percent}%")))).alignment(Alignment::Right),
            rows[6],
        );

        let hint = Line::styled(
            "AI가 당신의 미래를 그리고 있습니다...",
            Style::default().fg(blend(FAINT, MUTED, pulse(now.as_millis(), 1500))),
        );
        f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[8]);
        f.render_widget(help_progress().alignment(Alignment::Center), rows[11]);

        if let Some(fraction) = self.burst_fraction() {
            render_burst(f, area, fraction);
        }
    }

    fn on_tick(&mut self, dt: Duration, _ctx: &mut AppCtx) -> Transition {
        let deadline = self.timers.deadline(dt);
        while let Some(ev) = self.timers.next_due(deadline) {
            match ev {
                ProgressTimer::Tick => self.advance_sim(),
                ProgressTimer::Settle => return self.finish(),
            }
        }
        Transition::Stay
    }

    fn on_key(&mut self, _k: KeyEvent, _ctx: &mut AppCtx) -> Transition {
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn ctx() -> AppCtx {
        AppCtx::new(Some(1), 4)
    }

    fn is_done(t: &Transition) -> bool {
        matches!(t, Transition::Advance(FlowEvent::ShowResult))
    }

    #[test]
    fn hundred_ticks_then_one_second_pause() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        for i in 1..=100 {
            assert!(!is_done(&s.on_tick(Duration::from_millis(50), &mut ctx)), "tick {i}");
        }
        assert_eq!(s.sim.display_percent(), 100);
        assert_eq!(s.completed_at, Some(Duration::from_millis(5000)));
        assert!(!s.timers.is_armed(s.tick));

        assert!(!is_done(&s.on_tick(Duration::from_millis(999), &mut ctx)));
        assert!(is_done(&s.on_tick(Duration::from_millis(1), &mut ctx)));
        assert_eq!(s.timers.now(), Duration::from_millis(6000));
        assert_eq!(s.timers.pending(), 0);
    }

    #[test]
    fn completion_is_reported_at_most_once() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        let mut fired = 0;
        for _ in 0..1000 {
            if is_done(&s.on_tick(Duration::from_millis(17), &mut ctx)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn one_huge_tick_still_waits_for_the_pause() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        assert!(is_done(&s.on_tick(Duration::from_secs(30), &mut ctx)));
        assert_eq!(s.timers.now(), Duration::from_millis(6000));
    }

    #[test]
    fn stage_follows_progress_and_never_goes_back() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        let mut seen = Vec::new();
        for _ in 0..100 {
            s.on_tick(Duration::from_millis(50), &mut ctx);
            if seen.last() != Some(&s.sim.stage()) {
                seen.push(s.sim.stage());
            }
        }
        assert_eq!(seen, vec![Stage::Analyzing, Stage::Generating, Stage::Finalizing]);
    }

    #[test]
    fn burst_runs_after_completion() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        s.on_tick(Duration::from_millis(4999), &mut ctx);
        assert_eq!(s.burst_fraction(), None);
        s.on_tick(Duration::from_millis(401), &mut ctx);
        let f = s.burst_fraction().unwrap_or_default();
        assert!((f - 0.5).abs() < 1e-3);
    }

    #[test]
    fn keys_are_ignored() {
        let mut ctx = ctx();
        let mut s = ProgressScreen::new(&mut ctx);
        let t = s.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut ctx);
        assert!(matches!(t, Transition::Stay));
    }
}
