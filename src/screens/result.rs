use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use std::time::Duration;
use textwrap::wrap;
use tracing::{debug, info};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::counter::{format_tenths, group_thousands, Counter};
use crate::defaults::Defaults;
use crate::flow::{FlowEvent, Prompt};
use crate::timer::{TimerId, Timers};
use crate::ui::components::card;
use crate::ui::help::help_result;
use crate::ui::layout::{centered_column, stack};
use crate::ui::style::{button_line, button_spans, gradient_spans, muted, PINK};

#[derive(Debug, Clone, Copy)]
enum ResultTimer {
    Users,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    StartOver,
    Share,
    Save,
    Link,
    Like,
    MakeAnother,
    LongerVersion,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::StartOver,
        Action::Share,
        Action::Save,
        Action::Link,
        Action::Like,
        Action::MakeAnother,
        Action::LongerVersion,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::StartOver => "↺ 처음으로",
            Action::Share => "공유",
            Action::Save => "저장",
            Action::Link => "링크",
            Action::Like => "♥ 좋아요",
            Action::MakeAnother => "다시 만들기",
            Action::LongerVersion => "더 긴 버전 보기 (DLC)",
        }
    }

    fn restarts(self) -> bool {
        matches!(self, Action::StartOver | Action::MakeAnother)
    }
}

/// Final screen: the "generated" video card plus two counters that tick up
/// to their fixed targets.
pub struct ResultScreen {
    prompt: Prompt,
    timers: Timers<ResultTimer>,
    users_timer: TimerId,
    rating_timer: TimerId,
    users: Counter,
    rating: Counter,
    focus: usize,
    done: bool,
}

impl ResultScreen {
    pub fn new(prompt: Prompt) -> Self {
        let mut timers = Timers::new();
        let users_timer = timers.every(Defaults::USERS_TICK, ResultTimer::Users);
        let rating_timer = timers.every(Defaults::RATING_TICK, ResultTimer::Rating);
        Self {
            prompt,
            timers,
            users_timer,
            rating_timer,
            users: Counter::new(Defaults::USERS_STEP, Defaults::USERS_TARGET),
            rating: Counter::new(Defaults::RATING_STEP_TENTHS, Defaults::RATING_TARGET_TENTHS),
            focus: 0,
            done: false,
        }
    }

    fn focused(&self) -> Action {
        Action::ALL[self.focus]
    }

    fn restart(&mut self) -> Transition {
        if self.done {
            return Transition::Stay;
        }
        self.done = true;
        info!("starting over");
        Transition::Advance(FlowEvent::Restart)
    }

    fn activate(&mut self, action: Action) -> Transition {
        if action.restarts() {
            return self.restart();
        }
        debug!(action = ?action, "decorative button pressed");
        Transition::Stay
    }

    fn button(&self, action: Action) -> Line<'static> {
        button_line(action.label(), self.focused() == action)
    }

    fn stat_card(f: &mut Frame<'_>, area: Rect, value: String, caption: &'static str) {
        let lines = vec![
            Line::styled(value, Style::default().fg(PINK).add_modifier(Modifier::BOLD)),
            Line::from(muted(caption)),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(card(false)),
            area,
        );
    }
}

impl ScreenWidget for ResultScreen {
    fn title(&self) -> &str { " 🎬 생성된 영상 " }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        f.render_widget(Clear, size);
        let page = centered_column(84, size.inner(&Margin { horizontal: 2, vertical: 1 }));
        let rows = stack(page, &[1, 1, 9, 1, 1, 1, 4, 1, 5, 1, 1, 1, 1, 1]);

        // header: brand on the left, start over on the right
        let mut brand = gradient_spans("WhatIf", self.timers.now().as_millis() as f32 / 4000.0);
        brand.push(Span::raw(" "));
        brand.push(muted("영상이 완성되었습니다"));
        f.render_widget(Paragraph::new(Line::from(brand)), rows[0]);
        f.render_widget(
            Paragraph::new(self.button(Action::StartOver)).alignment(Alignment::Right),
            rows[0],
        );

        // video card
        let width = rows[2].width.saturating_sub(6).max(1) as usize;
        let quoted = format!("\"{}\"", self.prompt);
        let mut video = vec![Line::from("")];
        for seg in wrap(&quoted, width).into_iter().take(3) {
            video.push(Line::styled(seg.into_owned(), Style::default().add_modifier(Modifier::ITALIC)));
        }
        video.push(Line::from(""));
        video.push(Line::from(vec![
            Span::styled("▶", Style::default().fg(PINK).add_modifier(Modifier::BOLD)),
            Span::raw(" 재생"),
        ]));
        f.render_widget(
            Paragraph::new(video).alignment(Alignment::Center).block(card(true).title(self.title())),
            rows[2],
        );

        let mut actions = Vec::new();
        for (i, action) in [Action::Share, Action::Save, Action::Link, Action::Like].into_iter().enumerate() {
            if i > 0 {
                actions.push(Span::raw("  "));
            }
            actions.extend(button_spans(action.label(), self.focused() == action));
        }
        f.render_widget(Paragraph::new(Line::from(actions)).alignment(Alignment::Center), rows[3]);

        // stats
        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[6]);
        Self::stat_card(f, stats[0], group_thousands(self.users.value()), "명이 사용 중");
        Self::stat_card(
            f,
            stats[1],
            format!("{}/5.0", format_tenths(self.rating.value())),
            "평균 만족도",
        );

        // your choice
        let choice_width = rows[8].width.saturating_sub(4).max(1) as usize;
        let choice: Vec<Line> = wrap(self.prompt.as_str(), choice_width)
            .into_iter()
            .take(3)
            .map(|seg| Line::from(seg.into_owned()))
            .collect();
        f.render_widget(Paragraph::new(choice).block(card(false).title(" 당신의 선택 ")), rows[8]);

        f.render_widget(
            Paragraph::new(self.button(Action::MakeAnother)).alignment(Alignment::Center),
            rows[10],
        );
        f.render_widget(
            Paragraph::new(self.button(Action::LongerVersion)).alignment(Alignment::Center),
            rows[11],
        );
        f.render_widget(help_result().alignment(Alignment::Center), rows[13]);
    }

    fn on_tick(&mut self, dt: Duration, _ctx: &mut AppCtx) -> Transition {
        let deadline = self.timers.deadline(dt);
        while let Some(ev) = self.timers.next_due(deadline) {
            match ev {
                ResultTimer::Users => {
                    if self.users.step() {
                        self.timers.cancel(self.users_timer);
                    }
                }
                ResultTimer::Rating => {
                    if self.rating.step() {
                        self.timers.cancel(self.rating_timer);
                    }
                }
            }
        }
        Transition::Stay
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Transition {
        let n = Action::ALL.len();
        match k.code {
            KeyCode::Esc => return self.restart(),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => self.focus = (self.focus + 1) % n,
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => self.focus = (self.focus + n - 1) % n,
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(self.focused()),
            _ => {}
        }
        Transition::Stay
    }
}
